use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::StarLaunchError;
use crate::state::Timing;
use crate::utils::FixedPointAmount;

#[account]
#[derive(Default)]
pub struct GlobalConfig {
    /// Admin address (can update configuration)
    pub admin: Pubkey,

    /// Native-currency mint (7 decimals) used for deposits and contributions
    pub quote_mint: Pubkey,

    /// Minimum funding target, the initial liquidity threshold
    pub min_target_amount: i128,

    /// Minimum funding window (seconds)
    pub min_funding_duration: u64,

    /// Maximum funding window (seconds)
    pub max_funding_duration: u64,

    /// Whether new projects are paused
    pub paused: bool,

    /// Projects created so far, also the next project id
    pub project_count: u64,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 8],
}

impl GlobalConfig {
    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        32 + // quote_mint
        16 + // min_target_amount
        8 + // min_funding_duration
        8 + // max_funding_duration
        1 + // paused
        8 + // project_count
        1 + // bump
        8 * 8; // reserved

    /// Initialize default configuration
    pub fn initialize_defaults(&mut self, admin: Pubkey, quote_mint: Pubkey, bump: u8) {
        self.admin = admin;
        self.quote_mint = quote_mint;
        self.min_target_amount = DEFAULT_MIN_TARGET_AMOUNT; // 500 native units
        self.min_funding_duration = DEFAULT_MIN_FUNDING_DURATION; // 3 days
        self.max_funding_duration = DEFAULT_MAX_FUNDING_DURATION; // 15 days
        self.paused = false;
        self.project_count = 0;
        self.bump = bump;
    }

    pub fn is_admin(&self, signer: &Pubkey) -> bool {
        self.admin == *signer
    }

    pub fn min_target(&self) -> FixedPointAmount {
        FixedPointAmount::from_mantissa(self.min_target_amount)
    }

    /// Validate the funding window and vesting of a new project
    pub fn validate_launch_params(&self, timing: &Timing) -> Result<()> {
        require!(!self.paused, StarLaunchError::PlatformPaused);

        require!(
            timing.end_time > timing.start_time,
            StarLaunchError::InvalidTiming
        );

        let duration = timing.end_time - timing.start_time;
        require!(
            duration >= self.min_funding_duration && duration <= self.max_funding_duration,
            StarLaunchError::InvalidDuration
        );

        if timing.vesting_duration > 0 {
            require!(
                timing.vesting_cliff <= timing.vesting_duration
                    && timing.vesting_duration <= MAX_VESTING_DURATION,
                StarLaunchError::InvalidSchedule
            );
            // Vesting starts at finalization, no earlier than end_time
            require!(
                timing.end_time.checked_add(timing.vesting_duration).is_some(),
                StarLaunchError::InvalidSchedule
            );
        } else {
            require!(timing.vesting_cliff == 0, StarLaunchError::InvalidSchedule);
        }

        Ok(())
    }

    /// Validate admin-supplied bounds
    pub fn validate(&self) -> Result<()> {
        require!(self.min_target_amount > 0, StarLaunchError::InvalidAmount);
        require!(
            self.min_funding_duration > 0
                && self.min_funding_duration <= self.max_funding_duration,
            StarLaunchError::InvalidDuration
        );
        Ok(())
    }

    /// Hand out the next project id
    pub fn next_project_id(&mut self) -> Result<u64> {
        let id = self.project_count;
        self.project_count = self
            .project_count
            .checked_add(1)
            .ok_or(StarLaunchError::ArithmeticOverflow)?;
        Ok(id)
    }
}
