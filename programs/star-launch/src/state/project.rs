use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::errors::StarLaunchError;
use crate::utils::{mul_div_floor_i128, FixedPointAmount, VestingSchedule};

#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    Pending,   // Accepted, token deposit in progress
    Funding,   // Participation window open
    Finalized, // Target reached
    Failed,    // Window closed below target, participations refundable
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Pending
    }
}

// Field order of the three structs below is lexicographic; Borsh writes fields in declaration order.

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectParams {
    pub name: String,
    pub symbol: String,
    pub token_address: Pubkey,
    pub total_supply: i128,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tokenomics {
    pub airdrop_allocation: i128,
    pub liquidity_allocation: i128,
    pub max_contribution: i128,
    pub min_contribution: i128,
    pub price_per_token: i128,
    pub target_amount: i128,
    pub team_allocation: i128,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timing {
    pub end_time: u64,
    pub start_time: u64,
    pub vesting_cliff: u64,
    pub vesting_duration: u64,
}

/// Percentage form of the tokenomics, turned into [`Tokenomics`] by `derive_tokenomics`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenomicsParams {
    pub airdrop_percent: u8,
    pub creator_percent: u8,
    pub liquidity_percent: u8,
    pub max_contribution: i128,
    pub min_contribution: i128,
    pub price_per_token: i128,
    pub target_amount: i128,
}

#[account]
#[derive(Default, Debug)]
pub struct Project {
    /// Registry-assigned identifier
    pub id: u64,

    /// Project creator
    pub creator: Pubkey,

    pub name: String,
    pub symbol: String,

    /// Launched token
    pub token_mint: Pubkey,
    pub token_vault: Pubkey,

    /// Vault holding contributed native currency
    pub native_vault: Pubkey,

    /// Total supply deposited by the creator
    pub total_supply: i128,

    pub tokenomics: Tokenomics,
    pub timing: Timing,

    /// Current status
    pub status: ProjectStatus,

    /// bump seed
    pub bump: u8,

    // ===== Funding =====
    /// Total contributed value (native + points at the minting rate)
    pub raised_amount: i128,

    /// Native currency held in the native vault
    pub native_raised: i128,

    // ===== Points =====
    pub points_spent: i128,
    pub points_burned: i128,
    pub creator_points_share: i128,

    /// Participant count
    pub participants_count: u32,

    /// Actual finalization time, also the vesting start
    pub finalized_time: u64,

    // ===== Creator Claims =====
    pub team_claimed: i128,
    pub proceeds_claimed: bool,
    pub tokens_reclaimed: bool,

    // ===== Airdrop =====
    /// Airdrop tokens paid out so far
    pub airdrop_claimed: i128,

    /// Participants that claimed their airdrop
    pub airdrop_claims: u32,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl Project {
    pub const SIZE: usize = 8 + // discriminator
        8 + // id
        32 + // creator
        4 + MAX_NAME_LEN + // name
        4 + MAX_SYMBOL_LEN + // symbol
        32 + // token_mint
        32 + // token_vault
        32 + // native_vault
        16 + // total_supply
        16 * 7 + // tokenomics
        8 * 4 + // timing
        1 + // status (enum)
        1 + // bump
        16 + // raised_amount
        16 + // native_raised
        16 + // points_spent
        16 + // points_burned
        16 + // creator_points_share
        4 + // participants_count
        8 + // finalized_time
        16 + // team_claimed
        1 + // proceeds_claimed
        1 + // tokens_reclaimed
        16 + // airdrop_claimed
        4 + // airdrop_claims
        8 * 4; // reserved

    pub fn is_funding(&self) -> bool {
        self.status == ProjectStatus::Funding
    }

    pub fn is_finalized(&self) -> bool {
        self.status == ProjectStatus::Finalized
    }

    pub fn is_failed(&self) -> bool {
        self.status == ProjectStatus::Failed
    }

    pub fn raised(&self) -> FixedPointAmount {
        FixedPointAmount::from_mantissa(self.raised_amount)
    }

    pub fn target_reached(&self) -> bool {
        self.raised_amount >= self.tokenomics.target_amount
    }

    /// Close the funding window: `Finalized` if the target was met, `Failed` otherwise
    pub fn finalize(&mut self, current_time: u64) -> Result<ProjectStatus> {
        require!(self.is_funding(), StarLaunchError::InvalidStatus);

        // Must wait until time window ends or target is reached
        let time_ended = current_time > self.timing.end_time;
        require!(
            time_ended || self.target_reached(),
            StarLaunchError::TooEarlyToFinalize
        );

        self.status = if self.target_reached() {
            ProjectStatus::Finalized
        } else {
            ProjectStatus::Failed
        };
        self.finalized_time = current_time;

        Ok(self.status)
    }

    /// Team allocation schedule, `None` when the project has no vesting
    pub fn vesting_schedule(&self) -> Result<Option<VestingSchedule>> {
        if self.timing.vesting_duration == 0 {
            return Ok(None);
        }

        VestingSchedule::new(
            self.finalized_time,
            self.timing.vesting_cliff,
            self.timing.vesting_duration,
            FixedPointAmount::from_mantissa(self.tokenomics.team_allocation),
        )
        .map(Some)
    }

    /// Team tokens the creator can claim now (excluding the claimed portion)
    pub fn creator_claimable_amount(&self, current_time: u64) -> Result<FixedPointAmount> {
        require!(self.is_finalized(), StarLaunchError::InvalidStatus);

        let claimed = FixedPointAmount::from_mantissa(self.team_claimed);
        match self.vesting_schedule()? {
            Some(schedule) => schedule.claimable(current_time, claimed),
            None => FixedPointAmount::from_mantissa(self.tokenomics.team_allocation)
                .checked_sub(claimed),
        }
    }

    pub fn record_team_claim(&mut self, amount: FixedPointAmount) -> Result<()> {
        self.team_claimed = FixedPointAmount::from_mantissa(self.team_claimed)
            .checked_add(amount)?
            .mantissa();
        Ok(())
    }

    /// Airdrop tokens owed for a contributed value: airdrop_allocation * contributed / raised
    pub fn airdrop_share(&self, contributed_value: FixedPointAmount) -> Result<FixedPointAmount> {
        if self.raised_amount == 0 {
            return Ok(FixedPointAmount::ZERO);
        }

        mul_div_floor_i128(
            self.tokenomics.airdrop_allocation,
            contributed_value.mantissa(),
            self.raised_amount,
        )
        .map(FixedPointAmount::from_mantissa)
    }

    /// Pay out one participant's airdrop. The last claimant also takes the rounding remainder,
    /// so the whole allocation leaves the vault.
    pub fn record_airdrop_claim(
        &mut self,
        contributed_value: FixedPointAmount,
    ) -> Result<FixedPointAmount> {
        let claims = self
            .airdrop_claims
            .checked_add(1)
            .ok_or(StarLaunchError::ArithmeticOverflow)?;
        let claimed = FixedPointAmount::from_mantissa(self.airdrop_claimed);

        let payout = if claims >= self.participants_count {
            FixedPointAmount::from_mantissa(self.tokenomics.airdrop_allocation).checked_sub(claimed)?
        } else {
            self.airdrop_share(contributed_value)?
        };

        self.airdrop_claimed = claimed.checked_add(payout)?.mantissa();
        self.airdrop_claims = claims;
        Ok(payout)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::constants::*;
    use crate::state::GlobalConfig;

    pub(crate) const START: u64 = 1_700_000_000;
    pub(crate) const END: u64 = START + 7 * 24 * 60 * 60;

    pub(crate) fn funding_project() -> Project {
        let units = |n: i128| n * AMOUNT_SCALE;

        Project {
            id: 0,
            creator: Pubkey::new_unique(),
            name: "Nebula".to_string(),
            symbol: "NEB".to_string(),
            total_supply: units(1_000_000),
            tokenomics: Tokenomics {
                airdrop_allocation: units(400_000),
                liquidity_allocation: units(300_000),
                max_contribution: DEFAULT_MAX_CONTRIBUTION,
                min_contribution: DEFAULT_MIN_CONTRIBUTION,
                price_per_token: DEFAULT_PRICE_PER_TOKEN,
                target_amount: units(500),
                team_allocation: units(300_000),
            },
            timing: Timing {
                end_time: END,
                start_time: START,
                vesting_cliff: 0,
                vesting_duration: 0,
            },
            status: ProjectStatus::Funding,
            ..Default::default()
        }
    }

    #[test]
    fn test_finalize_before_end_below_target() {
        let mut project = funding_project();

        assert_eq!(
            project.finalize(END).unwrap_err(),
            StarLaunchError::TooEarlyToFinalize.into()
        );
        assert_eq!(project.status, ProjectStatus::Funding);
    }

    #[test]
    fn test_finalize_success_once_target_reached() {
        let mut project = funding_project();
        project.raised_amount = project.tokenomics.target_amount;

        assert_eq!(project.finalize(START + 10).unwrap(), ProjectStatus::Finalized);
        assert_eq!(project.finalized_time, START + 10);
        assert_eq!(
            project.finalize(START + 11).unwrap_err(),
            StarLaunchError::InvalidStatus.into()
        );
    }

    #[test]
    fn test_finalize_failed_after_end() {
        let mut project = funding_project();
        project.raised_amount = project.tokenomics.target_amount - 1;

        assert_eq!(project.finalize(END + 1).unwrap(), ProjectStatus::Failed);
    }

    #[test]
    fn test_creator_claim_without_vesting() {
        let mut project = funding_project();
        project.raised_amount = project.tokenomics.target_amount;
        project.finalize(END + 1).unwrap();

        let claimable = project.creator_claimable_amount(END + 1).unwrap();
        assert_eq!(claimable.mantissa(), project.tokenomics.team_allocation);

        project.record_team_claim(claimable).unwrap();
        assert_eq!(
            project.creator_claimable_amount(END + 2).unwrap(),
            FixedPointAmount::ZERO
        );
    }

    #[test]
    fn test_creator_claim_with_vesting() {
        let mut project = funding_project();
        project.timing.vesting_cliff = 10;
        project.timing.vesting_duration = 110;
        project.raised_amount = project.tokenomics.target_amount;
        project.finalize(END + 1).unwrap();

        let start = END + 1;
        assert_eq!(
            project.creator_claimable_amount(start + 9).unwrap(),
            FixedPointAmount::ZERO
        );
        assert_eq!(
            project.creator_claimable_amount(start + 60).unwrap().mantissa(),
            project.tokenomics.team_allocation / 2
        );
        assert_eq!(
            project.creator_claimable_amount(start + 110).unwrap().mantissa(),
            project.tokenomics.team_allocation
        );
    }

    #[test]
    fn test_longest_accepted_vesting_stays_claimable() {
        let mut config = GlobalConfig::default();
        config.initialize_defaults(Pubkey::new_unique(), Pubkey::new_unique(), 255);

        let mut project = funding_project();
        project.timing.vesting_duration = MAX_VESTING_DURATION;
        assert!(config.validate_launch_params(&project.timing).is_ok());

        project.raised_amount = project.tokenomics.target_amount;
        project.finalize(END + 2).unwrap();

        assert_eq!(
            project.creator_claimable_amount(END + 2).unwrap(),
            FixedPointAmount::ZERO
        );
        for now in [END + 2 + MAX_VESTING_DURATION, u64::MAX] {
            assert_eq!(
                project.creator_claimable_amount(now).unwrap().mantissa(),
                project.tokenomics.team_allocation
            );
        }
    }

    #[test]
    fn test_creator_claim_requires_finalized() {
        let project = funding_project();

        assert_eq!(
            project.creator_claimable_amount(END).unwrap_err(),
            StarLaunchError::InvalidStatus.into()
        );
    }

    #[test]
    fn test_airdrop_share() {
        let mut project = funding_project();
        project.raised_amount = 1_000 * AMOUNT_SCALE;

        let share = project
            .airdrop_share(FixedPointAmount::from_units(250).unwrap())
            .unwrap();
        assert_eq!(share, FixedPointAmount::from_units(100_000).unwrap());
    }
}
