use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::StarLaunchError;
use crate::state::GlobalConfig;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct UpdateConfigParams {
    pub admin: Option<Pubkey>,
    pub min_target_amount: Option<i128>,
    pub min_funding_duration: Option<u64>,
    pub max_funding_duration: Option<u64>,
    pub paused: Option<bool>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
        constraint = global_config.is_admin(&admin.key()) @ StarLaunchError::Unauthorized,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,
}

pub fn update_config(
    ctx: Context<UpdateConfig>,
    params: UpdateConfigParams,
) -> Result<()> {
    let config = &mut ctx.accounts.global_config;

    // Update configuration parameters
    if let Some(admin) = params.admin {
        config.admin = admin;
    }

    if let Some(min_target_amount) = params.min_target_amount {
        config.min_target_amount = min_target_amount;
    }

    if let Some(min_funding_duration) = params.min_funding_duration {
        config.min_funding_duration = min_funding_duration;
    }

    if let Some(max_funding_duration) = params.max_funding_duration {
        config.max_funding_duration = max_funding_duration;
    }

    if let Some(paused) = params.paused {
        config.paused = paused;
    }

    config.validate()?;

    msg!("Global config updated successfully");

    Ok(())
}
