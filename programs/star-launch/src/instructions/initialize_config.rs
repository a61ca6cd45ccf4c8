use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::StarLaunchError;
use crate::events::ConfigInitialized;
use crate::state::GlobalConfig;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeConfigParams {
    pub min_target_amount: Option<i128>,
    pub min_funding_duration: Option<u64>,
    pub max_funding_duration: Option<u64>,
}

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = GlobalConfig::SIZE,
        seeds = [GLOBAL_CONFIG_SEED],
        bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// Native-currency mint, must carry 7 decimals
    #[account(
        constraint = quote_mint.decimals == AMOUNT_DECIMALS @ StarLaunchError::InvalidTokenMint,
    )]
    pub quote_mint: Account<'info, Mint>,

    /// CHECK: vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Treasury receiving STAR point deposits
    #[account(
        init,
        payer = admin,
        seeds = [TREASURY_VAULT, quote_mint.key().as_ref()],
        bump,
        token::mint = quote_mint,
        token::authority = vault_authority,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    params: InitializeConfigParams,
) -> Result<()> {
    let config = &mut ctx.accounts.global_config;

    // First set default values
    config.initialize_defaults(
        ctx.accounts.admin.key(),
        ctx.accounts.quote_mint.key(),
        ctx.bumps.global_config,
    );

    // Then override default values with parameters
    if let Some(min_target_amount) = params.min_target_amount {
        config.min_target_amount = min_target_amount;
    }

    if let Some(min_funding_duration) = params.min_funding_duration {
        config.min_funding_duration = min_funding_duration;
    }

    if let Some(max_funding_duration) = params.max_funding_duration {
        config.max_funding_duration = max_funding_duration;
    }

    config.validate()?;

    emit!(ConfigInitialized {
        admin: config.admin,
        quote_mint: config.quote_mint,
        min_target_amount: config.min_target_amount,
        min_funding_duration: config.min_funding_duration,
        max_funding_duration: config.max_funding_duration,
    });

    msg!("Global config initialized successfully");
    msg!("Admin: {}", config.admin);
    msg!("Quote mint: {}", config.quote_mint);
    msg!("Minimum target: {}", config.min_target());

    Ok(())
}
