use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::StarLaunchError;
use crate::events::TreasuryWithdrawn;
use crate::state::GlobalConfig;
use crate::utils::{current_timestamp, transfer_from_vault, FixedPointAmount};

#[derive(Accounts)]
pub struct WithdrawTreasury<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
        constraint = global_config.is_admin(&admin.key()) @ StarLaunchError::Unauthorized,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Platform treasury
    #[account(
        mut,
        seeds = [TREASURY_VAULT, global_config.quote_mint.as_ref()],
        bump,
    )]
    pub treasury_vault: Box<Account<'info, TokenAccount>>,

    /// Native-currency account receiving the withdrawal
    #[account(
        mut,
        token::mint = global_config.quote_mint,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Token amount of a treasury withdrawal, bounded by the treasury balance
pub fn treasury_withdrawal(amount: i128, available: u64) -> Result<u64> {
    require!(amount > 0, StarLaunchError::InvalidAmount);

    let amount = FixedPointAmount::from_mantissa(amount).to_token_amount()?;
    require!(
        amount <= available,
        StarLaunchError::InsufficientVaultBalance
    );
    Ok(amount)
}

/// Move STAR point deposits out of the treasury (admin only)
pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>, amount: i128) -> Result<()> {
    let treasury_vault = &ctx.accounts.treasury_vault;
    let withdrawal = treasury_withdrawal(amount, treasury_vault.amount)?;

    transfer_from_vault(
        &ctx.accounts.token_program,
        treasury_vault,
        &ctx.accounts.destination,
        &ctx.accounts.vault_authority,
        withdrawal,
    )?;

    emit!(TreasuryWithdrawn {
        admin: ctx.accounts.admin.key(),
        destination: ctx.accounts.destination.key(),
        quote_mint: ctx.accounts.global_config.quote_mint,
        amount,
        remaining: treasury_vault.amount - withdrawal,
        timestamp: current_timestamp()?,
    });

    msg!(
        "Withdrew {} from treasury",
        FixedPointAmount::from_mantissa(amount)
    );

    Ok(())
}
