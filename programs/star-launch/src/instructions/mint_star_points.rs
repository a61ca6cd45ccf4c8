use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::StarLaunchError;
use crate::events::StarPointsMinted;
use crate::state::{apply_mint, GlobalConfig, StarAccount};
use crate::utils::{transfer_from_user, FixedPointAmount};

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct MintStarPoints<'info> {
    /// Account paying the native deposit
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// Global configuration account
    #[account(
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// Recipient points account
    #[account(
        init_if_needed,
        payer = depositor,
        space = StarAccount::SIZE,
        seeds = [STAR_ACCOUNT_SEED, recipient.as_ref()],
        bump,
    )]
    pub recipient_account: Box<Account<'info, StarAccount>>,

    /// Points account of the recipient's referrer, required when one is registered
    #[account(mut)]
    pub referrer_account: Option<Box<Account<'info, StarAccount>>>,

    /// Depositor native-currency account
    #[account(
        mut,
        token::mint = global_config.quote_mint,
        token::authority = depositor,
    )]
    pub depositor_token_account: Box<Account<'info, TokenAccount>>,

    /// Platform treasury
    #[account(
        mut,
        seeds = [TREASURY_VAULT, global_config.quote_mint.as_ref()],
        bump,
    )]
    pub treasury_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn mint_star_points(
    ctx: Context<MintStarPoints>,
    recipient: Pubkey,
    amount: i128,
) -> Result<i128> {
    require!(amount > 0, StarLaunchError::InvalidAmount);

    let native_amount = FixedPointAmount::from_mantissa(amount);
    let deposit = native_amount.to_token_amount()?;

    let recipient_account = &mut ctx.accounts.recipient_account;
    if !recipient_account.is_initialized() {
        recipient_account.initialize(recipient, ctx.bumps.recipient_account);
    }

    let referrer_account = ctx
        .accounts
        .referrer_account
        .as_mut()
        .map(|account| &mut ***account);
    let outcome = apply_mint(recipient_account, referrer_account, native_amount)?;

    transfer_from_user(
        &ctx.accounts.token_program,
        &ctx.accounts.depositor_token_account,
        &ctx.accounts.treasury_vault,
        &ctx.accounts.depositor,
        deposit,
    )?;

    emit!(StarPointsMinted {
        depositor: ctx.accounts.depositor.key(),
        recipient,
        native_amount: amount,
        points_minted: outcome.points.mantissa(),
        new_balance: recipient_account.balance,
        referrer: recipient_account.referrer,
        referral_bonus: outcome.referral_bonus.mantissa(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Minted {} STAR points for {}", outcome.points, recipient);
    if let Some(referrer) = recipient_account.referrer {
        msg!("Referral bonus: {} points to {}", outcome.referral_bonus, referrer);
    }

    Ok(recipient_account.balance)
}
