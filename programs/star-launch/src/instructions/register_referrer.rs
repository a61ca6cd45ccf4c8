use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::StarLaunchError;
use crate::events::ReferrerRegistered;
use crate::state::StarAccount;

#[derive(Accounts)]
#[instruction(referrer: Pubkey)]
pub struct RegisterReferrer<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// User points account
    #[account(
        init_if_needed,
        payer = user,
        space = StarAccount::SIZE,
        seeds = [STAR_ACCOUNT_SEED, user.key().as_ref()],
        bump,
    )]
    pub star_account: Box<Account<'info, StarAccount>>,

    /// Referrer points account, created so the referrer can receive bonuses
    #[account(
        init_if_needed,
        payer = user,
        space = StarAccount::SIZE,
        seeds = [STAR_ACCOUNT_SEED, referrer.as_ref()],
        bump,
        constraint = referrer != user.key() @ StarLaunchError::InvalidReferrer,
    )]
    pub referrer_account: Box<Account<'info, StarAccount>>,

    pub system_program: Program<'info, System>,
}

pub fn register_referrer(ctx: Context<RegisterReferrer>, referrer: Pubkey) -> Result<()> {
    let star_account = &mut ctx.accounts.star_account;
    let referrer_account = &mut ctx.accounts.referrer_account;

    if !star_account.is_initialized() {
        star_account.initialize(ctx.accounts.user.key(), ctx.bumps.star_account);
    }
    if !referrer_account.is_initialized() {
        referrer_account.initialize(referrer, ctx.bumps.referrer_account);
    }

    if !star_account.set_referrer(referrer)? {
        msg!("Referrer {} already registered", referrer);
        return Ok(());
    }

    emit!(ReferrerRegistered {
        account: star_account.owner,
        referrer,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("User {} registered referrer {}", star_account.owner, referrer);

    Ok(())
}
