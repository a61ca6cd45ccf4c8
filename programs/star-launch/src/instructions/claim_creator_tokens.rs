use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{PROJECT_SEED, VAULT_AUTHORITY};
use crate::errors::StarLaunchError;
use crate::events::CreatorTokensClaimed;
use crate::state::Project;
use crate::utils::{current_timestamp, transfer_from_vault, FixedPointAmount};

#[derive(Accounts)]
pub struct ClaimCreatorTokens<'info> {
    /// Creator account, must be the project creator
    #[account(
        mut,
        constraint = creator.key() == project.creator @ StarLaunchError::NotCreator
    )]
    pub creator: Signer<'info>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Project account, must be finalized
    #[account(
        mut,
        seeds = [PROJECT_SEED, &project.id.to_le_bytes()],
        bump = project.bump,
        constraint = project.is_finalized() @ StarLaunchError::InvalidStatus,
    )]
    pub project: Box<Account<'info, Project>>,

    /// Project token vault
    #[account(
        mut,
        address = project.token_vault,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// Creator token receiving account
    #[account(
        mut,
        token::mint = project.token_mint,
        token::authority = creator,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Creator claims vested team tokens (supports batch claiming)
pub fn claim_creator_tokens(ctx: Context<ClaimCreatorTokens>) -> Result<()> {
    let project = &mut ctx.accounts.project;
    let current_time = current_timestamp()?;

    // Newly unlocked amount, claimed portion already deducted
    let claimable = project.creator_claimable_amount(current_time)?;
    require!(claimable.is_positive(), StarLaunchError::NothingToClaim);

    msg!("Creator claiming {} tokens", claimable);

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.token_vault,
        &ctx.accounts.creator_token_account,
        &ctx.accounts.vault_authority,
        claimable.to_token_amount()?,
    )?;

    project.record_team_claim(claimable)?;

    let total_allocation = FixedPointAmount::from_mantissa(project.tokenomics.team_allocation);
    let remaining = total_allocation.checked_sub(FixedPointAmount::from_mantissa(project.team_claimed))?;

    emit!(CreatorTokensClaimed {
        project: project.key(),
        creator: ctx.accounts.creator.key(),
        token_mint: project.token_mint,
        claimed_amount: claimable.mantissa(),
        total_claimed: project.team_claimed,
        total_allocation: total_allocation.mantissa(),
        remaining_claimable: remaining.mantissa(),
        fully_unlocked: remaining == FixedPointAmount::ZERO,
        timestamp: current_time,
    });

    msg!("Creator tokens claimed successfully");
    msg!("Total claimed: {} tokens", FixedPointAmount::from_mantissa(project.team_claimed));
    msg!("Remaining allocation: {} tokens", remaining);

    Ok(())
}
