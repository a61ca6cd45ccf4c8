use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{PROJECT_SEED, VAULT_AUTHORITY};
use crate::errors::StarLaunchError;
use crate::events::ProjectTokensReclaimed;
use crate::state::Project;
use crate::utils::{current_timestamp, transfer_from_vault};

#[derive(Accounts)]
pub struct ReclaimProjectTokens<'info> {
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

    /// Project account, must have failed
    #[account(
        mut,
        seeds = [PROJECT_SEED, &project.id.to_le_bytes()],
        bump = project.bump,
        constraint = project.is_failed() @ StarLaunchError::InvalidStatus,
        constraint = !project.tokens_reclaimed @ StarLaunchError::AlreadyClaimed,
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

/// Return the deposited supply of a failed project to its creator
pub fn reclaim_project_tokens(ctx: Context<ReclaimProjectTokens>) -> Result<()> {
    let project = &mut ctx.accounts.project;
    let amount = ctx.accounts.token_vault.amount;
    require!(amount > 0, StarLaunchError::NothingToClaim);

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.token_vault,
        &ctx.accounts.creator_token_account,
        &ctx.accounts.vault_authority,
        amount,
    )?;

    project.tokens_reclaimed = true;

    emit!(ProjectTokensReclaimed {
        project: project.key(),
        creator: ctx.accounts.creator.key(),
        token_mint: project.token_mint,
        amount,
        timestamp: current_timestamp()?,
    });

    msg!("Creator reclaimed {} base units of project {}", amount, project.id);

    Ok(())
}
