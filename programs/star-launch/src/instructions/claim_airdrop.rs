use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::StarLaunchError;
use crate::events::AirdropClaimed;
use crate::state::{ParticipantPosition, Project};
use crate::utils::{current_timestamp, transfer_from_vault};

#[derive(Accounts)]
pub struct ClaimAirdrop<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

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

    /// Participant position
    #[account(
        mut,
        seeds = [POSITION_SEED, project.key().as_ref(), participant.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, ParticipantPosition>>,

    /// Project token vault
    #[account(
        mut,
        address = project.token_vault,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// Participant token receiving account
    #[account(
        mut,
        token::mint = project.token_mint,
        token::authority = participant,
    )]
    pub participant_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Participant claims its pro-rata share of the airdrop allocation.
/// The last claimant also receives the rounding remainder.
pub fn claim_airdrop(ctx: Context<ClaimAirdrop>) -> Result<()> {
    let project = &mut ctx.accounts.project;
    let position = &mut ctx.accounts.position;
    let current_time = current_timestamp()?;

    let tokens = position.claim_airdrop(project, current_time)?;

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.token_vault,
        &ctx.accounts.participant_token_account,
        &ctx.accounts.vault_authority,
        tokens.to_token_amount()?,
    )?;

    emit!(AirdropClaimed {
        project: project.key(),
        participant: ctx.accounts.participant.key(),
        token_mint: project.token_mint,
        tokens_claimed: tokens.mantissa(),
        participant_contribution: position.contributed_value,
        project_total_raised: project.raised_amount,
        timestamp: current_time,
    });

    msg!("Participant {} claimed {} tokens", ctx.accounts.participant.key(), tokens);
    msg!("Contribution: {} / {}", position.contributed_value(), project.raised());

    Ok(())
}
