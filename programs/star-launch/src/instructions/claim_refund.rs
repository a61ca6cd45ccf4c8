use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::StarLaunchError;
use crate::events::RefundClaimed;
use crate::state::{ParticipantPosition, Project, StarAccount};
use crate::utils::{current_timestamp, transfer_from_vault};

#[derive(Accounts)]
pub struct ClaimRefund<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Project account, must have failed
    #[account(
        seeds = [PROJECT_SEED, &project.id.to_le_bytes()],
        bump = project.bump,
        constraint = project.is_failed() @ StarLaunchError::InvalidStatus,
    )]
    pub project: Box<Account<'info, Project>>,

    /// Participant position
    #[account(
        mut,
        seeds = [POSITION_SEED, project.key().as_ref(), participant.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, ParticipantPosition>>,

    /// Participant points account
    #[account(
        mut,
        seeds = [STAR_ACCOUNT_SEED, participant.key().as_ref()],
        bump = star_account.bump,
    )]
    pub star_account: Box<Account<'info, StarAccount>>,

    /// Project native vault
    #[account(
        mut,
        address = project.native_vault,
    )]
    pub native_vault: Box<Account<'info, TokenAccount>>,

    /// Participant native-currency receiving account
    #[account(
        mut,
        token::mint = native_vault.mint,
        token::authority = participant,
    )]
    pub participant_native_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Give back the native contribution and the spent points of a failed project
pub fn claim_refund(ctx: Context<ClaimRefund>) -> Result<()> {
    let project = &ctx.accounts.project;
    let position = &mut ctx.accounts.position;
    let star_account = &mut ctx.accounts.star_account;
    let current_time = current_timestamp()?;

    let (native, points) = position.refund(project, current_time)?;

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.native_vault,
        &ctx.accounts.participant_native_account,
        &ctx.accounts.vault_authority,
        native.to_token_amount()?,
    )?;

    if points.is_positive() {
        star_account.restore_spent(points)?;
    }

    emit!(RefundClaimed {
        project: project.key(),
        participant: ctx.accounts.participant.key(),
        native_refunded: native.mantissa(),
        points_restored: points.mantissa(),
        timestamp: current_time,
    });

    msg!("Refunded {} native and {} points to {}", native, points, ctx.accounts.participant.key());

    Ok(())
}
