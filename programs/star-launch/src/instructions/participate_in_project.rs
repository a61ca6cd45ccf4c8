use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::StarLaunchError;
use crate::events::ParticipationRecorded;
use crate::state::{
    quote_participation, settle_participation, ParticipantPosition, Participation, Project,
    StarAccount,
};
use crate::utils::{current_timestamp, transfer_from_user, FixedPointAmount};

#[derive(Accounts)]
#[instruction(project_id: u64)]
pub struct ParticipateInProject<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    /// Project account
    #[account(
        mut,
        seeds = [PROJECT_SEED, &project_id.to_le_bytes()],
        bump = project.bump,
    )]
    pub project: Box<Account<'info, Project>>,

    /// Participant points account
    #[account(
        init_if_needed,
        payer = participant,
        space = StarAccount::SIZE,
        seeds = [STAR_ACCOUNT_SEED, participant.key().as_ref()],
        bump,
    )]
    pub star_account: Box<Account<'info, StarAccount>>,

    /// Participant position in this project
    #[account(
        init_if_needed,
        payer = participant,
        space = ParticipantPosition::SIZE,
        seeds = [POSITION_SEED, project.key().as_ref(), participant.key().as_ref()],
        bump,
    )]
    pub position: Box<Account<'info, ParticipantPosition>>,

    /// Record of this participation
    #[account(
        init,
        payer = participant,
        space = Participation::SIZE,
        seeds = [
            PARTICIPATION_SEED,
            project.key().as_ref(),
            participant.key().as_ref(),
            &position.participation_count.to_le_bytes(),
        ],
        bump,
    )]
    pub participation: Box<Account<'info, Participation>>,

    /// Project native vault
    #[account(
        mut,
        address = project.native_vault @ StarLaunchError::InvalidTokenMint,
    )]
    pub native_vault: Box<Account<'info, TokenAccount>>,

    /// Participant native-currency account
    #[account(
        mut,
        token::mint = native_vault.mint,
        token::authority = participant,
    )]
    pub participant_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn participate_in_project(
    ctx: Context<ParticipateInProject>,
    project_id: u64,
    native_amount: i128,
    points_amount: i128,
) -> Result<ParticipantPosition> {
    let current_time = current_timestamp()?;
    let participant = &ctx.accounts.participant;
    let project = &mut ctx.accounts.project;
    let star_account = &mut ctx.accounts.star_account;
    let position = &mut ctx.accounts.position;

    if !star_account.is_initialized() {
        star_account.initialize(participant.key(), ctx.bumps.star_account);
    }

    if position.participant == Pubkey::default() {
        position.participant = participant.key();
        position.project = project.key();
        position.bump = ctx.bumps.position;
    }

    let quote = quote_participation(
        project,
        position,
        star_account,
        native_amount,
        points_amount,
        current_time,
    )?;

    // Transfer native contribution to vault
    transfer_from_user(
        &ctx.accounts.token_program,
        &ctx.accounts.participant_token_account,
        &ctx.accounts.native_vault,
        participant,
        quote.native.to_token_amount()?,
    )?;

    let record = &mut ctx.accounts.participation;
    record.bump = ctx.bumps.participation;

    let is_first_participation = settle_participation(
        project,
        position,
        star_account,
        record,
        &quote,
        current_time,
    )?;

    emit!(ParticipationRecorded {
        project: project.key(),
        project_id,
        participant: participant.key(),
        index: record.index,
        native_amount: record.native_amount,
        points_amount: record.points_amount,
        value: record.value,
        creator_points_share: record.creator_points_share,
        points_burned: record.points_burned,
        total_contribution: position.contributed_value,
        project_raised_total: project.raised_amount,
        is_first_participation,
        participants_count: project.participants_count,
        timestamp: current_time,
    });

    msg!(
        "Participant {} contributed {} native and {} points",
        participant.key(),
        quote.native,
        quote.points
    );
    msg!(
        "Total raised: {} / {}",
        project.raised(),
        FixedPointAmount::from_mantissa(project.tokenomics.target_amount)
    );

    Ok((***position).clone())
}
