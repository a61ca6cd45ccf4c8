use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::StarLaunchError;
use crate::events::CreatorProceedsClaimed;
use crate::state::{Project, StarAccount};
use crate::utils::{current_timestamp, transfer_from_vault, FixedPointAmount};

#[derive(Accounts)]
pub struct ClaimCreatorProceeds<'info> {
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
        constraint = !project.proceeds_claimed @ StarLaunchError::AlreadyClaimed,
    )]
    pub project: Box<Account<'info, Project>>,

    /// Creator points account, credited with the creator share of spent points
    #[account(
        init_if_needed,
        payer = creator,
        space = StarAccount::SIZE,
        seeds = [STAR_ACCOUNT_SEED, creator.key().as_ref()],
        bump,
    )]
    pub creator_star_account: Box<Account<'info, StarAccount>>,

    /// Project token vault
    #[account(
        mut,
        address = project.token_vault,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// Project native vault
    #[account(
        mut,
        address = project.native_vault,
    )]
    pub native_vault: Box<Account<'info, TokenAccount>>,

    /// Creator token receiving account (liquidity allocation)
    #[account(
        mut,
        token::mint = project.token_mint,
        token::authority = creator,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    /// Creator native-currency receiving account
    #[account(
        mut,
        token::mint = native_vault.mint,
        token::authority = creator,
    )]
    pub creator_native_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Release raised native, the liquidity allocation and the points share to the creator
pub fn claim_creator_proceeds(ctx: Context<ClaimCreatorProceeds>) -> Result<()> {
    let project = &mut ctx.accounts.project;
    let star_account = &mut ctx.accounts.creator_star_account;
    let current_time = current_timestamp()?;

    if !star_account.is_initialized() {
        star_account.initialize(ctx.accounts.creator.key(), ctx.bumps.creator_star_account);
    }

    let native = FixedPointAmount::from_mantissa(project.native_raised);
    let liquidity = FixedPointAmount::from_mantissa(project.tokenomics.liquidity_allocation);
    let points = FixedPointAmount::from_mantissa(project.creator_points_share);

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.native_vault,
        &ctx.accounts.creator_native_account,
        &ctx.accounts.vault_authority,
        native.to_token_amount()?,
    )?;

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.token_vault,
        &ctx.accounts.creator_token_account,
        &ctx.accounts.vault_authority,
        liquidity.to_token_amount()?,
    )?;

    star_account.credit(points)?;
    project.proceeds_claimed = true;

    emit!(CreatorProceedsClaimed {
        project: project.key(),
        creator: ctx.accounts.creator.key(),
        native_amount: native.mantissa(),
        liquidity_tokens: liquidity.mantissa(),
        points_credited: points.mantissa(),
        timestamp: current_time,
    });

    msg!("Creator proceeds claimed for project {}", project.id);
    msg!("Native: {}", native);
    msg!("Liquidity tokens: {}", liquidity);
    msg!("Points credited: {}", points);

    Ok(())
}
