use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::StarLaunchError;
use crate::events::{ProjectCreated, ProjectStatusChanged};
use crate::state::{
    GlobalConfig, Project, ProjectParams, ProjectStatus, SymbolGuard, Timing, Tokenomics,
};
use crate::utils::{
    current_timestamp, transfer_from_user, validate_project_params, validate_tokenomics,
    FixedPointAmount,
};

#[derive(Accounts)]
#[instruction(params: ProjectParams)]
pub struct CreateProject<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Global configuration account
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// Project account, keyed by the next project id
    #[account(
        init,
        payer = creator,
        space = Project::SIZE,
        seeds = [PROJECT_SEED, &global_config.project_count.to_le_bytes()],
        bump,
    )]
    pub project: Box<Account<'info, Project>>,

    /// Symbol reservation of this creator
    #[account(
        init_if_needed,
        payer = creator,
        space = SymbolGuard::SIZE,
        seeds = [SYMBOL_GUARD_SEED, creator.key().as_ref(), params.symbol.as_bytes()],
        bump,
    )]
    pub symbol_guard: Box<Account<'info, SymbolGuard>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Launched token, must carry 7 decimals
    #[account(
        address = params.token_address @ StarLaunchError::InvalidTokenMint,
        constraint = token_mint.decimals == AMOUNT_DECIMALS @ StarLaunchError::InvalidTokenMint,
    )]
    pub token_mint: Box<Account<'info, Mint>>,

    /// Native-currency mint
    #[account(
        address = global_config.quote_mint @ StarLaunchError::InvalidTokenMint,
    )]
    pub quote_mint: Box<Account<'info, Mint>>,

    /// Project token vault, receives the full supply
    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_VAULT, project.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// Project native vault, receives contributions
    #[account(
        init,
        payer = creator,
        seeds = [NATIVE_VAULT, project.key().as_ref()],
        bump,
        token::mint = quote_mint,
        token::authority = vault_authority,
    )]
    pub native_vault: Box<Account<'info, TokenAccount>>,

    /// Creator account holding the supply
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn create_project(
    ctx: Context<CreateProject>,
    params: ProjectParams,
    tokenomics: Tokenomics,
    timing: Timing,
) -> Result<u64> {
    let global_config = &mut ctx.accounts.global_config;
    let creator = &ctx.accounts.creator;

    require!(!global_config.paused, StarLaunchError::PlatformPaused);

    // Validate parameters
    validate_project_params(&params)?;

    let total_supply = FixedPointAmount::from_mantissa(params.total_supply);
    validate_tokenomics(total_supply, &tokenomics, global_config.min_target())?;

    global_config.validate_launch_params(&timing)?;

    let project_id = global_config.next_project_id()?;
    ctx.accounts
        .symbol_guard
        .claim(creator.key(), project_id, ctx.bumps.symbol_guard)?;

    let deposit = total_supply.to_token_amount()?;

    // Initialize project
    let project = &mut ctx.accounts.project;
    project.id = project_id;
    project.creator = creator.key();
    project.name = params.name.trim().to_string();
    project.symbol = params.symbol.clone();
    project.token_mint = ctx.accounts.token_mint.key();
    project.token_vault = ctx.accounts.token_vault.key();
    project.native_vault = ctx.accounts.native_vault.key();
    project.total_supply = params.total_supply;
    project.tokenomics = tokenomics;
    project.timing = timing;
    project.status = ProjectStatus::Pending;
    project.bump = ctx.bumps.project;

    // Deposit the supply into the vault
    transfer_from_user(
        &ctx.accounts.token_program,
        &ctx.accounts.creator_token_account,
        &ctx.accounts.token_vault,
        creator,
        deposit,
    )?;

    project.status = ProjectStatus::Funding;

    emit!(ProjectCreated {
        project: project.key(),
        project_id,
        creator: creator.key(),
        token_mint: project.token_mint,
        name: project.name.clone(),
        symbol: project.symbol.clone(),
        total_supply: project.total_supply,
        airdrop_allocation: tokenomics.airdrop_allocation,
        team_allocation: tokenomics.team_allocation,
        liquidity_allocation: tokenomics.liquidity_allocation,
        target_amount: tokenomics.target_amount,
        start_time: timing.start_time,
        end_time: timing.end_time,
    });

    emit!(ProjectStatusChanged {
        project: project.key(),
        previous_status: ProjectStatus::Pending as u8,
        new_status: ProjectStatus::Funding as u8,
        raised_amount: 0,
        target_amount: tokenomics.target_amount,
        timestamp: current_timestamp()?,
    });

    msg!("Project {} created successfully", project_id);
    msg!("Token: {}", project.token_mint);
    msg!("Supply: {} {}", total_supply, project.symbol);
    msg!(
        "Target: {}",
        FixedPointAmount::from_mantissa(tokenomics.target_amount)
    );

    Ok(project_id)
}
