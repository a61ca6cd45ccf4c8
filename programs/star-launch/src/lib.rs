#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

mod const_pda;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{ParticipantPosition, Project, ProjectParams, Timing, Tokenomics};

declare_id!("7E22dUYERWbyaqGDTKeU7NfYPRnBuAaVULXJgafxsBHq");

#[program]
pub mod star_launch {
    use super::*;

    /// Initialize global configuration
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        params: InitializeConfigParams,
    ) -> Result<()> {
        instructions::initialize_config(ctx, params)
    }

    /// Update global configuration (admin only)
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        params: UpdateConfigParams,
    ) -> Result<()> {
        instructions::update_config(ctx, params)
    }

    /// Withdraw STAR point deposits from the treasury (admin only)
    pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>, amount: i128) -> Result<()> {
        instructions::withdraw_treasury(ctx, amount)
    }

    /// Register the referrer of the signer (once)
    pub fn register_referrer(ctx: Context<RegisterReferrer>, referrer: Pubkey) -> Result<()> {
        instructions::register_referrer(ctx, referrer)
    }

    /// Deposit native currency and mint STAR points for `recipient`, returning its new balance
    pub fn mint_star_points(
        ctx: Context<MintStarPoints>,
        recipient: Pubkey,
        amount: i128,
    ) -> Result<i128> {
        instructions::mint_star_points(ctx, recipient, amount)
    }

    /// Create a project and open its funding window, returning the project id
    pub fn create_project(
        ctx: Context<CreateProject>,
        params: ProjectParams,
        tokenomics: Tokenomics,
        timing: Timing,
    ) -> Result<u64> {
        instructions::create_project(ctx, params, tokenomics, timing)
    }

    /// Contribute native currency and/or STAR points to a funding project.
    /// Returns the participant's updated position.
    pub fn participate_in_project(
        ctx: Context<ParticipateInProject>,
        project_id: u64,
        native_amount: i128,
        points_amount: i128,
    ) -> Result<ParticipantPosition> {
        instructions::participate_in_project(ctx, project_id, native_amount, points_amount)
    }

    /// Close the funding window (success or failure)
    pub fn finalize_project(ctx: Context<FinalizeProject>) -> Result<()> {
        instructions::finalize_project(ctx)
    }

    /// Claim creator tokens (with vesting)
    pub fn claim_creator_tokens(ctx: Context<ClaimCreatorTokens>) -> Result<()> {
        instructions::claim_creator_tokens(ctx)
    }

    /// Claim raised native, liquidity allocation and points share
    pub fn claim_creator_proceeds(ctx: Context<ClaimCreatorProceeds>) -> Result<()> {
        instructions::claim_creator_proceeds(ctx)
    }

    /// Claim airdrop tokens of a finalized project
    pub fn claim_airdrop(ctx: Context<ClaimAirdrop>) -> Result<()> {
        instructions::claim_airdrop(ctx)
    }

    /// Refund a participation in a failed project
    pub fn claim_refund(ctx: Context<ClaimRefund>) -> Result<()> {
        instructions::claim_refund(ctx)
    }

    /// Return the token deposit of a failed project to its creator
    pub fn reclaim_project_tokens(ctx: Context<ReclaimProjectTokens>) -> Result<()> {
        instructions::reclaim_project_tokens(ctx)
    }

    pub fn get_star_points(ctx: Context<GetStarPoints>, address: Pubkey) -> Result<i128> {
        instructions::get_star_points(ctx, address)
    }

    pub fn get_project(ctx: Context<GetProject>, project_id: u64) -> Result<Project> {
        instructions::get_project(ctx, project_id)
    }
}
