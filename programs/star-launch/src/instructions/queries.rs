use anchor_lang::prelude::*;

use crate::constants::{PROJECT_SEED, STAR_ACCOUNT_SEED};
use crate::errors::StarLaunchError;
use crate::state::{Project, StarAccount};

#[derive(Accounts)]
#[instruction(address: Pubkey)]
pub struct GetStarPoints<'info> {
    /// CHECK: may not exist yet, read only when owned by this program
    #[account(
        seeds = [STAR_ACCOUNT_SEED, address.as_ref()],
        bump,
    )]
    pub star_account: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(project_id: u64)]
pub struct GetProject<'info> {
    /// CHECK: may not exist, read only when owned by this program
    #[account(
        seeds = [PROJECT_SEED, &project_id.to_le_bytes()],
        bump,
    )]
    pub project: UncheckedAccount<'info>,
}

/// Points balance of `address`, 0 when it never held points
pub fn get_star_points(ctx: Context<GetStarPoints>, _address: Pubkey) -> Result<i128> {
    let info = ctx.accounts.star_account.to_account_info();
    if info.data_is_empty() || info.owner != &crate::ID {
        return Ok(0);
    }

    let data = info.try_borrow_data()?;
    let account = StarAccount::try_deserialize(&mut &data[..])?;
    Ok(account.balance)
}

pub fn get_project(ctx: Context<GetProject>, _project_id: u64) -> Result<Project> {
    let info = ctx.accounts.project.to_account_info();
    require!(
        !info.data_is_empty() && info.owner == &crate::ID,
        StarLaunchError::ProjectNotFound
    );

    let data = info.try_borrow_data()?;
    Project::try_deserialize(&mut &data[..])
}
