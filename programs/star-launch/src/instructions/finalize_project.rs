use anchor_lang::prelude::*;

use crate::constants::{PROJECT_SEED, SYMBOL_GUARD_SEED};
use crate::events::{ProjectFinalized, ProjectStatusChanged};
use crate::state::{Project, ProjectStatus, SymbolGuard};
use crate::utils::{current_timestamp, FixedPointAmount};

#[derive(Accounts)]
pub struct FinalizeProject<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PROJECT_SEED, &project.id.to_le_bytes()],
        bump = project.bump,
    )]
    pub project: Box<Account<'info, Project>>,

    /// Symbol reservation, released when the project fails
    #[account(
        mut,
        seeds = [SYMBOL_GUARD_SEED, project.creator.as_ref(), project.symbol.as_bytes()],
        bump = symbol_guard.bump,
    )]
    pub symbol_guard: Box<Account<'info, SymbolGuard>>,
}

pub fn finalize_project(ctx: Context<FinalizeProject>) -> Result<()> {
    let project = &mut ctx.accounts.project;
    let current_time = current_timestamp()?;

    let previous_status = project.status as u8;
    let status = project.finalize(current_time)?;
    let success = status == ProjectStatus::Finalized;
    ctx.accounts.symbol_guard.settle(project);

    if success {
        msg!("Project {} finalized successfully!", project.id);
        msg!("Total raised: {}", project.raised());
    } else {
        msg!("Project {} failed to reach target", project.id);
        msg!(
            "Raised: {} / {}",
            project.raised(),
            FixedPointAmount::from_mantissa(project.tokenomics.target_amount)
        );
    }

    // Emit status change event
    emit!(ProjectStatusChanged {
        project: project.key(),
        previous_status,
        new_status: status as u8,
        raised_amount: project.raised_amount,
        target_amount: project.tokenomics.target_amount,
        timestamp: current_time,
    });

    emit!(ProjectFinalized {
        project: project.key(),
        project_id: project.id,
        creator: project.creator,
        success,
        raised_amount: project.raised_amount,
        target_amount: project.tokenomics.target_amount,
        native_raised: project.native_raised,
        points_spent: project.points_spent,
        points_burned: project.points_burned,
        participants_count: project.participants_count,
        timestamp: current_time,
    });

    Ok(())
}
