use anchor_lang::prelude::*;

use crate::errors::StarLaunchError;
use crate::state::Project;

/// One per (creator, symbol). Blocks a second live project with the same symbol.
#[account]
#[derive(Default)]
pub struct SymbolGuard {
    pub creator: Pubkey,

    /// Project currently holding the symbol
    pub project_id: u64,

    /// False once that project failed
    pub active: bool,

    /// bump seed
    pub bump: u8,
}

impl SymbolGuard {
    pub const SIZE: usize = 8 + // discriminator
        32 + // creator
        8 + // project_id
        1 + // active
        1; // bump

    pub fn claim(&mut self, creator: Pubkey, project_id: u64, bump: u8) -> Result<()> {
        require!(!self.active, StarLaunchError::DuplicateSymbol);

        self.creator = creator;
        self.project_id = project_id;
        self.active = true;
        self.bump = bump;
        Ok(())
    }

    pub fn release(&mut self, project_id: u64) {
        if self.project_id == project_id {
            self.active = false;
        }
    }

    /// Follow the project's closing status: a failed project frees the symbol, a finalized one keeps it
    pub fn settle(&mut self, project: &Project) {
        if project.is_failed() {
            self.release(project.id);
        }
    }
}
