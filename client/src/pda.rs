//! Program-derived addresses of every program account

use anchor_lang::prelude::Pubkey;
use star_launch::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramAddresses {
    pub program_id: Pubkey,
}

impl Default for ProgramAddresses {
    fn default() -> Self {
        Self::new(star_launch::ID)
    }
}

impl ProgramAddresses {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    fn find(&self, seeds: &[&[u8]]) -> Pubkey {
        Pubkey::find_program_address(seeds, &self.program_id).0
    }

    pub fn global_config(&self) -> Pubkey {
        self.find(&[GLOBAL_CONFIG_SEED])
    }

    pub fn vault_authority(&self) -> Pubkey {
        self.find(&[VAULT_AUTHORITY])
    }

    pub fn treasury_vault(&self, quote_mint: &Pubkey) -> Pubkey {
        self.find(&[TREASURY_VAULT, quote_mint.as_ref()])
    }

    pub fn project(&self, project_id: u64) -> Pubkey {
        self.find(&[PROJECT_SEED, &project_id.to_le_bytes()])
    }

    pub fn symbol_guard(&self, creator: &Pubkey, symbol: &str) -> Pubkey {
        self.find(&[SYMBOL_GUARD_SEED, creator.as_ref(), symbol.as_bytes()])
    }

    pub fn token_vault(&self, project: &Pubkey) -> Pubkey {
        self.find(&[TOKEN_VAULT, project.as_ref()])
    }

    pub fn native_vault(&self, project: &Pubkey) -> Pubkey {
        self.find(&[NATIVE_VAULT, project.as_ref()])
    }

    pub fn star_account(&self, owner: &Pubkey) -> Pubkey {
        self.find(&[STAR_ACCOUNT_SEED, owner.as_ref()])
    }

    pub fn position(&self, project: &Pubkey, participant: &Pubkey) -> Pubkey {
        self.find(&[POSITION_SEED, project.as_ref(), participant.as_ref()])
    }

    pub fn participation(&self, project: &Pubkey, participant: &Pubkey, index: u32) -> Pubkey {
        self.find(&[
            PARTICIPATION_SEED,
            project.as_ref(),
            participant.as_ref(),
            &index.to_le_bytes(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses_are_distinct_per_key() {
        let pdas = ProgramAddresses::default();
        let creator = Pubkey::new_unique();
        let project = pdas.project(0);

        assert_ne!(pdas.project(0), pdas.project(1));
        assert_ne!(pdas.token_vault(&project), pdas.native_vault(&project));
        assert_ne!(
            pdas.symbol_guard(&creator, "NEB"),
            pdas.symbol_guard(&Pubkey::new_unique(), "NEB")
        );
        assert_ne!(
            pdas.participation(&project, &creator, 0),
            pdas.participation(&project, &creator, 1)
        );
        assert_eq!(pdas.star_account(&creator), pdas.star_account(&creator));
    }
}
