use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::const_pda::const_authority::{VAULT_AUTHORITY_ID, VAULT_BUMP};
use crate::constants::VAULT_AUTHORITY;
use crate::errors::StarLaunchError;

/// Move tokens out of a program vault, signed by the vault authority PDA
pub fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    vault_authority: &SystemAccount<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    require_keys_eq!(
        vault_authority.key(),
        VAULT_AUTHORITY_ID,
        StarLaunchError::Unauthorized
    );
    require!(
        vault.amount >= amount,
        StarLaunchError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to: destination.to_account_info(),
                authority: vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}

/// Move tokens from a user-owned account into a program vault
pub fn transfer_from_user<'info>(
    token_program: &Program<'info, Token>,
    source: &Account<'info, TokenAccount>,
    vault: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: source.to_account_info(),
                to: vault.to_account_info(),
                authority: owner.to_account_info(),
            },
        ),
        amount,
    )
}
