use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::errors::StarLaunchError;
use crate::state::ProjectParams;

/// Current cluster time as unsigned seconds
pub fn current_timestamp() -> Result<u64> {
    let clock = Clock::get()?;
    u64::try_from(clock.unix_timestamp).map_err(|_| error!(StarLaunchError::TypeCastFailed))
}

/// Validate name and symbol of a new project.
///
/// Symbols are canonical uppercase, so one (creator, symbol) guard covers every spelling.
pub fn validate_project_params(params: &ProjectParams) -> Result<()> {
    let name = params.name.trim();
    require!(
        !name.is_empty() && params.name.len() <= MAX_NAME_LEN,
        StarLaunchError::InvalidName
    );

    require!(
        !params.symbol.is_empty()
            && params.symbol.len() <= MAX_SYMBOL_LEN
            && params
                .symbol
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()),
        StarLaunchError::InvalidSymbol
    );

    require!(params.total_supply > 0, StarLaunchError::InvalidAmount);

    Ok(())
}
