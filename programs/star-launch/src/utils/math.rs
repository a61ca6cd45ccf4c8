use anchor_lang::prelude::*;
use ruint::aliases::U256;

use crate::errors::StarLaunchError;

/// floor(a * b / c) with a 256-bit intermediate product
pub fn mul_div_floor(a: u128, b: u128, c: u128) -> Result<u128> {
    require!(c != 0, StarLaunchError::DivisionByZero);

    let prod = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(StarLaunchError::ArithmeticOverflow)?;

    let quotient = prod
        .checked_div(U256::from(c))
        .ok_or(StarLaunchError::DivisionByZero)?;

    Ok(quotient
        .try_into()
        .map_err(|_| StarLaunchError::TypeCastFailed)?)
}

/// Same as [`mul_div_floor`] for non-negative i128 operands
pub fn mul_div_floor_i128(a: i128, b: i128, c: i128) -> Result<i128> {
    require!(a >= 0 && b >= 0 && c >= 0, StarLaunchError::InvalidAmount);

    let result = mul_div_floor(a as u128, b as u128, c as u128)?;

    i128::try_from(result).map_err(|_| error!(StarLaunchError::ArithmeticOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_floor() {
        assert_eq!(mul_div_floor(10, 3, 4).unwrap(), 7);
        assert_eq!(mul_div_floor(u128::MAX, 2, 4).unwrap(), u128::MAX / 2);
        assert_eq!(
            mul_div_floor(1, 1, 0).unwrap_err(),
            StarLaunchError::DivisionByZero.into()
        );
        assert_eq!(
            mul_div_floor(u128::MAX, 2, 1).unwrap_err(),
            StarLaunchError::TypeCastFailed.into()
        );
    }

    #[test]
    fn test_mul_div_floor_i128() {
        assert_eq!(mul_div_floor_i128(400, 30, 100).unwrap(), 120);
        assert_eq!(
            mul_div_floor_i128(i128::MAX, 2, 1).unwrap_err(),
            StarLaunchError::ArithmeticOverflow.into()
        );
        assert_eq!(
            mul_div_floor_i128(-1, 2, 1).unwrap_err(),
            StarLaunchError::InvalidAmount.into()
        );
    }
}
