use anchor_lang::prelude::*;

use crate::constants::{CREATOR_POINTS_SHARE_PERCENT, POINTS_PER_NATIVE, REFERRAL_BONUS_PERCENT};
use crate::errors::StarLaunchError;
use crate::utils::FixedPointAmount;

/// Points produced by one native deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintOutcome {
    pub points: FixedPointAmount,
    pub referral_bonus: FixedPointAmount,
}

/// How spent points are divided between the creator and the burn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsSplit {
    pub creator_share: FixedPointAmount,
    pub burned: FixedPointAmount,
}

/// Calculate the points minted for a native deposit, and the referrer bonus when one is registered
pub fn calculate_mint(native_amount: FixedPointAmount, has_referrer: bool) -> Result<MintOutcome> {
    require!(native_amount.is_positive(), StarLaunchError::InvalidAmount);

    let points = native_amount.checked_mul_int(POINTS_PER_NATIVE)?;
    let referral_bonus = if has_referrer {
        points.percentage_of(REFERRAL_BONUS_PERCENT)?
    } else {
        FixedPointAmount::ZERO
    };

    Ok(MintOutcome {
        points,
        referral_bonus,
    })
}

/// Native-currency value of a points amount at the minting rate
pub fn points_to_native(points: FixedPointAmount) -> Result<FixedPointAmount> {
    points.checked_div_int(POINTS_PER_NATIVE)
}

pub fn split_spent_points(points: FixedPointAmount) -> Result<PointsSplit> {
    require!(!points.is_negative(), StarLaunchError::InvalidAmount);

    let creator_share = points.percentage_of(CREATOR_POINTS_SHARE_PERCENT)?;
    let burned = points.checked_sub(creator_share)?;

    Ok(PointsSplit {
        creator_share,
        burned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(n: i128) -> FixedPointAmount {
        FixedPointAmount::from_units(n).unwrap()
    }

    #[test]
    fn test_mint_hundred_native() {
        let outcome = calculate_mint(units(100), true).unwrap();

        assert_eq!(outcome.points, units(1_000));
        assert_eq!(outcome.referral_bonus, units(100));
    }

    #[test]
    fn test_mint_without_referrer() {
        let outcome = calculate_mint(units(3), false).unwrap();

        assert_eq!(outcome.points, units(30));
        assert_eq!(outcome.referral_bonus, FixedPointAmount::ZERO);
    }

    #[test]
    fn test_referral_bonus_floors() {
        // 0.0000001 native mints 10 base units of points, the bonus is exactly 1
        let outcome = calculate_mint(FixedPointAmount::from_mantissa(1), true).unwrap();
        assert_eq!(outcome.points.mantissa(), 10);
        assert_eq!(outcome.referral_bonus.mantissa(), 1);
    }

    #[test]
    fn test_mint_rejects_non_positive() {
        for amount in [FixedPointAmount::ZERO, units(-5)] {
            assert_eq!(
                calculate_mint(amount, false).unwrap_err(),
                StarLaunchError::InvalidAmount.into()
            );
        }
    }

    #[test]
    fn test_points_to_native() {
        assert_eq!(points_to_native(units(1_000)).unwrap(), units(100));
        assert_eq!(
            points_to_native(FixedPointAmount::from_mantissa(19))
                .unwrap()
                .mantissa(),
            1
        );
    }

    #[test]
    fn test_split_conserves_points() {
        let split = split_spent_points(FixedPointAmount::from_mantissa(7)).unwrap();

        assert_eq!(split.creator_share.mantissa(), 3);
        assert_eq!(split.burned.mantissa(), 4);
    }
}
