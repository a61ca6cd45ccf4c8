use anchor_lang::prelude::*;

use crate::errors::StarLaunchError;
use crate::state::{Tokenomics, TokenomicsParams};
use crate::utils::FixedPointAmount;

/// Absolute token amounts derived from the allocation percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocations {
    pub airdrop: FixedPointAmount,
    pub team: FixedPointAmount,
    pub liquidity: FixedPointAmount,
}

impl Allocations {
    pub fn total(&self) -> Result<FixedPointAmount> {
        self.airdrop
            .checked_add(self.team)?
            .checked_add(self.liquidity)
    }
}

/// Split `total_supply` into airdrop / team / liquidity allocations.
///
/// The percentages must sum to exactly 100. Each share is truncated, and whatever the truncation
/// leaves over (at most 2 base units) goes to liquidity so the allocations always add up to the
/// total supply.
pub fn derive_allocations(
    total_supply: FixedPointAmount,
    airdrop_percent: u8,
    creator_percent: u8,
    liquidity_percent: u8,
) -> Result<Allocations> {
    let percent_sum = airdrop_percent as u16 + creator_percent as u16 + liquidity_percent as u16;
    require!(percent_sum == 100, StarLaunchError::AllocationImbalance);
    require!(!total_supply.is_negative(), StarLaunchError::InvalidAmount);

    let airdrop = total_supply.percentage_of(airdrop_percent)?;
    let team = total_supply.percentage_of(creator_percent)?;
    let liquidity = total_supply.percentage_of(liquidity_percent)?;

    let derived = airdrop.checked_add(team)?.checked_add(liquidity)?;
    let shortfall = total_supply.checked_sub(derived)?;

    let allocations = Allocations {
        airdrop,
        team,
        liquidity: liquidity.checked_add(shortfall)?,
    };

    // Verify total
    require!(
        allocations.total()? == total_supply,
        StarLaunchError::AllocationImbalance
    );

    Ok(allocations)
}

/// Turn the percentage form into the absolute tokenomics sent to `create_project`
pub fn derive_tokenomics(
    total_supply: FixedPointAmount,
    params: &TokenomicsParams,
) -> Result<Tokenomics> {
    let allocations = derive_allocations(
        total_supply,
        params.airdrop_percent,
        params.creator_percent,
        params.liquidity_percent,
    )?;

    Ok(Tokenomics {
        airdrop_allocation: allocations.airdrop.mantissa(),
        liquidity_allocation: allocations.liquidity.mantissa(),
        max_contribution: params.max_contribution,
        min_contribution: params.min_contribution,
        price_per_token: params.price_per_token,
        target_amount: params.target_amount,
        team_allocation: allocations.team.mantissa(),
    })
}

/// Validate creation-time tokenomics against the total supply and the platform minimum target
pub fn validate_tokenomics(
    total_supply: FixedPointAmount,
    tokenomics: &Tokenomics,
    min_target_amount: FixedPointAmount,
) -> Result<()> {
    require!(total_supply.is_positive(), StarLaunchError::InvalidAmount);

    let allocations = Allocations {
        airdrop: FixedPointAmount::from_mantissa(tokenomics.airdrop_allocation),
        team: FixedPointAmount::from_mantissa(tokenomics.team_allocation),
        liquidity: FixedPointAmount::from_mantissa(tokenomics.liquidity_allocation),
    };
    require!(
        !allocations.airdrop.is_negative()
            && !allocations.team.is_negative()
            && !allocations.liquidity.is_negative(),
        StarLaunchError::InvalidAmount
    );
    require!(
        allocations.total()? == total_supply,
        StarLaunchError::AllocationImbalance
    );

    require!(
        FixedPointAmount::from_mantissa(tokenomics.target_amount) >= min_target_amount,
        StarLaunchError::BelowMinimumLiquidity
    );

    require!(
        tokenomics.min_contribution > 0
            && tokenomics.min_contribution <= tokenomics.max_contribution,
        StarLaunchError::InvalidContributionBounds
    );

    require!(tokenomics.price_per_token > 0, StarLaunchError::InvalidAmount);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn units(n: i128) -> FixedPointAmount {
        FixedPointAmount::from_units(n).unwrap()
    }

    fn min_target() -> FixedPointAmount {
        FixedPointAmount::from_mantissa(DEFAULT_MIN_TARGET_AMOUNT)
    }

    fn params(target_units: i128) -> TokenomicsParams {
        TokenomicsParams {
            airdrop_percent: 40,
            creator_percent: 30,
            liquidity_percent: 30,
            max_contribution: DEFAULT_MAX_CONTRIBUTION,
            min_contribution: DEFAULT_MIN_CONTRIBUTION,
            price_per_token: DEFAULT_PRICE_PER_TOKEN,
            target_amount: target_units * AMOUNT_SCALE,
        }
    }

    fn tokenomics(target_units: i128) -> Tokenomics {
        derive_tokenomics(units(1_000_000), &params(target_units)).unwrap()
    }

    #[test]
    fn test_forty_thirty_thirty_split() {
        let allocations = derive_allocations(units(1_000_000), 40, 30, 30).unwrap();

        assert_eq!(allocations.airdrop, units(400_000));
        assert_eq!(allocations.team, units(300_000));
        assert_eq!(allocations.liquidity, units(300_000));
        assert_eq!(allocations.total().unwrap(), units(1_000_000));
    }

    #[test]
    fn test_shortfall_goes_to_liquidity() {
        // 33% of 10 base units truncates to 3 for each share, 1 unit is left over
        let supply = FixedPointAmount::from_mantissa(10);
        let allocations = derive_allocations(supply, 33, 33, 34).unwrap();

        assert_eq!(allocations.airdrop.mantissa(), 3);
        assert_eq!(allocations.team.mantissa(), 3);
        assert_eq!(allocations.liquidity.mantissa(), 4);
        assert_eq!(allocations.total().unwrap(), supply);
    }

    #[test]
    fn test_imbalance_rejected() {
        for (a, c, l) in [(40, 30, 20), (50, 50, 1), (0, 0, 0), (100, 100, 100)] {
            assert_eq!(
                derive_allocations(units(1_000), a, c, l).unwrap_err(),
                StarLaunchError::AllocationImbalance.into()
            );
        }
    }

    #[test]
    fn test_derive_and_validate_tokenomics() {
        let tokenomics = tokenomics(500);

        assert_eq!(tokenomics.airdrop_allocation, 400_000 * AMOUNT_SCALE);
        assert_eq!(tokenomics.team_allocation, 300_000 * AMOUNT_SCALE);
        assert_eq!(tokenomics.liquidity_allocation, 300_000 * AMOUNT_SCALE);
        assert_eq!(tokenomics.target_amount, 500 * AMOUNT_SCALE);

        assert!(validate_tokenomics(units(1_000_000), &tokenomics, min_target()).is_ok());
    }

    #[test]
    fn test_allocations_must_match_supply() {
        let mut short = tokenomics(500);
        short.liquidity_allocation -= 1;
        let mut over = tokenomics(500);
        over.airdrop_allocation += 1;

        for tokenomics in [short, over] {
            assert_eq!(
                validate_tokenomics(units(1_000_000), &tokenomics, min_target()).unwrap_err(),
                StarLaunchError::AllocationImbalance.into()
            );
        }
    }

    #[test]
    fn test_negative_allocation_rejected() {
        let mut tokenomics = tokenomics(500);
        tokenomics.team_allocation = -tokenomics.team_allocation;
        tokenomics.airdrop_allocation += 2 * 300_000 * AMOUNT_SCALE;

        assert_eq!(
            validate_tokenomics(units(1_000_000), &tokenomics, min_target()).unwrap_err(),
            StarLaunchError::InvalidAmount.into()
        );
    }

    #[test]
    fn test_below_minimum_liquidity() {
        assert_eq!(
            validate_tokenomics(units(1_000_000), &tokenomics(400), min_target()).unwrap_err(),
            StarLaunchError::BelowMinimumLiquidity.into()
        );
    }

    #[test]
    fn test_contribution_bounds_checked() {
        let mut bad = tokenomics(500);
        bad.min_contribution = bad.max_contribution + 1;

        assert_eq!(
            validate_tokenomics(units(1_000_000), &bad, min_target()).unwrap_err(),
            StarLaunchError::InvalidContributionBounds.into()
        );
    }

    #[test]
    fn test_zero_supply_rejected() {
        let empty = derive_tokenomics(FixedPointAmount::ZERO, &params(500)).unwrap();

        assert_eq!(
            validate_tokenomics(FixedPointAmount::ZERO, &empty, min_target()).unwrap_err(),
            StarLaunchError::InvalidAmount.into()
        );
    }
}
