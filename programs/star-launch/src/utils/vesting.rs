use anchor_lang::prelude::*;

use crate::constants::AMOUNT_SCALE;
use crate::errors::StarLaunchError;
use crate::utils::{mul_div_floor_i128, FixedPointAmount};

/// Linear release of a locked allocation after a cliff. A pure function of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VestingSchedule {
    pub start: u64,
    pub cliff: u64,
    pub duration: u64,
    pub allocation: FixedPointAmount,
}

impl VestingSchedule {
    pub fn new(start: u64, cliff: u64, duration: u64, allocation: FixedPointAmount) -> Result<Self> {
        require!(
            duration > 0 && cliff <= duration,
            StarLaunchError::InvalidSchedule
        );
        require!(!allocation.is_negative(), StarLaunchError::InvalidAmount);
        start
            .checked_add(duration)
            .ok_or(StarLaunchError::ArithmeticOverflow)?;

        Ok(Self {
            start,
            cliff,
            duration,
            allocation,
        })
    }

    fn cliff_end(&self) -> u64 {
        self.start + self.cliff
    }

    fn end(&self) -> u64 {
        self.start + self.duration
    }

    /// Elapsed and total length of the linear segment, `None` outside of it
    fn linear_progress(&self, now: u64) -> Option<(u64, u64)> {
        if now < self.cliff_end() || now >= self.end() {
            return None;
        }
        Some((now - self.cliff_end(), self.duration - self.cliff))
    }

    /// Unlocked share of the allocation in [0, 1], as a 7-decimal fixed-point value
    pub fn unlocked_fraction(&self, now: u64) -> Result<FixedPointAmount> {
        if now >= self.end() {
            return Ok(FixedPointAmount::ONE);
        }

        match self.linear_progress(now) {
            Some((elapsed, span)) => {
                let fraction = mul_div_floor_i128(elapsed as i128, AMOUNT_SCALE, span as i128)?;
                Ok(FixedPointAmount::from_mantissa(fraction.min(AMOUNT_SCALE)))
            }
            None => Ok(FixedPointAmount::ZERO),
        }
    }

    /// Cumulative unlocked amount. Multiplies before dividing, so it is exact to the base unit.
    pub fn unlocked_amount(&self, now: u64) -> Result<FixedPointAmount> {
        if now >= self.end() {
            return Ok(self.allocation);
        }

        match self.linear_progress(now) {
            Some((elapsed, span)) => {
                let unlocked =
                    mul_div_floor_i128(self.allocation.mantissa(), elapsed as i128, span as i128)?;
                Ok(FixedPointAmount::from_mantissa(
                    unlocked.min(self.allocation.mantissa()),
                ))
            }
            None => Ok(FixedPointAmount::ZERO),
        }
    }

    /// Newly claimable amount given what was already claimed
    pub fn claimable(&self, now: u64, claimed: FixedPointAmount) -> Result<FixedPointAmount> {
        let unlocked = self.unlocked_amount(now)?;
        if unlocked <= claimed {
            return Ok(FixedPointAmount::ZERO);
        }
        unlocked.checked_sub(claimed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = 24 * 60 * 60;

    fn schedule(cliff: u64, duration: u64) -> VestingSchedule {
        VestingSchedule::new(
            1_000,
            cliff,
            duration,
            FixedPointAmount::from_units(300_000).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_schedules() {
        for (cliff, duration) in [(0, 0), (10, 5), (1, 0)] {
            assert_eq!(
                VestingSchedule::new(0, cliff, duration, FixedPointAmount::ONE).unwrap_err(),
                StarLaunchError::InvalidSchedule.into()
            );
        }
    }

    #[test]
    fn test_fraction_boundaries() {
        let s = schedule(30 * DAY, 180 * DAY);

        assert_eq!(s.unlocked_fraction(0).unwrap(), FixedPointAmount::ZERO);
        assert_eq!(
            s.unlocked_fraction(1_000 + 30 * DAY - 1).unwrap(),
            FixedPointAmount::ZERO
        );
        assert_eq!(
            s.unlocked_fraction(1_000 + 30 * DAY).unwrap(),
            FixedPointAmount::ZERO
        );
        assert_eq!(
            s.unlocked_fraction(1_000 + 105 * DAY).unwrap(),
            FixedPointAmount::parse("0.5").unwrap()
        );
        assert_eq!(
            s.unlocked_fraction(1_000 + 180 * DAY).unwrap(),
            FixedPointAmount::ONE
        );
        assert_eq!(s.unlocked_fraction(u64::MAX).unwrap(), FixedPointAmount::ONE);
    }

    #[test]
    fn test_cliff_equal_to_duration() {
        let s = schedule(10 * DAY, 10 * DAY);

        assert_eq!(
            s.unlocked_fraction(1_000 + 10 * DAY - 1).unwrap(),
            FixedPointAmount::ZERO
        );
        assert_eq!(
            s.unlocked_fraction(1_000 + 10 * DAY).unwrap(),
            FixedPointAmount::ONE
        );
    }

    #[test]
    fn test_unlocked_amount_and_claimable() {
        let s = schedule(0, 100);

        assert_eq!(
            s.unlocked_amount(1_025).unwrap(),
            FixedPointAmount::from_units(75_000).unwrap()
        );

        let claimed = FixedPointAmount::from_units(75_000).unwrap();
        assert_eq!(s.claimable(1_025, claimed).unwrap(), FixedPointAmount::ZERO);
        assert_eq!(
            s.claimable(1_050, claimed).unwrap(),
            FixedPointAmount::from_units(75_000).unwrap()
        );
        assert_eq!(
            s.claimable(1_100, claimed).unwrap(),
            FixedPointAmount::from_units(225_000).unwrap()
        );
    }

    #[test]
    fn test_pure_function_of_time() {
        let s = schedule(7 * DAY, 90 * DAY);
        let now = 1_000 + 33 * DAY + 17;

        assert_eq!(s.unlocked_fraction(now).unwrap(), s.unlocked_fraction(now).unwrap());
        assert_eq!(s.unlocked_amount(now).unwrap(), s.unlocked_amount(now).unwrap());
    }
}
