use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::constants::{AMOUNT_DECIMALS, AMOUNT_SCALE};
use crate::errors::StarLaunchError;

/// A decimal quantity with exactly 7 fractional digits, stored as an integer mantissa scaled by 10^7.
///
/// Every monetary and token quantity in the program goes through this type. Arithmetic is done on the
/// mantissa with checked operations, so overflow surfaces as
/// [`StarLaunchError::ArithmeticOverflow`] instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedPointAmount(i128);

impl FixedPointAmount {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(AMOUNT_SCALE);

    pub const fn from_mantissa(mantissa: i128) -> Self {
        Self(mantissa)
    }

    pub const fn mantissa(self) -> i128 {
        self.0
    }

    /// Whole units, e.g. `from_units(500)` is 500.0000000
    pub fn from_units(units: i128) -> Result<Self> {
        units
            .checked_mul(AMOUNT_SCALE)
            .map(Self)
            .ok_or_else(|| error!(StarLaunchError::ArithmeticOverflow))
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Parse a decimal string with at most 7 fractional digits.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => {
                require!(!frac_part.is_empty(), StarLaunchError::InvalidDecimal);
                (int_part, frac_part)
            }
            None => (digits, ""),
        };

        require!(
            !int_part.is_empty()
                && int_part.bytes().all(|b| b.is_ascii_digit())
                && frac_part.bytes().all(|b| b.is_ascii_digit()),
            StarLaunchError::InvalidDecimal
        );
        require!(
            frac_part.len() <= AMOUNT_DECIMALS as usize,
            StarLaunchError::PrecisionLoss
        );

        let whole = parse_digits(int_part)?;
        let mut frac = parse_digits(frac_part)?;
        for _ in frac_part.len()..AMOUNT_DECIMALS as usize {
            frac *= 10;
        }

        let mantissa = whole
            .checked_mul(AMOUNT_SCALE)
            .and_then(|m| m.checked_add(frac))
            .ok_or(StarLaunchError::ArithmeticOverflow)?;

        Ok(Self(if negative { -mantissa } else { mantissa }))
    }

    pub fn checked_add(self, other: Self) -> Result<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| error!(StarLaunchError::ArithmeticOverflow))
    }

    pub fn checked_sub(self, other: Self) -> Result<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| error!(StarLaunchError::ArithmeticOverflow))
    }

    pub fn checked_mul_int(self, factor: i128) -> Result<Self> {
        self.0
            .checked_mul(factor)
            .map(Self)
            .ok_or_else(|| error!(StarLaunchError::ArithmeticOverflow))
    }

    /// Integer division of the mantissa, truncating toward zero
    pub fn checked_div_int(self, divisor: i128) -> Result<Self> {
        require!(divisor != 0, StarLaunchError::DivisionByZero);

        self.0
            .checked_div(divisor)
            .map(Self)
            .ok_or_else(|| error!(StarLaunchError::ArithmeticOverflow))
    }

    /// `pct`% of this amount, truncating toward zero. Reconciling the remainder is the caller's job.
    pub fn percentage_of(self, pct: u8) -> Result<Self> {
        require!(pct <= 100, StarLaunchError::InvalidPercentage);

        self.checked_mul_int(pct as i128)?.checked_div_int(100)
    }

    /// Token-program amount (u64 base units at 7 decimals)
    pub fn to_token_amount(self) -> Result<u64> {
        u64::try_from(self.0).map_err(|_| error!(StarLaunchError::TypeCastFailed))
    }

    pub fn from_token_amount(amount: u64) -> Self {
        Self(amount as i128)
    }
}

fn parse_digits(digits: &str) -> Result<i128> {
    digits.bytes().try_fold(0i128, |acc, b| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add((b - b'0') as i128))
            .ok_or_else(|| error!(StarLaunchError::ArithmeticOverflow))
    })
}

impl FromStr for FixedPointAmount {
    type Err = anchor_lang::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FixedPointAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = AMOUNT_SCALE as u128;
        let whole = abs / scale;
        let frac = abs % scale;

        if frac == 0 {
            return write!(f, "{}{}", sign, whole);
        }

        let frac = format!("{:0width$}", frac, width = AMOUNT_DECIMALS as usize);
        write!(f, "{}{}.{}", sign, whole, frac.trim_end_matches('0'))
    }
}

impl From<FixedPointAmount> for i128 {
    fn from(amount: FixedPointAmount) -> Self {
        amount.0
    }
}
