use anchor_lang::prelude::*;

use crate::errors::StarLaunchError;
use crate::utils::{calculate_mint, FixedPointAmount, MintOutcome};

/// STAR points balance of one address. Only the methods below write `balance`.
#[account]
#[derive(Default)]
pub struct StarAccount {
    /// Account owner
    pub owner: Pubkey,

    /// Points balance (7-decimal mantissa)
    pub balance: i128,

    /// Referrer, set at most once
    pub referrer: Option<Pubkey>,

    /// Points minted from own deposits
    pub total_minted: i128,

    /// Points received as referral rewards
    pub total_referral_rewards: i128,

    /// Points spent on participation
    pub total_spent: i128,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl StarAccount {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        16 + // balance
        33 + // referrer (Option<Pubkey>)
        16 + // total_minted
        16 + // total_referral_rewards
        16 + // total_spent
        1 + // bump
        8 * 4; // reserved

    pub fn initialize(&mut self, owner: Pubkey, bump: u8) {
        self.owner = owner;
        self.balance = 0;
        self.referrer = None;
        self.total_minted = 0;
        self.total_referral_rewards = 0;
        self.total_spent = 0;
        self.bump = bump;
        self.reserved = [0; 4];
    }

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn balance(&self) -> FixedPointAmount {
        FixedPointAmount::from_mantissa(self.balance)
    }

    /// Register the referrer. Returns `false` when the same referrer was already registered.
    pub fn set_referrer(&mut self, referrer: Pubkey) -> Result<bool> {
        require!(referrer != self.owner, StarLaunchError::InvalidReferrer);

        match self.referrer {
            Some(existing) if existing == referrer => Ok(false),
            Some(_) => err!(StarLaunchError::ReferrerAlreadySet),
            None => {
                self.referrer = Some(referrer);
                Ok(true)
            }
        }
    }

    pub fn credit(&mut self, points: FixedPointAmount) -> Result<()> {
        self.balance = self.credited_balance(points)?;
        Ok(())
    }

    pub fn spend(&mut self, points: FixedPointAmount) -> Result<()> {
        self.ensure_balance(points)?;

        self.balance = self.balance().checked_sub(points)?.mantissa();
        self.total_spent = self
            .total_spent
            .checked_add(points.mantissa())
            .ok_or(StarLaunchError::ArithmeticOverflow)?;

        Ok(())
    }

    /// Fails with `InsufficientBalance` without touching state
    pub fn ensure_balance(&self, points: FixedPointAmount) -> Result<()> {
        require!(!points.is_negative(), StarLaunchError::InvalidAmount);
        require!(
            self.balance() >= points,
            StarLaunchError::InsufficientBalance
        );
        Ok(())
    }

    /// Give back points spent on a participation that is being refunded
    pub fn restore_spent(&mut self, points: FixedPointAmount) -> Result<()> {
        let balance = self.credited_balance(points)?;
        let total_spent = self
            .total_spent
            .checked_sub(points.mantissa())
            .ok_or(StarLaunchError::ArithmeticOverflow)?;

        self.balance = balance;
        self.total_spent = total_spent;
        Ok(())
    }

    fn credited_balance(&self, points: FixedPointAmount) -> Result<i128> {
        require!(!points.is_negative(), StarLaunchError::InvalidAmount);
        Ok(self.balance().checked_add(points)?.mantissa())
    }
}

/// Mint points for `recipient` from a native deposit and pay the referrer bonus.
///
/// Both balances are computed before either is written, so a failure leaves both accounts as they
/// were.
pub fn apply_mint(
    recipient: &mut StarAccount,
    referrer: Option<&mut StarAccount>,
    native_amount: FixedPointAmount,
) -> Result<MintOutcome> {
    let referrer = match recipient.referrer {
        Some(expected) => {
            let account = referrer.ok_or(StarLaunchError::MissingReferrerAccount)?;
            require_keys_eq!(account.owner, expected, StarLaunchError::ReferrerMismatch);
            Some(account)
        }
        None => None,
    };

    let outcome = calculate_mint(native_amount, referrer.is_some())?;

    let recipient_balance = recipient.credited_balance(outcome.points)?;
    let recipient_minted = recipient
        .total_minted
        .checked_add(outcome.points.mantissa())
        .ok_or(StarLaunchError::ArithmeticOverflow)?;

    let referrer_update = match &referrer {
        Some(account) => Some((
            account.credited_balance(outcome.referral_bonus)?,
            account
                .total_referral_rewards
                .checked_add(outcome.referral_bonus.mantissa())
                .ok_or(StarLaunchError::ArithmeticOverflow)?,
        )),
        None => None,
    };

    recipient.balance = recipient_balance;
    recipient.total_minted = recipient_minted;

    if let (Some(account), Some((balance, rewards))) = (referrer, referrer_update) {
        account.balance = balance;
        account.total_referral_rewards = rewards;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(owner: Pubkey) -> StarAccount {
        let mut account = StarAccount::default();
        account.initialize(owner, 255);
        account
    }

    fn units(n: i128) -> FixedPointAmount {
        FixedPointAmount::from_units(n).unwrap()
    }

    #[test]
    fn test_mint_credits_recipient_and_referrer() {
        let referrer_key = Pubkey::new_unique();
        let mut recipient = account(Pubkey::new_unique());
        let mut referrer = account(referrer_key);
        recipient.set_referrer(referrer_key).unwrap();

        let outcome = apply_mint(&mut recipient, Some(&mut referrer), units(100)).unwrap();

        assert_eq!(outcome.points, units(1_000));
        assert_eq!(recipient.balance(), units(1_000));
        assert_eq!(recipient.total_minted, units(1_000).mantissa());
        assert_eq!(referrer.balance(), units(100));
        assert_eq!(referrer.total_referral_rewards, units(100).mantissa());
    }

    #[test]
    fn test_mint_requires_referrer_account() {
        let mut recipient = account(Pubkey::new_unique());
        recipient.set_referrer(Pubkey::new_unique()).unwrap();

        assert_eq!(
            apply_mint(&mut recipient, None, units(1)).unwrap_err(),
            StarLaunchError::MissingReferrerAccount.into()
        );
        assert_eq!(recipient.balance, 0);
    }

    #[test]
    fn test_mint_rejects_wrong_referrer_account() {
        let mut recipient = account(Pubkey::new_unique());
        let mut impostor = account(Pubkey::new_unique());
        recipient.set_referrer(Pubkey::new_unique()).unwrap();

        assert_eq!(
            apply_mint(&mut recipient, Some(&mut impostor), units(1)).unwrap_err(),
            StarLaunchError::ReferrerMismatch.into()
        );
        assert_eq!(recipient.balance, 0);
        assert_eq!(impostor.balance, 0);
    }

    #[test]
    fn test_failed_mint_changes_nothing() {
        let referrer_key = Pubkey::new_unique();
        let mut recipient = account(Pubkey::new_unique());
        let mut referrer = account(referrer_key);
        recipient.set_referrer(referrer_key).unwrap();
        referrer.balance = i128::MAX;

        assert_eq!(
            apply_mint(&mut recipient, Some(&mut referrer), units(100)).unwrap_err(),
            StarLaunchError::ArithmeticOverflow.into()
        );
        assert_eq!(recipient.balance, 0);
        assert_eq!(referrer.balance, i128::MAX);

        assert_eq!(
            apply_mint(&mut recipient, Some(&mut referrer), FixedPointAmount::ZERO).unwrap_err(),
            StarLaunchError::InvalidAmount.into()
        );
    }

    #[test]
    fn test_referrer_set_once() {
        let owner = Pubkey::new_unique();
        let first = Pubkey::new_unique();
        let mut star = account(owner);

        assert!(star.set_referrer(first).unwrap());
        assert!(!star.set_referrer(first).unwrap());
        assert_eq!(
            star.set_referrer(Pubkey::new_unique()).unwrap_err(),
            StarLaunchError::ReferrerAlreadySet.into()
        );
        assert_eq!(
            account(owner).set_referrer(owner).unwrap_err(),
            StarLaunchError::InvalidReferrer.into()
        );
        assert_eq!(star.referrer, Some(first));
    }

    #[test]
    fn test_spend_and_restore() {
        let mut star = account(Pubkey::new_unique());
        star.credit(units(50)).unwrap();

        assert_eq!(
            star.spend(units(51)).unwrap_err(),
            StarLaunchError::InsufficientBalance.into()
        );
        assert_eq!(star.balance(), units(50));

        star.spend(units(20)).unwrap();
        assert_eq!(star.balance(), units(30));
        assert_eq!(star.total_spent, units(20).mantissa());

        star.restore_spent(units(20)).unwrap();
        assert_eq!(star.balance(), units(50));
        assert_eq!(star.total_spent, 0);
    }
}
