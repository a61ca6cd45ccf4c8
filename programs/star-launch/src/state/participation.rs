use anchor_lang::prelude::*;

use crate::errors::StarLaunchError;
use crate::state::{Project, StarAccount};
use crate::utils::{points_to_native, split_spent_points, FixedPointAmount, PointsSplit};

/// Running totals of one participant in one project
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ParticipantPosition {
    /// Participant address
    pub participant: Pubkey,

    /// Associated project
    pub project: Pubkey,

    /// bump seed
    pub bump: u8,

    // ===== Contribution Information =====
    /// Native currency contributed
    pub contributed_native: i128,

    /// Points spent
    pub points_spent: i128,

    /// Native plus points-equivalent value, bounded by max_contribution
    pub contributed_value: i128,

    /// Number of participation records, also the next record index
    pub participation_count: u32,

    // ===== Claim Status =====
    pub airdrop_claimed: bool,
    pub refunded: bool,

    // ===== Time Records =====
    pub participated_at: u64,
    pub last_updated: u64,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl ParticipantPosition {
    pub const SIZE: usize = 8 + // discriminator
        32 + // participant
        32 + // project
        1 + // bump
        16 + // contributed_native
        16 + // points_spent
        16 + // contributed_value
        4 + // participation_count
        1 + // airdrop_claimed
        1 + // refunded
        8 + // participated_at
        8 + // last_updated
        8 * 4; // reserved

    pub fn contributed_value(&self) -> FixedPointAmount {
        FixedPointAmount::from_mantissa(self.contributed_value)
    }

    /// Mark the airdrop claimed and return the token amount owed
    pub fn claim_airdrop(
        &mut self,
        project: &mut Project,
        current_time: u64,
    ) -> Result<FixedPointAmount> {
        require!(project.is_finalized(), StarLaunchError::InvalidStatus);
        require!(!self.airdrop_claimed, StarLaunchError::AlreadyClaimed);
        require!(self.contributed_value > 0, StarLaunchError::NothingToClaim);

        let share = project.record_airdrop_claim(self.contributed_value())?;

        self.airdrop_claimed = true;
        self.last_updated = current_time;
        Ok(share)
    }

    /// Mark the position refunded and return (native, points) to give back
    pub fn refund(
        &mut self,
        project: &Project,
        current_time: u64,
    ) -> Result<(FixedPointAmount, FixedPointAmount)> {
        require!(project.is_failed(), StarLaunchError::InvalidStatus);
        require!(!self.refunded, StarLaunchError::AlreadyClaimed);
        require!(self.contributed_value > 0, StarLaunchError::NothingToClaim);

        self.refunded = true;
        self.last_updated = current_time;
        Ok((
            FixedPointAmount::from_mantissa(self.contributed_native),
            FixedPointAmount::from_mantissa(self.points_spent),
        ))
    }
}

/// One settled participation, written once and never modified
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Participation {
    pub project_id: u64,
    pub participant: Pubkey,

    /// Index within the participant's position
    pub index: u32,

    pub native_amount: i128,
    pub points_amount: i128,

    /// native_amount + points_amount at the minting rate
    pub value: i128,

    pub creator_points_share: i128,
    pub points_burned: i128,

    pub timestamp: u64,

    /// bump seed
    pub bump: u8,
}

impl Participation {
    pub const SIZE: usize = 8 + // discriminator
        8 + // project_id
        32 + // participant
        4 + // index
        16 + // native_amount
        16 + // points_amount
        16 + // value
        16 + // creator_points_share
        16 + // points_burned
        8 + // timestamp
        1; // bump
}

/// A validated contribution, ready to be settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionQuote {
    pub native: FixedPointAmount,
    pub points: FixedPointAmount,
    pub value: FixedPointAmount,
    pub split: PointsSplit,
}

/// Validate a participation without touching any state
pub fn quote_participation(
    project: &Project,
    position: &ParticipantPosition,
    star_account: &StarAccount,
    native_amount: i128,
    points_amount: i128,
    current_time: u64,
) -> Result<ContributionQuote> {
    require!(
        project.is_funding()
            && current_time >= project.timing.start_time
            && current_time <= project.timing.end_time,
        StarLaunchError::ProjectNotFunding
    );

    require!(
        native_amount >= 0 && points_amount >= 0 && (native_amount > 0 || points_amount > 0),
        StarLaunchError::InvalidAmount
    );

    let native = FixedPointAmount::from_mantissa(native_amount);
    let points = FixedPointAmount::from_mantissa(points_amount);
    let value = native.checked_add(points_to_native(points)?)?;

    let min = FixedPointAmount::from_mantissa(project.tokenomics.min_contribution);
    let max = FixedPointAmount::from_mantissa(project.tokenomics.max_contribution);
    let running_total = position.contributed_value().checked_add(value)?;

    require!(
        value >= min && value <= max && running_total <= max,
        StarLaunchError::ContributionOutOfBounds
    );

    star_account.ensure_balance(points)?;

    Ok(ContributionQuote {
        native,
        points,
        value,
        split: split_spent_points(points)?,
    })
}

/// Apply a quoted participation: debit points, grow project and position totals, fill the record.
///
/// Returns whether this was the participant's first participation in the project.
pub fn settle_participation(
    project: &mut Project,
    position: &mut ParticipantPosition,
    star_account: &mut StarAccount,
    record: &mut Participation,
    quote: &ContributionQuote,
    current_time: u64,
) -> Result<bool> {
    let add = |total: i128, amount: FixedPointAmount| -> Result<i128> {
        total
            .checked_add(amount.mantissa())
            .ok_or_else(|| error!(StarLaunchError::ArithmeticOverflow))
    };

    let is_first_participation = position.participation_count == 0;

    let raised_amount = add(project.raised_amount, quote.value)?;
    let native_raised = add(project.native_raised, quote.native)?;
    let project_points_spent = add(project.points_spent, quote.points)?;
    let points_burned = add(project.points_burned, quote.split.burned)?;
    let creator_points_share = add(project.creator_points_share, quote.split.creator_share)?;
    let participants_count = if is_first_participation {
        project
            .participants_count
            .checked_add(1)
            .ok_or(StarLaunchError::ArithmeticOverflow)?
    } else {
        project.participants_count
    };

    let contributed_native = add(position.contributed_native, quote.native)?;
    let position_points_spent = add(position.points_spent, quote.points)?;
    let contributed_value = add(position.contributed_value, quote.value)?;
    let index = position.participation_count;
    let participation_count = index
        .checked_add(1)
        .ok_or(StarLaunchError::ArithmeticOverflow)?;

    if quote.points.is_positive() {
        star_account.spend(quote.points)?;
    }

    project.raised_amount = raised_amount;
    project.native_raised = native_raised;
    project.points_spent = project_points_spent;
    project.points_burned = points_burned;
    project.creator_points_share = creator_points_share;
    project.participants_count = participants_count;

    position.contributed_native = contributed_native;
    position.points_spent = position_points_spent;
    position.contributed_value = contributed_value;
    position.participation_count = participation_count;
    position.last_updated = current_time;
    if is_first_participation {
        position.participated_at = current_time;
    }

    record.project_id = project.id;
    record.participant = position.participant;
    record.index = index;
    record.native_amount = quote.native.mantissa();
    record.points_amount = quote.points.mantissa();
    record.value = quote.value.mantissa();
    record.creator_points_share = quote.split.creator_share.mantissa();
    record.points_burned = quote.split.burned.mantissa();
    record.timestamp = current_time;

    Ok(is_first_participation)
}
