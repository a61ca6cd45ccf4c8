use anchor_lang::prelude::*;

// =============================================================================
// CONFIGURATION EVENTS
// =============================================================================

/// Event emitted when the platform configuration is created
#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub quote_mint: Pubkey,
    pub min_target_amount: i128,
    pub min_funding_duration: u64,
    pub max_funding_duration: u64,
}

/// Event emitted when the admin withdraws STAR point deposits from the treasury
#[event]
pub struct TreasuryWithdrawn {
    pub admin: Pubkey,
    pub destination: Pubkey,
    pub quote_mint: Pubkey,
    pub amount: i128,
    pub remaining: u64,
    pub timestamp: u64,
}

// =============================================================================
// STAR POINTS EVENTS
// =============================================================================

/// Event emitted when an account registers its referrer
#[event]
pub struct ReferrerRegistered {
    pub account: Pubkey,
    pub referrer: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when STAR points are minted from a native deposit
#[event]
pub struct StarPointsMinted {
    /// Account paying the deposit
    pub depositor: Pubkey,
    /// Account credited with the points
    pub recipient: Pubkey,
    /// Native amount deposited
    pub native_amount: i128,
    /// Points credited to the recipient
    pub points_minted: i128,
    /// Recipient balance after the mint
    pub new_balance: i128,
    /// Referrer credited with the bonus, if any
    pub referrer: Option<Pubkey>,
    /// Bonus points credited to the referrer
    pub referral_bonus: i128,
    pub timestamp: i64,
}

// =============================================================================
// PROJECT LIFECYCLE EVENTS
// =============================================================================

/// Event emitted when a new project is created
#[event]
pub struct ProjectCreated {
    pub project: Pubkey,
    pub project_id: u64,
    pub creator: Pubkey,
    pub token_mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub total_supply: i128,
    pub airdrop_allocation: i128,
    pub team_allocation: i128,
    pub liquidity_allocation: i128,
    pub target_amount: i128,
    pub start_time: u64,
    pub end_time: u64,
}

/// Event emitted when a participant contributes to a project
#[event]
pub struct ParticipationRecorded {
    pub project: Pubkey,
    pub project_id: u64,
    pub participant: Pubkey,
    /// Record index within the participant's position
    pub index: u32,
    pub native_amount: i128,
    pub points_amount: i128,
    /// Native plus points-equivalent value
    pub value: i128,
    pub creator_points_share: i128,
    pub points_burned: i128,
    /// Participant's cumulative value
    pub total_contribution: i128,
    /// Project's raised amount after this contribution
    pub project_raised_total: i128,
    pub is_first_participation: bool,
    pub participants_count: u32,
    pub timestamp: u64,
}

/// Event emitted when project status changes
#[event]
pub struct ProjectStatusChanged {
    pub project: Pubkey,
    pub previous_status: u8, // ProjectStatus as u8
    pub new_status: u8,      // ProjectStatus as u8
    pub raised_amount: i128,
    pub target_amount: i128,
    pub timestamp: u64,
}

/// Event emitted when the funding window of a project is closed
#[event]
pub struct ProjectFinalized {
    pub project: Pubkey,
    pub project_id: u64,
    pub creator: Pubkey,
    /// Whether the target was reached
    pub success: bool,
    pub raised_amount: i128,
    pub target_amount: i128,
    pub native_raised: i128,
    pub points_spent: i128,
    pub points_burned: i128,
    pub participants_count: u32,
    pub timestamp: u64,
}

// =============================================================================
// CLAIM EVENTS
// =============================================================================

/// Event emitted when the creator claims vested team tokens
#[event]
pub struct CreatorTokensClaimed {
    pub project: Pubkey,
    pub creator: Pubkey,
    pub token_mint: Pubkey,
    pub claimed_amount: i128,
    pub total_claimed: i128,
    pub total_allocation: i128,
    pub remaining_claimable: i128,
    pub fully_unlocked: bool,
    pub timestamp: u64,
}

/// Event emitted when the creator collects the proceeds of a finalized project
#[event]
pub struct CreatorProceedsClaimed {
    pub project: Pubkey,
    pub creator: Pubkey,
    pub native_amount: i128,
    pub liquidity_tokens: i128,
    pub points_credited: i128,
    pub timestamp: u64,
}

/// Event emitted when a participant claims airdrop tokens
#[event]
pub struct AirdropClaimed {
    pub project: Pubkey,
    pub participant: Pubkey,
    pub token_mint: Pubkey,
    pub tokens_claimed: i128,
    pub participant_contribution: i128,
    pub project_total_raised: i128,
    pub timestamp: u64,
}

/// Event emitted when a participant of a failed project is refunded
#[event]
pub struct RefundClaimed {
    pub project: Pubkey,
    pub participant: Pubkey,
    pub native_refunded: i128,
    pub points_restored: i128,
    pub timestamp: u64,
}

/// Event emitted when the creator of a failed project takes the token deposit back
#[event]
pub struct ProjectTokensReclaimed {
    pub project: Pubkey,
    pub creator: Pubkey,
    pub token_mint: Pubkey,
    pub amount: u64,
    pub timestamp: u64,
}
