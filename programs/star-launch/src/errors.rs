use anchor_lang::prelude::*;

#[error_code]
pub enum StarLaunchError {
    // ===== Validation Errors =====
    #[msg("Allocations must sum to exactly 100% of the total supply")]
    AllocationImbalance,

    #[msg("Target amount is below the minimum liquidity threshold")]
    BelowMinimumLiquidity,

    #[msg("Invalid vesting schedule")]
    InvalidSchedule,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Percentage must be between 0 and 100")]
    InvalidPercentage,

    #[msg("Invalid decimal string")]
    InvalidDecimal,

    #[msg("Project name is empty or too long")]
    InvalidName,

    #[msg("Project symbol must be 1 to 10 uppercase letters or digits")]
    InvalidSymbol,

    #[msg("End time must be after start time")]
    InvalidTiming,

    #[msg("Funding window is outside the allowed duration")]
    InvalidDuration,

    #[msg("Contribution bounds are invalid")]
    InvalidContributionBounds,

    #[msg("An account cannot refer itself")]
    InvalidReferrer,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    // ===== State Errors =====
    #[msg("Unauthorized: Only admin can perform this action")]
    Unauthorized,

    #[msg("Not the creator of this project")]
    NotCreator,

    #[msg("Platform is currently paused")]
    PlatformPaused,

    #[msg("Project is not accepting participation")]
    ProjectNotFunding,

    #[msg("An active project with this symbol already exists")]
    DuplicateSymbol,

    #[msg("Project not found")]
    ProjectNotFound,

    #[msg("Invalid project status for this operation")]
    InvalidStatus,

    #[msg("Too early to finalize")]
    TooEarlyToFinalize,

    #[msg("Referrer is already set")]
    ReferrerAlreadySet,

    #[msg("Referrer account must be supplied")]
    MissingReferrerAccount,

    #[msg("Supplied referrer account does not match the registered referrer")]
    ReferrerMismatch,

    #[msg("Already claimed")]
    AlreadyClaimed,

    #[msg("Nothing to claim")]
    NothingToClaim,

    // ===== Resource Errors =====
    #[msg("Insufficient STAR points balance")]
    InsufficientBalance,

    #[msg("Contribution is outside the allowed bounds")]
    ContributionOutOfBounds,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    // ===== Arithmetic Errors =====
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("More than 7 fractional digits")]
    PrecisionLoss,

    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("Type conversion failed")]
    TypeCastFailed,
}

/// Coarse classification of [`StarLaunchError`] for callers deciding whether to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed input, rejected before any state change
    Validation,
    /// Operation invalid for the current entity state
    State,
    /// Insufficient balance or contribution headroom
    Resource,
    /// Overflow or precision loss, fatal to the operation only
    Arithmetic,
}

impl StarLaunchError {
    pub fn category(&self) -> ErrorCategory {
        use StarLaunchError::*;

        match self {
            AllocationImbalance | BelowMinimumLiquidity | InvalidSchedule | InvalidAmount
            | InvalidPercentage | InvalidDecimal | InvalidName | InvalidSymbol | InvalidTiming
            | InvalidDuration | InvalidContributionBounds | InvalidReferrer | InvalidTokenMint => {
                ErrorCategory::Validation
            }
            Unauthorized | NotCreator | PlatformPaused | ProjectNotFunding | DuplicateSymbol
            | ProjectNotFound | InvalidStatus | TooEarlyToFinalize | ReferrerAlreadySet
            | MissingReferrerAccount | ReferrerMismatch | AlreadyClaimed | NothingToClaim => {
                ErrorCategory::State
            }
            InsufficientBalance | ContributionOutOfBounds | InsufficientVaultBalance => {
                ErrorCategory::Resource
            }
            ArithmeticOverflow | PrecisionLoss | DivisionByZero | TypeCastFailed => {
                ErrorCategory::Arithmetic
            }
        }
    }

    /// Validation and state errors can be retried with corrected input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Validation | ErrorCategory::State
        )
    }
}
