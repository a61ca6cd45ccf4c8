// ===== Seeds =====
pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";
pub const PROJECT_SEED: &[u8] = b"project";
pub const SYMBOL_GUARD_SEED: &[u8] = b"symbol_guard";
pub const STAR_ACCOUNT_SEED: &[u8] = b"star_account";
pub const POSITION_SEED: &[u8] = b"position";
pub const PARTICIPATION_SEED: &[u8] = b"participation";
pub const VAULT_AUTHORITY: &[u8] = b"vault_authority";
pub const TOKEN_VAULT: &[u8] = b"token_vault";
pub const NATIVE_VAULT: &[u8] = b"native_vault";
pub const TREASURY_VAULT: &[u8] = b"treasury_vault";

// ===== Fixed Point =====
/// Fractional digits of every amount (the network's native precision)
pub const AMOUNT_DECIMALS: u8 = 7;

/// 10^7, one whole unit
pub const AMOUNT_SCALE: i128 = 10_000_000;

// ===== STAR Points =====
/// Points minted per native unit deposited (1:10)
pub const POINTS_PER_NATIVE: i128 = 10;

/// Referrer bonus: 10% of the points minted by the referee
pub const REFERRAL_BONUS_PERCENT: u8 = 10;

/// Share of spent points credited to the creator, the rest is burned
pub const CREATOR_POINTS_SHARE_PERCENT: u8 = 50;

// ===== Project Parameters =====
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;

/// Minimum initial liquidity target: 500 native units
pub const DEFAULT_MIN_TARGET_AMOUNT: i128 = 500 * AMOUNT_SCALE;

/// Minimum funding window: 3 days
pub const DEFAULT_MIN_FUNDING_DURATION: u64 = 3 * 24 * 60 * 60;

/// Maximum funding window: 15 days
pub const DEFAULT_MAX_FUNDING_DURATION: u64 = 15 * 24 * 60 * 60;

/// Default per-contribution minimum: 10 native units
pub const DEFAULT_MIN_CONTRIBUTION: i128 = 10 * AMOUNT_SCALE;

/// Default per-participant maximum: 10,000 native units
pub const DEFAULT_MAX_CONTRIBUTION: i128 = 10_000 * AMOUNT_SCALE;

/// Default price per token: 1.0
pub const DEFAULT_PRICE_PER_TOKEN: i128 = AMOUNT_SCALE;

/// Longest team vesting schedule: 10 years
pub const MAX_VESTING_DURATION: u64 = 10 * 365 * 24 * 60 * 60;
