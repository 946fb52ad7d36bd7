// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// Platform configuration PDA seed (admin + treasury, written once)
pub const CONFIG_SEED: &[u8] = b"config_v1";

/// Platform treasury PDA seed (retains platform fees)
pub const TREASURY_SEED: &[u8] = b"treasury_v1";

/// Per-account tip statistics PDA seed: ["tip_stats_v1", account]
pub const TIP_STATS_SEED: &[u8] = b"tip_stats_v1";

/// Per-account identity PDA seed: ["identity_v1", account]
pub const IDENTITY_SEED: &[u8] = b"identity_v1";

/// Reverse username record PDA seed: ["username_v1", sha256(normalized name)]
pub const USERNAME_SEED: &[u8] = b"username_v1";

// ══════════════════════════════════════════════════════════════════════════════
// SETTLEMENT ASSET
// ══════════════════════════════════════════════════════════════════════════════

/// The only asset tag `tip` accepts
pub const SETTLEMENT_TOKEN_TAG: &str = "SOL";

/// Lamports per tip unit; limits below are whole tip units (0.001 SOL each)
pub const UNITS_PER_TOKEN: u64 = 1_000_000;

// ══════════════════════════════════════════════════════════════════════════════
// TIP LIMITS & FEES
// ══════════════════════════════════════════════════════════════════════════════

/// Largest accepted tip: 1000 tip units (1 SOL)
pub const MAX_TIP_AMOUNT: u64 = 1_000 * UNITS_PER_TOKEN;

/// Platform fee retained on every tip, in percent (floor division)
pub const PLATFORM_FEE_PERCENT: u64 = 5;

/// Denominator for PLATFORM_FEE_PERCENT
pub const PERCENT_DENOMINATOR: u64 = 100;

// ══════════════════════════════════════════════════════════════════════════════
// REWARDS
// ══════════════════════════════════════════════════════════════════════════════

/// Points earned per qualifying tip when no per-user rate is set
pub const REWARD_RATE: u64 = 10;

/// Minimum tip that earns points: 1 tip unit (0.001 SOL)
pub const REWARD_THRESHOLD: u64 = UNITS_PER_TOKEN;

// ══════════════════════════════════════════════════════════════════════════════
// IDENTITY
// ══════════════════════════════════════════════════════════════════════════════

/// Shortest username, in characters
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Longest username, in characters
pub const MAX_USERNAME_LENGTH: usize = 20;

/// Storage reserved for a username: 4 bytes per char covers any UTF-8 input
pub const MAX_USERNAME_BYTES: usize = MAX_USERNAME_LENGTH * 4;
