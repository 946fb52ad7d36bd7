use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// PLATFORM EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted once when the platform config and treasury are created
#[event]
pub struct PlatformInitialized {
    pub admin: Pubkey,
    pub config: Pubkey,
    pub treasury: Pubkey,
}

/// Emitted when the admin withdraws retained fees
#[event]
pub struct PlatformFeesWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
}

// ══════════════════════════════════════════════════════════════════════════════
// TIP EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted for every successful tip
#[event]
pub struct TipSent {
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub platform_fee: u64,
    pub net_amount: u64,
    pub reward_points: u64,
}

/// Emitted when the admin sets a per-user reward rate
#[event]
pub struct UserRewardRateUpdated {
    pub account: Pubkey,
    pub previous_rate: Option<u64>,
    pub new_rate: u64,
}

// ══════════════════════════════════════════════════════════════════════════════
// IDENTITY EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when an account registers or changes its username
#[event]
pub struct IdentityRegistered {
    pub account: Pubkey,
    pub username: String,
    pub released_username: Option<String>,
}
