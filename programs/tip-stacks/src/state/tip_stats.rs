use anchor_lang::prelude::*;
use crate::constants::REWARD_RATE;

/// Per-account tipping statistics
///
/// Created lazily the first time an account sends or receives a tip, or
/// when the admin sets its reward rate. An account that was never touched
/// reads as `TipStats::default()`. No instruction ever decreases a counter.
///
/// PDA Seeds: ["tip_stats_v1", account]
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TipStats {
    /// The account these statistics belong to
    pub account: Pubkey,

    /// Gross amount tipped by this account (pre-fee)
    pub total_sent: u64,

    /// Net amount received by this account (post-fee)
    pub total_received: u64,

    /// Loyalty points accrued from qualifying tips
    pub reward_points: u64,

    /// Number of tips sent
    pub tips_sent: u64,

    /// Number of tips received
    pub tips_received: u64,

    /// Points per qualifying tip set by the admin; None uses REWARD_RATE
    pub reward_rate_override: Option<u64>,

    /// PDA bump seed
    pub bump: u8,
}

/// Read-only projection returned by `get_user_tip_stats`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TipStatsView {
    pub total_sent: u64,
    pub total_received: u64,
    pub reward_points: u64,
}

impl TipStats {
    /// Account size calculation:
    /// - account: 32 bytes (Pubkey)
    /// - 5 u64: 8 * 5 = 40 bytes (total_sent, total_received, reward_points,
    ///   tips_sent, tips_received)
    /// - reward_rate_override: 9 bytes (Option<u64>)
    /// - bump: 1 byte
    /// Total: 82 bytes
    pub const LEN: usize = 32 + 8 * 5 + 9 + 1;

    pub fn new(account: Pubkey, bump: u8) -> Self {
        Self {
            account,
            bump,
            ..Self::default()
        }
    }

    /// Binds a freshly created account to its owner. No-op once bound.
    pub fn bind(&mut self, account: Pubkey, bump: u8) {
        if self.account == Pubkey::default() {
            self.account = account;
            self.bump = bump;
        }
    }

    /// Points this account earns for one qualifying tip
    pub fn reward_rate(&self) -> u64 {
        self.reward_rate_override.unwrap_or(REWARD_RATE)
    }

    pub fn record_sent(&mut self, amount: u64, reward_points: u64) {
        self.total_sent = self.total_sent.saturating_add(amount);
        self.reward_points = self.reward_points.saturating_add(reward_points);
        self.tips_sent = self.tips_sent.saturating_add(1);
    }

    pub fn record_received(&mut self, net_amount: u64) {
        self.total_received = self.total_received.saturating_add(net_amount);
        self.tips_received = self.tips_received.saturating_add(1);
    }

    /// Replaces the per-user reward rate, returning the previous override.
    /// Points already accrued are left untouched.
    pub fn set_reward_rate(&mut self, rate: u64) -> Option<u64> {
        self.reward_rate_override.replace(rate)
    }

    pub fn view(&self) -> TipStatsView {
        TipStatsView {
            total_sent: self.total_sent,
            total_received: self.total_received,
            reward_points: self.reward_points,
        }
    }
}
