use anchor_lang::prelude::*;

/// Fee treasury and platform-wide tip aggregates
///
/// Receives the platform fee of every tip. Lamports above the rent-exempt
/// floor can be withdrawn by the admin. All counters only grow.
///
/// PDA Seeds: ["treasury_v1"]
#[account]
#[derive(Debug, Default)]
pub struct PlatformTreasury {
    /// PDA bump seed
    pub bump: u8,

    /// Number of successful tips (lifetime)
    pub total_tips: u64,

    /// Gross amount tipped, before fees (lifetime)
    pub total_volume: u64,

    /// Platform fees retained (lifetime)
    pub total_fees_collected: u64,

    /// Fees withdrawn by the admin (lifetime)
    pub total_fees_withdrawn: u64,
}

/// Read-only projection returned by `get_platform_stats`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformStatsView {
    pub total_tips: u64,
    pub total_volume: u64,
    pub total_fees_collected: u64,
    pub total_fees_withdrawn: u64,
}

impl PlatformTreasury {
    /// Account size calculation:
    /// - bump: 1 byte
    /// - 4 u64: 8 * 4 = 32 bytes
    /// Total: 33 bytes
    pub const LEN: usize = 1 + 8 * 4;

    pub fn record_tip(&mut self, amount: u64, platform_fee: u64) {
        self.total_tips = self.total_tips.saturating_add(1);
        self.total_volume = self.total_volume.saturating_add(amount);
        self.total_fees_collected = self.total_fees_collected.saturating_add(platform_fee);
    }

    pub fn record_withdrawal(&mut self, amount: u64) {
        self.total_fees_withdrawn = self.total_fees_withdrawn.saturating_add(amount);
    }

    pub fn view(&self) -> PlatformStatsView {
        PlatformStatsView {
            total_tips: self.total_tips,
            total_volume: self.total_volume,
            total_fees_collected: self.total_fees_collected,
            total_fees_withdrawn: self.total_fees_withdrawn,
        }
    }
}
