use anchor_lang::prelude::*;

/// Platform access control
///
/// Written once by `initialize` and never modified: the admin cannot be
/// rotated. Every gated instruction reads it.
///
/// PDA Seeds: ["config_v1"]
#[account]
#[derive(Debug, Default)]
pub struct PlatformConfig {
    /// Privileged administrator, fixed at initialization
    pub admin: Pubkey,

    /// Treasury PDA that retains platform fees
    pub treasury: Pubkey,

    /// Address of this config account
    pub address: Pubkey,

    /// PDA bump for this config
    pub bump: u8,

    /// PDA bump for the treasury
    pub treasury_bump: u8,
}

impl PlatformConfig {
    /// Account size calculation:
    /// - 3 Pubkeys: 32 * 3 = 96 bytes (admin, treasury, address)
    /// - 2 u8: 2 bytes (bump, treasury_bump)
    /// Total: 98 bytes
    pub const LEN: usize = 32 * 3 + 1 * 2;

    pub fn is_admin(&self, account: &Pubkey) -> bool {
        *account == self.admin
    }

    /// Accounts that belong to the platform itself and may not receive tips
    pub fn is_platform_account(&self, account: &Pubkey) -> bool {
        self.is_admin(account) || *account == self.treasury || *account == self.address
    }
}
