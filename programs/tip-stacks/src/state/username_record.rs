use anchor_lang::prelude::*;
use crate::constants::MAX_USERNAME_BYTES;

/// Reverse identity mapping: normalized username -> account
///
/// At most one record exists per normalized name, so at most one account
/// can own a name. A released record has a default owner and can be
/// claimed again.
///
/// PDA Seeds: ["username_v1", sha256(normalized username)]
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UsernameRecord {
    /// Current owner, Pubkey::default() when unclaimed
    pub owner: Pubkey,

    /// Display form chosen by the owner
    pub username: String,

    /// PDA bump seed
    pub bump: u8,
}

impl UsernameRecord {
    /// Account size calculation:
    /// - owner: 32 bytes (Pubkey)
    /// - username: 4 + MAX_USERNAME_BYTES bytes (String)
    /// - bump: 1 byte
    /// Total: 117 bytes
    pub const LEN: usize = 32 + 4 + MAX_USERNAME_BYTES + 1;

    pub fn is_claimed(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn is_claimable_by(&self, account: &Pubkey) -> bool {
        !self.is_claimed() || self.owner == *account
    }

    pub fn claim(&mut self, owner: Pubkey, username: String, bump: u8) {
        self.owner = owner;
        self.username = username;
        self.bump = bump;
    }

    /// Clears the record if `account` owns it. Returns whether it was released.
    pub fn release_from(&mut self, account: &Pubkey) -> bool {
        if self.owner != *account {
            return false;
        }
        self.owner = Pubkey::default();
        self.username.clear();
        true
    }
}
