use anchor_lang::prelude::*;
use crate::constants::MAX_USERNAME_BYTES;

/// Forward identity mapping: account -> username
///
/// PDA Seeds: ["identity_v1", account]
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UserIdentity {
    /// Account that owns this identity
    pub account: Pubkey,

    /// Display form of the username, as registered
    pub username: String,

    /// Set on every successful registration
    pub verified: bool,

    /// PDA bump seed
    pub bump: u8,
}

/// Read-only projection returned by `get_user_identity`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityView {
    pub username: String,
    pub verified: bool,
}

impl UserIdentity {
    /// Account size calculation:
    /// - account: 32 bytes (Pubkey)
    /// - username: 4 + MAX_USERNAME_BYTES bytes (String)
    /// - verified: 1 byte
    /// - bump: 1 byte
    /// Total: 118 bytes
    pub const LEN: usize = 32 + 4 + MAX_USERNAME_BYTES + 1 + 1;

    pub fn has_username(&self) -> bool {
        !self.username.is_empty()
    }

    pub fn register(&mut self, account: Pubkey, username: String, bump: u8) {
        self.account = account;
        self.username = username;
        self.verified = true;
        self.bump = bump;
    }

    pub fn view(&self) -> IdentityView {
        IdentityView {
            username: self.username.clone(),
            verified: self.verified,
        }
    }
}
