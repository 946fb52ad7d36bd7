use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::helpers::validation::{normalize_username, username_seed, validate_username};
use crate::state::{UserIdentity, UsernameRecord};

/// Caller may only register its own identity, with a name of valid length
pub fn validate_identity_request(signer: &Pubkey, account: &Pubkey, username: &str) -> Result<()> {
    require_keys_eq!(*account, *signer, ErrorCode::Unauthorized);
    validate_username(username)
}

/// A staged username registration
///
/// Renaming releases the previously held name so it can be claimed again.
/// Re-registering the same name in a different case only updates the
/// display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityChange {
    pub account: Pubkey,
    pub username: String,
    pub released_username: Option<String>,
}

impl IdentityChange {
    pub fn plan(
        account: Pubkey,
        username: &str,
        current: &UserIdentity,
        record: &UsernameRecord,
    ) -> Result<Self> {
        require!(record.is_claimable_by(&account), ErrorCode::UsernameTaken);

        let released_username = if current.has_username()
            && normalize_username(&current.username) != normalize_username(username)
        {
            Some(current.username.clone())
        } else {
            None
        };

        Ok(Self {
            account,
            username: username.to_string(),
            released_username,
        })
    }

    /// Seed of the record that must be released, if any
    pub fn released_seed(&self) -> Option<[u8; 32]> {
        self.released_username.as_deref().map(username_seed)
    }

    pub fn apply(
        &self,
        identity: &mut UserIdentity,
        identity_bump: u8,
        record: &mut UsernameRecord,
        record_bump: u8,
        previous: Option<&mut UsernameRecord>,
    ) {
        if let Some(previous) = previous {
            previous.release_from(&self.account);
        }
        record.claim(self.account, self.username.clone(), record_bump);
        identity.register(self.account, self.username.clone(), identity_bump);
    }
}
