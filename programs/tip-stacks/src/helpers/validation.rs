use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::PlatformConfig;

pub fn validate_token_tag(token_tag: &str) -> Result<()> {
    require!(token_tag == SETTLEMENT_TOKEN_TAG, ErrorCode::InvalidTokenType);
    Ok(())
}

pub fn validate_tip_amount(amount: u64) -> Result<()> {
    require!(
        amount > 0 && amount <= MAX_TIP_AMOUNT,
        ErrorCode::InvalidAmount
    );
    Ok(())
}

/// Username length is counted in characters, not bytes
pub fn validate_username(username: &str) -> Result<()> {
    let length = username.chars().count();
    require!(
        (MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length),
        ErrorCode::InvalidUsernameLength
    );
    Ok(())
}

/// Gate for every admin-only instruction
pub fn validate_admin(config: &PlatformConfig, signer: &Pubkey) -> Result<()> {
    require!(config.is_admin(signer), ErrorCode::Unauthorized);
    Ok(())
}

pub fn validate_withdrawal(amount: u64, available: u64) -> Result<()> {
    require!(amount > 0 && amount <= available, ErrorCode::InvalidAmount);
    Ok(())
}

/// Key used for uniqueness: ASCII case folded, everything else verbatim
pub fn normalize_username(username: &str) -> String {
    username.to_ascii_lowercase()
}

/// Fixed-width PDA seed for a username (seeds are capped at 32 bytes)
pub fn username_seed(username: &str) -> [u8; 32] {
    hash(normalize_username(username).as_bytes()).to_bytes()
}

/// Address of the reverse record for `username`
pub fn username_record_address(username: &str, program_id: &Pubkey) -> (Pubkey, u8) {
    let seed = username_seed(username);
    Pubkey::find_program_address(&[USERNAME_SEED, &seed], program_id)
}
