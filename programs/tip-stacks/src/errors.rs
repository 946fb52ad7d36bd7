use anchor_lang::prelude::*;

/// Tip Stacks Error Codes
///
/// Numbers are part of the wire contract: the enum starts at offset 1 and
/// each variant's position is its code. `Reserved*` variants hold codes that
/// carry no meaning yet and are never returned.
#[error_code(offset = 1)]
pub enum ErrorCode {
    // 1
    #[msg("Reserved")]
    Reserved1,

    // 2
    #[msg("Tip amount must be between 1 and the maximum tip")]
    InvalidAmount,

    // 3
    #[msg("Reserved")]
    Reserved3,

    // 4
    #[msg("Reserved")]
    Reserved4,

    // 5
    #[msg("Cannot tip yourself or a platform account")]
    InvalidRecipient,

    // 6
    #[msg("Unauthorized")]
    Unauthorized,

    // 7
    #[msg("Reserved")]
    Reserved7,

    // 8
    #[msg("Reserved")]
    Reserved8,

    // 9
    #[msg("Username must be 3-20 characters")]
    InvalidUsernameLength,

    // 10
    #[msg("Username already registered to another account")]
    UsernameTaken,

    // 11
    #[msg("Unsupported token type")]
    InvalidTokenType,

    // 12
    #[msg("Username record does not match the requested name")]
    UsernameRecordMismatch,
}
