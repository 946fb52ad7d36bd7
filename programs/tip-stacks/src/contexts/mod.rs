use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

// ACCOUNTS - Instruction account validation structs

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(init, payer = admin, space = 8 + PlatformConfig::LEN, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, PlatformConfig>,
    #[account(init, payer = admin, space = 8 + PlatformTreasury::LEN, seeds = [TREASURY_SEED], bump)]
    pub treasury: Account<'info, PlatformTreasury>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Tip - Send value to another account, net of the platform fee
///
/// recipient_stats aliases sender_stats when the recipient is the sender.
/// The handler creates it only after the tip has been validated.
#[derive(Accounts)]
pub struct Tip<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, PlatformConfig>,
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = config.treasury_bump,
        address = config.treasury
    )]
    pub treasury: Account<'info, PlatformTreasury>,
    #[account(
        init_if_needed,
        payer = sender,
        space = 8 + TipStats::LEN,
        seeds = [TIP_STATS_SEED, sender.key().as_ref()],
        bump
    )]
    pub sender_stats: Account<'info, TipStats>,
    /// CHECK: Recipient stats PDA - created lazily by the handler
    #[account(mut, seeds = [TIP_STATS_SEED, recipient.key().as_ref()], bump)]
    pub recipient_stats: UncheckedAccount<'info>,
    /// CHECK: Any account may be tipped; self and platform accounts are rejected in the handler
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,
    #[account(mut)]
    pub sender: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// SetUserIdentity - Register or change the caller's username
///
/// Both username records are PDAs derived from a hash of the normalized
/// name, so their addresses are verified in the handler after the
/// authorization and length checks.
#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct SetUserIdentity<'info> {
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + UserIdentity::LEN,
        seeds = [IDENTITY_SEED, account.as_ref()],
        bump
    )]
    pub identity: Account<'info, UserIdentity>,
    /// CHECK: Record for the requested name - address verified in handler
    #[account(mut)]
    pub username_record: UncheckedAccount<'info>,
    /// CHECK: Record for the name being replaced - required only when renaming
    #[account(mut)]
    pub previous_username_record: Option<UncheckedAccount<'info>>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct UpdateUserRewardPoints<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, PlatformConfig>,
    /// CHECK: Target stats PDA - created lazily by the handler
    #[account(mut, seeds = [TIP_STATS_SEED, account.as_ref()], bump)]
    pub user_stats: UncheckedAccount<'info>,
    /// Checked against config.admin by the handler
    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct WithdrawPlatformFees<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, PlatformConfig>,
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = config.treasury_bump,
        address = config.treasury
    )]
    pub treasury: Account<'info, PlatformTreasury>,
    /// Checked against config.admin by the handler
    #[account(mut)]
    pub admin: Signer<'info>,
}

// READ-ONLY QUERIES - None of these mutate state

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct ReadTipStats<'info> {
    /// CHECK: May not exist yet - read through load_or_default
    #[account(seeds = [TIP_STATS_SEED, account.as_ref()], bump)]
    pub tip_stats: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct ReadUserIdentity<'info> {
    /// CHECK: May not exist yet - read through load_or_default
    #[account(seeds = [IDENTITY_SEED, account.as_ref()], bump)]
    pub identity: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ResolveUsername<'info> {
    /// CHECK: Address verified in handler against the hashed name
    pub username_record: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ReadPlatformStats<'info> {
    #[account(seeds = [TREASURY_SEED], bump = treasury.bump)]
    pub treasury: Account<'info, PlatformTreasury>,
}
