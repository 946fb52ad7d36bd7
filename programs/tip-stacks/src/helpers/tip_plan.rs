use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::helpers::math::{compute_reward_points, split_tip};
use crate::helpers::validation::{validate_tip_amount, validate_token_tag};
use crate::state::{PlatformConfig, PlatformTreasury, TipStats};

/// A fully validated tip, staged before any account is touched
///
/// `build` runs every check in order (token tag, amount, recipient) and
/// computes the fee split and reward. The `apply_*` methods are infallible,
/// so once value has moved the ledger updates cannot partially fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipPlan {
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub platform_fee: u64,
    pub net_amount: u64,
    pub reward_points: u64,
}

impl TipPlan {
    pub fn build(
        config: &PlatformConfig,
        sender: Pubkey,
        recipient: Pubkey,
        amount: u64,
        token_tag: &str,
        reward_rate: u64,
    ) -> Result<Self> {
        validate_token_tag(token_tag)?;
        validate_tip_amount(amount)?;

        require_keys_neq!(recipient, sender, ErrorCode::InvalidRecipient);
        require!(
            !config.is_platform_account(&recipient),
            ErrorCode::InvalidRecipient
        );

        let (platform_fee, net_amount) = split_tip(amount);

        Ok(Self {
            sender,
            recipient,
            amount,
            platform_fee,
            net_amount,
            reward_points: compute_reward_points(amount, reward_rate),
        })
    }

    pub fn apply_to_sender(&self, stats: &mut TipStats) {
        stats.record_sent(self.amount, self.reward_points);
    }

    pub fn apply_to_recipient(&self, stats: &mut TipStats) {
        stats.record_received(self.net_amount);
    }

    pub fn apply_to_treasury(&self, treasury: &mut PlatformTreasury) {
        treasury.record_tip(self.amount, self.platform_fee);
    }
}
