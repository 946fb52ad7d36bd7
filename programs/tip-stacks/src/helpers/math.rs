use crate::constants::*;

/// Platform fee retained from a tip: floor(amount * 5 / 100)
pub fn platform_fee(amount: u64) -> u64 {
    let fee = (amount as u128) * (PLATFORM_FEE_PERCENT as u128) / (PERCENT_DENOMINATOR as u128);
    fee as u64
}

/// Splits a gross tip into (platform_fee, net_amount)
pub fn split_tip(amount: u64) -> (u64, u64) {
    let fee = platform_fee(amount);
    (fee, amount.saturating_sub(fee))
}

/// Loyalty points for a single tip
///
/// Flat step function: `reward_rate` points once the tip reaches
/// REWARD_THRESHOLD, nothing below it. No proportional scaling.
pub fn compute_reward_points(amount: u64, reward_rate: u64) -> u64 {
    if amount >= REWARD_THRESHOLD {
        reward_rate
    } else {
        0
    }
}

/// Treasury lamports the admin may withdraw without dropping below rent
pub fn withdrawable_fees(treasury_balance: u64, rent_floor: u64) -> u64 {
    treasury_balance.saturating_sub(rent_floor)
}
