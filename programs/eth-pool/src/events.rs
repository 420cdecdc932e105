use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub owner: Pubkey,
}

#[event]
pub struct Deposited {
    pub depositor: Pubkey,
    pub amount: u64,
    pub share_index: u128,
    pub total_deposited: u64,
    pub deposited_at: i64,
}

#[event]
pub struct RewardsDeposited {
    pub amount: u64,
    pub reward_per_share: u128,
    pub total_deposited: u64,
    pub deposited_at: i64,
}

/// `amount` is the full payout: principal plus accrued reward.
#[event]
pub struct Withdrawn {
    pub depositor: Pubkey,
    pub amount: u64,
    pub principal: u64,
    pub reward: u64,
}
