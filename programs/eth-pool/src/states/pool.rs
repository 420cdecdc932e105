use crate::errors::ErrorCode;
use crate::states::{DepositRecord, Payout};
use anchor_lang::prelude::*;

/// Pooled deposits with a reward-per-share accumulator
///
/// Rewards are never fanned out to depositors:
/// - deposit_rewards adds amount * PRECISION / total_deposited to reward_per_share
/// - each DepositRecord snapshots reward_per_share when it is opened
/// - the depositor's share is settled once, at withdraw
///
/// The pool PDA itself holds the pooled lamports.
#[account]
#[derive(InitSpace)]
pub struct EthPool {
    pub owner: Pubkey,                  // Only identity allowed to deposit rewards
    pub reward_per_share: u128,         // Accumulator (scaled by PRECISION), never decreases
    pub total_deposited: u64,           // Sum of active principals (lamports)
    pub held_balance: u64,              // Deposits + rewards - payouts (lamports)
    pub bump: u8,                       // PDA bump
}

impl EthPool {
    pub const PREFIX_SEED: &'static [u8] = b"eth_pool";

    // Precision for reward_per_share (1e18)
    pub const PRECISION: u128 = 1_000_000_000_000_000_000;

    pub fn init(&mut self, owner: Pubkey, bump: u8) {
        self.owner = owner;
        self.reward_per_share = 0;
        self.total_deposited = 0;
        self.held_balance = 0;
        self.bump = bump;
    }

    /// Open a deposit record at the current accumulator value
    /// Nothing is written unless every check passes
    pub fn open_deposit(
        &mut self,
        record: &mut DepositRecord,
        depositor: Pubkey,
        amount: u64,
        deposited_at: i64,
        bump: u8,
    ) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        require!(!record.is_active, ErrorCode::AlreadyDeposited);

        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;
        let held_balance = self
            .held_balance
            .checked_add(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;

        self.total_deposited = total_deposited;
        self.held_balance = held_balance;

        record.depositor = depositor;
        record.principal = amount;
        record.share_index_at_deposit = self.reward_per_share;
        record.is_active = true;
        record.deposited_at = deposited_at;
        record.bump = bump;

        Ok(())
    }

    /// Credit rewards to every active depositor at once
    /// delta = amount * PRECISION / total_deposited, rounded down
    pub fn credit_rewards(&mut self, amount: u64) -> Result<u128> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        require!(self.total_deposited > 0, ErrorCode::NoActiveDeposits);

        let delta = (amount as u128)
            .checked_mul(Self::PRECISION)
            .ok_or(ErrorCode::CalculationOverflow)?
            .checked_div(self.total_deposited as u128)
            .ok_or(ErrorCode::CalculationOverflow)?;

        let reward_per_share = self
            .reward_per_share
            .checked_add(delta)
            .ok_or(ErrorCode::CalculationOverflow)?;
        let held_balance = self
            .held_balance
            .checked_add(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;

        self.reward_per_share = reward_per_share;
        self.held_balance = held_balance;

        Ok(reward_per_share)
    }

    /// Remove a record's principal from the pool, returning what the depositor is owed
    /// The caller closes the record afterwards
    pub fn settle_withdrawal(&mut self, record: &DepositRecord) -> Result<Payout> {
        require!(record.is_active, ErrorCode::NoActiveDeposit);

        let payout = record.payout(self.reward_per_share)?;

        let total_deposited = self
            .total_deposited
            .checked_sub(payout.principal)
            .ok_or(ErrorCode::CalculationOverflow)?;
        let held_balance = self
            .held_balance
            .checked_sub(payout.amount)
            .ok_or(ErrorCode::InsufficientPoolFunds)?;

        self.total_deposited = total_deposited;
        self.held_balance = held_balance;

        Ok(payout)
    }

    /// What an active record would be paid if it withdrew now
    pub fn claimable(&self, record: &DepositRecord) -> Result<u64> {
        require!(record.is_active, ErrorCode::NoActiveDeposit);
        Ok(record.payout(self.reward_per_share)?.amount)
    }
}
