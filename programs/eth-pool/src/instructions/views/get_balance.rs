use crate::states::EthPool;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct GetBalance<'info> {
    #[account(
        seeds = [EthPool::PREFIX_SEED],
        bump = eth_pool.bump
    )]
    pub eth_pool: Account<'info, EthPool>,
}

/// Lamports held for depositors: deposits + rewards - payouts.
/// This is the tracked ledger balance, not the PDA's lamports: rent exemption
/// and lamports sent straight to the Pool PDA outside deposit/deposit_rewards
/// are not counted. Without such transfers it equals lamports - rent exemption.
pub fn get_balance(ctx: Context<GetBalance>) -> Result<u64> {
    Ok(ctx.accounts.eth_pool.held_balance)
}
