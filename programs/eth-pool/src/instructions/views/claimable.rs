use crate::states::{DepositRecord, EthPool};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Claimable<'info> {
    #[account(
        seeds = [EthPool::PREFIX_SEED],
        bump = eth_pool.bump
    )]
    pub eth_pool: Account<'info, EthPool>,

    /// CHECK: Deposit record PDA, may not exist
    #[account(
        seeds = [DepositRecord::PREFIX_SEED, depositor.key().as_ref()],
        bump
    )]
    pub deposit_record: UncheckedAccount<'info>,

    /// CHECK: Only used to derive the record address
    pub depositor: UncheckedAccount<'info>,
}

/// Payout the depositor would receive if they withdrew now
pub fn claimable(ctx: Context<Claimable>) -> Result<u64> {
    let deposit_record = DepositRecord::load_active(&ctx.accounts.deposit_record.to_account_info())?;
    ctx.accounts.eth_pool.claimable(&deposit_record)
}
