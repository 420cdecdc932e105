use crate::events::Deposited;
use crate::states::{DepositRecord, EthPool};
use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Deposit lamports into the pool
///
/// Flow:
/// 1. Reject if the depositor already holds an active record
/// 2. Snapshot reward_per_share into the record
/// 3. Update total_deposited and held_balance
/// 4. Transfer the deposit to the Pool PDA
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [EthPool::PREFIX_SEED],
        bump = eth_pool.bump
    )]
    pub eth_pool: Account<'info, EthPool>,

    /// Created on first deposit, reopened after a withdraw closed it
    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + DepositRecord::INIT_SPACE,
        seeds = [DepositRecord::PREFIX_SEED, depositor.key().as_ref()],
        bump
    )]
    pub deposit_record: Account<'info, DepositRecord>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    msg!("[DEPOSIT] Starting deposit instruction");
    msg!("[DEPOSIT] Depositor: {}", ctx.accounts.depositor.key());
    msg!("[DEPOSIT] Amount: {} lamports", amount);

    let depositor = ctx.accounts.depositor.key();
    let deposited_at = Clock::get()?.unix_timestamp;

    let eth_pool = &mut ctx.accounts.eth_pool;
    let deposit_record = &mut ctx.accounts.deposit_record;

    msg!(
        "[DEPOSIT] Pool loaded - reward_per_share: {}, total_deposited: {}",
        eth_pool.reward_per_share,
        eth_pool.total_deposited
    );

    eth_pool.open_deposit(
        deposit_record,
        depositor,
        amount,
        deposited_at,
        ctx.bumps.deposit_record,
    )?;

    let deposit_cpi = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.depositor.to_account_info(),
            to: ctx.accounts.eth_pool.to_account_info(),
        },
    );
    system_program::transfer(deposit_cpi, amount)?;

    let eth_pool = &ctx.accounts.eth_pool;
    let deposit_record = &ctx.accounts.deposit_record;

    msg!(
        "[DEPOSIT] Share index: {}, total_deposited: {}",
        deposit_record.share_index_at_deposit,
        eth_pool.total_deposited
    );

    emit!(Deposited {
        depositor,
        amount,
        share_index: deposit_record.share_index_at_deposit,
        total_deposited: eth_pool.total_deposited,
        deposited_at,
    });

    Ok(())
}
