use crate::errors::ErrorCode;
use crate::events::Withdrawn;
use crate::states::{DepositRecord, EthPool};
use anchor_lang::prelude::*;

/// Withdraw principal plus accrued rewards
///
/// Flow:
/// 1. Load the depositor's record (missing record -> NoActiveDeposit)
/// 2. payout = principal + principal * (reward_per_share - share_index_at_deposit) / PRECISION
/// 3. Update pool bookkeeping and close the record
/// 4. Transfer payout from Pool PDA -> depositor (via lamport mutation)
///
/// Returns the payout, which is also the `Withdrawn` event amount.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [EthPool::PREFIX_SEED],
        bump = eth_pool.bump
    )]
    pub eth_pool: Account<'info, EthPool>,

    /// CHECK: Deposit record PDA, loaded in the handler so a missing account maps to NoActiveDeposit
    #[account(
        mut,
        seeds = [DepositRecord::PREFIX_SEED, depositor.key().as_ref()],
        bump
    )]
    pub deposit_record: UncheckedAccount<'info>,

    #[account(mut)]
    pub depositor: Signer<'info>,
}

pub fn withdraw(ctx: Context<Withdraw>) -> Result<u64> {
    msg!("[WITHDRAW] Starting withdraw instruction");
    msg!("[WITHDRAW] Depositor: {}", ctx.accounts.depositor.key());

    // Get account infos before mutable borrows
    let pool_info = ctx.accounts.eth_pool.to_account_info();
    let record_info = ctx.accounts.deposit_record.to_account_info();
    let depositor_info = ctx.accounts.depositor.to_account_info();

    let deposit_record = DepositRecord::load_active(&record_info)?;
    require_keys_eq!(
        deposit_record.depositor,
        depositor_info.key(),
        ErrorCode::Unauthorized
    );

    let eth_pool = &mut ctx.accounts.eth_pool;

    msg!(
        "[WITHDRAW] Pool loaded - reward_per_share: {}, total_deposited: {}, held_balance: {}",
        eth_pool.reward_per_share,
        eth_pool.total_deposited,
        eth_pool.held_balance
    );
    msg!(
        "[WITHDRAW] Record - principal: {}, share_index_at_deposit: {}",
        deposit_record.principal,
        deposit_record.share_index_at_deposit
    );

    // Bookkeeping first: the record is gone before any lamports leave the pool
    let payout = eth_pool.settle_withdrawal(&deposit_record)?;
    msg!(
        "[WITHDRAW] Payout: {} lamports (principal: {}, reward: {})",
        payout.amount,
        payout.principal,
        payout.reward
    );

    // Pool PDA must stay rent exempt after paying out
    let rent_exemption = Rent::get()?.minimum_balance(pool_info.data_len());
    let available = pool_info
        .lamports()
        .checked_sub(rent_exemption)
        .ok_or(ErrorCode::InsufficientPoolFunds)?;
    require!(available >= payout.amount, ErrorCode::InsufficientPoolFunds);

    DepositRecord::close(&record_info, &depositor_info)?;

    // CRITICAL: Pool PDA carries data, so use lamport mutation (not CPI System transfer)
    {
        let mut pool_lamports = pool_info.try_borrow_mut_lamports()?;
        let mut depositor_lamports = depositor_info.try_borrow_mut_lamports()?;

        **pool_lamports = (**pool_lamports)
            .checked_sub(payout.amount)
            .ok_or(ErrorCode::InsufficientPoolFunds)?;
        **depositor_lamports = (**depositor_lamports)
            .checked_add(payout.amount)
            .ok_or(ErrorCode::CalculationOverflow)?;
    }

    emit!(Withdrawn {
        depositor: deposit_record.depositor,
        amount: payout.amount,
        principal: payout.principal,
        reward: payout.reward,
    });

    Ok(payout.amount)
}
