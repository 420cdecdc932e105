use crate::errors::ErrorCode;
use crate::events::RewardsDeposited;
use crate::states::EthPool;
use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Deposit rewards for the current depositors (owner only)
///
/// Only reward_per_share moves; individual records are settled at withdraw.
#[derive(Accounts)]
pub struct DepositRewards<'info> {
    #[account(
        mut,
        seeds = [EthPool::PREFIX_SEED],
        bump = eth_pool.bump
    )]
    pub eth_pool: Account<'info, EthPool>,

    #[account(
        mut,
        constraint = owner.key() == eth_pool.owner @ ErrorCode::Unauthorized
    )]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn deposit_rewards(ctx: Context<DepositRewards>, amount: u64) -> Result<()> {
    msg!("[REWARDS] Starting deposit_rewards instruction");
    msg!("[REWARDS] Amount: {} lamports", amount);

    let eth_pool = &mut ctx.accounts.eth_pool;

    msg!(
        "[REWARDS] Pool loaded - reward_per_share: {}, total_deposited: {}",
        eth_pool.reward_per_share,
        eth_pool.total_deposited
    );

    let reward_per_share = eth_pool.credit_rewards(amount)?;
    let total_deposited = eth_pool.total_deposited;

    msg!("[REWARDS] Updated reward_per_share to: {}", reward_per_share);

    let reward_cpi = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.owner.to_account_info(),
            to: ctx.accounts.eth_pool.to_account_info(),
        },
    );
    system_program::transfer(reward_cpi, amount)?;

    emit!(RewardsDeposited {
        amount,
        reward_per_share,
        total_deposited,
        deposited_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
