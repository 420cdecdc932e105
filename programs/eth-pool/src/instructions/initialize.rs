use crate::events::PoolInitialized;
use crate::states::EthPool;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + EthPool::INIT_SPACE,
        seeds = [EthPool::PREFIX_SEED],
        bump
    )]
    pub eth_pool: Account<'info, EthPool>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// The initializing signer becomes the only identity allowed to deposit rewards
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let eth_pool = &mut ctx.accounts.eth_pool;

    msg!("[INIT] Initializing ETH Pool");
    msg!("[INIT] Account size: {} bytes", 8 + EthPool::INIT_SPACE);
    msg!("[INIT] Owner: {}", ctx.accounts.owner.key());

    eth_pool.init(ctx.accounts.owner.key(), ctx.bumps.eth_pool);

    msg!("[INIT] ETH Pool initialized, bump: {}", eth_pool.bump);

    emit!(PoolInitialized {
        owner: eth_pool.owner,
    });

    Ok(())
}
