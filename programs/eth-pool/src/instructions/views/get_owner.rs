use crate::states::EthPool;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct GetOwner<'info> {
    #[account(
        seeds = [EthPool::PREFIX_SEED],
        bump = eth_pool.bump
    )]
    pub eth_pool: Account<'info, EthPool>,
}

pub fn get_owner(ctx: Context<GetOwner>) -> Result<Pubkey> {
    Ok(ctx.accounts.eth_pool.owner)
}
