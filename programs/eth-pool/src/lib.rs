use anchor_lang::prelude::*;

// Module declarations
pub mod errors;
pub mod events;
pub mod instructions;
pub mod states;


// Re-export commonly used types
pub use events::*;
use instructions::*;
pub use states::*;

declare_id!("EJUzuD8cFB4MbLuMZEfn8NZPRiF5My6rgDGdVchwuXAV");

#[program]
pub mod eth_pool {
    use super::*;

    /// Create the pool; the signer becomes its owner
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Deposit lamports into the pool
    /// One active deposit per depositor: withdraw before depositing again
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Owner deposits rewards, split across current depositors by principal
    pub fn deposit_rewards(ctx: Context<DepositRewards>, amount: u64) -> Result<()> {
        instructions::deposit_rewards(ctx, amount)
    }

    /// Withdraw principal and all accrued rewards, closing the deposit record
    /// Returns the payout
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<u64> {
        instructions::withdraw(ctx)
    }

    /// Tracked balance held for depositors (not the PDA lamports)
    pub fn get_balance(ctx: Context<GetBalance>) -> Result<u64> {
        instructions::get_balance(ctx)
    }

    /// Owner allowed to deposit rewards
    pub fn get_owner(ctx: Context<GetOwner>) -> Result<Pubkey> {
        instructions::get_owner(ctx)
    }

    /// Payout a depositor would receive if they withdrew now
    pub fn claimable(ctx: Context<Claimable>) -> Result<u64> {
        instructions::claimable(ctx)
    }
}
