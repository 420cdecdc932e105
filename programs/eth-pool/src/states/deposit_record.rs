use crate::errors::ErrorCode;
use crate::states::EthPool;
use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Depositor's position in the pool
///
/// The snapshot is taken once at deposit time and never moved, so rewards
/// credited before the deposit are excluded from the payout:
/// payout = principal + principal * (reward_per_share - share_index_at_deposit) / PRECISION
#[account]
#[derive(InitSpace, Debug)]
pub struct DepositRecord {
    pub depositor: Pubkey,             // Depositor public key
    pub principal: u64,                // Lamports deposited, excluding rewards
    pub share_index_at_deposit: u128,  // reward_per_share when the deposit was made
    pub is_active: bool,               // Cleared on withdraw
    pub deposited_at: i64,             // Deposit timestamp
    pub bump: u8,                      // PDA bump
}

/// Breakdown of a withdrawal payout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub principal: u64,
    pub reward: u64,
    pub amount: u64,
}

impl DepositRecord {
    pub const PREFIX_SEED: &'static [u8] = b"deposit_record";

    /// Calculate payout against the current accumulator
    /// Reward part always rounds down
    pub fn payout(&self, reward_per_share: u128) -> Result<Payout> {
        let growth = reward_per_share
            .checked_sub(self.share_index_at_deposit)
            .ok_or(ErrorCode::CalculationOverflow)?;

        let reward = (self.principal as u128)
            .checked_mul(growth)
            .ok_or(ErrorCode::CalculationOverflow)?
            .checked_div(EthPool::PRECISION)
            .ok_or(ErrorCode::CalculationOverflow)?;
        let reward = u64::try_from(reward).map_err(|_| error!(ErrorCode::CalculationOverflow))?;

        let amount = self
            .principal
            .checked_add(reward)
            .ok_or(ErrorCode::CalculationOverflow)?;

        Ok(Payout {
            principal: self.principal,
            reward,
            amount,
        })
    }

    /// Load an active record from a PDA that may not exist yet.
    /// A missing, foreign or inactive account all mean "no active deposit".
    pub fn load_active(info: &AccountInfo) -> Result<Self> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return err!(ErrorCode::NoActiveDeposit);
        }

        let record = {
            let data = info.try_borrow_data()?;
            Self::try_deserialize(&mut &data[..])?
        };
        require!(record.is_active, ErrorCode::NoActiveDeposit);

        Ok(record)
    }

    /// Close the record account and return its rent to `destination`
    pub fn close<'info>(info: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<()> {
        let destination_lamports = destination
            .lamports()
            .checked_add(info.lamports())
            .ok_or(ErrorCode::CalculationOverflow)?;

        **destination.try_borrow_mut_lamports()? = destination_lamports;
        **info.try_borrow_mut_lamports()? = 0;

        info.assign(&system_program::ID);
        info.resize(0)?;

        Ok(())
    }
}
