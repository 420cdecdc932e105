use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("You have to withdraw before deposit again")]
    AlreadyDeposited,
    #[msg("No active deposit for this depositor")]
    NoActiveDeposit,
    #[msg("There are no deposits from users")]
    NoActiveDeposits,
    #[msg("Unauthorized access")]
    Unauthorized,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Calculation overflow")]
    CalculationOverflow,
    #[msg("Insufficient pool funds for payout")]
    InsufficientPoolFunds,
}
