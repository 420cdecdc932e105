pub mod claimable;
pub mod get_balance;
pub mod get_owner;

pub use claimable::*;
pub use get_balance::*;
pub use get_owner::*;
