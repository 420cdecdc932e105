pub mod depositor;
pub mod initialize;
pub mod operator;
pub mod views;

pub use depositor::*;
pub use initialize::*;
pub use operator::*;
pub use views::*;
