pub mod deposit_record;
pub mod pool;

pub use deposit_record::*;
pub use pool::*;
