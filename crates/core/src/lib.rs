pub mod category;
pub mod money;
pub mod transaction;

pub use category::{CategorizationResult, Category, Confidence};
pub use money::{Money, MoneyError};
pub use transaction::{Transaction, TransactionId};
