pub mod json;
pub mod traits;

pub use json::{BudgetRepository, JsonConnection};
pub use traits::BudgetStorage;
