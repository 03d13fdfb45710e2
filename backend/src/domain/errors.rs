use thiserror::Error;

/// Errors a caller can act on. Services return these wrapped in
/// `anyhow::Error`; the REST layer downcasts to choose a status code.
#[derive(Debug, Error, PartialEq)]
pub enum BudgetError {
    #[error("Child name cannot be empty")]
    EmptyName,

    #[error("Child name cannot exceed 100 characters")]
    NameTooLong,

    #[error("Income cannot be negative")]
    NegativeIncome,

    #[error("Budget not found: {0}")]
    NotFound(String),
}
