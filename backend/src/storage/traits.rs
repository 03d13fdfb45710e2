//! Storage trait for budget records.
//!
//! The domain layer talks to storage through this seam so tests and future
//! backends can swap the implementation.

use anyhow::Result;

use crate::domain::models::budget::ChildBudget;

pub trait BudgetStorage {
    /// Append a new budget record.
    fn store_budget(&self, budget: &ChildBudget) -> Result<()>;

    /// Retrieve a specific record by ID.
    fn get_budget(&self, budget_id: &str) -> Result<Option<ChildBudget>>;

    /// List all records in insertion order.
    fn list_budgets(&self) -> Result<Vec<ChildBudget>>;

    /// Replace an existing record, matched by ID.
    fn update_budget(&self, budget: &ChildBudget) -> Result<()>;

    /// Delete a record by ID.
    fn delete_budget(&self, budget_id: &str) -> Result<()>;
}
