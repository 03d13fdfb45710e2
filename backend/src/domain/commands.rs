// backend/src/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod budget {
    use crate::domain::models::budget::{ChildBudget, IncomeFrequency};

    /// Input for creating a new budget record.
    #[derive(Debug, Clone)]
    pub struct CreateBudgetCommand {
        pub name: String,
    }

    /// Input for updating fields on an existing record. Only the fields that
    /// are `Some` change.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateBudgetCommand {
        pub budget_id: String,
        pub name: Option<String>,
        pub income_cents: Option<i64>,
        pub frequency: Option<IncomeFrequency>,
        pub savings_percent: Option<u8>,
    }

    /// Input for fetching a single record.
    #[derive(Debug, Clone)]
    pub struct GetBudgetCommand {
        pub budget_id: String,
    }

    /// Input for removing a record.
    #[derive(Debug, Clone)]
    pub struct DeleteBudgetCommand {
        pub budget_id: String,
    }

    /// Result of creating a budget record.
    #[derive(Debug, Clone)]
    pub struct CreateBudgetResult {
        pub budget: ChildBudget,
    }

    /// Result of fetching a single record.
    #[derive(Debug, Clone)]
    pub struct GetBudgetResult {
        pub budget: Option<ChildBudget>,
    }

    /// Result of listing all records.
    #[derive(Debug, Clone)]
    pub struct ListBudgetsResult {
        pub budgets: Vec<ChildBudget>,
    }

    /// Result of updating a record.
    #[derive(Debug, Clone)]
    pub struct UpdateBudgetResult {
        pub budget: ChildBudget,
    }

    /// Result of removing a record.
    #[derive(Debug, Clone)]
    pub struct DeleteBudgetResult {
        pub success_message: String,
    }
}
