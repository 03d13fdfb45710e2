use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::allocation::{format_dollars, BudgetSplit};
use crate::domain::commands::budget::{
    CreateBudgetCommand, CreateBudgetResult, DeleteBudgetCommand, DeleteBudgetResult,
    GetBudgetCommand, GetBudgetResult, ListBudgetsResult, UpdateBudgetCommand,
    UpdateBudgetResult,
};
use crate::domain::errors::BudgetError;
use crate::domain::models::budget::ChildBudget;
use crate::storage::json::{BudgetRepository, JsonConnection};
use crate::storage::traits::BudgetStorage;

const MAX_NAME_LENGTH: usize = 100;

/// Service for managing the per-child budget records
#[derive(Clone)]
pub struct BudgetService {
    budget_repository: BudgetRepository,
}

impl BudgetService {
    /// Create a new BudgetService
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let budget_repository = BudgetRepository::new(connection);
        Self { budget_repository }
    }

    /// Create a new budget record with default income, frequency and split
    pub fn create_budget(&self, command: CreateBudgetCommand) -> Result<CreateBudgetResult> {
        info!("Creating budget record: name={}", command.name);

        Self::validate_name(&command.name)?;

        let budget = ChildBudget::with_defaults(command.name.trim().to_string(), Utc::now());
        self.budget_repository.store_budget(&budget)?;

        info!("Created budget record: {} with ID: {}", budget.name, budget.id);

        Ok(CreateBudgetResult { budget })
    }

    /// Get a budget record by ID
    pub fn get_budget(&self, command: GetBudgetCommand) -> Result<GetBudgetResult> {
        info!("Getting budget record: {}", command.budget_id);

        let budget = self.budget_repository.get_budget(&command.budget_id)?;

        if budget.is_none() {
            warn!("Budget record not found: {}", command.budget_id);
        }

        Ok(GetBudgetResult { budget })
    }

    /// List all budget records in insertion order
    pub fn list_budgets(&self) -> Result<ListBudgetsResult> {
        let budgets = self.budget_repository.list_budgets()?;

        info!("Found {} budget records", budgets.len());

        Ok(ListBudgetsResult { budgets })
    }

    /// Update fields on an existing budget record
    pub fn update_budget(&self, command: UpdateBudgetCommand) -> Result<UpdateBudgetResult> {
        info!("Updating budget record: {}", command.budget_id);

        let mut budget = self
            .budget_repository
            .get_budget(&command.budget_id)?
            .ok_or_else(|| BudgetError::NotFound(command.budget_id.clone()))?;

        self.validate_update_command(&command)?;

        if let Some(name) = command.name {
            budget.name = name.trim().to_string();
        }
        if let Some(income_cents) = command.income_cents {
            budget.income_cents = income_cents;
        }
        if let Some(frequency) = command.frequency {
            budget.frequency = frequency;
        }
        if let Some(savings_percent) = command.savings_percent {
            budget.savings_percent = savings_percent.min(100);
        }

        budget.updated_at = Utc::now();

        self.budget_repository.update_budget(&budget)?;

        info!("Updated budget record: {} with ID: {}", budget.name, budget.id);

        Ok(UpdateBudgetResult { budget })
    }

    /// Delete a budget record
    pub fn delete_budget(&self, command: DeleteBudgetCommand) -> Result<DeleteBudgetResult> {
        info!("Deleting budget record: {}", command.budget_id);

        let budget = self
            .budget_repository
            .get_budget(&command.budget_id)?
            .ok_or_else(|| BudgetError::NotFound(command.budget_id.clone()))?;

        self.budget_repository.delete_budget(&command.budget_id)?;

        info!("Deleted budget record: {} with ID: {}", budget.name, budget.id);

        Ok(DeleteBudgetResult {
            success_message: format!("Budget for '{}' deleted successfully", budget.name),
        })
    }

    /// Derive the save/spend split for a budget record
    pub fn budget_split(&self, command: GetBudgetCommand) -> Result<(ChildBudget, BudgetSplit)> {
        let budget = self
            .budget_repository
            .get_budget(&command.budget_id)?
            .ok_or_else(|| BudgetError::NotFound(command.budget_id.clone()))?;

        let split = BudgetSplit::for_budget(&budget);
        info!(
            "Split for {}: save {} / spend {}",
            budget.id,
            format_dollars(split.save_cents),
            format_dollars(split.spend_cents)
        );

        Ok((budget, split))
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(BudgetError::EmptyName.into());
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(BudgetError::NameTooLong.into());
        }
        Ok(())
    }

    fn validate_update_command(&self, command: &UpdateBudgetCommand) -> Result<()> {
        if let Some(ref name) = command.name {
            Self::validate_name(name)?;
        }
        if let Some(income_cents) = command.income_cents {
            if income_cents < 0 {
                return Err(BudgetError::NegativeIncome.into());
            }
        }
        Ok(())
    }
}
