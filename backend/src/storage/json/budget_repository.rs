use anyhow::{Context, Result};
use std::fs;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use super::connection::JsonConnection;
use crate::domain::errors::BudgetError;
use crate::domain::models::budget::ChildBudget;
use crate::storage::traits::BudgetStorage;

/// JSON-file-backed budget repository.
///
/// The whole record list lives in memory and is rewritten to one file on
/// every mutation. Writes go through a temp file and rename; if the write fails the
/// in-memory change is rolled back so memory and disk stay consistent.
#[derive(Clone)]
pub struct BudgetRepository {
    connection: Arc<JsonConnection>,
    budgets: Arc<Mutex<Vec<ChildBudget>>>,
}

impl BudgetRepository {
    /// Create a repository, loading any previously persisted records.
    /// A missing file starts empty; an unparseable file is logged and
    /// treated as empty rather than failing.
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let budgets = Self::load_or_default(&connection);
        Self {
            connection,
            budgets: Arc::new(Mutex::new(budgets)),
        }
    }

    fn load_or_default(connection: &JsonConnection) -> Vec<ChildBudget> {
        let path = connection.budgets_file_path();

        if !path.exists() {
            debug!("No budget file at {:?}, starting with empty list", path);
            return Vec::new();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read budget file {:?}: {}. Starting empty.", path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ChildBudget>>(&contents) {
            Ok(budgets) => {
                info!("Loaded {} budget records from {:?}", budgets.len(), path);
                budgets
            }
            Err(e) => {
                warn!("Failed to parse budget file {:?}: {}. Starting empty.", path, e);
                Vec::new()
            }
        }
    }

    /// Serialize the full record list to disk, atomically.
    fn persist(&self, budgets: &[ChildBudget]) -> Result<()> {
        let path = self.connection.budgets_file_path();
        let contents = serde_json::to_string_pretty(budgets)
            .context("Failed to serialize budget records")?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write budget file {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace budget file {:?}", path))?;

        debug!("Persisted {} budget records to {:?}", budgets.len(), path);
        Ok(())
    }

    /// Apply a mutation to the in-memory list and persist the result,
    /// restoring the previous list if the write fails.
    fn mutate<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<ChildBudget>) -> Result<()>,
    {
        let mut budgets = self.budgets.lock().unwrap();
        let snapshot = budgets.clone();

        if let Err(e) = apply(&mut budgets) {
            *budgets = snapshot;
            return Err(e);
        }

        if let Err(e) = self.persist(&budgets) {
            *budgets = snapshot;
            return Err(e);
        }

        Ok(())
    }
}

impl BudgetStorage for BudgetRepository {
    fn store_budget(&self, budget: &ChildBudget) -> Result<()> {
        self.mutate(|budgets| {
            budgets.push(budget.clone());
            Ok(())
        })
    }

    fn get_budget(&self, budget_id: &str) -> Result<Option<ChildBudget>> {
        let budgets = self.budgets.lock().unwrap();
        Ok(budgets.iter().find(|b| b.id == budget_id).cloned())
    }

    fn list_budgets(&self) -> Result<Vec<ChildBudget>> {
        let budgets = self.budgets.lock().unwrap();
        Ok(budgets.clone())
    }

    fn update_budget(&self, budget: &ChildBudget) -> Result<()> {
        self.mutate(|budgets| {
            let slot = budgets
                .iter_mut()
                .find(|b| b.id == budget.id)
                .ok_or_else(|| BudgetError::NotFound(budget.id.clone()))?;
            *slot = budget.clone();
            Ok(())
        })
    }

    fn delete_budget(&self, budget_id: &str) -> Result<()> {
        self.mutate(|budgets| {
            let index = budgets
                .iter()
                .position(|b| b.id == budget_id)
                .ok_or_else(|| BudgetError::NotFound(budget_id.to_string()))?;
            budgets.remove(index);
            Ok(())
        })
    }
}
