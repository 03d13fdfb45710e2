//! backend/src/domain/models/budget.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default income for a freshly created budget record, in cents.
pub const DEFAULT_INCOME_CENTS: i64 = 1000;

/// Default savings percentage for a freshly created budget record.
pub const DEFAULT_SAVINGS_PERCENT: u8 = 50;

/// Domain model for one child's budget configuration.
///
/// Amounts are integer cents so that the derived save/spend split always sums
/// back to the income exactly. This is also the persisted shape: the
/// repository serializes the whole record list as a JSON array of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildBudget {
    pub id: String,
    pub name: String,
    pub income_cents: i64,
    pub frequency: IncomeFrequency,
    pub savings_percent: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChildBudget {
    /// Generate a unique ID for a budget record. Microsecond resolution keeps
    /// ids distinct for back-to-back creations.
    pub fn generate_id(timestamp_micros: u64) -> String {
        format!("budget::{}", timestamp_micros)
    }

    /// Create a record with the default income, frequency and savings split.
    pub fn with_defaults(name: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Self::generate_id(now.timestamp_micros() as u64),
            name,
            income_cents: DEFAULT_INCOME_CENTS,
            frequency: IncomeFrequency::Weekly,
            savings_percent: DEFAULT_SAVINGS_PERCENT,
            created_at: now,
            updated_at: now,
        }
    }
}

/// How often a child's income arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeFrequency {
    Weekly,
    Monthly,
}
