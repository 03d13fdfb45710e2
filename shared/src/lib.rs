use serde::{Deserialize, Serialize};

/// Budget record ID in format: "budget::<epoch_micros>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildBudget {
    pub id: String,
    /// Display name of the child this budget belongs to
    pub name: String,
    /// Income per frequency period, in cents (non-negative)
    pub income_cents: i64,
    /// How often the income arrives
    pub frequency: IncomeFrequency,
    /// Share of income allocated to savings, 0-100
    pub savings_percent: u8,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last-modified timestamp (RFC 3339)
    pub updated_at: String,
}

/// How often a child's income arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeFrequency {
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBudgetRequest {
    /// Display name for the new budget record
    pub name: String,
}

/// Partial update - only the provided fields change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBudgetRequest {
    pub name: Option<String>,
    pub income_cents: Option<i64>,
    pub frequency: Option<IncomeFrequency>,
    pub savings_percent: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetResponse {
    pub budget: ChildBudget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetListResponse {
    pub budgets: Vec<ChildBudget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteBudgetResponse {
    pub success_message: String,
}

/// Derived savings/spending split for one budget record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSplitResponse {
    pub budget_id: String,
    pub income_cents: i64,
    pub savings_percent: u8,
    pub save_cents: i64,
    pub spend_cents: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&IncomeFrequency::Weekly).unwrap(),
            "\"weekly\""
        );
        assert_eq!(
            serde_json::to_string(&IncomeFrequency::Monthly).unwrap(),
            "\"monthly\""
        );
    }

    #[test]
    fn update_request_fields_are_optional() {
        let request: UpdateBudgetRequest =
            serde_json::from_str(r#"{"income_cents": 2000}"#).unwrap();
        assert_eq!(request.income_cents, Some(2000));
        assert!(request.name.is_none());
        assert!(request.frequency.is_none());
        assert!(request.savings_percent.is_none());
    }

    #[test]
    fn child_budget_round_trips_through_json() {
        let budget = ChildBudget {
            id: "budget::1700000000000".to_string(),
            name: "Mia".to_string(),
            income_cents: 1000,
            frequency: IncomeFrequency::Weekly,
            savings_percent: 50,
            created_at: "2025-01-01T00:00:00+00:00".to_string(),
            updated_at: "2025-01-01T00:00:00+00:00".to_string(),
        };

        let json = serde_json::to_string(&budget).unwrap();
        let parsed: ChildBudget = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, budget);
    }
}
