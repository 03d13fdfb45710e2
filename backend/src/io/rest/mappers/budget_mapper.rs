//! backend/src/io/rest/mappers/budget_mapper.rs

use crate::domain::allocation::BudgetSplit;
use crate::domain::models::budget::ChildBudget as DomainBudget;
use shared::{
    BudgetListResponse, BudgetResponse, BudgetSplitResponse, ChildBudget as SharedBudget,
    IncomeFrequency as SharedFrequency,
};

use crate::domain::models::budget::IncomeFrequency as DomainFrequency;

/// Mapper to convert between shared budget DTOs and domain models.
pub struct BudgetMapper;

impl BudgetMapper {
    /// Converts a domain budget record to a shared DTO.
    pub fn to_dto(domain: DomainBudget) -> SharedBudget {
        SharedBudget {
            id: domain.id,
            name: domain.name,
            income_cents: domain.income_cents,
            frequency: Self::frequency_to_dto(domain.frequency),
            savings_percent: domain.savings_percent,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn to_budget_response(domain: DomainBudget) -> BudgetResponse {
        BudgetResponse {
            budget: Self::to_dto(domain),
        }
    }

    pub fn to_budget_list_dto(domain_budgets: Vec<DomainBudget>) -> BudgetListResponse {
        BudgetListResponse {
            budgets: domain_budgets.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_split_dto(domain: DomainBudget, split: BudgetSplit) -> BudgetSplitResponse {
        BudgetSplitResponse {
            budget_id: domain.id,
            income_cents: domain.income_cents,
            savings_percent: domain.savings_percent,
            save_cents: split.save_cents,
            spend_cents: split.spend_cents,
        }
    }

    pub fn frequency_to_domain(dto: SharedFrequency) -> DomainFrequency {
        match dto {
            SharedFrequency::Weekly => DomainFrequency::Weekly,
            SharedFrequency::Monthly => DomainFrequency::Monthly,
        }
    }

    fn frequency_to_dto(domain: DomainFrequency) -> SharedFrequency {
        match domain {
            DomainFrequency::Weekly => SharedFrequency::Weekly,
            DomainFrequency::Monthly => SharedFrequency::Monthly,
        }
    }
}
