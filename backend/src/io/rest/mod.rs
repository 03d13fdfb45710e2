pub mod budget_apis;
pub mod mappers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::domain::BudgetService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub budget_service: BudgetService,
}

impl AppState {
    pub fn new(budget_service: BudgetService) -> Self {
        Self { budget_service }
    }
}

/// Build the API router for budget records
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/budgets",
            post(budget_apis::create_budget).get(budget_apis::list_budgets),
        )
        .route(
            "/budgets/:budget_id",
            get(budget_apis::get_budget)
                .put(budget_apis::update_budget)
                .delete(budget_apis::delete_budget),
        )
        .route("/budgets/:budget_id/split", get(budget_apis::get_budget_split))
        .with_state(state)
}
