//! # REST API for Budget Records
//!
//! Endpoints for creating, retrieving, updating, and deleting per-child
//! budget records, plus the derived savings/spending split.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::domain::commands::budget::{
    CreateBudgetCommand, DeleteBudgetCommand, GetBudgetCommand, UpdateBudgetCommand,
};
use crate::domain::errors::BudgetError;
use crate::io::rest::mappers::budget_mapper::BudgetMapper;
use crate::io::rest::AppState;
use shared::{CreateBudgetRequest, DeleteBudgetResponse, UpdateBudgetRequest};

/// Map a service error to the status code the client should see.
fn error_status(e: &anyhow::Error) -> StatusCode {
    match e.downcast_ref::<BudgetError>() {
        Some(BudgetError::NotFound(_)) => StatusCode::NOT_FOUND,
        Some(_) => StatusCode::BAD_REQUEST,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Create a new budget record
pub async fn create_budget(
    State(state): State<AppState>,
    Json(request): Json<CreateBudgetRequest>,
) -> impl IntoResponse {
    info!("POST /api/budgets - request: {:?}", request);

    let command = CreateBudgetCommand { name: request.name };

    match state.budget_service.create_budget(command) {
        Ok(result) => (
            StatusCode::CREATED,
            Json(BudgetMapper::to_budget_response(result.budget)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to create budget: {}", e);
            (error_status(&e), e.to_string()).into_response()
        }
    }
}

/// List all budget records
pub async fn list_budgets(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/budgets");

    match state.budget_service.list_budgets() {
        Ok(result) => (
            StatusCode::OK,
            Json(BudgetMapper::to_budget_list_dto(result.budgets)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to list budgets: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing budgets").into_response()
        }
    }
}

/// Get a budget record by ID
pub async fn get_budget(
    State(state): State<AppState>,
    Path(budget_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/budgets/{}", budget_id);

    match state.budget_service.get_budget(GetBudgetCommand { budget_id }) {
        Ok(result) => match result.budget {
            Some(budget) => (
                StatusCode::OK,
                Json(BudgetMapper::to_budget_response(budget)),
            )
                .into_response(),
            None => (StatusCode::NOT_FOUND, "Budget not found").into_response(),
        },
        Err(e) => {
            error!("Failed to get budget: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving budget").into_response()
        }
    }
}

/// Update fields on a budget record
pub async fn update_budget(
    State(state): State<AppState>,
    Path(budget_id): Path<String>,
    Json(request): Json<UpdateBudgetRequest>,
) -> impl IntoResponse {
    info!("PUT /api/budgets/{} - request: {:?}", budget_id, request);

    let command = UpdateBudgetCommand {
        budget_id,
        name: request.name,
        income_cents: request.income_cents,
        frequency: request.frequency.map(BudgetMapper::frequency_to_domain),
        savings_percent: request.savings_percent,
    };

    match state.budget_service.update_budget(command) {
        Ok(result) => (
            StatusCode::OK,
            Json(BudgetMapper::to_budget_response(result.budget)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update budget: {}", e);
            (error_status(&e), e.to_string()).into_response()
        }
    }
}

/// Delete a budget record
pub async fn delete_budget(
    State(state): State<AppState>,
    Path(budget_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/budgets/{}", budget_id);

    match state.budget_service.delete_budget(DeleteBudgetCommand { budget_id }) {
        Ok(result) => (
            StatusCode::OK,
            Json(DeleteBudgetResponse {
                success_message: result.success_message,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to delete budget: {}", e);
            (error_status(&e), e.to_string()).into_response()
        }
    }
}

/// Get the derived save/spend split for a budget record
pub async fn get_budget_split(
    State(state): State<AppState>,
    Path(budget_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/budgets/{}/split", budget_id);

    match state.budget_service.budget_split(GetBudgetCommand { budget_id }) {
        Ok((budget, split)) => (
            StatusCode::OK,
            Json(BudgetMapper::to_split_dto(budget, split)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to derive budget split: {}", e);
            (error_status(&e), e.to_string()).into_response()
        }
    }
}
