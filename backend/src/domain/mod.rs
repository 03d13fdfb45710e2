pub mod allocation;
pub mod budget_service;
pub mod commands;
pub mod errors;
pub mod models;

pub use budget_service::BudgetService;
