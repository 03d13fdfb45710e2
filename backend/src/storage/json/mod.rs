pub mod budget_repository;
pub mod connection;

pub use budget_repository::BudgetRepository;
pub use connection::JsonConnection;
