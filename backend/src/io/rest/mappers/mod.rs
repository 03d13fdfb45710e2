pub mod budget_mapper;
