pub mod methods;
pub mod models;
pub mod query;
