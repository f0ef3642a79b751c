pub mod models;
pub mod validate;
