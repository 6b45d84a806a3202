pub mod models;
pub mod persistence;
pub mod reducer;
pub mod store;
