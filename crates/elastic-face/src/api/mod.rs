pub mod config;
pub mod face;
pub mod types;
