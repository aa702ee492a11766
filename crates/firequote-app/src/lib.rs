//! Application service layer - use cases, config, default reference data

pub mod app;
pub mod config;
pub mod constants;
