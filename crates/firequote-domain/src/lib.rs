//! Domain layer - building/extinguisher models and pure calculation services

pub mod model;
pub mod service;
