//! Use-case services

pub mod quote_service;

pub use quote_service::{prepare_quotation, prepare_quotation_with_defaults};
