//! Default reference data tables
//!
//! These are defaults only; the calculation services take the tables as
//! parameters, so callers may substitute revised editions.

pub mod catalog;
pub mod standards;

pub use catalog::default_catalog;
pub use standards::bis_standards;
