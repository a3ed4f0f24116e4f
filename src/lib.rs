//! Compound Returns - month-by-month projection of an investment's growth
//!
//! This library provides:
//! - The projection engine: initial deposit, recurring contributions and an
//!   annual rate compounded monthly, quarterly or annually
//! - Summary figures for the final month of a projection
//! - Preset and per-country investment rate options
//! - Parallel comparison of several rates against the same deposits
//! - CSV and JSON export, and display formatting for amounts

pub mod projection;
pub mod catalog;
pub mod scenario;
pub mod export;
pub mod display;
pub mod metrics;

// Re-export commonly used types
pub use projection::{
    project, try_project, CalculationInput, CompoundingFrequency, ProjectionError, ProjectionPoint,
    ProjectionSummary, RecurringFrequency,
};
pub use catalog::{Currency, RateCatalog, RateOption};
pub use scenario::ScenarioRunner;
