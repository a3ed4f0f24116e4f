//! Projection engine for month-by-month compound growth

mod input;
mod state;
mod engine;
mod points;

pub use input::{
    CalculationInput, CompoundingFrequency, InputError, RecurringFrequency, DEFAULT_YEARS, MAX_YEARS,
};
pub use state::{round_cents, ProjectionState};
pub use engine::{project, try_project, ProjectionEngine, ProjectionError};
pub use points::{ProjectionPoint, ProjectionSummary};
