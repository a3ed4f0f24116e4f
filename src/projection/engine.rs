//! Core projection engine for monthly compound growth

use log::{debug, error, warn};
use thiserror::Error;

use super::input::{CalculationInput, InputError};
use super::points::ProjectionPoint;
use super::state::ProjectionState;

/// Why a projection produced no points
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Overflow detected at month {month}")]
    Overflow { month: u32 },

    #[error("Negative balance detected at month {month}")]
    NegativeBalance { month: u32 },

    #[error("Final result contains values that cannot be represented")]
    UnrepresentableResult,
}

/// Runs one projection for a validated input
pub struct ProjectionEngine<'a> {
    input: &'a CalculationInput,
    annual_rate: f64,
    monthly_recurring: f64,
}

impl<'a> ProjectionEngine<'a> {
    /// Validate the input and normalize its rates
    pub fn new(input: &'a CalculationInput) -> Result<Self, InputError> {
        input.validate()?;
        Ok(Self {
            input,
            annual_rate: input.annual_rate(),
            monthly_recurring: input.monthly_recurring(),
        })
    }

    /// Project every month of the horizon
    pub fn run(&self) -> Result<Vec<ProjectionPoint>, ProjectionError> {
        let months = self.input.months();
        let mut state = ProjectionState::from_input(self.input);
        let mut points = Vec::with_capacity(months as usize);

        debug!(
            "Starting calculation: initial={} monthly_recurring={} annual_rate={} compounding={} months={}",
            self.input.initial,
            self.monthly_recurring,
            self.annual_rate,
            self.input.compounding_frequency.as_str(),
            months
        );

        for _month in 1..=months {
            state.advance_month();
            self.calculate_month(&mut state)?;

            if state.month <= 3 || state.month == months {
                debug!(
                    "Month {}: principal={:.2} total={:.2} interest={:.2} accrued={:.2}",
                    state.month, state.principal, state.total, state.last_interest, state.interest_accrued
                );
            }

            points.push(state.to_point());
        }

        // Rounding multiplies by 100, which can overflow values that were finite
        let last = points.last().ok_or(ProjectionError::UnrepresentableResult)?;
        if !(last.total.is_finite() && last.principal.is_finite() && last.interest.is_finite()) {
            error!("Final result contains invalid values: {:?}", last);
            return Err(ProjectionError::UnrepresentableResult);
        }
        debug!("Final result: {:?}", last);

        Ok(points)
    }

    /// Credit interest, then the contribution, then check the running values
    fn calculate_month(&self, state: &mut ProjectionState) -> Result<(), ProjectionError> {
        let interest = state.interest_due(self.annual_rate, self.input.compounding_frequency);
        state.credit_interest(interest);
        state.add_contribution(self.monthly_recurring);

        if state.has_overflowed() {
            error!(
                "Overflow detected at month {}: total={} principal={} accrued={} interest={} recurring={}",
                state.month, state.total, state.principal, state.interest_accrued, interest, self.monthly_recurring
            );
            return Err(ProjectionError::Overflow { month: state.month });
        }
        if state.has_negative() {
            error!(
                "Negative values detected at month {}: total={} principal={} accrued={}",
                state.month, state.total, state.principal, state.interest_accrued
            );
            return Err(ProjectionError::NegativeBalance { month: state.month });
        }

        Ok(())
    }
}

/// Project an input, reporting why nothing could be produced
pub fn try_project(input: &CalculationInput) -> Result<Vec<ProjectionPoint>, ProjectionError> {
    ProjectionEngine::new(input)?.run()
}

/// Project an input month by month
///
/// Returns an empty vector for invalid input or when any running balance
/// overflows or goes negative. No partial series is ever returned.
pub fn project(input: &CalculationInput) -> Vec<ProjectionPoint> {
    match try_project(input) {
        Ok(points) => points,
        Err(ProjectionError::Input(e)) => {
            warn!("{}", e);
            Vec::new()
        }
        Err(_) => Vec::new(),
    }
}
