//! Running balance state carried between projected months

use super::input::{CalculationInput, CompoundingFrequency};
use super::points::ProjectionPoint;

/// Unrounded balances at the end of the most recent projected month
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection month (1-indexed, 0 before the first month)
    pub month: u32,

    /// Cumulative contributions including the initial deposit
    pub principal: f64,

    /// Cumulative interest credited so far
    pub interest_accrued: f64,

    /// Running balance, tracked on its own rather than as principal + interest
    pub total: f64,

    /// Interest credited during the current month
    pub last_interest: f64,
}

impl ProjectionState {
    /// Initialize state from the starting deposit
    pub fn from_input(input: &CalculationInput) -> Self {
        Self {
            month: 0,
            principal: input.initial,
            interest_accrued: 0.0,
            total: input.initial,
            last_interest: 0.0,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.last_interest = 0.0;
    }

    /// Interest due this month on the running total
    ///
    /// Quarterly and annual compounding credit the whole period's rate in one
    /// step on the boundary month and nothing in between.
    pub fn interest_due(&self, annual_rate: f64, compounding: CompoundingFrequency) -> f64 {
        if !compounding.is_boundary(self.month) {
            return 0.0;
        }
        self.total * (annual_rate / compounding.periods_per_year() as f64)
    }

    pub fn credit_interest(&mut self, amount: f64) {
        self.total += amount;
        self.interest_accrued += amount;
        self.last_interest = amount;
    }

    pub fn add_contribution(&mut self, amount: f64) {
        self.principal += amount;
        self.total += amount;
    }

    /// True when any running value has overflowed
    pub fn has_overflowed(&self) -> bool {
        !self.total.is_finite() || !self.principal.is_finite() || !self.interest_accrued.is_finite()
    }

    /// True when any running value has gone below zero
    pub fn has_negative(&self) -> bool {
        self.total < 0.0 || self.principal < 0.0 || self.interest_accrued < 0.0
    }

    /// Snapshot the current month as an emitted point, rounding each value
    pub fn to_point(&self) -> ProjectionPoint {
        ProjectionPoint {
            month: self.month,
            year: ProjectionPoint::year_for_month(self.month),
            principal: round_cents(self.principal),
            interest: round_cents(self.interest_accrued),
            total: round_cents(self.total),
        }
    }
}

/// Round to two decimal places, halves away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
