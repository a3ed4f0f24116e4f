//! Calculation input parameters and their validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest supported projection horizon in years
pub const MAX_YEARS: u32 = 100;

/// Horizon used when the caller does not supply one
pub const DEFAULT_YEARS: u32 = 25;

/// Weeks per year used to turn a weekly deposit into a monthly one
const WEEKS_PER_YEAR: f64 = 52.0;

fn default_years() -> u32 {
    DEFAULT_YEARS
}

/// Cadence of the recurring contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Weekly,
    #[default]
    Monthly,
}

impl RecurringFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringFrequency::Weekly => "weekly",
            RecurringFrequency::Monthly => "monthly",
        }
    }
}

/// Cadence at which accrued interest is added to the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

impl CompoundingFrequency {
    /// Number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Annually => 1,
        }
    }

    /// Length of one compounding period in months
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Whether interest is credited at the end of the given 1-based month
    pub fn is_boundary(&self, month: u32) -> bool {
        month % self.months_per_period() == 0
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Annually => "annually",
        }
    }
}

/// Reasons an input set is rejected before any month is projected
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    #[error("Invalid initial amount: {0}")]
    InvalidInitial(f64),

    #[error("Invalid recurring amount: {0}")]
    InvalidRecurring(f64),

    #[error("Invalid interest rate: {0}")]
    InvalidInterestRate(f64),

    #[error("Invalid years: {0} (must be between 1 and 100)")]
    InvalidYears(u32),
}

/// Parameters for a single projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Starting principal
    pub initial: f64,

    /// Amount added each contribution period
    #[serde(default)]
    pub recurring: f64,

    /// Cadence of the recurring contribution
    pub recurring_frequency: RecurringFrequency,

    /// Annual nominal rate as a percentage (12.0 = 12%)
    pub interest_rate: f64,

    /// Cadence at which interest is credited
    pub compounding_frequency: CompoundingFrequency,

    /// Projection horizon
    #[serde(default = "default_years")]
    pub years: u32,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            initial: 0.0,
            recurring: 0.0,
            recurring_frequency: RecurringFrequency::Monthly,
            interest_rate: 0.0,
            compounding_frequency: CompoundingFrequency::Monthly,
            years: DEFAULT_YEARS,
        }
    }
}

impl CalculationInput {
    /// Input with no recurring contribution and the default horizon
    pub fn new(initial: f64, interest_rate: f64, compounding_frequency: CompoundingFrequency) -> Self {
        Self {
            initial,
            interest_rate,
            compounding_frequency,
            ..Default::default()
        }
    }

    /// The calculator form's starting values
    pub fn calculator_defaults() -> Self {
        Self {
            initial: 5000.0,
            recurring: 100.0,
            recurring_frequency: RecurringFrequency::Monthly,
            interest_rate: 12.0,
            compounding_frequency: CompoundingFrequency::Monthly,
            years: 5,
        }
    }

    pub fn with_recurring(mut self, recurring: f64, frequency: RecurringFrequency) -> Self {
        self.recurring = recurring;
        self.recurring_frequency = frequency;
        self
    }

    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    pub fn with_interest_rate(mut self, interest_rate: f64) -> Self {
        self.interest_rate = interest_rate;
        self
    }

    /// Check every field, reporting the first one out of range
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.initial.is_finite() || self.initial <= 0.0 {
            return Err(InputError::InvalidInitial(self.initial));
        }
        if !self.recurring.is_finite() || self.recurring < 0.0 {
            return Err(InputError::InvalidRecurring(self.recurring));
        }
        if !self.interest_rate.is_finite() || self.interest_rate <= 0.0 {
            return Err(InputError::InvalidInterestRate(self.interest_rate));
        }
        if self.years == 0 || self.years > MAX_YEARS {
            return Err(InputError::InvalidYears(self.years));
        }
        Ok(())
    }

    /// Annual rate as a decimal
    pub fn annual_rate(&self) -> f64 {
        self.interest_rate / 100.0
    }

    /// Recurring contribution expressed per month
    pub fn monthly_recurring(&self) -> f64 {
        if self.recurring <= 0.0 {
            return 0.0;
        }
        match self.recurring_frequency {
            RecurringFrequency::Weekly => self.recurring * (WEEKS_PER_YEAR / 12.0),
            RecurringFrequency::Monthly => self.recurring,
        }
    }

    /// Total number of projected months
    pub fn months(&self) -> u32 {
        self.years * 12
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_calculator_defaults_are_valid() {
        assert!(CalculationInput::calculator_defaults().validate().is_ok());
    }

    #[test]
    fn test_rejects_each_field() {
        let base = CalculationInput::calculator_defaults();

        let input = CalculationInput { initial: 0.0, ..base.clone() };
        assert_eq!(input.validate(), Err(InputError::InvalidInitial(0.0)));

        let input = CalculationInput { initial: f64::INFINITY, ..base.clone() };
        assert!(matches!(input.validate(), Err(InputError::InvalidInitial(_))));

        let input = CalculationInput { recurring: -1.0, ..base.clone() };
        assert_eq!(input.validate(), Err(InputError::InvalidRecurring(-1.0)));

        let input = CalculationInput { recurring: f64::NAN, ..base.clone() };
        assert!(matches!(input.validate(), Err(InputError::InvalidRecurring(_))));

        let input = CalculationInput { interest_rate: 0.0, ..base.clone() };
        assert_eq!(input.validate(), Err(InputError::InvalidInterestRate(0.0)));

        let input = CalculationInput { years: 0, ..base.clone() };
        assert_eq!(input.validate(), Err(InputError::InvalidYears(0)));

        let input = CalculationInput { years: 101, ..base };
        assert_eq!(input.validate(), Err(InputError::InvalidYears(101)));
    }

    #[test]
    fn test_zero_recurring_is_allowed() {
        let input = CalculationInput::new(1000.0, 5.0, CompoundingFrequency::Monthly);
        assert!(input.validate().is_ok());
        assert_eq!(input.monthly_recurring(), 0.0);
    }

    #[test]
    fn test_monthly_recurring_conversion() {
        let weekly = CalculationInput::new(1000.0, 5.0, CompoundingFrequency::Monthly)
            .with_recurring(12.0, RecurringFrequency::Weekly);
        assert_abs_diff_eq!(weekly.monthly_recurring(), 52.0, epsilon = 1e-12);

        let monthly = weekly.clone().with_recurring(250.0, RecurringFrequency::Monthly);
        assert_eq!(monthly.monthly_recurring(), 250.0);
    }

    #[test]
    fn test_compounding_boundaries() {
        let quarterly = CompoundingFrequency::Quarterly;
        let boundaries: Vec<u32> = (1..=12).filter(|&m| quarterly.is_boundary(m)).collect();
        assert_eq!(boundaries, vec![3, 6, 9, 12]);

        assert!(CompoundingFrequency::Annually.is_boundary(24));
        assert!(!CompoundingFrequency::Annually.is_boundary(11));
        assert!((1..=12).all(|m| CompoundingFrequency::Monthly.is_boundary(m)));
    }

    #[test]
    fn test_deserialize_wire_format_with_defaults() {
        let json = r#"{
            "initial": 1000,
            "recurringFrequency": "weekly",
            "interestRate": 8,
            "compoundingFrequency": "quarterly"
        }"#;
        let input: CalculationInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.initial, 1000.0);
        assert_eq!(input.recurring, 0.0);
        assert_eq!(input.recurring_frequency, RecurringFrequency::Weekly);
        assert_eq!(input.compounding_frequency, CompoundingFrequency::Quarterly);
        assert_eq!(input.years, DEFAULT_YEARS);
    }

    #[test]
    fn test_deserialize_requires_frequencies() {
        let no_compounding = r#"{"initial": 1000, "recurringFrequency": "monthly", "interestRate": 8}"#;
        let err = serde_json::from_str::<CalculationInput>(no_compounding).unwrap_err();
        assert!(err.to_string().contains("compoundingFrequency"));

        let no_cadence = r#"{"initial": 1000, "interestRate": 8, "compoundingFrequency": "annually"}"#;
        let err = serde_json::from_str::<CalculationInput>(no_cadence).unwrap_err();
        assert!(err.to_string().contains("recurringFrequency"));
    }
}
