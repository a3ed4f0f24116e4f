//! Projection output structures

use serde::{Deserialize, Serialize};

/// Balances at the end of one projected month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 1-based month index
    pub month: u32,

    /// 1-based year the month falls in
    pub year: u32,

    /// Cumulative contributions, rounded to cents
    pub principal: f64,

    /// Cumulative interest, rounded to cents
    pub interest: f64,

    /// Running balance, rounded to cents
    pub total: f64,
}

impl ProjectionPoint {
    /// Year number for a 1-based month: months 1-12 are year 1, 13-24 year 2, ...
    pub fn year_for_month(month: u32) -> u32 {
        month.saturating_sub(1) / 12 + 1
    }

    fn is_finite(&self) -> bool {
        self.principal.is_finite() && self.interest.is_finite() && self.total.is_finite()
    }
}

/// Headline figures read from the final month of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub years: u32,
    pub total_invested: f64,
    pub interest_earned: f64,
    pub final_balance: f64,
}

impl ProjectionSummary {
    /// Summarize a projection, or `None` when there is nothing valid to show
    pub fn from_points(points: &[ProjectionPoint]) -> Option<Self> {
        let last = points.last()?;
        if !last.is_finite() {
            return None;
        }

        Some(Self {
            months: last.month,
            years: last.year,
            total_invested: last.principal,
            interest_earned: last.interest,
            final_balance: last.total,
        })
    }

    /// Share of the final balance that came from interest
    pub fn interest_share(&self) -> f64 {
        if self.final_balance <= 0.0 {
            0.0
        } else {
            self.interest_earned / self.final_balance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: u32, principal: f64, interest: f64, total: f64) -> ProjectionPoint {
        ProjectionPoint {
            month,
            year: ProjectionPoint::year_for_month(month),
            principal,
            interest,
            total,
        }
    }

    #[test]
    fn test_year_for_month() {
        assert_eq!(ProjectionPoint::year_for_month(1), 1);
        assert_eq!(ProjectionPoint::year_for_month(12), 1);
        assert_eq!(ProjectionPoint::year_for_month(13), 2);
        assert_eq!(ProjectionPoint::year_for_month(1200), 100);
    }

    #[test]
    fn test_summary_reads_last_point() {
        let points = vec![
            point(1, 1100.0, 10.0, 1110.0),
            point(2, 1200.0, 21.1, 1221.1),
        ];
        let summary = ProjectionSummary::from_points(&points).unwrap();

        assert_eq!(summary.months, 2);
        assert_eq!(summary.years, 1);
        assert_eq!(summary.total_invested, 1200.0);
        assert_eq!(summary.interest_earned, 21.1);
        assert_eq!(summary.final_balance, 1221.1);
    }

    #[test]
    fn test_summary_empty_or_invalid() {
        assert!(ProjectionSummary::from_points(&[]).is_none());

        let points = vec![point(1, 100.0, f64::NAN, 100.0)];
        assert!(ProjectionSummary::from_points(&points).is_none());
    }

    #[test]
    fn test_interest_share() {
        let points = vec![point(12, 1000.0, 100.0, 1100.0)];
        let summary = ProjectionSummary::from_points(&points).unwrap();
        assert!((summary.interest_share() - 100.0 / 1100.0).abs() < 1e-12);

        let empty = ProjectionSummary {
            months: 1,
            years: 1,
            total_invested: 0.0,
            interest_earned: 0.0,
            final_balance: 0.0,
        };
        assert_eq!(empty.interest_share(), 0.0);
    }

    #[test]
    fn test_serializes_field_names() {
        let json = serde_json::to_value(point(13, 1.5, 0.25, 1.75)).unwrap();
        assert_eq!(json["month"], 13);
        assert_eq!(json["year"], 2);
        assert_eq!(json["principal"], 1.5);
        assert_eq!(json["interest"], 0.25);
        assert_eq!(json["total"], 1.75);
    }
}
