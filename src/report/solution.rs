//! Step-by-step seek arithmetic.
//!
//! Renders a [`SeekReport`] as two lines:
//!
//! ```text
//! (8 - 5) + (10 - 8) + (5 - 10) + (2 - 5)
//! 3 + 2 + 5 + 3 = 13
//! ```

use std::fmt;

use crate::scheduler::SeekReport;

/// Formatted arithmetic for a seek report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Signed differences, `(to - from)` per move.
    pub expression: String,
    /// Absolute step costs and their sum.
    pub arithmetic: String,
    /// Total seek.
    pub total: u64,
}

impl Solution {
    /// Builds the arithmetic for `report`.
    pub fn from_report(report: &SeekReport) -> Self {
        let expression = report
            .steps
            .iter()
            .map(|s| format!("({} - {})", s.to, s.from))
            .collect::<Vec<_>>()
            .join(" + ");

        let arithmetic = if report.steps.is_empty() {
            format!("{}", report.total)
        } else {
            let costs = report
                .steps
                .iter()
                .map(|s| s.cost.to_string())
                .collect::<Vec<_>>()
                .join(" + ");
            format!("{} = {}", costs, report.total)
        };

        Self {
            expression,
            arithmetic,
            total: report.total,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.expression.is_empty() {
            writeln!(f, "{}", self.expression)?;
        }
        write!(f, "{}", self.arithmetic)
    }
}

/// Two-line solution text for `report`.
pub fn solution_text(report: &SeekReport) -> String {
    Solution::from_report(report).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::compute_seek;

    #[test]
    fn test_scan_solution() {
        let text = solution_text(&compute_seek(&[5, 8, 10, 5, 2]));
        assert_eq!(
            text,
            "(8 - 5) + (10 - 8) + (5 - 10) + (2 - 5)\n3 + 2 + 5 + 3 = 13"
        );
    }

    #[test]
    fn test_no_moves() {
        let sol = Solution::from_report(&compute_seek(&[5]));
        assert_eq!(sol.expression, "");
        assert_eq!(sol.to_string(), "0");
    }
}
