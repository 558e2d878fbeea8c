//! Output contract: per-table assignment plus summary metrics.

use crate::anneal::AnnealResult;
use crate::problem::SeatingProblem;
use std::fmt;

/// Qualitative rating derived from the satisfaction rate (in percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rating {
    /// Rate above 80%.
    Excellent,
    /// Rate above 60% and at most 80%.
    Good,
    /// Rate of 60% or less; the search parameters likely need tuning.
    NeedsTuning,
}

impl Rating {
    pub fn from_rate(percent: f64) -> Self {
        if percent > 80.0 {
            Rating::Excellent
        } else if percent > 60.0 {
            Rating::Good
        } else {
            Rating::NeedsTuning
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::NeedsTuning => "Needs Review",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Members of one table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSummary {
    pub table: usize,
    /// Member names, sorted.
    pub members: Vec<String>,
}

impl TableSummary {
    pub fn occupancy(&self) -> usize {
        self.members.len()
    }
}

/// Final seating plan with its metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationReport {
    /// One entry per table, in table order; empty tables included.
    pub tables: Vec<TableSummary>,
    pub satisfaction: f64,
    pub max_satisfaction: f64,
    /// Satisfaction as a percentage of the maximum; 0 with no preferences.
    pub satisfaction_rate: f64,
    pub rating: Rating,
}

impl AllocationReport {
    pub fn new(problem: &SeatingProblem, result: &AnnealResult) -> Self {
        let tables = result
            .best
            .tables()
            .iter()
            .enumerate()
            .map(|(table, occupants)| {
                let mut members: Vec<String> = occupants
                    .iter()
                    .map(|&p| problem.name(p).to_string())
                    .collect();
                members.sort();
                TableSummary { table, members }
            })
            .collect();
        let satisfaction_rate = result.satisfaction_rate() * 100.0;

        Self {
            tables,
            satisfaction: result.best_satisfaction,
            max_satisfaction: result.max_satisfaction,
            satisfaction_rate,
            rating: Rating::from_rate(satisfaction_rate),
        }
    }

    /// Table index of the named person.
    pub fn table_of(&self, name: &str) -> Option<usize> {
        self.tables
            .iter()
            .find(|t| t.members.iter().any(|m| m == name))
            .map(|t| t.table)
    }
}

impl fmt::Display for AllocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for summary in &self.tables {
            writeln!(
                f,
                "Table {} ({} seated): {}",
                summary.table,
                summary.occupancy(),
                summary.members.join(", ")
            )?;
        }
        writeln!(f, "Total Satisfaction Score: {:.2}", self.satisfaction)?;
        writeln!(f, "Maximum Possible Score: {:.2}", self.max_satisfaction)?;
        writeln!(f, "Satisfaction Rate: {:.1}%", self.satisfaction_rate)?;
        write!(f, "Rating: {}", self.rating)
    }
}
