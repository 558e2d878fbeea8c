//! Preference-weighted table seating optimization.
//!
//! Assigns a fixed population to equal-capacity tables so as to maximize
//! the total satisfaction of pairwise seating preferences:
//!
//! - **Preference model**: directed, weighted edges folded into a symmetric
//!   desired weight per pair (mean of both directions when reciprocated).
//! - **Allocation**: a capacity-respecting partition with O(1) lookups and
//!   O(1) swap/relocate updates.
//! - **Scorer**: total satisfaction and exact incremental deltas.
//! - **Annealer**: Simulated Annealing with temperature steered by the
//!   recent acceptance rate, tracking the best allocation seen.
//!
//! # Architecture
//!
//! Reading spreadsheets, writing results and command-line handling are left
//! to callers. They hand over a [`SeatingInput`] and receive an
//! [`AllocationReport`].
//!
//! # Examples
//!
//! ```
//! use u_seating::{allocate, AnnealConfig, Rating, SeatingInput, TableLayout};
//!
//! let people = ["Ann", "Bob", "Cid", "Dee"].map(String::from).to_vec();
//! let mut input = SeatingInput::new(people, TableLayout::new(2, 2));
//! input.add_preference("Ann", "Bob", 1.0);
//! input.add_preference("Cid", "Dee", 1.0);
//!
//! let report = allocate(&input, &AnnealConfig::default().with_seed(7)).unwrap();
//! assert_eq!(report.table_of("Ann"), report.table_of("Bob"));
//! assert_eq!(report.rating, Rating::Excellent);
//! ```

pub mod allocation;
pub mod anneal;
pub mod error;
pub mod preference;
pub mod problem;
pub mod report;
pub mod scenarios;
pub mod scoring;

pub use anneal::{AnnealConfig, AnnealResult, Annealer, RestartRunner};
pub use error::{Result, SeatingError};
pub use preference::{PersonId, PreferenceEdge, PreferenceModel};
pub use problem::{parse_preference_list, SeatingInput, SeatingProblem, TableLayout};
pub use report::{AllocationReport, Rating, TableSummary};

/// Validates `input`, runs one annealer and reports the best allocation.
///
/// Configuration errors are returned before any randomization happens.
pub fn allocate(input: &SeatingInput, config: &AnnealConfig) -> Result<AllocationReport> {
    let problem = SeatingProblem::new(input)?;
    let result = Annealer::new(&problem, config)?.run();
    Ok(AllocationReport::new(&problem, &result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_infeasible_capacity() {
        let people = (0..7).map(|i| format!("P{i}")).collect();
        let input = SeatingInput::new(people, TableLayout::new(2, 3));
        assert!(matches!(
            allocate(&input, &AnnealConfig::default()),
            Err(SeatingError::InfeasibleCapacity { .. })
        ));
    }

    #[test]
    fn test_allocate_huge_layouts() {
        let people: Vec<String> = (0..3).map(|i| format!("P{i}")).collect();
        let config = AnnealConfig::default().with_max_iterations(200).with_seed(3);

        let wide = SeatingInput::new(people.clone(), TableLayout::new(2, usize::MAX / 4));
        let report = allocate(&wide, &config).unwrap();
        assert_eq!(report.tables.len(), 2);
        assert_eq!(report.tables.iter().map(|t| t.occupancy()).sum::<usize>(), 3);

        let many = SeatingInput::new(people, TableLayout::new(usize::MAX / 4, 2));
        assert!(matches!(
            allocate(&many, &config),
            Err(SeatingError::LayoutTooLarge { .. })
        ));
    }

    #[test]
    fn test_allocate_duplicate_edge() {
        let people = vec!["Alice".to_string(), "Bob".to_string()];
        let mut input = SeatingInput::new(people, TableLayout::new(1, 2));
        input
            .add_preference("Alice", "Bob", 1.0)
            .add_preference("Bob", "Alice", 1.0)
            .add_preference("Alice", "Bob", 1.0);
        assert_eq!(
            allocate(&input, &AnnealConfig::default()).unwrap_err(),
            SeatingError::DuplicateEdge {
                from: "Alice".into(),
                to: "Bob".into()
            }
        );
    }

    #[test]
    fn test_allocate_mutual_pairs() {
        let input = scenarios::mutual_pairs(6, TableLayout::new(3, 4));
        let report = (0..8)
            .map(|i| {
                let config = AnnealConfig::default()
                    .with_max_iterations(20_000)
                    .with_seed(1_000 + i);
                allocate(&input, &config).unwrap()
            })
            .find(|r| (r.satisfaction - 6.0).abs() < 1e-12)
            .expect("some seed reaches the optimum");
        assert!((report.max_satisfaction - 6.0).abs() < 1e-12);
        assert!((report.satisfaction_rate - 100.0).abs() < 1e-9);
        assert_eq!(report.rating, Rating::Excellent);
        for k in 0..6 {
            assert_eq!(
                report.table_of(&format!("P{}", 2 * k)),
                report.table_of(&format!("P{}", 2 * k + 1))
            );
        }
    }
}
