//! Best-of-N independent restarts.
//!
//! Each restart owns its own annealer, random source and allocation, so
//! restarts share no state. With the `parallel` feature they run on rayon's
//! thread pool; otherwise sequentially.

use super::config::AnnealConfig;
use super::runner::{AnnealResult, Annealer};
use crate::error::{Result, SeatingError};
use crate::problem::SeatingProblem;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs several independent annealers and keeps the best result.
pub struct RestartRunner;

impl RestartRunner {
    /// Runs `restarts` annealers seeded `seed, seed + 1, ...`.
    ///
    /// When `config.seed` is `None` a base seed is drawn from entropy. The
    /// highest best satisfaction wins; ties go to the lowest restart index.
    pub fn run(
        problem: &SeatingProblem,
        config: &AnnealConfig,
        restarts: usize,
    ) -> Result<AnnealResult> {
        if restarts == 0 {
            return Err(SeatingError::InvalidConfig(
                "restarts must be positive".into(),
            ));
        }
        config.validate()?;
        let base = config.seed.unwrap_or_else(rand::random);

        let run_one = |i: usize| -> Result<AnnealResult> {
            let seeded = config.clone().with_seed(base.wrapping_add(i as u64));
            let result = Annealer::new(problem, &seeded)?.run();
            tracing::debug!(
                restart = i,
                best = result.best_satisfaction,
                iterations = result.iterations,
                "restart finished"
            );
            Ok(result)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<AnnealResult> = (0..restarts)
            .into_par_iter()
            .map(run_one)
            .collect::<Result<_>>()?;
        #[cfg(not(feature = "parallel"))]
        let results: Vec<AnnealResult> = (0..restarts).map(run_one).collect::<Result<_>>()?;

        let mut best: Option<AnnealResult> = None;
        for result in results {
            match &best {
                Some(current) if result.best_satisfaction <= current.best_satisfaction => {}
                _ => best = Some(result),
            }
        }
        best.ok_or_else(|| SeatingError::InvalidConfig("restarts must be positive".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::TableLayout;
    use crate::scenarios;

    #[test]
    fn test_zero_restarts_rejected() {
        let problem = SeatingProblem::new(&scenarios::wedding()).unwrap();
        let err = RestartRunner::run(&problem, &AnnealConfig::default(), 0).unwrap_err();
        assert!(matches!(err, SeatingError::InvalidConfig(_)));
    }

    #[test]
    fn test_best_of_restarts_dominates_each() {
        let problem = SeatingProblem::new(&scenarios::class_reunion()).unwrap();
        let config = AnnealConfig::default().with_max_iterations(3_000).with_seed(5);
        let best = RestartRunner::run(&problem, &config, 4).unwrap();
        for i in 0..4 {
            let single = Annealer::new(&problem, &config.clone().with_seed(5 + i))
                .unwrap()
                .run();
            assert!(best.best_satisfaction >= single.best_satisfaction);
        }
    }

    #[test]
    fn test_restarts_deterministic_with_seed() {
        let problem =
            SeatingProblem::new(&scenarios::mutual_pairs(6, TableLayout::new(3, 4))).unwrap();
        let config = AnnealConfig::default().with_max_iterations(2_000).with_seed(77);
        let a = RestartRunner::run(&problem, &config, 3).unwrap();
        let b = RestartRunner::run(&problem, &config, 3).unwrap();
        assert_eq!(a.best_satisfaction, b.best_satisfaction);
        assert_eq!(a.best.tables(), b.best.tables());
    }

    #[test]
    fn test_mutual_pairs_optimum_with_restarts() {
        let problem =
            SeatingProblem::new(&scenarios::mutual_pairs(6, TableLayout::new(3, 4))).unwrap();
        let config = AnnealConfig::default().with_max_iterations(20_000).with_seed(42);
        let result = RestartRunner::run(&problem, &config, 8).unwrap();
        assert!((result.best_satisfaction - 6.0).abs() < 1e-12);
        assert!((result.satisfaction_rate() - 1.0).abs() < 1e-12);
    }
}
