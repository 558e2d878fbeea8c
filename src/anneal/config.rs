//! Annealer configuration and adaptive temperature control knobs.

use crate::error::{Result, SeatingError};

/// Configuration for the adaptive Simulated Annealing search.
///
/// Temperature is not cooled on a fixed schedule. Every
/// `adjustment_period` iterations the acceptance rate over the last
/// `window_size` proposals is compared against two thresholds:
///
/// - above `upper_acceptance`: `T *= cooling_factor`
/// - below `lower_acceptance`: `T = min(T * reheating_factor, initial_temperature)`
///
/// # Examples
///
/// ```
/// use u_seating::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_max_iterations(20_000)
///     .with_cooling_factor(0.9)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature, also the reheating cap.
    pub initial_temperature: f64,

    /// The search stops once the temperature drops to this value or below.
    pub min_temperature: f64,

    /// Hard iteration budget. Idle iterations (no feasible move) count too.
    pub max_iterations: usize,

    /// Iterations between two temperature adjustments.
    pub adjustment_period: usize,

    /// Number of most recent accept/reject outcomes used for the rate.
    pub window_size: usize,

    /// Acceptance rate above which the search is cooled.
    pub upper_acceptance: f64,

    /// Acceptance rate below which the search is reheated.
    pub lower_acceptance: f64,

    /// Multiplier in (0, 1) applied when cooling.
    pub cooling_factor: f64,

    /// Multiplier > 1 applied when reheating.
    pub reheating_factor: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Record the temperature after every iteration.
    pub record_history: bool,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 0.01,
            max_iterations: 10_000,
            adjustment_period: 100,
            window_size: 100,
            upper_acceptance: 0.3,
            lower_acceptance: 0.1,
            cooling_factor: 0.95,
            reheating_factor: 1.1,
            seed: None,
            record_history: false,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_adjustment_period(mut self, n: usize) -> Self {
        self.adjustment_period = n;
        self
    }

    pub fn with_window_size(mut self, n: usize) -> Self {
        self.window_size = n;
        self
    }

    /// Sets the lower (reheat) and upper (cool) acceptance thresholds.
    pub fn with_acceptance_band(mut self, lower: f64, upper: f64) -> Self {
        self.lower_acceptance = lower;
        self.upper_acceptance = upper;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_reheating_factor(mut self, factor: f64) -> Self {
        self.reheating_factor = factor;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(SeatingError::InvalidConfig(msg));

        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return invalid("initial_temperature must be positive".into());
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return invalid("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return invalid("min_temperature must be less than initial_temperature".into());
        }
        if self.max_iterations == 0 {
            return invalid("max_iterations must be positive".into());
        }
        if self.adjustment_period == 0 {
            return invalid("adjustment_period must be positive".into());
        }
        if self.window_size == 0 {
            return invalid("window_size must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.lower_acceptance)
            || !(0.0..=1.0).contains(&self.upper_acceptance)
            || self.lower_acceptance >= self.upper_acceptance
        {
            return invalid(format!(
                "acceptance band must satisfy 0 <= lower < upper <= 1, got [{}, {}]",
                self.lower_acceptance, self.upper_acceptance
            ));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return invalid(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            ));
        }
        if !(self.reheating_factor.is_finite() && self.reheating_factor > 1.0) {
            return invalid(format!(
                "reheating_factor must be greater than 1, got {}",
                self.reheating_factor
            ));
        }
        Ok(())
    }
}
