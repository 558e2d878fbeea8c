//! Adaptive Simulated Annealing for table allocation.
//!
//! A single-solution trajectory search that accepts worsening moves with
//! the Metropolis probability `exp(delta / T)`. Instead of following a fixed
//! cooling schedule, the temperature is steered by the acceptance rate over
//! a sliding window: cooled when moves pass too easily, reheated (up to the
//! initial temperature) when the search freezes.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Ingber (1989), "Very Fast Simulated Re-Annealing"

mod config;
mod restarts;
mod runner;
mod window;

pub use config::AnnealConfig;
pub use restarts::RestartRunner;
pub use runner::{AnnealResult, Annealer, Phase, SearchState, Step, TerminationReason};
pub use window::AcceptanceWindow;
