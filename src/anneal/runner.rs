//! Annealer state machine.
//!
//! # Algorithm
//!
//! 1. Deal a random initial allocation, score it, snapshot it as best
//! 2. Each iteration while running:
//!    a. Propose a swap or relocate move and compute its exact delta
//!    b. Accept if `delta >= 0`, else with probability `exp(delta / T)`
//!    c. If the live allocation looks better than the best, rescore it from
//!       scratch and snapshot it if it still wins
//!    d. Every `adjustment_period` iterations, cool or reheat from the
//!       windowed acceptance rate
//! 3. Terminate when `T <= min_temperature` or the budget is spent

use super::config::AnnealConfig;
use super::window::AcceptanceWindow;
use crate::allocation::{Allocation, MoveGenerator};
use crate::error::Result;
use crate::problem::SeatingProblem;
use crate::scoring::Scorer;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Floor applied to the temperature before it divides a delta.
const TEMPERATURE_FLOOR: f64 = f64::MIN_POSITIVE;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// Temperature fell to `min_temperature` or below.
    Frozen,
    /// `max_iterations` iterations were executed.
    MaxIterations,
}

/// Lifecycle of an [`Annealer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated(TerminationReason),
}

/// Outcome of a single [`Annealer::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Accepted { delta: f64 },
    Rejected { delta: f64 },
    /// No feasible move existed; the iteration still counts.
    Idle,
    /// The annealer had already terminated; nothing happened.
    Terminated(TerminationReason),
}

/// Mutable search state, exclusively owned by one annealer.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub current: Allocation,
    pub current_satisfaction: f64,
    pub temperature: f64,
    pub best: Allocation,
    pub best_satisfaction: f64,
    pub iteration: usize,
    pub window: AcceptanceWindow,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The best allocation found.
    pub best: Allocation,

    /// Satisfaction of `best`, scored from scratch when it was snapshotted.
    pub best_satisfaction: f64,

    /// Satisfaction of the initial random allocation.
    pub initial_satisfaction: f64,

    /// Upper bound ignoring capacity; denominator of the rate.
    pub max_satisfaction: f64,

    /// Iterations executed, idle ones included.
    pub iterations: usize,

    pub accepted_moves: usize,

    /// Accepted moves with a strictly positive delta.
    pub improving_moves: usize,

    /// Iterations without any feasible move.
    pub idle_iterations: usize,

    pub final_temperature: f64,

    pub termination: TerminationReason,

    /// Best satisfaction sampled at every temperature adjustment.
    pub best_history: Vec<f64>,

    /// Temperature after every iteration, when `record_history` is set.
    pub temperature_history: Vec<f64>,
}

impl AnnealResult {
    /// `best / max` as a fraction in `[0, 1]`; 0 when no preferences exist.
    pub fn satisfaction_rate(&self) -> f64 {
        if self.max_satisfaction > 0.0 {
            self.best_satisfaction / self.max_satisfaction
        } else {
            0.0
        }
    }
}

/// Adaptive Simulated Annealing over table allocations.
///
/// The random source and configuration are owned by the instance, so
/// independent annealers share nothing and may run on separate threads.
pub struct Annealer<'p, R: Rng> {
    problem: &'p SeatingProblem,
    config: AnnealConfig,
    rng: R,
    generator: MoveGenerator,
    state: SearchState,
    phase: Phase,
    initial_satisfaction: f64,
    accepted_moves: usize,
    improving_moves: usize,
    idle_iterations: usize,
    best_history: Vec<f64>,
    temperature_history: Vec<f64>,
}

impl<'p> Annealer<'p, ChaCha8Rng> {
    /// Creates an annealer seeded from `config.seed`, or from entropy.
    pub fn new(problem: &'p SeatingProblem, config: &AnnealConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(problem, config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<'p, R: Rng> Annealer<'p, R> {
    /// Creates an annealer drawing from the given random source.
    ///
    /// The configuration is validated before the initial allocation is dealt.
    pub fn with_rng(problem: &'p SeatingProblem, config: &AnnealConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let current = Allocation::random(problem.num_people(), problem.layout(), &mut rng);
        let satisfaction = Scorer::new(problem.model()).total_satisfaction(&current);

        Ok(Self {
            problem,
            config: config.clone(),
            rng,
            generator: MoveGenerator::new(),
            state: SearchState {
                best: current.clone(),
                current,
                current_satisfaction: satisfaction,
                temperature: config.initial_temperature,
                best_satisfaction: satisfaction,
                iteration: 0,
                window: AcceptanceWindow::new(config.window_size),
            },
            phase: Phase::Running,
            initial_satisfaction: satisfaction,
            accepted_moves: 0,
            improving_moves: 0,
            idle_iterations: 0,
            best_history: vec![satisfaction],
            temperature_history: Vec::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Advances the search by exactly one iteration.
    pub fn step(&mut self) -> Step {
        if let Phase::Terminated(reason) = self.phase {
            return Step::Terminated(reason);
        }

        let scorer = Scorer::new(self.problem.model());
        let outcome = match self.generator.propose(&self.state.current, &mut self.rng) {
            None => {
                self.idle_iterations += 1;
                Step::Idle
            }
            Some(mv) => {
                let delta = scorer.delta(&self.state.current, mv);
                let accept = delta >= 0.0 || {
                    let t = self.state.temperature.max(TEMPERATURE_FLOOR);
                    self.rng.random::<f64>() < (delta / t).exp()
                };
                self.state.window.record(accept);

                if accept {
                    self.state.current.apply(mv);
                    self.state.current_satisfaction += delta;
                    self.accepted_moves += 1;
                    if delta > 0.0 {
                        self.improving_moves += 1;
                    }
                    if self.state.current_satisfaction > self.state.best_satisfaction {
                        // Rescored so the snapshot carries no accumulated drift.
                        self.state.current_satisfaction =
                            scorer.total_satisfaction(&self.state.current);
                        if self.state.current_satisfaction > self.state.best_satisfaction {
                            self.state.best.clone_from(&self.state.current);
                            self.state.best_satisfaction = self.state.current_satisfaction;
                            tracing::trace!(
                                iteration = self.state.iteration,
                                best = self.state.best_satisfaction,
                                "new best allocation"
                            );
                        }
                    }
                    Step::Accepted { delta }
                } else {
                    Step::Rejected { delta }
                }
            }
        };

        self.state.iteration += 1;
        if self.state.iteration % self.config.adjustment_period == 0 {
            self.adjust_temperature();
            self.best_history.push(self.state.best_satisfaction);
        }
        if self.config.record_history {
            self.temperature_history.push(self.state.temperature);
        }

        if self.state.temperature <= self.config.min_temperature {
            self.phase = Phase::Terminated(TerminationReason::Frozen);
        } else if self.state.iteration >= self.config.max_iterations {
            self.phase = Phase::Terminated(TerminationReason::MaxIterations);
        }
        outcome
    }

    /// Cools when moves are accepted too easily, reheats (capped at the
    /// initial temperature) when the search is frozen.
    fn adjust_temperature(&mut self) {
        let Some(rate) = self.state.window.acceptance_rate() else {
            return;
        };
        let before = self.state.temperature;
        if rate > self.config.upper_acceptance {
            self.state.temperature *= self.config.cooling_factor;
        } else if rate < self.config.lower_acceptance {
            self.state.temperature = (self.state.temperature * self.config.reheating_factor)
                .min(self.config.initial_temperature);
        }
        if self.state.temperature != before {
            tracing::debug!(
                iteration = self.state.iteration,
                acceptance_rate = rate,
                from = before,
                to = self.state.temperature,
                "temperature adjusted"
            );
        }
    }

    /// Runs until termination and returns the best allocation found.
    #[tracing::instrument(
        level = "debug",
        name = "anneal",
        skip_all,
        fields(people = self.problem.num_people(), tables = self.problem.layout().num_tables)
    )]
    pub fn run(mut self) -> AnnealResult {
        while self.phase == Phase::Running {
            self.step();
        }
        self.finish()
    }

    /// Consumes a terminated (or stopped) annealer into its result.
    pub fn finish(mut self) -> AnnealResult {
        let termination = match self.phase {
            Phase::Terminated(reason) => reason,
            Phase::Running => TerminationReason::MaxIterations,
        };
        let best_satisfaction = self.state.best_satisfaction;
        if self
            .best_history
            .last()
            .is_none_or(|&last| (last - best_satisfaction).abs() > 1e-12)
        {
            self.best_history.push(best_satisfaction);
        }

        let max_satisfaction = self.problem.model().max_satisfaction();
        tracing::info!(
            ?termination,
            iterations = self.state.iteration,
            best = best_satisfaction,
            max = max_satisfaction,
            temperature = self.state.temperature,
            "annealing finished"
        );

        AnnealResult {
            best: self.state.best,
            best_satisfaction,
            initial_satisfaction: self.initial_satisfaction,
            max_satisfaction,
            iterations: self.state.iteration,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            idle_iterations: self.idle_iterations,
            final_temperature: self.state.temperature,
            termination,
            best_history: self.best_history,
            temperature_history: self.temperature_history,
        }
    }
}
