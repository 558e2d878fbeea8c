//! Configuration errors.
//!
//! Every variant is detected before the search starts and aborts the run
//! before any randomization happens.

use thiserror::Error;

/// Errors raised while validating a seating problem or annealer configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeatingError {
    /// The tables cannot hold the whole population.
    #[error("infeasible capacity: {num_tables} tables x {table_size} seats cannot hold {num_people} people")]
    InfeasibleCapacity {
        num_tables: usize,
        table_size: usize,
        num_people: usize,
    },

    /// Zero tables or zero seats per table.
    #[error("table layout must have at least one table with at least one seat, got {num_tables} x {table_size}")]
    EmptyLayout { num_tables: usize, table_size: usize },

    /// The table list for this layout cannot be allocated.
    #[error("table layout with {num_tables} tables cannot be allocated")]
    LayoutTooLarge { num_tables: usize },

    /// The same person was declared twice in the population.
    #[error("person `{person}` is declared more than once")]
    DuplicatePerson { person: String },

    /// The same ordered (source, target) pair appears more than once.
    #[error("duplicate preference edge `{from}` -> `{to}`")]
    DuplicateEdge { from: String, to: String },

    /// A person expressed a preference for themselves.
    #[error("self-preference edge for `{person}`")]
    SelfPreference { person: String },

    /// An edge references a name outside the declared population.
    #[error("preference edge references unknown person `{person}`")]
    UnknownPerson { person: String },

    /// Weight is zero, negative, or not finite.
    #[error("preference edge `{from}` -> `{to}` has non-positive weight {weight}")]
    NonPositiveWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Annealer knobs out of range.
    #[error("invalid annealing configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SeatingError>;
