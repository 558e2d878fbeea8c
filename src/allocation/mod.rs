//! Allocation state and the move neighborhood over it.
//!
//! An [`Allocation`] maps every person to one table without exceeding any
//! table's capacity. The [`MoveGenerator`] only produces moves that keep
//! that invariant, so [`Allocation::apply`] never has to validate.

mod moves;
mod state;

pub use moves::{Move, MoveGenerator};
pub use state::Allocation;
