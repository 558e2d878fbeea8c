//! Capacity-preserving neighborhood moves.

use super::state::Allocation;
use crate::preference::PersonId;
use rand::Rng;

/// A proposed modification of an [`Allocation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Exchange two people seated at different tables.
    Swap { a: PersonId, b: PersonId },
    /// Move one person to another table with a free seat.
    Relocate { person: PersonId, to: usize },
}

/// Uniform draws tried before falling back to an exact O(tables) draw.
const SAMPLING_ATTEMPTS: usize = 8;

/// Proposes swap or relocate moves, each kind with probability 1/2.
///
/// If the drawn kind has no feasible instance the other kind is tried; if
/// neither is feasible [`propose`](Self::propose) returns `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn propose<R: Rng>(&self, alloc: &Allocation, rng: &mut R) -> Option<Move> {
        if alloc.num_people() == 0 {
            return None;
        }
        if rng.random_bool(0.5) {
            self.swap(alloc, rng).or_else(|| self.relocate(alloc, rng))
        } else {
            self.relocate(alloc, rng).or_else(|| self.swap(alloc, rng))
        }
    }

    /// Uniform over ordered pairs `(a, b)` seated at different tables.
    ///
    /// Draws two people uniformly and keeps them if they sit apart. After
    /// [`SAMPLING_ATTEMPTS`] misses the pair is drawn exactly instead, so the
    /// result is uniform either way.
    pub fn swap<R: Rng>(&self, alloc: &Allocation, rng: &mut R) -> Option<Move> {
        if alloc.occupied_tables() < 2 {
            return None;
        }
        let n = alloc.num_people();
        for _ in 0..SAMPLING_ATTEMPTS {
            let a = PersonId(rng.random_range(0..n));
            let b = PersonId(rng.random_range(0..n));
            if alloc.table_of(a) != alloc.table_of(b) {
                return Some(Move::Swap { a, b });
            }
        }
        Some(weighted_swap(alloc, rng))
    }

    /// Uniform person among those who can move, then a uniform open table
    /// other than their own.
    pub fn relocate<R: Rng>(&self, alloc: &Allocation, rng: &mut R) -> Option<Move> {
        let n = alloc.num_people();
        if n == 0 {
            return None;
        }

        match alloc.open_tables() {
            [] => None,
            &[only] => {
                let outside = n - alloc.occupancy(only);
                if outside == 0 {
                    return None;
                }
                for _ in 0..SAMPLING_ATTEMPTS {
                    let person = PersonId(rng.random_range(0..n));
                    if alloc.table_of(person) != only {
                        return Some(Move::Relocate { person, to: only });
                    }
                }
                let person = alloc.nth_outside(only, rng.random_range(0..outside));
                Some(Move::Relocate { person, to: only })
            }
            open => {
                let person = PersonId(rng.random_range(0..n));
                let to = match alloc.open_slot(alloc.table_of(person)) {
                    Some(own) => {
                        let i = rng.random_range(0..open.len() - 1);
                        open[if i >= own { i + 1 } else { i }]
                    }
                    None => open[rng.random_range(0..open.len())],
                };
                Some(Move::Relocate { person, to })
            }
        }
    }
}

/// Exact uniform draw over cross-table pairs: the first table is drawn with
/// weight `occ * (n - occ)`.
fn weighted_swap<R: Rng>(alloc: &Allocation, rng: &mut R) -> Move {
    let n = alloc.num_people();
    let weight = |t: usize| {
        let occ = alloc.occupancy(t);
        occ * (n - occ)
    };
    let total: usize = (0..alloc.num_tables()).map(weight).sum();

    let mut r = rng.random_range(0..total);
    let mut first = 0;
    for t in 0..alloc.num_tables() {
        let w = weight(t);
        if r < w {
            first = t;
            break;
        }
        r -= w;
    }

    let occupants = alloc.occupants(first);
    let a = occupants[rng.random_range(0..occupants.len())];
    let b = alloc.nth_outside(first, rng.random_range(0..n - occupants.len()));
    Move::Swap { a, b }
}
