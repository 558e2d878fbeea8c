//! Partition of people into capacity-bounded tables.

use super::moves::Move;
use crate::preference::PersonId;
use crate::problem::TableLayout;
use rand::seq::SliceRandom;
use rand::Rng;

/// Marks a table that is not in the open-table list.
const NOT_OPEN: usize = usize::MAX;

/// Assignment of every person to exactly one table.
///
/// Keeps three mirrored views so that every query and every move is O(1):
/// `table_of[p]` (person to table), `seats[t]` (occupants of table `t`) and
/// `position[p]` (index of `p` inside `seats[table_of[p]]`). Tables with a
/// free seat are kept in an indexed list and non-empty tables are counted,
/// so move proposals never scan the layout.
///
/// `Clone` is a deep copy; the annealer uses it to snapshot the best state.
#[derive(Debug, Clone)]
pub struct Allocation {
    table_of: Vec<usize>,
    position: Vec<usize>,
    seats: Vec<Vec<PersonId>>,
    table_size: usize,
    open: Vec<usize>,
    open_slot: Vec<usize>,
    occupied: usize,
}

impl Allocation {
    /// Uniformly random permutation of people dealt left-to-right into
    /// tables, filling each table up to capacity before moving on.
    ///
    /// The layout must already be validated against `num_people`.
    pub fn random<R: Rng>(num_people: usize, layout: TableLayout, rng: &mut R) -> Self {
        let mut order: Vec<PersonId> = (0..num_people).map(PersonId).collect();
        order.shuffle(rng);

        let mut seats = empty_tables(layout.num_tables);
        for (table, chunk) in seats.iter_mut().zip(order.chunks(layout.table_size)) {
            table.extend_from_slice(chunk);
        }
        Self::from_seats(num_people, layout.table_size, seats)
    }

    /// Builds an allocation from an explicit person-to-table assignment.
    ///
    /// Returns `None` if a table index is out of range or a table would
    /// exceed its capacity.
    pub fn from_assignment(layout: TableLayout, table_of: &[usize]) -> Option<Self> {
        let mut seats = empty_tables(layout.num_tables);
        for (person, &table) in table_of.iter().enumerate() {
            let occupants: &mut Vec<PersonId> = seats.get_mut(table)?;
            if occupants.len() >= layout.table_size {
                return None;
            }
            occupants.push(PersonId(person));
        }
        Some(Self::from_seats(table_of.len(), layout.table_size, seats))
    }

    fn from_seats(num_people: usize, table_size: usize, seats: Vec<Vec<PersonId>>) -> Self {
        let mut table_of = vec![0; num_people];
        let mut position = vec![0; num_people];
        let mut open = Vec::new();
        let mut open_slot = vec![NOT_OPEN; seats.len()];
        let mut occupied = 0;
        for (t, occupants) in seats.iter().enumerate() {
            for (i, p) in occupants.iter().enumerate() {
                table_of[p.index()] = t;
                position[p.index()] = i;
            }
            if occupants.len() < table_size {
                open_slot[t] = open.len();
                open.push(t);
            }
            if !occupants.is_empty() {
                occupied += 1;
            }
        }
        Self {
            table_of,
            position,
            seats,
            table_size,
            open,
            open_slot,
            occupied,
        }
    }

    #[inline]
    pub fn table_of(&self, person: PersonId) -> usize {
        self.table_of[person.index()]
    }

    #[inline]
    pub fn occupancy(&self, table: usize) -> usize {
        self.seats[table].len()
    }

    #[inline]
    pub fn occupants(&self, table: usize) -> &[PersonId] {
        &self.seats[table]
    }

    #[inline]
    pub fn has_free_seat(&self, table: usize) -> bool {
        self.seats[table].len() < self.table_size
    }

    /// Tables with at least one free seat, in no particular order.
    #[inline]
    pub fn open_tables(&self) -> &[usize] {
        &self.open
    }

    /// Index of `table` inside [`open_tables`](Self::open_tables).
    #[inline]
    pub fn open_slot(&self, table: usize) -> Option<usize> {
        let slot = self.open_slot[table];
        (slot != NOT_OPEN).then_some(slot)
    }

    /// Number of tables with at least one occupant.
    #[inline]
    pub fn occupied_tables(&self) -> usize {
        self.occupied
    }

    pub fn num_tables(&self) -> usize {
        self.seats.len()
    }

    pub fn num_people(&self) -> usize {
        self.table_of.len()
    }

    pub fn table_size(&self) -> usize {
        self.table_size
    }

    /// Occupant lists indexed by table.
    pub fn tables(&self) -> &[Vec<PersonId>] {
        &self.seats
    }

    /// The `k`-th person (in table order) not seated at `table`.
    pub(crate) fn nth_outside(&self, table: usize, mut k: usize) -> PersonId {
        for (t, occupants) in self.seats.iter().enumerate() {
            if t == table {
                continue;
            }
            if k < occupants.len() {
                return occupants[k];
            }
            k -= occupants.len();
        }
        unreachable!("nth_outside index exceeds the population outside table {table}")
    }

    /// Commits a move produced by [`MoveGenerator`](super::MoveGenerator).
    ///
    /// The move must already be capacity-preserving; this never fails.
    pub fn apply(&mut self, mv: Move) {
        match mv {
            Move::Swap { a, b } => {
                let (ta, tb) = (self.table_of(a), self.table_of(b));
                let (pa, pb) = (self.position[a.index()], self.position[b.index()]);
                self.seats[ta][pa] = b;
                self.seats[tb][pb] = a;
                self.table_of[a.index()] = tb;
                self.table_of[b.index()] = ta;
                self.position[a.index()] = pb;
                self.position[b.index()] = pa;
            }
            Move::Relocate { person, to } => {
                debug_assert!(self.has_free_seat(to));
                let from = self.table_of(person);
                if !self.has_free_seat(from) {
                    self.open_table(from);
                }
                let pos = self.position[person.index()];
                self.seats[from].swap_remove(pos);
                if let Some(&moved) = self.seats[from].get(pos) {
                    self.position[moved.index()] = pos;
                }
                if self.seats[from].is_empty() {
                    self.occupied -= 1;
                }

                if self.seats[to].is_empty() {
                    self.occupied += 1;
                }
                self.position[person.index()] = self.seats[to].len();
                self.seats[to].push(person);
                self.table_of[person.index()] = to;
                if !self.has_free_seat(to) {
                    self.close_table(to);
                }
            }
        }
    }

    fn open_table(&mut self, table: usize) {
        self.open_slot[table] = self.open.len();
        self.open.push(table);
    }

    fn close_table(&mut self, table: usize) {
        let slot = self.open_slot[table];
        self.open.swap_remove(slot);
        if let Some(&moved) = self.open.get(slot) {
            self.open_slot[moved] = slot;
        }
        self.open_slot[table] = NOT_OPEN;
    }

    /// Checks the capacity invariant and that all views agree.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.num_people()];
        for (t, occupants) in self.seats.iter().enumerate() {
            if occupants.len() > self.table_size {
                return false;
            }
            let listed = self.open_slot(t).is_some_and(|slot| self.open.get(slot) == Some(&t));
            if listed != self.has_free_seat(t) {
                return false;
            }
            for (i, p) in occupants.iter().enumerate() {
                let idx = p.index();
                if idx >= seen.len() || seen[idx] {
                    return false;
                }
                seen[idx] = true;
                if self.table_of[idx] != t || self.position[idx] != i {
                    return false;
                }
            }
        }
        let occupied = self.seats.iter().filter(|o| !o.is_empty()).count();
        let open = self.seats.iter().filter(|o| o.len() < self.table_size).count();
        occupied == self.occupied && open == self.open.len() && seen.into_iter().all(|s| s)
    }
}

/// Table lists start unallocated; they grow only as people are seated.
fn empty_tables(num_tables: usize) -> Vec<Vec<PersonId>> {
    let mut seats = Vec::with_capacity(num_tables);
    seats.resize_with(num_tables, Vec::new);
    seats
}
