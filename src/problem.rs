//! Input contract and validated seating problem.
//!
//! [`SeatingInput`] is the plain data handed over by whatever reads the
//! event description (spreadsheet, JSON, test fixture). [`SeatingProblem`]
//! is the validated, immutable form the annealer runs on.

use crate::error::{Result, SeatingError};
use crate::preference::{PersonId, PreferenceEdge, PreferenceModel};

/// Uniform table layout: `num_tables` tables of `table_size` seats each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableLayout {
    pub num_tables: usize,
    pub table_size: usize,
}

impl TableLayout {
    pub fn new(num_tables: usize, table_size: usize) -> Self {
        Self {
            num_tables,
            table_size,
        }
    }

    /// Total number of seats.
    pub fn capacity(&self) -> usize {
        self.num_tables.saturating_mul(self.table_size)
    }

    /// Checks that the layout is non-empty, can seat `num_people` and that
    /// its table list fits in memory.
    pub fn validate(&self, num_people: usize) -> Result<()> {
        if self.num_tables == 0 || self.table_size == 0 {
            return Err(SeatingError::EmptyLayout {
                num_tables: self.num_tables,
                table_size: self.table_size,
            });
        }
        if self.capacity() < num_people {
            return Err(SeatingError::InfeasibleCapacity {
                num_tables: self.num_tables,
                table_size: self.table_size,
                num_people,
            });
        }
        let mut tables: Vec<Vec<PersonId>> = Vec::new();
        tables
            .try_reserve_exact(self.num_tables)
            .map_err(|_| SeatingError::LayoutTooLarge {
                num_tables: self.num_tables,
            })?;
        Ok(())
    }
}

/// Raw, unvalidated description of a seating event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatingInput {
    pub people: Vec<String>,
    pub layout: TableLayout,
    pub preferences: Vec<PreferenceEdge>,
}

impl SeatingInput {
    pub fn new(people: Vec<String>, layout: TableLayout) -> Self {
        Self {
            people,
            layout,
            preferences: Vec::new(),
        }
    }

    /// Adds a single directed edge.
    pub fn add_preference(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f64,
    ) -> &mut Self {
        self.preferences
            .push(PreferenceEdge::new(source, target, weight));
        self
    }

    /// Adds one edge from `person` to each of `targets`, all with `weight`.
    pub fn add_preferences<S: AsRef<str>>(
        &mut self,
        person: &str,
        targets: &[S],
        weight: f64,
    ) -> &mut Self {
        for target in targets {
            self.preferences
                .push(PreferenceEdge::new(person, target.as_ref(), weight));
        }
        self
    }
}

/// Splits a comma-separated preference cell such as `"Groom, BrideMother"`.
///
/// Names are trimmed and blank entries are skipped.
pub fn parse_preference_list(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// A fully validated seating problem.
#[derive(Debug, Clone)]
pub struct SeatingProblem {
    people: Vec<String>,
    layout: TableLayout,
    model: PreferenceModel,
}

impl SeatingProblem {
    /// Validates the input: layout and capacity first, then the population
    /// and the preference edges.
    pub fn new(input: &SeatingInput) -> Result<Self> {
        input.layout.validate(input.people.len())?;
        let model = PreferenceModel::build(&input.people, &input.preferences)?;
        Ok(Self {
            people: input.people.clone(),
            layout: input.layout,
            model,
        })
    }

    pub fn people(&self) -> &[String] {
        &self.people
    }

    pub fn num_people(&self) -> usize {
        self.people.len()
    }

    pub fn name(&self, person: PersonId) -> &str {
        &self.people[person.index()]
    }

    pub fn layout(&self) -> TableLayout {
        self.layout
    }

    pub fn model(&self) -> &PreferenceModel {
        &self.model
    }
}
