//! Person identifiers and directed preference edges.

use std::fmt;

/// Weight used when a preference row does not carry one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Dense index of a person within a validated population.
///
/// Ids are assigned in declaration order, `0..num_people`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(pub usize);

impl PersonId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A directed, weighted statement that `source` wants to sit with `target`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

impl PreferenceEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}
