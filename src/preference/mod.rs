//! Preference model.
//!
//! Raw directed preference edges are validated and folded into a symmetric
//! desired-weight function over unordered person pairs. When both directions
//! of a pair are declared, the desired weight is their arithmetic mean, so a
//! reciprocated preference is not rewarded twice relative to a one-sided one.

mod model;
mod types;

pub use model::PreferenceModel;
pub use types::{PersonId, PreferenceEdge, DEFAULT_WEIGHT};
