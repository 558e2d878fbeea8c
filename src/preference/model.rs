//! Symmetric desired weights built from validated edges.

use super::types::{PersonId, PreferenceEdge};
use crate::error::{Result, SeatingError};
use std::collections::HashMap;

/// Undirected desired weights over all person pairs.
///
/// Stored as one adjacency list per person, sorted by neighbor id, so memory
/// grows with the number of edges rather than the square of the population.
/// Pairs without an edge in either direction have weight 0 and never
/// contribute to satisfaction.
#[derive(Debug, Clone)]
pub struct PreferenceModel {
    num_people: usize,
    neighbors: Vec<Vec<(PersonId, f64)>>,
    index: HashMap<String, PersonId>,
    max_satisfaction: f64,
    pair_count: usize,
}

impl PreferenceModel {
    /// Validates `people` and `edges` and builds the model.
    ///
    /// Checks run in declaration order and stop at the first offending item:
    /// duplicate people, then per edge unknown endpoints, self-preference,
    /// non-positive weight and duplicate ordered pair.
    pub fn build(people: &[String], edges: &[PreferenceEdge]) -> Result<Self> {
        let num_people = people.len();
        let mut index = HashMap::with_capacity(num_people);
        for (i, name) in people.iter().enumerate() {
            if index.insert(name.clone(), PersonId(i)).is_some() {
                return Err(SeatingError::DuplicatePerson {
                    person: name.clone(),
                });
            }
        }

        let mut directed: HashMap<(usize, usize), f64> = HashMap::with_capacity(edges.len());
        let mut order = Vec::with_capacity(edges.len());
        for edge in edges {
            let source = lookup(&index, &edge.source)?;
            let target = lookup(&index, &edge.target)?;
            if source == target {
                return Err(SeatingError::SelfPreference {
                    person: edge.source.clone(),
                });
            }
            if !(edge.weight.is_finite() && edge.weight > 0.0) {
                return Err(SeatingError::NonPositiveWeight {
                    from: edge.source.clone(),
                    to: edge.target.clone(),
                    weight: edge.weight,
                });
            }
            let key = (source.index(), target.index());
            if directed.insert(key, edge.weight).is_some() {
                return Err(SeatingError::DuplicateEdge {
                    from: edge.source.clone(),
                    to: edge.target.clone(),
                });
            }
            order.push(key);
        }

        let mut neighbors: Vec<Vec<(PersonId, f64)>> = vec![Vec::new(); num_people];
        let mut max_satisfaction = 0.0;
        let mut pair_count = 0;
        for &(s, t) in &order {
            let forward = directed[&(s, t)];
            let desired = match directed.get(&(t, s)) {
                // The reciprocal edge is folded in when the smaller id comes first.
                Some(_) if s > t => continue,
                Some(&backward) => (forward + backward) / 2.0,
                None => forward,
            };
            neighbors[s].push((PersonId(t), desired));
            neighbors[t].push((PersonId(s), desired));
            max_satisfaction += desired;
            pair_count += 1;
        }
        for list in &mut neighbors {
            list.sort_unstable_by_key(|&(q, _)| q);
        }

        Ok(Self {
            num_people,
            neighbors,
            index,
            max_satisfaction,
            pair_count,
        })
    }

    /// Desired weight of the unordered pair `{p, q}`; 0 when `p == q`.
    ///
    /// Binary search over the shorter of the two adjacency lists.
    pub fn desired_weight(&self, p: PersonId, q: PersonId) -> f64 {
        let (from, to) = if self.neighbors[p.index()].len() <= self.neighbors[q.index()].len() {
            (p, q)
        } else {
            (q, p)
        };
        let list = &self.neighbors[from.index()];
        match list.binary_search_by_key(&to, |&(x, _)| x) {
            Ok(i) => list[i].1,
            Err(_) => 0.0,
        }
    }

    /// Everyone `person` has a positive desired weight with, sorted by id.
    #[inline]
    pub fn neighbors(&self, person: PersonId) -> &[(PersonId, f64)] {
        &self.neighbors[person.index()]
    }

    /// Sum of desired weights over every pair with at least one edge.
    ///
    /// Ignores table capacity, so it is an upper bound that may not be
    /// achievable.
    pub fn max_satisfaction(&self) -> f64 {
        self.max_satisfaction
    }

    pub fn num_people(&self) -> usize {
        self.num_people
    }

    /// Number of unordered pairs with a positive desired weight.
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn person_id(&self, name: &str) -> Option<PersonId> {
        self.index.get(name).copied()
    }

    /// Iterates `(p, q, weight)` over weighted pairs with `p < q`.
    pub fn pairs(&self) -> impl Iterator<Item = (PersonId, PersonId, f64)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(p, list)| {
            list.iter()
                .filter(move |&&(q, _)| q.index() > p)
                .map(move |&(q, w)| (PersonId(p), q, w))
        })
    }
}

fn lookup(index: &HashMap<String, PersonId>, name: &str) -> Result<PersonId> {
    index
        .get(name)
        .copied()
        .ok_or_else(|| SeatingError::UnknownPerson {
            person: name.to_string(),
        })
}
