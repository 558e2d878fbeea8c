//! Satisfaction scoring, from scratch and incrementally.

use crate::allocation::{Allocation, Move};
use crate::preference::{PersonId, PreferenceModel};

/// Scores allocations against a [`PreferenceModel`].
///
/// Satisfaction is the sum of desired weights over every unordered pair
/// seated at the same table. Higher is better.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    model: &'a PreferenceModel,
}

impl<'a> Scorer<'a> {
    pub fn new(model: &'a PreferenceModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &'a PreferenceModel {
        self.model
    }

    /// Total satisfaction, summing over all pairs within each table.
    pub fn total_satisfaction(&self, alloc: &Allocation) -> f64 {
        (0..alloc.num_tables())
            .map(|table| {
                alloc
                    .occupants(table)
                    .iter()
                    .map(|&p| self.contribution(alloc, p, table, p))
                    .sum::<f64>()
                    / 2.0
            })
            .sum()
    }

    /// Change in total satisfaction that applying `mv` would cause.
    ///
    /// Only the tables touched by the move are visited.
    pub fn delta(&self, alloc: &Allocation, mv: Move) -> f64 {
        match mv {
            Move::Swap { a, b } => {
                let (ta, tb) = (alloc.table_of(a), alloc.table_of(b));
                debug_assert_ne!(ta, tb, "swap within one table");
                // `a` and `b` sit apart both before and after the swap, so
                // their mutual weight never enters the delta.
                self.contribution(alloc, b, ta, a) - self.contribution(alloc, a, ta, a)
                    + self.contribution(alloc, a, tb, b)
                    - self.contribution(alloc, b, tb, b)
            }
            Move::Relocate { person, to } => {
                let from = alloc.table_of(person);
                self.contribution(alloc, person, to, person)
                    - self.contribution(alloc, person, from, person)
            }
        }
    }

    /// Sum of `person`'s desired weights to the occupants of `table`, not
    /// counting `person` or `skip`.
    ///
    /// Walks whichever is shorter: the table or the person's neighbors.
    fn contribution(
        &self,
        alloc: &Allocation,
        person: PersonId,
        table: usize,
        skip: PersonId,
    ) -> f64 {
        let occupants = alloc.occupants(table);
        let neighbors = self.model.neighbors(person);
        if neighbors.len() < occupants.len() {
            neighbors
                .iter()
                .filter(|&&(q, _)| q != skip && alloc.table_of(q) == table)
                .map(|&(_, w)| w)
                .sum()
        } else {
            occupants
                .iter()
                .filter(|&&x| x != person && x != skip)
                .map(|&x| self.model.desired_weight(person, x))
                .sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::MoveGenerator;
    use crate::preference::PreferenceEdge;
    use crate::problem::TableLayout;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn model_from(n: usize, edges: &[(usize, usize, f64)]) -> PreferenceModel {
        let people: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
        let edges: Vec<PreferenceEdge> = edges
            .iter()
            .map(|&(s, t, w)| PreferenceEdge::new(format!("P{s}"), format!("P{t}"), w))
            .collect();
        PreferenceModel::build(&people, &edges).unwrap()
    }

    #[test]
    fn test_total_counts_only_co_seated_pairs() {
        let model = model_from(4, &[(0, 1, 1.0), (1, 0, 3.0), (2, 3, 0.5), (0, 2, 4.0)]);
        let alloc = Allocation::from_assignment(TableLayout::new(2, 2), &[0, 0, 1, 1]).unwrap();
        let scorer = Scorer::new(&model);
        assert!((scorer.total_satisfaction(&alloc) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_swap_delta_with_mutual_pair() {
        // 0 and 2 like each other but sit apart both before and after.
        let model = model_from(4, &[(0, 2, 5.0), (2, 0, 5.0), (0, 3, 1.0), (2, 1, 2.0)]);
        let scorer = Scorer::new(&model);
        let mut alloc =
            Allocation::from_assignment(TableLayout::new(2, 2), &[0, 0, 1, 1]).unwrap();
        let mv = Move::Swap {
            a: PersonId(0),
            b: PersonId(2),
        };
        let before = scorer.total_satisfaction(&alloc);
        let delta = scorer.delta(&alloc, mv);
        alloc.apply(mv);
        let after = scorer.total_satisfaction(&alloc);
        assert!((delta - (after - before)).abs() < 1e-12);
        assert!((delta - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_relocate_delta() {
        let model = model_from(3, &[(0, 1, 2.0), (0, 2, 1.0)]);
        let scorer = Scorer::new(&model);
        let alloc = Allocation::from_assignment(TableLayout::new(2, 3), &[0, 0, 1]).unwrap();
        let delta = scorer.delta(
            &alloc,
            Move::Relocate {
                person: PersonId(0),
                to: 1,
            },
        );
        assert!((delta - (1.0 - 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_occupant_and_neighbor_walks_agree() {
        // P0 likes one person at a crowded table; P1 likes everyone there.
        let mut edges = vec![(0, 5, 1.5)];
        edges.extend((2..8).map(|t| (1, t, 0.5)));
        let model = model_from(8, &edges);
        let scorer = Scorer::new(&model);
        let alloc =
            Allocation::from_assignment(TableLayout::new(2, 6), &[0, 1, 1, 1, 1, 1, 1, 0]).unwrap();
        let delta = scorer.delta(
            &alloc,
            Move::Swap {
                a: PersonId(0),
                b: PersonId(1),
            },
        );
        // P0 gains 1.5 at table 1, P1 gains 0.5 (P7) and loses 2.5 (P2..P6).
        assert!((delta - (1.5 + 0.5 - 2.5)).abs() < 1e-12);
        assert!((scorer.total_satisfaction(&alloc) - 2.5).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_delta_matches_recompute(
            seed in any::<u64>(),
            num_tables in 2usize..5,
            table_size in 1usize..5,
            density in 0.0f64..1.0,
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let capacity = num_tables * table_size;
            let n = rng.random_range(0..=capacity);
            let mut edges = Vec::new();
            for s in 0..n {
                for t in 0..n {
                    if s != t && rng.random_bool(density) {
                        edges.push((s, t, rng.random_range(0.1..5.0)));
                    }
                }
            }
            let model = model_from(n, &edges);
            let scorer = Scorer::new(&model);
            let mut alloc = Allocation::random(n, TableLayout::new(num_tables, table_size), &mut rng);
            let generator = MoveGenerator::new();
            for _ in 0..50 {
                let Some(mv) = generator.propose(&alloc, &mut rng) else { break };
                let before = scorer.total_satisfaction(&alloc);
                let delta = scorer.delta(&alloc, mv);
                alloc.apply(mv);
                let after = scorer.total_satisfaction(&alloc);
                prop_assert!((delta - (after - before)).abs() < 1e-9,
                    "delta {} != recomputed {}", delta, after - before);
            }
        }
    }
}
