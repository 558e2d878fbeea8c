//! Sample seating events.
//!
//! Small, realistic inputs used by tests and benches: a wedding, a class
//! reunion, a corporate event, a school club with mixed weights, and a
//! synthetic population of mutual pairs.

use crate::preference::DEFAULT_WEIGHT;
use crate::problem::{parse_preference_list, SeatingInput, TableLayout};

/// 10 guests, 3 tables of 4. Every row has weight 2.0.
pub fn wedding() -> SeatingInput {
    let rows = [
        ("Bride", "Groom, BrideMother, BrideFather"),
        ("Groom", "Bride, GroomMother, GroomFather"),
        ("BrideMother", "Bride, BrideFather"),
        ("BrideFather", "Bride, BrideMother"),
        ("GroomMother", "Groom, GroomFather"),
        ("GroomFather", "Groom, GroomMother"),
        ("BrideSister", "Bride, BrideMother"),
        ("GroomBrother", "Groom, GroomFather"),
        ("BrideFriend", "Bride, BrideSister"),
        ("GroomFriend", "Groom, GroomBrother"),
    ];
    let people = rows.iter().map(|(p, _)| p.to_string()).collect();
    let mut input = SeatingInput::new(people, TableLayout::new(3, 4));
    for (person, cell) in rows {
        input.add_preferences(person, &parse_preference_list(cell), 2.0);
    }
    input
}

/// 14 classmates, 4 tables of 4. Everyone prefers their own group.
pub fn class_reunion() -> SeatingInput {
    grouped(
        &[
            (&["John", "Mike", "Sarah", "Tom"][..], 2.0),
            (&["Emma", "Lisa", "David", "Alex"][..], 2.0),
            (&["Sophie", "James", "Oliver"][..], 2.0),
            (&["Sam", "Peter", "Mary"][..], DEFAULT_WEIGHT),
        ],
        TableLayout::new(4, 4),
    )
}

/// 13 colleagues, 4 tables of 4. Everyone prefers their own department.
pub fn corporate_event() -> SeatingInput {
    grouped(
        &[
            (&["Alice", "Bob", "Charlie", "Diana"][..], 2.0),
            (&["Eve", "Frank", "Grace"][..], 2.0),
            (&["Henry", "Ivy", "Jack"][..], 2.0),
            (&["Karen", "Larry", "Monica"][..], 2.0),
        ],
        TableLayout::new(4, 4),
    )
}

/// 30 members, 5 tables of 6. Three cliques with weights 3, 2 and 1; the
/// remaining 20 guests state no preferences.
pub fn school_club() -> SeatingInput {
    let rows = [
        ("Alice", "Bob, Charlie, David", 3.0),
        ("Bob", "Alice, Charlie, David", 3.0),
        ("Charlie", "Alice, Bob, David", 3.0),
        ("David", "Alice, Bob, Charlie", 3.0),
        ("Eve", "Frank, Grace", 2.0),
        ("Frank", "Eve, Grace", 2.0),
        ("Grace", "Eve, Frank", 2.0),
        ("Heidi", "Ivan, Judy", 1.0),
        ("Ivan", "Heidi, Judy", 1.0),
        ("Judy", "Heidi, Ivan", 1.0),
    ];
    let mut people: Vec<String> = rows.iter().map(|(p, _, _)| p.to_string()).collect();
    people.extend((rows.len()..30).map(|i| format!("Guest{i}")));
    let mut input = SeatingInput::new(people, TableLayout::new(5, 6));
    for (person, cell, weight) in rows {
        input.add_preferences(person, &parse_preference_list(cell), weight);
    }
    input
}

/// `2 * pairs` people `P0..`, where `P{2k}` and `P{2k+1}` prefer each other
/// with weight 1.0.
pub fn mutual_pairs(pairs: usize, layout: TableLayout) -> SeatingInput {
    let people = (0..2 * pairs).map(|i| format!("P{i}")).collect();
    let mut input = SeatingInput::new(people, layout);
    for k in 0..pairs {
        let (a, b) = (format!("P{}", 2 * k), format!("P{}", 2 * k + 1));
        input.add_preference(a.clone(), b.clone(), 1.0);
        input.add_preference(b, a, 1.0);
    }
    input
}

fn grouped(groups: &[(&[&str], f64)], layout: TableLayout) -> SeatingInput {
    let people = groups
        .iter()
        .flat_map(|(members, _)| members.iter().map(|m| m.to_string()))
        .collect();
    let mut input = SeatingInput::new(people, layout);
    for &(members, weight) in groups {
        for &person in members {
            let others: Vec<&str> = members.iter().copied().filter(|&m| m != person).collect();
            input.add_preferences(person, &others, weight);
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::PersonId;
    use crate::problem::SeatingProblem;

    #[test]
    fn test_scenarios_validate() {
        for input in [wedding(), class_reunion(), corporate_event(), school_club()] {
            assert!(SeatingProblem::new(&input).is_ok());
        }
    }

    #[test]
    fn test_wedding_max_satisfaction() {
        let problem = SeatingProblem::new(&wedding()).unwrap();
        assert_eq!(problem.num_people(), 10);
        assert_eq!(problem.model().pair_count(), 15);
        assert!((problem.model().max_satisfaction() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_class_reunion_shape() {
        let problem = SeatingProblem::new(&class_reunion()).unwrap();
        assert_eq!(problem.num_people(), 14);
        // 6 + 6 + 3 pairs at 2.0, 3 pairs at 1.0.
        assert!((problem.model().max_satisfaction() - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_school_club_shape() {
        let problem = SeatingProblem::new(&school_club()).unwrap();
        assert_eq!(problem.num_people(), 30);
        assert_eq!(problem.model().pair_count(), 12);
        // 6 pairs at 3.0, 3 at 2.0, 3 at 1.0.
        assert!((problem.model().max_satisfaction() - 27.0).abs() < 1e-12);
        assert!(problem.model().neighbors(PersonId(29)).is_empty());
    }

    #[test]
    fn test_mutual_pairs_shape() {
        let problem = SeatingProblem::new(&mutual_pairs(6, TableLayout::new(3, 4))).unwrap();
        assert_eq!(problem.num_people(), 12);
        assert_eq!(problem.model().pair_count(), 6);
        assert!((problem.model().max_satisfaction() - 6.0).abs() < 1e-12);
    }
}
