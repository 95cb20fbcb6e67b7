//! Fixed sample roster loaded at component initialization.

use crate::model::person::{Person, PersonId};

const SEED_PEOPLE: &[(PersonId, &str)] = &[
    (1, "Alex Johnson"),
    (2, "Sarah Wilson"),
    (3, "Michael Chen"),
    (4, "Emily Davis"),
    (5, "David Rodriguez"),
    (6, "Jessica Kim"),
    (7, "James Thompson"),
    (8, "Ashley Martinez"),
];

/// Returns the seed roster in display order, every person unmarked.
pub fn seed_people() -> Vec<Person> {
    SEED_PEOPLE
        .iter()
        .map(|&(id, name)| Person::new(id, name))
        .collect()
}
