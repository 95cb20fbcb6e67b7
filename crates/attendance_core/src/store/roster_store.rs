//! Roster store with a single mutation entry point.
//!
//! # Responsibility
//! - Hold the ordered roster owned by one component instance.
//! - Apply status changes by replacing one person's status in place.
//! - Recompute aggregate counts from the current roster on every read.
//!
//! # Invariants
//! - Person ids are unique; insertion order is display order.
//! - An unknown id passed to `set_status` leaves the roster untouched.
//! - `total == present + absent + unmarked` for every `RosterCounts`.

use crate::model::person::{AttendanceStatus, Mark, Person, PersonId};
use crate::store::seed::seed_people;
use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced while building a roster from caller data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Two people share the same id.
    DuplicateId(PersonId),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate person id: {id}"),
        }
    }
}

impl Error for RosterError {}

/// Aggregate counts derived from one roster state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterCounts {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub unmarked: usize,
}

/// Ephemeral roster state for one component instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStore {
    people: Vec<Person>,
}

impl RosterStore {
    /// Creates a store holding the fixed seed roster.
    pub fn seeded() -> Self {
        Self {
            people: seed_people(),
        }
    }

    /// Creates a store from caller-provided people, keeping their order.
    ///
    /// # Errors
    /// - `RosterError::DuplicateId` when two people share an id.
    pub fn from_people(people: Vec<Person>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(people.len());
        for person in &people {
            if !seen.insert(person.id) {
                return Err(RosterError::DuplicateId(person.id));
            }
        }
        Ok(Self { people })
    }

    /// Sets one person's status.
    ///
    /// Returns `true` when `id` matched a person. An unknown id is silently
    /// ignored and returns `false`; it is never an error.
    pub fn set_status(&mut self, id: PersonId, mark: Mark) -> bool {
        match self.people.iter_mut().find(|person| person.id == id) {
            Some(person) => {
                let previous = person.status;
                person.status = AttendanceStatus::from(mark);
                debug!(
                    "event=set_status module=store status=ok person_id={} from={} to={}",
                    id,
                    previous,
                    person.status
                );
                true
            }
            None => {
                debug!(
                    "event=set_status module=store status=ignored person_id={} to={}",
                    id,
                    mark.as_str()
                );
                false
            }
        }
    }

    /// People in display order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Looks up one person by id.
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Number of people with `status`.
    pub fn count_with(&self, status: AttendanceStatus) -> usize {
        self.people
            .iter()
            .filter(|person| person.status == status)
            .count()
    }

    /// Recomputes all aggregate counts from the current roster.
    pub fn counts(&self) -> RosterCounts {
        RosterCounts {
            total: self.len(),
            present: self.count_with(AttendanceStatus::Present),
            absent: self.count_with(AttendanceStatus::Absent),
            unmarked: self.count_with(AttendanceStatus::Unmarked),
        }
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::seeded()
    }
}
