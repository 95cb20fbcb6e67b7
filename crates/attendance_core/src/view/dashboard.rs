//! Dashboard projection of one roster state.
//!
//! # Invariants
//! - `rows` follow roster display order.
//! - Every row has exactly two actions, `Present` then `Absent`.
//! - At most one action per row is highlighted; none for `Unmarked`.

use crate::model::person::{Mark, Person, PersonId};
use crate::store::roster_store::RosterStore;
use crate::view::date::{format_long_date, today};
use crate::view::widgets::{ActionButton, Icon, StatCard, StatKind, StatusBadge};
use chrono::NaiveDate;
use serde::Serialize;

pub const DASHBOARD_TITLE: &str = "Attendance Dashboard";
pub const LIST_TITLE: &str = "Mark Attendance";

/// One person row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRow {
    pub id: PersonId,
    pub name: String,
    pub initials: String,
    pub badge: StatusBadge,
    pub actions: [ActionButton; 2],
}

impl PersonRow {
    pub fn from_person(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            initials: person.initials(),
            badge: StatusBadge::for_status(person.status),
            actions: Mark::ALL.map(|mark| ActionButton::for_person(mark, person)),
        }
    }
}

/// Everything a host needs to draw the dashboard once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub date_icon: Icon,
    pub date_label: String,
    pub cards: [StatCard; 3],
    pub list_title: &'static str,
    pub rows: Vec<PersonRow>,
}

impl DashboardView {
    /// Builds the view for `store` as of `date`.
    pub fn build(store: &RosterStore, date: NaiveDate) -> Self {
        let counts = store.counts();
        let cards = StatKind::ALL.map(|kind| {
            let value = match kind {
                StatKind::Total => counts.total,
                StatKind::Present => counts.present,
                StatKind::Absent => counts.absent,
            };
            StatCard::new(kind, value)
        });

        Self {
            title: DASHBOARD_TITLE,
            date_icon: Icon::Calendar,
            date_label: format_long_date(date),
            cards,
            list_title: LIST_TITLE,
            rows: store.people().iter().map(PersonRow::from_person).collect(),
        }
    }

    /// Builds the view for `store` as of today's local date.
    pub fn render(store: &RosterStore) -> Self {
        Self::build(store, today())
    }

    /// Card for one aggregate.
    pub fn card(&self, kind: StatKind) -> &StatCard {
        match kind {
            StatKind::Total => &self.cards[0],
            StatKind::Present => &self.cards[1],
            StatKind::Absent => &self.cards[2],
        }
    }

    /// Row for one person id.
    pub fn row(&self, id: PersonId) -> Option<&PersonRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}
