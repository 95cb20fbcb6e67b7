//! Rendering primitive descriptors: cards, badges, buttons and icons.
//!
//! These carry no drawing logic. Each host maps them onto its own toolkit.

use crate::model::person::{AttendanceStatus, Mark, Person};
use serde::Serialize;

/// Iconography used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Calendar,
    Users,
    CheckCircle,
    XCircle,
}

impl Icon {
    /// Single-cell glyph for text hosts.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Calendar => "◷",
            Self::Users => "●",
            Self::CheckCircle => "✔",
            Self::XCircle => "✘",
        }
    }
}

/// Color role shared by cards, badges and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Primary,
    Success,
    Destructive,
}

/// Which aggregate a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Total,
    Present,
    Absent,
}

impl StatKind {
    pub const ALL: [StatKind; 3] = [StatKind::Total, StatKind::Present, StatKind::Absent];

    pub fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Total => Icon::Users,
            Self::Present => Icon::CheckCircle,
            Self::Absent => Icon::XCircle,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Total => Tone::Primary,
            Self::Present => Tone::Success,
            Self::Absent => Tone::Destructive,
        }
    }
}

/// One aggregate card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub kind: StatKind,
    pub label: &'static str,
    pub value: usize,
    pub icon: Icon,
    pub tone: Tone,
}

impl StatCard {
    pub fn new(kind: StatKind, value: usize) -> Self {
        Self {
            kind,
            label: kind.label(),
            value,
            icon: kind.icon(),
            tone: kind.tone(),
        }
    }
}

/// Badge visual variant. Exactly one per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Outline,
    Success,
    Destructive,
}

/// Labeled status badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub variant: BadgeVariant,
}

impl StatusBadge {
    pub fn for_status(status: AttendanceStatus) -> Self {
        let variant = match status {
            AttendanceStatus::Unmarked => BadgeVariant::Outline,
            AttendanceStatus::Present => BadgeVariant::Success,
            AttendanceStatus::Absent => BadgeVariant::Destructive,
        };
        Self {
            label: status.label(),
            variant,
        }
    }
}

/// Button visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    Outline,
    Success,
    Destructive,
}

/// One clickable action; activating it means `set_status(row.id, mark)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub label: &'static str,
    pub mark: Mark,
    pub icon: Icon,
    pub highlighted: bool,
    pub variant: ButtonVariant,
}

impl ActionButton {
    /// Builds the button for `mark` on `person`'s row.
    pub fn for_person(mark: Mark, person: &Person) -> Self {
        let highlighted = person.is_marked(mark);
        let (icon, active_variant) = match mark {
            Mark::Present => (Icon::CheckCircle, ButtonVariant::Success),
            Mark::Absent => (Icon::XCircle, ButtonVariant::Destructive),
        };
        Self {
            label: mark.label(),
            mark,
            icon,
            highlighted,
            variant: if highlighted {
                active_variant
            } else {
                ButtonVariant::Outline
            },
        }
    }
}
