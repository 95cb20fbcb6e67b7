//! Person and attendance status model.
//!
//! # Responsibility
//! - Define the canonical roster record.
//! - Parse host-provided status text into a typed `Mark`.
//!
//! # Invariants
//! - `id` is stable and unique within one roster.
//! - A freshly created person is always `Unmarked`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable identifier of a person within a roster.
pub type PersonId = u32;

/// Attendance state of one person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Not marked yet. Initial state only.
    #[default]
    Unmarked,
    /// Marked as present.
    Present,
    /// Marked as absent.
    Absent,
}

impl AttendanceStatus {
    /// Stable lowercase id used on the wire and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unmarked => "unmarked",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// User-facing badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unmarked => "Unmarked",
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status a user may request for a person.
///
/// There is intentionally no `Unmarked` variant: once marked, a person can
/// only move between present and absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Present,
    Absent,
}

impl Mark {
    /// Both marks in action-button order.
    pub const ALL: [Mark; 2] = [Mark::Present, Mark::Absent];

    /// Stable lowercase id used on the wire and in logs.
    pub fn as_str(self) -> &'static str {
        AttendanceStatus::from(self).as_str()
    }

    /// Action-button label.
    pub fn label(self) -> &'static str {
        AttendanceStatus::from(self).label()
    }
}

impl From<Mark> for AttendanceStatus {
    fn from(value: Mark) -> Self {
        match value {
            Mark::Present => Self::Present,
            Mark::Absent => Self::Absent,
        }
    }
}

impl FromStr for Mark {
    type Err = MarkParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(MarkParseError::Empty);
        }
        match normalized.to_ascii_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            _ => Err(MarkParseError::Unsupported(normalized.to_string())),
        }
    }
}

/// Errors produced when parsing a `Mark` from host text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkParseError {
    Empty,
    Unsupported(String),
}

impl Display for MarkParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "status cannot be empty"),
            Self::Unsupported(value) => write!(
                f,
                "unsupported status `{value}`; expected present|absent"
            ),
        }
    }
}

impl Error for MarkParseError {}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub status: AttendanceStatus,
}

impl Person {
    /// Creates an unmarked person.
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: AttendanceStatus::Unmarked,
        }
    }

    /// Initials built from the first letter of every space-separated token.
    ///
    /// Empty tokens (repeated spaces) contribute nothing.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|token| token.chars().next())
            .collect()
    }

    /// Returns whether this person currently holds `mark`.
    pub fn is_marked(&self, mark: Mark) -> bool {
        self.status == AttendanceStatus::from(mark)
    }
}
