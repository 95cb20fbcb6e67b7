//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one attendance session per mounted dashboard to Dart via FRB.
//! - Flatten the core view-model into plain string/number envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Each `AttendanceSession` owns its roster; dropping it discards state.

use attendance_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ActionButton, BadgeVariant, ButtonVariant, DashboardView, Icon, Mark, PersonRow,
    RosterStore, StatCard, StatKind, Tone,
};
use log::{info, warn};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One aggregate card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotCard {
    /// `total|present|absent`.
    pub kind: String,
    pub label: String,
    pub value: u32,
    /// `users|check_circle|x_circle`.
    pub icon: String,
    /// `primary|success|destructive`.
    pub tone: String,
}

/// One row action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotAction {
    pub label: String,
    /// Value to pass back to `AttendanceSession::mark`.
    pub status: String,
    pub highlighted: bool,
    /// `outline|success|destructive`.
    pub variant: String,
}

/// One person row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub id: u32,
    pub name: String,
    pub initials: String,
    pub badge_label: String,
    /// `outline|success|destructive`.
    pub badge_variant: String,
    pub actions: Vec<SnapshotAction>,
}

/// Full dashboard state for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub title: String,
    /// Icon shown next to the date, e.g. `calendar`.
    pub date_icon: String,
    pub date_label: String,
    pub cards: Vec<SnapshotCard>,
    pub list_title: String,
    pub rows: Vec<SnapshotRow>,
}

/// Result envelope for `AttendanceSession::mark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkResponse {
    /// `false` only for malformed status input.
    pub ok: bool,
    /// Whether a person matched the id.
    pub changed: bool,
    pub message: String,
}

/// Attendance state owned by one mounted dashboard.
#[flutter_rust_bridge::frb(opaque)]
pub struct AttendanceSession {
    store: RosterStore,
}

impl AttendanceSession {
    /// Mounts a dashboard with the seed roster.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        info!("event=session_mount module=ffi status=ok");
        Self {
            store: RosterStore::seeded(),
        }
    }

    /// Builds the current dashboard snapshot with today's date.
    #[flutter_rust_bridge::frb(sync)]
    pub fn snapshot(&self) -> DashboardSnapshot {
        to_snapshot(DashboardView::render(&self.store))
    }

    /// Marks one person `present` or `absent`.
    ///
    /// # FFI contract
    /// - Unknown ids are ignored: `ok=true, changed=false`.
    /// - Any other status text returns `ok=false` with the parse error.
    #[flutter_rust_bridge::frb(sync)]
    pub fn mark(&mut self, id: u32, status: String) -> MarkResponse {
        let mark = match status.parse::<Mark>() {
            Ok(mark) => mark,
            Err(err) => {
                warn!("event=session_mark module=ffi status=rejected person_id={id}");
                return MarkResponse {
                    ok: false,
                    changed: false,
                    message: format!("mark failed: {err}"),
                };
            }
        };

        let changed = self.store.set_status(id, mark);
        MarkResponse {
            ok: true,
            changed,
            message: if changed {
                format!("Marked {}.", mark.as_str())
            } else {
                "No matching person.".to_string()
            },
        }
    }
}

impl Default for AttendanceSession {
    fn default() -> Self {
        Self::new()
    }
}

fn to_snapshot(view: DashboardView) -> DashboardSnapshot {
    DashboardSnapshot {
        title: view.title.to_string(),
        date_icon: icon_label(view.date_icon).to_string(),
        date_label: view.date_label,
        cards: view.cards.iter().map(to_snapshot_card).collect(),
        list_title: view.list_title.to_string(),
        rows: view.rows.iter().map(to_snapshot_row).collect(),
    }
}

fn to_snapshot_card(card: &StatCard) -> SnapshotCard {
    SnapshotCard {
        kind: stat_kind_label(card.kind).to_string(),
        label: card.label.to_string(),
        value: u32::try_from(card.value).unwrap_or(u32::MAX),
        icon: icon_label(card.icon).to_string(),
        tone: tone_label(card.tone).to_string(),
    }
}

fn to_snapshot_row(row: &PersonRow) -> SnapshotRow {
    SnapshotRow {
        id: row.id,
        name: row.name.clone(),
        initials: row.initials.clone(),
        badge_label: row.badge.label.to_string(),
        badge_variant: badge_variant_label(row.badge.variant).to_string(),
        actions: row.actions.iter().map(to_snapshot_action).collect(),
    }
}

fn to_snapshot_action(action: &ActionButton) -> SnapshotAction {
    SnapshotAction {
        label: action.label.to_string(),
        status: action.mark.as_str().to_string(),
        highlighted: action.highlighted,
        variant: button_variant_label(action.variant).to_string(),
    }
}

fn icon_label(icon: Icon) -> &'static str {
    match icon {
        Icon::Calendar => "calendar",
        Icon::Users => "users",
        Icon::CheckCircle => "check_circle",
        Icon::XCircle => "x_circle",
    }
}

fn stat_kind_label(kind: StatKind) -> &'static str {
    match kind {
        StatKind::Total => "total",
        StatKind::Present => "present",
        StatKind::Absent => "absent",
    }
}

fn tone_label(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "primary",
        Tone::Success => "success",
        Tone::Destructive => "destructive",
    }
}

fn badge_variant_label(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Outline => "outline",
        BadgeVariant::Success => "success",
        BadgeVariant::Destructive => "destructive",
    }
}

fn button_variant_label(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Outline => "outline",
        ButtonVariant::Success => "success",
        ButtonVariant::Destructive => "destructive",
    }
}
