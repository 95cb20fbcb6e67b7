//! Plain-text rendering of a dashboard view.

use attendance_core::{ActionButton, DashboardView, PersonRow};

/// Renders `view` as plain text, one person per line.
///
/// Highlighted actions are wrapped in `*`.
pub fn render_text(view: &DashboardView) -> String {
    let name_width = view
        .rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0);
    let cards = view
        .cards
        .iter()
        .map(|card| format!("{} {}: {}", card.icon.glyph(), card.label, card.value))
        .collect::<Vec<_>>();

    let mut lines = vec![
        view.title.to_string(),
        format!("{} {}", view.date_icon.glyph(), view.date_label),
        String::new(),
        cards.join("   "),
        String::new(),
        view.list_title.to_string(),
    ];
    lines.extend(view.rows.iter().map(|row| render_row(row, name_width)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_row(row: &PersonRow, name_width: usize) -> String {
    let actions = row
        .actions
        .iter()
        .map(render_action)
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "  [{:<3}] {:<name_width$}  {:<8}  {}",
        row.initials, row.name, row.badge.label, actions
    )
}

fn render_action(action: &ActionButton) -> String {
    if action.highlighted {
        format!("*{} {}*", action.icon.glyph(), action.label)
    } else {
        format!("[{} {}]", action.icon.glyph(), action.label)
    }
}

#[cfg(test)]
mod tests {
    use super::render_text;
    use attendance_core::{DashboardView, Mark, RosterStore};
    use chrono::NaiveDate;

    fn view_for(store: &RosterStore) -> DashboardView {
        DashboardView::build(store, NaiveDate::from_ymd_opt(2026, 10, 15).unwrap())
    }

    #[test]
    fn snapshot_lists_header_counts_and_every_person() {
        let text = render_text(&view_for(&RosterStore::seeded()));

        assert!(text.starts_with("Attendance Dashboard\n"));
        assert!(text.contains("Thursday, October 15, 2026"));
        assert!(text.contains("Total: 8"));
        assert!(text.contains("Present: 0"));
        assert!(text.contains("Mark Attendance"));
        assert_eq!(text.matches("Unmarked").count(), 8);
        assert!(text.contains("[MC ] Michael Chen"));
    }

    #[test]
    fn snapshot_layout_has_fixed_header_block() {
        let text = render_text(&view_for(&RosterStore::seeded()));
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Attendance Dashboard");
        assert_eq!(lines[1], "◷ Thursday, October 15, 2026");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "● Total: 8   ✔ Present: 0   ✘ Absent: 0");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Mark Attendance");
        assert_eq!(lines.len(), 6 + 8);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn highlighted_action_is_starred() {
        let mut store = RosterStore::seeded();
        store.set_status(3, Mark::Absent);
        let text = render_text(&view_for(&store));

        let line = text
            .lines()
            .find(|line| line.contains("Michael Chen"))
            .unwrap();
        assert!(line.contains("Absent "));
        assert!(line.contains("*✘ Absent*"));
        assert!(line.contains("[✔ Present]"));
        assert!(text.contains("Absent: 1"));
    }
}
