use attendance_core::{
    format_long_date, BadgeVariant, ButtonVariant, DashboardView, Icon, Mark, RosterStore,
    StatKind,
};
use chrono::NaiveDate;

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date")
}

#[test]
fn initial_view_shows_seed_counts_and_unmarked_badges() {
    let view = DashboardView::build(&RosterStore::seeded(), fixed_date());

    assert_eq!(view.title, "Attendance Dashboard");
    assert_eq!(view.list_title, "Mark Attendance");
    assert_eq!(view.date_label, "Thursday, October 15, 2026");
    assert_eq!(view.card(StatKind::Total).value, 8);
    assert_eq!(view.card(StatKind::Present).value, 0);
    assert_eq!(view.card(StatKind::Absent).value, 0);
    assert_eq!(view.rows.len(), 8);
    for row in &view.rows {
        assert_eq!(row.badge.label, "Unmarked");
        assert_eq!(row.badge.variant, BadgeVariant::Outline);
        assert!(row.actions.iter().all(|action| !action.highlighted));
        assert!(row
            .actions
            .iter()
            .all(|action| action.variant == ButtonVariant::Outline));
    }
}

#[test]
fn cards_carry_labels_and_icons_in_order() {
    let view = DashboardView::build(&RosterStore::seeded(), fixed_date());
    let labels = view.cards.iter().map(|card| card.label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Total", "Present", "Absent"]);
    assert_eq!(view.card(StatKind::Total).icon, Icon::Users);
    assert_eq!(view.card(StatKind::Absent).icon, Icon::XCircle);
}

#[test]
fn badge_and_counts_follow_michael_chen_scenario() {
    let mut store = RosterStore::seeded();

    store.set_status(3, Mark::Absent);
    let view = DashboardView::build(&store, fixed_date());
    let row = view.row(3).expect("row for id 3");
    assert_eq!(row.initials, "MC");
    assert_eq!(row.badge.label, "Absent");
    assert_eq!(row.badge.variant, BadgeVariant::Destructive);
    assert_eq!(view.card(StatKind::Absent).value, 1);

    store.set_status(3, Mark::Present);
    let view = DashboardView::build(&store, fixed_date());
    let row = view.row(3).expect("row for id 3");
    assert_eq!(row.badge.label, "Present");
    assert_eq!(row.badge.variant, BadgeVariant::Success);
    assert_eq!(view.card(StatKind::Absent).value, 0);
    assert_eq!(view.card(StatKind::Present).value, 1);
}

#[test]
fn only_the_current_status_button_is_highlighted() {
    let mut store = RosterStore::seeded();
    store.set_status(1, Mark::Present);
    store.set_status(2, Mark::Absent);
    let view = DashboardView::build(&store, fixed_date());

    let present_row = view.row(1).unwrap();
    assert_eq!(present_row.actions[0].mark, Mark::Present);
    assert!(present_row.actions[0].highlighted);
    assert_eq!(present_row.actions[0].variant, ButtonVariant::Success);
    assert!(!present_row.actions[1].highlighted);
    assert_eq!(present_row.actions[1].variant, ButtonVariant::Outline);

    let absent_row = view.row(2).unwrap();
    assert!(!absent_row.actions[0].highlighted);
    assert!(absent_row.actions[1].highlighted);
    assert_eq!(absent_row.actions[1].variant, ButtonVariant::Destructive);
}

#[test]
fn rows_follow_roster_order() {
    let view = DashboardView::build(&RosterStore::seeded(), fixed_date());
    let names = view.rows.iter().map(|row| row.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names.first(), Some(&"Alex Johnson"));
    assert_eq!(names.last(), Some(&"Ashley Martinez"));
}

#[test]
fn long_date_spells_out_weekday_and_month() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    assert_eq!(format_long_date(date), "Wednesday, January 1, 2025");
}

#[test]
fn dashboard_serialization_uses_expected_wire_fields() {
    let mut store = RosterStore::seeded();
    store.set_status(3, Mark::Absent);
    let json = serde_json::to_value(DashboardView::build(&store, fixed_date())).unwrap();

    assert_eq!(json["title"], "Attendance Dashboard");
    assert_eq!(json["date_icon"], "calendar");
    assert_eq!(json["date_label"], "Thursday, October 15, 2026");
    assert_eq!(json["list_title"], "Mark Attendance");

    let card = &json["cards"][2];
    assert_eq!(card["kind"], "absent");
    assert_eq!(card["label"], "Absent");
    assert_eq!(card["value"], 1);
    assert_eq!(card["icon"], "x_circle");
    assert_eq!(card["tone"], "destructive");
    assert_eq!(json["cards"][0]["icon"], "users");
    assert_eq!(json["cards"][0]["tone"], "primary");

    let row = &json["rows"][2];
    assert_eq!(row["id"], 3);
    assert_eq!(row["name"], "Michael Chen");
    assert_eq!(row["initials"], "MC");
    assert_eq!(row["badge"]["label"], "Absent");
    assert_eq!(row["badge"]["variant"], "destructive");

    let present = &row["actions"][0];
    assert_eq!(present["mark"], "present");
    assert_eq!(present["icon"], "check_circle");
    assert_eq!(present["highlighted"], false);
    assert_eq!(present["variant"], "outline");

    let absent = &row["actions"][1];
    assert_eq!(absent["label"], "Absent");
    assert_eq!(absent["mark"], "absent");
    assert_eq!(absent["highlighted"], true);
    assert_eq!(absent["variant"], "destructive");

    assert_eq!(json["rows"][0]["badge"]["variant"], "outline");
}
