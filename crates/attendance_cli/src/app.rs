//! Interactive terminal dashboard.

use std::error::Error;
use std::io::{self, stdout, Stdout};
use std::time::Duration;

use attendance_core::{
    ActionButton, BadgeVariant, ButtonVariant, DashboardView, Mark, PersonId, PersonRow,
    RosterStore, StatCard, Tone,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const HELP_TEXT: &str = "↑↓/jk: Select  p: Present  a: Absent  q: Quit";

/// Dashboard state for one terminal session.
pub struct App {
    store: RosterStore,
    selected: usize,
    should_quit: bool,
}

impl App {
    pub fn new(store: RosterStore) -> Self {
        Self {
            store,
            selected: 0,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn selected_id(&self) -> Option<PersonId> {
        self.store.people().get(self.selected).map(|person| person.id)
    }

    fn select_next(&mut self) {
        if !self.store.is_empty() {
            self.selected = (self.selected + 1) % self.store.len();
        }
    }

    fn select_prev(&mut self) {
        if !self.store.is_empty() {
            self.selected = (self.selected + self.store.len() - 1) % self.store.len();
        }
    }

    fn mark_selected(&mut self, mark: Mark) {
        if let Some(id) = self.selected_id() {
            self.store.set_status(id, mark);
        }
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Char('p') => self.mark_selected(Mark::Present),
            KeyCode::Char('a') => self.mark_selected(Mark::Absent),
            _ => {}
        }
    }

    /// Rebuilds the view from the store and draws it.
    pub fn render(&self, frame: &mut Frame) {
        let view = DashboardView::render(&self.store);
        draw_dashboard(frame, &view, self.selected);
    }
}

/// Draws `view` filling the whole frame, with row `selected` emphasized.
pub fn draw_dashboard(frame: &mut Frame, view: &DashboardView, selected: usize) {
    let [header, cards, list, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let header_lines = vec![
        Line::from(Span::styled(
            view.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {}", view.date_icon.glyph(), view.date_label),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(header_lines).alignment(Alignment::Center), header);

    let card_areas: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(cards);
    for (card, area) in view.cards.iter().zip(card_areas) {
        draw_card(frame, card, area);
    }

    draw_rows(frame, view, selected, list);

    frame.render_widget(
        Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        help,
    );
}

fn draw_card(frame: &mut Frame, card: &StatCard, area: Rect) {
    let color = tone_color(card.tone);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Line::from(vec![
            Span::styled(card.icon.glyph(), Style::default().fg(color)),
            Span::raw(format!(" {} ", card.label)),
        ]))
        .title_alignment(Alignment::Center);
    let value = Paragraph::new(card.value.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(value, area);
}

fn draw_rows(frame: &mut Frame, view: &DashboardView, selected: usize, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", view.list_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let visible = block.inner(area).height as usize;

    let name_width = view
        .rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0);
    let lines = view
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| row_line(row, index == selected, name_width))
        .collect::<Vec<_>>();

    let scroll = if visible == 0 {
        0
    } else {
        selected.saturating_sub(visible - 1)
    };
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

fn row_line(row: &PersonRow, is_selected: bool, name_width: usize) -> Line<'static> {
    let marker = if is_selected { "> " } else { "  " };
    let name_style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(format!("{:<3}", row.initials), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<name_width$}  ", row.name), name_style),
        Span::styled(format!(" {:<8} ", row.badge.label), badge_style(row.badge.variant)),
        Span::raw("  "),
    ];
    for action in &row.actions {
        spans.push(Span::styled(
            format!("[{} {}]", action.icon.glyph(), action.label),
            button_style(action),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => Color::Cyan,
        Tone::Success => Color::Green,
        Tone::Destructive => Color::Red,
    }
}

fn badge_style(variant: BadgeVariant) -> Style {
    match variant {
        BadgeVariant::Outline => Style::default().fg(Color::Gray),
        BadgeVariant::Success => Style::default().fg(Color::Black).bg(Color::Green),
        BadgeVariant::Destructive => Style::default().fg(Color::White).bg(Color::Red),
    }
}

fn button_style(action: &ActionButton) -> Style {
    match action.variant {
        ButtonVariant::Outline => Style::default().fg(Color::DarkGray),
        ButtonVariant::Success => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        ButtonVariant::Destructive => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

/// Runs the interactive dashboard until the user quits.
pub fn run_tui(store: RosterStore) -> Result<(), Box<dyn Error>> {
    terminal::enable_raw_mode()?;
    let mut terminal = enter_or_restore(
        || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
            let mut stdout = stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            // Best effort; the setup error is what gets reported.
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
        },
    )?;

    let mut app = App::new(store);
    info!("event=tui_start module=cli status=ok people={}", app.store().len());
    let result = event_loop(&mut terminal, &mut app);

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let counts = app.store().counts();
    info!(
        "event=tui_exit module=cli status={} present={} absent={}",
        if result.is_ok() { "ok" } else { "error" },
        counts.present,
        counts.absent
    );
    result
}

/// Runs `enter` with raw mode already on; calls `restore` if it fails.
fn enter_or_restore<T, E>(
    enter: impl FnOnce() -> Result<T, E>,
    restore: impl FnOnce(),
) -> Result<T, E> {
    enter().inspect_err(|_| restore())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{draw_dashboard, enter_or_restore, App};
    use std::cell::Cell;
    use std::io;
    use attendance_core::{AttendanceStatus, DashboardView, Mark, RosterStore};
    use chrono::NaiveDate;
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let view = DashboardView::build(
            app.store(),
            NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
        );
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal
            .draw(|frame| draw_dashboard(frame, &view, app.selected()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn failed_terminal_setup_restores_raw_mode() {
        let restored = Cell::new(false);
        let result: io::Result<()> = enter_or_restore(
            || Err(io::Error::other("alternate screen unavailable")),
            || restored.set(true),
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_terminal_setup_keeps_raw_mode() {
        let restored = Cell::new(false);
        let result = enter_or_restore(|| Ok::<_, io::Error>(7), || restored.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }

    #[test]
    fn keys_move_selection_and_wrap() {
        let mut app = App::new(RosterStore::seeded());
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected(), 7);
        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.selected(), 0);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn mark_keys_update_the_selected_person() {
        let mut app = App::new(RosterStore::seeded());
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Char('a'));
        assert_eq!(app.store().get(3).unwrap().status, AttendanceStatus::Absent);

        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.store().get(3).unwrap().status, AttendanceStatus::Present);
        assert_eq!(app.store().counts().absent, 0);
        assert_eq!(app.store().counts().present, 1);
    }

    #[test]
    fn quit_keys_stop_the_loop() {
        let mut app = App::new(RosterStore::seeded());
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('x'));
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn dashboard_draws_header_cards_and_rows() {
        let mut store = RosterStore::seeded();
        store.set_status(3, Mark::Absent);
        let text = screen_text(&App::new(store));

        assert!(text.contains("Attendance Dashboard"));
        assert!(text.contains("Thursday, October 15, 2026"));
        assert!(text.contains("Total"));
        assert!(text.contains("Mark Attendance"));
        assert!(text.contains("Michael Chen"));
        assert!(text.contains("Ashley Martinez"));
    }
}
