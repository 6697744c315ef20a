use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use super::panels;
use super::theme;
use super::util::month_label;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header bar
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Expense table + sidebar
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    panels::summary::render(f, chunks[1], app);
    render_main(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_main(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    panels::expenses::render(f, columns[0], app);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(6)])
        .split(columns[1]);

    panels::budgets::render(f, sidebar[0], app);
    panels::insights::render(f, sidebar[1], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title = " Expense Overview ";
    let month = match app.selected_month() {
        Some(m) => month_label(m),
        None => "—".to_string(),
    };
    let selection = format!(" Month: {month}  Category: {} ", app.category_label());

    let available = area.width as usize;
    let pad = available.saturating_sub(title.len() + selection.chars().count());

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(theme::ACCENT)
                .bg(theme::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(pad), Style::default().bg(theme::HEADER_BG)),
        Span::styled(selection, theme::header_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let month = match app.selected_month() {
        Some(m) => m.to_string(),
        None => "—".to_string(),
    };
    let info = format!(
        " {month} | {} expenses in view | {} months of data ",
        app.filtered.len(),
        app.months.len()
    );
    let right = " H/L month | Tab/c category | a all | j/k scroll | ? help | q quit ";

    let available = area.width as usize;
    let pad = available.saturating_sub(info.len() + right.len());

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            " Spendash Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Selection",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  H / Left        Older month           L / Right  Newer month",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Tab or c        Next category         Shift-Tab or C  Previous",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  a               All categories",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Expense table",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  j/k or Up/Down  Move cursor           g/G        Top/Bottom",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  q or Ctrl-q     Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            theme::dim_style(),
        )),
    ];

    // Center the popup, clamped to terminal size
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 68.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
