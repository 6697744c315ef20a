use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

/// Hint shown under the per-day average, matching the monthly goal line.
const DAILY_GOAL: u32 = 50;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_month_card(f, cards[0], app);
    render_average_card(f, cards[1], app);
    render_mix_card(f, cards[2], app);
}

fn render_month_card(f: &mut Frame, area: Rect, app: &App) {
    let cmp = &app.comparison;
    let comparison_line = match cmp.percent {
        None => Span::styled("No spending last month to compare", theme::dim_style()),
        Some(percent) => {
            // Spending up is bad news
            let (sign, color) = if cmp.delta >= Decimal::ZERO {
                ("+", theme::RED)
            } else {
                ("-", theme::GREEN)
            };
            Span::styled(
                format!("{sign}{:.1}% vs last month", percent.abs()),
                Style::default().fg(color),
            )
        }
    };

    card(
        f,
        area,
        "This Month",
        format_amount(cmp.current),
        theme::ACCENT,
        Line::from(comparison_line),
    );
}

fn render_average_card(f: &mut Frame, area: Rect, app: &App) {
    card(
        f,
        area,
        "Average Per Day",
        format_amount(app.daily_average),
        theme::GREEN,
        Line::from(Span::styled(
            format!(
                "Keep daily spending below {} to hit your goals",
                format_amount(Decimal::from(DAILY_GOAL))
            ),
            theme::dim_style(),
        )),
    );
}

fn render_mix_card(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];
    for (method, amount) in &app.payment_split {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", method.as_str()), theme::normal_style()),
            Span::styled(
                format_amount(*amount),
                Style::default()
                    .fg(theme::PURPLE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let text = Paragraph::new(lines)
        .centered()
        .block(card_block("Payment Mix"));
    f.render_widget(text, area);
}

fn card(f: &mut Frame, area: Rect, title: &str, amount: String, color: Color, sub: Line) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            amount,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        sub,
    ])
    .centered()
    .block(card_block(title));

    f.render_widget(text, area);
}

fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border_style())
        .title(Span::styled(format!(" {title} "), theme::panel_title_style()))
}
