use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

const BAR_WIDTH: usize = 14;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.breakdown.is_empty() {
        render_empty(f, area);
        return;
    }

    let items: Vec<ListItem> = app
        .breakdown
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let color = if line.utilization >= 90 {
                theme::RED
            } else if line.utilization >= 70 {
                theme::YELLOW
            } else {
                theme::GREEN
            };

            let status = if line.utilization >= 100 {
                "Budget reached".to_string()
            } else {
                format!("{}% used", line.utilization)
            };

            // Bar fill is capped at 100% even when utilization reads up to 999
            let ratio = (line.utilization.min(100) as f64) / 100.0;

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<14}", truncate(line.category.display_name(), 13)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!(
                        "{:>9}/{:<9}",
                        format_amount(line.actual),
                        format_amount(line.limit)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(progress_bar(ratio, BAR_WIDTH), Style::default().fg(color)),
                Span::styled(
                    format!(" {status}"),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(Span::styled(" Budget Tracker ", theme::panel_title_style())),
    );
    f.render_widget(list, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(Line::from(Span::styled(
        "No month selected",
        theme::dim_style(),
    )))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(Span::styled(" Budget Tracker ", theme::panel_title_style())),
    );
    f.render_widget(msg, area);
}

fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
