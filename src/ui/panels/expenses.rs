use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.filtered.is_empty() {
        render_empty(f, area, app);
        return;
    }

    let header_cells = ["Date", "Description", "Category", "Payment", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .filtered
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let description = match &txn.note {
                Some(note) => Line::from(vec![
                    Span::raw(truncate(&txn.description, 26)),
                    Span::styled(format!("  {}", truncate(note, 24)), theme::dim_style()),
                ]),
                None => Line::from(truncate(&txn.description, 40)),
            };

            Row::new(vec![
                Cell::from(txn.date.format("%b %d").to_string()),
                Cell::from(description),
                Cell::from(txn.category.display_name()),
                Cell::from(txn.payment_method.as_str()),
                Cell::from(Span::styled(
                    format_amount(txn.amount),
                    Style::default().fg(theme::YELLOW),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Min(24),
        Constraint::Length(15),
        Constraint::Length(14),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(Span::styled(
                format!(
                    " Expenses ({} items · {}) ",
                    app.filtered.len(),
                    format_amount(app.filtered_total)
                ),
                theme::panel_title_style(),
            )),
    );

    f.render_widget(table, area);
}

fn render_empty(f: &mut Frame, area: Rect, app: &App) {
    let detail = if app.months.is_empty() {
        "No expense data loaded"
    } else {
        "Try another month or category with H/L and Tab"
    };
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No expenses found for this selection",
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(detail, theme::dim_style())),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(Span::styled(" Expenses (0) ", theme::panel_title_style())),
    );
    f.render_widget(msg, area);
}
