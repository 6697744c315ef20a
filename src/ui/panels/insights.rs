use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::models::PaymentMethod;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let highest = match &app.highest {
        Some(txn) => format!(
            "Highest expense: {} at {}",
            truncate(&txn.description, 20),
            format_amount(txn.amount)
        ),
        None => "Highest expense: —".to_string(),
    };

    let most_active = match app.most_active {
        Some(category) => format!("Most active category: {}", category.display_name()),
        None => "Most active category: —".to_string(),
    };

    let cash = app
        .payment_split
        .iter()
        .find(|(m, _)| *m == PaymentMethod::Cash)
        .map(|(_, amount)| *amount)
        .unwrap_or(Decimal::ZERO);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(highest, theme::normal_style())),
        Line::from(Span::styled(most_active, theme::normal_style())),
        Line::from(Span::styled(
            format!("Cash purchases in view: {}", format_amount(cash)),
            theme::normal_style(),
        )),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(Span::styled(" Quick Insights ", theme::panel_title_style())),
    );
    f.render_widget(panel, area);
}
