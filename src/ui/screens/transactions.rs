use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::category_glyph;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_signed, truncate};

const COLUMNS: [&str; 5] = ["Date", "Description", "Category", "Type", "Amount"];

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.search_input.is_empty() {
        format!("Transactions ({})", app.transactions.len())
    } else {
        format!(
            "Transactions ({}) search: '{}'",
            app.transactions.len(),
            app.search_input
        )
    };

    if app.transactions.is_empty() {
        let (headline, hint) = if app.search_input.is_empty() {
            (
                "No transactions yet".to_string(),
                "Add one with :add <amount> | <category> | <description>",
            )
        } else {
            (
                format!("No transactions matching '{}'", app.search_input),
                "Press Esc to clear the search",
            )
        };
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(headline, theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(hint, theme::dim_style())),
        ])
        .centered()
        .block(theme::panel(title));
        f.render_widget(msg, area);
        return;
    }

    let header = Row::new(COLUMNS.map(|h| Cell::from(h).style(theme::header_style())));

    let rows: Vec<Row> = app
        .transactions
        .iter()
        .enumerate()
        .skip(app.transaction_cursor.offset)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            Row::new(vec![
                Cell::from(format!("  {}", txn.date.format("%Y-%m-%d"))),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(format!(
                    "{} {}",
                    category_glyph(&txn.category),
                    truncate(&txn.category, 18)
                )),
                Cell::from(txn.kind.as_str()),
                Cell::from(Span::styled(
                    format_signed(txn),
                    Style::default().fg(theme::amount_color(txn.is_income())),
                )),
            ])
            .style(theme::row_style(i, app.transaction_cursor.index))
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(22),
        Constraint::Length(9),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(theme::panel(title));
    f.render_widget(table, area);
}
