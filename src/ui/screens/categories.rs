use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use crate::models::{category_glyph, Category};
use crate::stats::share_of;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    render_totals(f, chunks[0], app);
    render_legend(f, chunks[1], app);
}

fn render_totals(f: &mut Frame, area: Rect, app: &App) {
    let block = theme::panel(format!(
        "Spending by Category ({})",
        app.category_totals.len()
    ))
    .border_style(Style::default().fg(theme::ACCENT));

    if app.category_totals.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No expenses recorded yet", theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let grand_total: Decimal = app.category_totals.iter().map(|ct| ct.total).sum();

    let header = Row::new(
        ["Category", "Total", "Share", ""].map(|h| Cell::from(h).style(theme::header_style())),
    );

    let rows: Vec<Row> = app
        .category_totals
        .iter()
        .enumerate()
        .skip(app.category_cursor.offset)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, ct)| {
            let share = share_of(ct.total, grand_total);

            Row::new(vec![
                Cell::from(format!(
                    "{} {}",
                    category_glyph(&ct.category),
                    truncate(&ct.category, 22)
                )),
                Cell::from(format_amount(ct.total)),
                Cell::from(Span::styled(
                    format!("{share:.1}%"),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(
                    progress_bar(share, 20),
                    Style::default().fg(theme::ACCENT),
                )),
            ])
            .style(theme::row_style(i, app.category_cursor.index))
        })
        .collect();

    let widths = [
        Constraint::Min(24),
        Constraint::Length(14),
        Constraint::Length(8),
        Constraint::Length(22),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn render_legend(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = Category::all()
        .iter()
        .map(|cat| {
            let used = app
                .category_totals
                .iter()
                .any(|ct| ct.category == cat.as_str());
            let style = if used {
                theme::text_style()
            } else {
                theme::dim_style()
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {} {}", cat.glyph(), cat.as_str()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(theme::panel("Categories"));
    f.render_widget(list, area);
}
