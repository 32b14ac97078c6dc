use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::models::{category_glyph, month_label};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = format!("Budgets for {}", month_label(&app.current_month));

    if app.budget_usage.is_empty() {
        render_empty(f, area, &title);
        return;
    }


    let items: Vec<ListItem> = app
        .budget_usage
        .iter()
        .enumerate()
        .skip(app.budget_cursor.offset)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, usage)| {
            let progress = usage.progress();
            let color = theme::budget_color(progress.to_f64().unwrap_or(0.0), usage.is_over_budget);

            let style = theme::row_style(i, app.budget_cursor.index);

            let name = format!(
                "{} {}",
                category_glyph(&usage.category),
                truncate(&usage.category, 17)
            );

            let mut spans = vec![
                Span::styled(format!("{name:<20}"), style),
                Span::styled(
                    format!(
                        "{:>12} / {:<12} ",
                        format_amount(usage.spent),
                        format_amount(usage.limit)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(progress_bar(progress, 20), Style::default().fg(color)),
                Span::styled(
                    format!(" {:>7}", format_percent(usage.percentage)),
                    theme::bold(color),
                ),
            ];
            if usage.is_over_budget {
                spans.push(Span::styled(
                    format!("  over by {}", format_amount(usage.spent - usage.limit)),
                    Style::default().fg(theme::RED),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(theme::panel(title));
    f.render_widget(list, area);
}

fn render_empty(f: &mut Frame, area: Rect, title: &str) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No budgets set for this month",
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Use :budget <category> | <amount> to set a spending limit",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(theme::panel(title));
    f.render_widget(msg, area);
}
