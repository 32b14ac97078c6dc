use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{category_glyph, month_label};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_signed, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(8),    // Charts
            Constraint::Length(recent_height(app.recent_count)),
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_spending_chart(f, charts[0], app);
    render_trend_chart(f, charts[1], app);

    render_recent(f, chunks[2], app);
}

/// Rows for the recent list plus its borders.
fn recent_height(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX).saturating_add(2)
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let s = &app.summary;
    let month = month_label(&app.current_month);

    render_card(
        f,
        cards[0],
        "Total Balance",
        format_amount(s.total_balance),
        sign_color(s.total_balance),
    );
    render_card(
        f,
        cards[1],
        &format!("Income {month}"),
        format_amount(s.monthly_income),
        theme::GREEN,
    );
    render_card(
        f,
        cards[2],
        &format!("Expenses {month}"),
        format_amount(s.monthly_expenses),
        theme::RED,
    );
    render_card(
        f,
        cards[3],
        "Transactions",
        s.transaction_count.to_string(),
        theme::ACCENT,
    );
}

fn sign_color(amount: Decimal) -> Color {
    theme::amount_color(amount >= Decimal::ZERO)
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(value, theme::bold(color))),
    ])
    .centered()
    .block(theme::panel(title));

    f.render_widget(text, area);
}

fn render_empty(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme::dim_style())),
    ])
    .centered()
    .block(theme::panel(title));
    f.render_widget(msg, area);
}

fn render_spending_chart(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = "Spending by Category";
    if app.category_totals.is_empty() {
        render_empty(f, area, TITLE, "No expenses yet. Add one with :add");
        return;
    }

    let bars: Vec<Bar> = app
        .category_totals
        .iter()
        .take(10)
        .map(|ct| {
            let label = format!("{}{}", category_glyph(&ct.category), truncate(&ct.category, 6));
            Bar::default()
                .value(ct.total.to_u64().unwrap_or(0))
                .label(Line::from(label))
                .text_value(format_amount(ct.total))
                .style(Style::default().fg(theme::ACCENT))
        })
        .collect();

    let chart = BarChart::default()
        .block(theme::panel(TITLE))
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(1)
        .value_style(theme::bold(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_trend_chart(f: &mut Frame, area: Rect, app: &App) {
    let title = format!("Monthly Trend ({} months)", app.trend_months);
    if app.monthly_trend.is_empty() {
        render_empty(f, area, &title, "No transactions yet");
        return;
    }

    let bars: Vec<Bar> = app
        .monthly_trend
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.amount.to_u64().unwrap_or(0))
                .label(Line::from(point.label.clone()))
                .text_value(String::new())
                .style(Style::default().fg(theme::YELLOW))
        })
        .collect();

    let chart = BarChart::default()
        .block(theme::panel(&title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = "Recent Transactions";
    if app.recent.is_empty() {
        render_empty(f, area, TITLE, "No transactions yet");
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let desc_width = width.saturating_sub(14 + 20 + 16).max(8);

    let items: Vec<ListItem> = app
        .recent
        .iter()
        .map(|txn| {
            let amount_style = Style::default().fg(theme::amount_color(txn.is_income()));
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}  ", txn.date.format("%Y-%m-%d")), theme::dim_style()),
                Span::styled(
                    format!("{:<w$}", truncate(&txn.description, desc_width), w = desc_width),
                    theme::text_style(),
                ),
                Span::styled(
                    format!(
                        " {} {:<17}",
                        category_glyph(&txn.category),
                        truncate(&txn.category, 17)
                    ),
                    theme::dim_style(),
                ),
                Span::styled(format!("{:>14}", format_signed(txn)), amount_style),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(theme::panel(TITLE)), area);
}
