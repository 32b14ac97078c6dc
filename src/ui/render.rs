use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;
use super::util::format_amount;
use crate::models::month_label;

/// Normal-mode keys, shown two to a row in the help overlay.
const KEY_BINDINGS: &[(&str, &str)] = &[
    ("1-4 / Tab", "switch screen"),
    ("j/k", "move cursor"),
    ("g/G", "top / bottom"),
    ("Ctrl-d/u", "half page"),
    ("H/L", "previous / next month"),
    ("t", "back to this month"),
    ("a / i", "add expense / income"),
    ("b", "new budget (Budgets)"),
    ("e / D", "edit / delete selected"),
    ("/", "live search"),
    (":", "command line"),
    ("Esc", "clear search"),
    ("?", "this help"),
    ("Ctrl-q", "quit"),
];

const HELP_WIDTH: u16 = 78;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let [header, body, status, command] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(f.area());

    render_header(f, header, app);
    match app.screen {
        Screen::Overview => super::screens::overview::render(f, body, app),
        Screen::Transactions => super::screens::transactions::render(f, body, app),
        Screen::Categories => super::screens::categories::render(f, body, app),
        Screen::Budgets => super::screens::budgets::render(f, body, app),
    }
    render_status_bar(f, status, app);
    render_command_bar(f, command, app);

    if app.show_help {
        render_help(f, f.area());
    }
}

/// Screen tabs on the left, viewed month and balance on the right.
fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let brand = Style::default().fg(theme::BASE).bg(theme::ACCENT);
    let mut tabs = vec![Span::styled(" Finboard ", brand)];
    for (i, screen) in Screen::all().iter().enumerate() {
        let style = if *screen == app.screen {
            theme::bold(theme::ACCENT)
        } else {
            theme::dim_style()
        };
        tabs.push(Span::styled(format!("  {} {screen}", i + 1), style));
    }

    let month = Line::from(vec![
        Span::styled(month_label(&app.current_month), theme::bold(theme::YELLOW)),
        Span::styled("  balance ", theme::dim_style()),
        Span::styled(
            format!("{} ", format_amount(app.summary.total_balance)),
            theme::bold(theme::amount_color(!app.summary.total_balance.is_sign_negative())),
        ),
    ])
    .right_aligned();

    let background = Style::default().bg(theme::BASE);
    f.render_widget(Paragraph::new(Line::from(tabs)).style(background), area);
    f.render_widget(Paragraph::new(month).style(background), area);
}

fn mode_color(mode: InputMode) -> Color {
    match mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command => theme::GREEN,
        InputMode::Search => theme::YELLOW,
        InputMode::Confirm => theme::RED,
    }
}

fn screen_hints(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Overview => &[("a", "expense"), ("i", "income"), ("H/L", "month")],
        Screen::Transactions => &[("e", "edit"), ("D", "delete"), ("/", "search")],
        Screen::Categories => &[("j/k", "move"), ("a", "expense")],
        Screen::Budgets => &[("b", "new"), ("e", "edit"), ("D", "delete"), ("H/L", "month")],
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let bar = Style::default().fg(theme::TEXT_DIM).bg(theme::SURFACE);

    let mut spans = vec![Span::styled(
        format!(" {} ", app.input_mode),
        Style::default().fg(theme::BASE).bg(mode_color(app.input_mode)),
    )];
    for (key, action) in screen_hints(app.screen).iter().chain(&[("?", "help")]) {
        spans.push(Span::styled(format!("  {key}"), bar.fg(theme::ACCENT)));
        spans.push(Span::styled(format!(" {action}"), bar));
    }

    let count = Line::from(Span::styled(
        format!("{} transactions ", app.summary.transaction_count),
        bar,
    ))
    .right_aligned();

    f.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);
    f.render_widget(Paragraph::new(count), area);
}

/// Red for failures so they stand out from routine confirmations.
fn status_color(message: &str) -> Color {
    let failed = ["Error", "Invalid", "Unknown", "Usage"]
        .iter()
        .any(|prefix| message.starts_with(prefix));
    if failed {
        theme::RED
    } else {
        theme::TEXT
    }
}

fn prompt<'a>(marker: &'static str, color: Color, text: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(marker, theme::bold(color)),
        Span::styled(text, theme::text_style()),
    ])
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (line, cursor) = match app.input_mode {
        InputMode::Command => (
            prompt(":", theme::GREEN, &app.command_input),
            Some(app.command_input.chars().count()),
        ),
        InputMode::Search => {
            let mut line = prompt("/", theme::YELLOW, &app.search_input);
            if !app.search_input.is_empty() {
                line.push_span(Span::styled(
                    format!("  {} found", app.transactions.len()),
                    theme::dim_style(),
                ));
            }
            (line, Some(app.search_input.chars().count()))
        }
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(app.confirm_message.as_str(), theme::bold(theme::YELLOW)),
                Span::styled(" y to confirm, any other key cancels", theme::dim_style()),
            ]),
            None,
        ),
        InputMode::Normal if app.status_message.is_empty() => (
            Line::from(Span::styled(
                " : command   / search   ? help",
                theme::dim_style(),
            )),
            None,
        ),
        InputMode::Normal => (
            Line::from(Span::styled(
                app.status_message.as_str(),
                Style::default().fg(status_color(&app.status_message)),
            )),
            None,
        ),
    };

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme::MANTLE)),
        area,
    );

    if let Some(chars) = cursor {
        let offset = u16::try_from(chars + 1).unwrap_or(u16::MAX);
        f.set_cursor_position((area.x.saturating_add(offset), area.y));
    }
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, theme::bold(theme::YELLOW)))
}

/// Help text: key bindings, then every registered command with its aliases.
fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![section(" Keys")];
    for pair in KEY_BINDINGS.chunks(2) {
        let mut spans = Vec::new();
        for (key, action) in pair {
            spans.push(Span::styled(format!("  {key:<10}"), theme::bold(theme::ACCENT)));
            spans.push(Span::styled(format!("{action:<26}"), theme::text_style()));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(section(" Commands"));
    for cmd in commands::command_list() {
        let names = std::iter::once(cmd.name)
            .chain(cmd.aliases.iter().copied())
            .map(|n| format!(":{n}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(vec![
            Span::styled(format!("  {names:<22}"), theme::bold(theme::ACCENT)),
            Span::styled(cmd.description, theme::text_style()),
        ]));
    }
    lines
}

fn render_help(f: &mut Frame, area: Rect) {
    let lines = help_lines();
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);
    let width = HELP_WIDTH.min(area.width);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(Span::styled(" Finboard help ", theme::bold(theme::ACCENT)))
        .title_bottom(Line::from(" any key closes ").style(theme::dim_style()).right_aligned())
        .style(Style::default().bg(theme::BASE));

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
