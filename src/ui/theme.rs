use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

pub(crate) const BASE: Color = Color::Rgb(30, 30, 46);
pub(crate) const MANTLE: Color = Color::Rgb(24, 24, 37);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);

/// Usage above this share of the limit is flagged as a warning.
const BUDGET_WARN_PERCENT: f64 = 80.0;

/// Red once over the limit, yellow past 80% of it, green otherwise.
pub(crate) fn budget_color(percent: f64, over_budget: bool) -> Color {
    if over_budget {
        RED
    } else if percent > BUDGET_WARN_PERCENT {
        YELLOW
    } else {
        GREEN
    }
}

pub(crate) fn amount_color(is_income: bool) -> Color {
    if is_income {
        GREEN
    } else {
        RED
    }
}

/// Bordered block with a dim bold title, the frame of every panel.
pub(crate) fn panel(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(OVERLAY))
        .title(Span::styled(
            format!(" {} ", title.into()),
            Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD),
        ))
}

/// Highlighted when selected, striped on odd rows.
pub(crate) fn row_style(index: usize, selected: usize) -> Style {
    if index == selected {
        Style::default().fg(BASE).bg(ACCENT)
    } else if index % 2 == 1 {
        Style::default().fg(TEXT).bg(SURFACE)
    } else {
        Style::default().fg(TEXT)
    }
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(BASE)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn text_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
