use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::store::Ledger;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;

pub(crate) fn as_tui(ledger: &mut Ledger, config: &Config) -> Result<()> {
    let mut app = App::new(config);
    app.refresh(ledger);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!("tui started");

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "tui exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, table borders and header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, ledger),
                InputMode::Command => handle_command_input(key, app, ledger),
                InputMode::Search => handle_search_input(key, app, ledger),
                InputMode::Confirm => handle_confirm_input(key, app, ledger),
            }
        }
    }
    Ok(())
}

/// Run a command line, reporting failures in the status bar instead of
/// tearing down the terminal.
fn run_command(input: &str, app: &mut App, ledger: &mut Ledger) {
    if let Err(e) = commands::handle_command(input, app, ledger) {
        tracing::warn!(command = input, error = %e, "command failed");
        app.set_status(format!("Error: {e}"));
    }
}

/// Open the command bar with `text` already typed.
fn prefill_command(app: &mut App, text: &str) {
    app.input_mode = InputMode::Command;
    app.command_input = text.to_string();
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Char(':') => prefill_command(app, ""),
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.search_input.clear();
            app.screen = Screen::Transactions;
            app.refresh_transactions(ledger);
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => app.screen = Screen::Overview,
        KeyCode::Char('2') => app.screen = Screen::Transactions,
        KeyCode::Char('3') => app.screen = Screen::Categories,
        KeyCode::Char('4') => app.screen = Screen::Budgets,
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            app.screen = screens[(idx + 1) % screens.len()];
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            app.screen = screens[prev];
        }
        KeyCode::Esc => {
            app.status_message.clear();
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.refresh_transactions(ledger);
            }
        }
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('a') => prefill_command(app, "add "),
        KeyCode::Char('i') => prefill_command(app, "income "),
        KeyCode::Char('b') if app.screen == Screen::Budgets => prefill_command(app, "budget "),
        KeyCode::Char('e') if app.screen == Screen::Transactions => {
            run_command("edit", app, ledger);
        }
        KeyCode::Char('e') if app.screen == Screen::Budgets => {
            run_command("edit-budget", app, ledger);
        }
        KeyCode::Char('D') if app.screen == Screen::Transactions => {
            run_command("delete", app, ledger);
        }
        KeyCode::Char('D') if app.screen == Screen::Budgets => {
            run_command("delete-budget", app, ledger);
        }
        KeyCode::Char('H') => run_command("prev-month", app, ledger),
        KeyCode::Char('L') => run_command("next-month", app, ledger),
        KeyCode::Char('t') => run_command("month", app, ledger),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            run_command(&input, app, ledger);
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
}

fn handle_search_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.search_input.clear();
            app.refresh_transactions(ledger);
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            reset_search_cursor(app, ledger);
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            reset_search_cursor(app, ledger);
        }
        _ => {}
    }
}

// Live search: filter as you type
fn reset_search_cursor(app: &mut App, ledger: &Ledger) {
    app.transaction_cursor.top();
    app.refresh_transactions(ledger);
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                commands::apply_pending(action, app, ledger);
            }
        }
        _ => {
            // Any other key = cancel
            app.pending_action = None;
            app.set_status("Cancelled");
        }
    }
    app.input_mode = InputMode::Normal;
    app.confirm_message.clear();
}

// ── Navigation helpers ───────────────────────────────────────

fn handle_move_down(app: &mut App) {
    let page = app.visible_rows;
    if let Some((cursor, len)) = app.active_list() {
        cursor.down(len, page);
    }
}

fn handle_move_up(app: &mut App) {
    if let Some((cursor, _)) = app.active_list() {
        cursor.up();
    }
}

fn handle_goto_top(app: &mut App) {
    if let Some((cursor, _)) = app.active_list() {
        cursor.top();
    }
}

fn handle_goto_bottom(app: &mut App) {
    let page = app.visible_rows;
    if let Some((cursor, len)) = app.active_list() {
        cursor.bottom(len, page);
    }
}
