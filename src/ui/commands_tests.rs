#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::{App, InputMode, PendingAction, Screen};
use super::commands::{apply_pending, command_list, handle_command, split_fields};
use crate::config::Config;
use crate::store::Ledger;

fn setup() -> (App, Ledger) {
    let ledger = Ledger::open_in_memory().unwrap();
    let mut app = App::new(&Config::default());
    app.current_month = "2025-07".into();
    app.refresh(&ledger);
    (app, ledger)
}

fn run(input: &str, app: &mut App, ledger: &mut Ledger) {
    handle_command(input, app, ledger).unwrap();
}

// ── split_fields ──────────────────────────────────────────────

#[test]
fn test_split_fields_trims() {
    assert_eq!(
        split_fields(" 4.50 |Food & Dining|  Coffee "),
        vec!["4.50", "Food & Dining", "Coffee"]
    );
}

#[test]
fn test_split_fields_empty() {
    assert!(split_fields("").is_empty());
    assert!(split_fields("   ").is_empty());
}

#[test]
fn test_split_fields_keeps_empty_middle() {
    assert_eq!(split_fields("a||c"), vec!["a", "", "c"]);
}

// ── dispatch ──────────────────────────────────────────────────

#[test]
fn test_unknown_command_suggests() {
    let (mut app, mut ledger) = setup();
    run("expotr", &mut app, &mut ledger);
    assert_eq!(
        app.status_message,
        "Unknown command: :expotr. Did you mean :export?"
    );
}

#[test]
fn test_command_list_folds_aliases() {
    let list = command_list();
    let names: Vec<&str> = list.iter().map(|c| c.name).collect();
    assert!(names.contains(&"add"));
    assert!(!names.contains(&"a"));
    assert!(names.windows(2).all(|w| w[0] < w[1]));

    let add = list.iter().find(|c| c.name == "add").unwrap();
    assert_eq!(add.aliases, &["a"]);
}

#[test]
fn test_alias_runs_command() {
    let (mut app, mut ledger) = setup();
    run("a 1 | Other | Gum | 2025-07-01", &mut app, &mut ledger);
    run("delete-txn", &mut app, &mut ledger);
    assert_eq!(ledger.transactions().len(), 1);
    assert_eq!(app.status_message, "Navigate to Transactions and select one first");
}

#[test]
fn test_tab_jumps_and_quit() {
    let (mut app, mut ledger) = setup();
    run("b", &mut app, &mut ledger);
    assert_eq!(app.screen, Screen::Budgets);
    run("transactions", &mut app, &mut ledger);
    assert_eq!(app.screen, Screen::Transactions);
    run("help", &mut app, &mut ledger);
    assert!(app.show_help);
    run("q", &mut app, &mut ledger);
    assert!(!app.running);
}

// ── transactions ──────────────────────────────────────────────

#[test]
fn test_add_expense() {
    let (mut app, mut ledger) = setup();
    run(
        "add 4.50 | Food & Dining | Coffee | 2025-07-01",
        &mut app,
        &mut ledger,
    );

    assert_eq!(ledger.transactions().len(), 1);
    let txn = &ledger.transactions()[0];
    assert_eq!(txn.amount, dec!(-4.50));
    assert_eq!(txn.category, "Food & Dining");
    assert_eq!(app.status_message, "Transaction added: Coffee");

    // Views were refreshed
    assert_eq!(app.transactions.len(), 1);
    assert_eq!(app.summary.monthly_expenses, dec!(4.50));
    assert_eq!(app.category_totals.len(), 1);
}

#[test]
fn test_add_income() {
    let (mut app, mut ledger) = setup();
    run("income 3000 | Other | Salary | 2025-07-01", &mut app, &mut ledger);

    let txn = &ledger.transactions()[0];
    assert_eq!(txn.amount, dec!(3000));
    assert!(txn.is_income());
    assert_eq!(app.summary.total_balance, dec!(3000));
}

#[test]
fn test_add_newest_first() {
    let (mut app, mut ledger) = setup();
    run("add 1 | Other | First | 2025-07-01", &mut app, &mut ledger);
    run("add 2 | Other | Second | 2025-07-02", &mut app, &mut ledger);
    assert_eq!(app.transactions[0].description, "Second");
    assert_eq!(app.recent[0].description, "Second");
}

#[test]
fn test_add_invalid_amount_sets_status() {
    let (mut app, mut ledger) = setup();
    run("add -5 | Other | Refund", &mut app, &mut ledger);
    assert!(ledger.transactions().is_empty());
    assert!(app.status_message.starts_with("Invalid transaction:"));
}

#[test]
fn test_add_missing_fields_shows_usage() {
    let (mut app, mut ledger) = setup();
    run("add 5 | Other", &mut app, &mut ledger);
    assert!(ledger.transactions().is_empty());
    assert!(app.status_message.starts_with("Usage: :add"));
}

#[test]
fn test_edit_without_args_prefills() {
    let (mut app, mut ledger) = setup();
    run(
        "add 4.50 | Food & Dining | Coffee | 2025-07-01",
        &mut app,
        &mut ledger,
    );
    app.screen = Screen::Transactions;

    run("edit", &mut app, &mut ledger);
    assert_eq!(app.input_mode, InputMode::Command);
    assert_eq!(
        app.command_input,
        "edit expense | 4.50 | Food & Dining | Coffee | 2025-07-01"
    );
}

#[test]
fn test_edit_replaces_fields() {
    let (mut app, mut ledger) = setup();
    run("add 4.50 | Food & Dining | Coffee | 2025-07-01", &mut app, &mut ledger);
    let id = ledger.transactions()[0].id.clone();
    app.screen = Screen::Transactions;

    run(
        "edit income | 20 | Shopping | Refund | 2025-07-05",
        &mut app,
        &mut ledger,
    );

    let txn = &ledger.transactions()[0];
    assert_eq!(txn.id, id);
    assert_eq!(txn.amount, dec!(20));
    assert!(txn.is_income());
    assert_eq!(txn.description, "Refund");
    assert_eq!(txn.category, "Shopping");
    assert_eq!(app.status_message, "Transaction updated");
}

#[test]
fn test_edit_requires_transactions_screen() {
    let (mut app, mut ledger) = setup();
    run("add 1 | Other | Gum | 2025-07-01", &mut app, &mut ledger);
    app.screen = Screen::Overview;
    run("edit", &mut app, &mut ledger);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(
        app.status_message,
        "Navigate to Transactions and select one first"
    );
}

#[test]
fn test_delete_asks_then_removes() {
    let (mut app, mut ledger) = setup();
    run("add 1 | Other | Gum | 2025-07-01", &mut app, &mut ledger);
    app.screen = Screen::Transactions;

    run("delete", &mut app, &mut ledger);
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(app.confirm_message, "Delete 'Gum'?");
    assert_eq!(ledger.transactions().len(), 1);

    let action = app.pending_action.take().unwrap();
    apply_pending(action, &mut app, &mut ledger);
    assert!(ledger.transactions().is_empty());
    assert!(app.transactions.is_empty());
    assert_eq!(app.status_message, "Deleted: Gum");
}

#[test]
fn test_apply_pending_missing_record() {
    let (mut app, mut ledger) = setup();
    apply_pending(
        PendingAction::DeleteTransaction {
            id: "txn_gone".into(),
            description: "Gone".into(),
        },
        &mut app,
        &mut ledger,
    );
    assert_eq!(app.status_message, "Transaction no longer exists");
}

// ── budgets ───────────────────────────────────────────────────

#[test]
fn test_budget_uses_viewed_month() {
    let (mut app, mut ledger) = setup();
    run("add 150 | Shopping | Shoes | 2025-07-10", &mut app, &mut ledger);
    run("budget Shopping | 100", &mut app, &mut ledger);

    assert_eq!(app.screen, Screen::Budgets);
    assert_eq!(ledger.budgets()[0].month, "2025-07");
    assert_eq!(app.budget_usage.len(), 1);
    assert!(app.budget_usage[0].is_over_budget);
    assert_eq!(app.budget_usage[0].spent, dec!(150));
}

#[test]
fn test_budget_other_month_not_listed() {
    let (mut app, mut ledger) = setup();
    run("budget Shopping | 100 | 2025-08", &mut app, &mut ledger);
    assert_eq!(ledger.budgets().len(), 1);
    assert!(app.budgets.is_empty());

    run("next-month", &mut app, &mut ledger);
    assert_eq!(app.budgets.len(), 1);
}

#[test]
fn test_budget_invalid_amount() {
    let (mut app, mut ledger) = setup();
    run("budget Shopping | lots", &mut app, &mut ledger);
    assert!(ledger.budgets().is_empty());
    assert!(app.status_message.starts_with("Invalid budget:"));
}

#[test]
fn test_edit_and_delete_budget() {
    let (mut app, mut ledger) = setup();
    run("budget Shopping | 100", &mut app, &mut ledger);

    run("edit-budget", &mut app, &mut ledger);
    assert_eq!(app.command_input, "edit-budget Shopping | 100 | 2025-07");

    run("edit-budget Shopping | 250", &mut app, &mut ledger);
    assert_eq!(ledger.budgets()[0].amount, dec!(250));
    assert_eq!(ledger.budgets()[0].month, "2025-07");

    run("delete-budget", &mut app, &mut ledger);
    assert_eq!(app.input_mode, InputMode::Confirm);
    let action = app.pending_action.take().unwrap();
    apply_pending(action, &mut app, &mut ledger);
    assert!(ledger.budgets().is_empty());
    assert!(app.budget_usage.is_empty());
}

// ── month & search ────────────────────────────────────────────

#[test]
fn test_month_navigation() {
    let (mut app, mut ledger) = setup();
    run("month 2024-12", &mut app, &mut ledger);
    assert_eq!(app.current_month, "2024-12");
    run("next-month", &mut app, &mut ledger);
    assert_eq!(app.current_month, "2025-01");
    run("prev-month", &mut app, &mut ledger);
    run("prev-month", &mut app, &mut ledger);
    assert_eq!(app.current_month, "2024-11");
    run("m 3", &mut app, &mut ledger);
    assert_eq!(app.current_month, "2024-03");
}

#[test]
fn test_month_invalid_keeps_current() {
    let (mut app, mut ledger) = setup();
    run("month 2025-13", &mut app, &mut ledger);
    assert_eq!(app.current_month, "2025-07");
    assert!(app.status_message.starts_with("Invalid month format"));
}

#[test]
fn test_month_filters_monthly_cards() {
    let (mut app, mut ledger) = setup();
    run("add 10 | Other | July thing | 2025-07-15", &mut app, &mut ledger);
    run("add 20 | Other | June thing | 2025-06-15", &mut app, &mut ledger);
    assert_eq!(app.summary.monthly_expenses, dec!(10));

    run("prev-month", &mut app, &mut ledger);
    assert_eq!(app.summary.monthly_expenses, dec!(20));
    assert_eq!(app.summary.total_expenses, dec!(30));
}

#[test]
fn test_search() {
    let (mut app, mut ledger) = setup();
    run("add 4 | Food & Dining | Coffee Shop | 2025-07-01", &mut app, &mut ledger);
    run("add 9 | Shopping | Book | 2025-07-02", &mut app, &mut ledger);

    run("search coffee", &mut app, &mut ledger);
    assert_eq!(app.screen, Screen::Transactions);
    assert_eq!(app.transactions.len(), 1);
    assert_eq!(app.transactions[0].description, "Coffee Shop");

    run("search", &mut app, &mut ledger);
    assert_eq!(app.transactions.len(), 2);
    assert_eq!(app.status_message, "Search cleared");
}

#[test]
fn test_export_writes_listed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tui.csv");
    let (mut app, mut ledger) = setup();
    run("add 4 | Food & Dining | Coffee | 2025-07-01", &mut app, &mut ledger);

    run(
        &format!("export {}", path.display()),
        &mut app,
        &mut ledger,
    );
    assert!(app.status_message.starts_with("Exported 1 transactions"));
    assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 2);
}
