use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::export;
use crate::form::{self, BudgetInput, TransactionInput};
use crate::models::{current_month, parse_month, shift_month, TransactionKind};
use crate::store::Ledger;

#[derive(Clone, Copy)]
pub(crate) struct Command {
    pub(crate) name: &'static str,
    pub(crate) aliases: &'static [&'static str],
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($registry:expr, [$name:expr $(, $alias:expr)*], $desc:expr, $func:expr) => {{
        let cmd = Command {
            name: $name,
            aliases: &[$($alias),*],
            description: $desc,
            run: $func,
        };
        $registry.insert($name, cmd);
        $($registry.insert($alias, cmd);)*
    }};
}

/// Every name and alias maps to its command.
pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!(r, ["quit", "q"], "Quit Finboard", cmd_quit);
    register_command!(r, ["overview", "o"], "Go to Overview", cmd_overview);
    register_command!(r, ["transactions", "t"], "Go to Transactions", cmd_transactions);
    register_command!(r, ["categories", "c"], "Go to Categories", cmd_categories);
    register_command!(r, ["budgets", "b"], "Go to Budgets", cmd_budgets);
    register_command!(r, ["help", "h"], "Show this help", cmd_help);
    register_command!(
        r,
        ["add", "a"],
        "Add expense: <amount> | <category> | <description> [| <date>]",
        cmd_add
    );
    register_command!(
        r,
        ["income", "i"],
        "Add income, e.g. 2500 | Other | Salary",
        cmd_income
    );
    register_command!(
        r,
        ["edit", "e"],
        "Edit selected: <type> | <amount> | <category> | <description> | <date>",
        cmd_edit
    );
    register_command!(
        r,
        ["delete", "delete-txn"],
        "Delete selected transaction",
        cmd_delete
    );
    register_command!(
        r,
        ["budget"],
        "Set budget: <category> | <amount> [| <YYYY-MM>]",
        cmd_budget
    );
    register_command!(
        r,
        ["edit-budget"],
        "Edit selected budget: <category> | <amount> | <YYYY-MM>",
        cmd_edit_budget
    );
    register_command!(r, ["delete-budget"], "Delete selected budget", cmd_delete_budget);
    register_command!(
        r,
        ["month", "m"],
        "View month YYYY-MM or MM, blank returns to now",
        cmd_month
    );
    register_command!(r, ["next-month"], "View next month", cmd_next_month);
    register_command!(r, ["prev-month"], "View previous month", cmd_prev_month);
    register_command!(
        r,
        ["search", "s"],
        "Filter transactions by text, blank clears",
        cmd_search
    );
    register_command!(
        r,
        ["export"],
        "Write listed transactions to CSV, e.g. ~/finance.csv",
        cmd_export
    );

    r
});

/// One entry per command (aliases folded in), sorted by name.
pub(crate) fn command_list() -> Vec<&'static Command> {
    let mut list: Vec<&'static Command> = COMMANDS
        .iter()
        .filter(|(key, cmd)| **key == cmd.name)
        .map(|(_, cmd)| cmd)
        .collect();
    list.sort_by_key(|cmd| cmd.name);
    list
}

pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

/// Carry out the action the user just confirmed with `y`.
pub(crate) fn apply_pending(action: PendingAction, app: &mut App, ledger: &mut Ledger) {
    match action {
        PendingAction::DeleteTransaction { id, description } => {
            if ledger.delete_transaction(&id) {
                app.set_status(format!("Deleted: {description}"));
            } else {
                app.set_status("Transaction no longer exists");
            }
        }
        PendingAction::DeleteBudget { id, name } => {
            if ledger.delete_budget(&id) {
                app.set_status(format!("Deleted budget: {name}"));
            } else {
                app.set_status("Budget no longer exists");
            }
        }
    }
    app.refresh(ledger);
}

fn find_closest(input: &str) -> &'static str {
    command_list()
        .into_iter()
        .map(|cmd| cmd.name)
        .min_by_key(|name| levenshtein(input, name))
        .unwrap_or("help")
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Split `a | b | c` into trimmed fields. Empty input yields no fields.
pub(crate) fn split_fields(args: &str) -> Vec<&str> {
    if args.trim().is_empty() {
        return Vec::new();
    }
    args.split('|').map(str::trim).collect()
}

fn optional_field(fields: &[&str], i: usize) -> Option<String> {
    fields
        .get(i)
        .filter(|f| !f.is_empty())
        .map(|f| f.to_string())
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_overview(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Overview;
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    Ok(())
}

fn cmd_categories(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Categories;
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    add_transaction(args, TransactionKind::Expense, app, ledger)
}

fn cmd_income(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    add_transaction(args, TransactionKind::Income, app, ledger)
}

fn add_transaction(
    args: &str,
    kind: TransactionKind,
    app: &mut App,
    ledger: &mut Ledger,
) -> anyhow::Result<()> {
    let fields = split_fields(args);
    if fields.len() < 3 {
        let name = match kind {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "add",
        };
        app.set_status(format!(
            "Usage: :{name} <amount> | <category> | <description> [| <date>]"
        ));
        return Ok(());
    }

    let input = TransactionInput {
        amount: fields[0].to_string(),
        category: optional_field(&fields, 1),
        description: fields[2].to_string(),
        date: optional_field(&fields, 3),
        kind: Some(kind.as_str().to_string()),
    };

    match form::parse_transaction(&input) {
        Ok(draft) => {
            let txn = ledger.add_transaction(draft);
            app.refresh(ledger);
            app.set_status(format!("Transaction added: {}", txn.description));
        }
        Err(e) => app.set_status(format!("Invalid transaction: {e}")),
    }
    Ok(())
}

fn cmd_edit(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let selected = match app.screen {
        Screen::Transactions => app.selected_transaction().cloned(),
        _ => None,
    };
    let Some(txn) = selected else {
        app.set_status("Navigate to Transactions and select one first");
        return Ok(());
    };

    if args.is_empty() {
        // Prefill the command line with the current values
        app.command_input = format!(
            "edit {} | {} | {} | {} | {}",
            txn.kind,
            txn.abs_amount(),
            txn.category,
            txn.description,
            txn.date.format("%Y-%m-%d"),
        );
        app.input_mode = InputMode::Command;
        return Ok(());
    }

    let fields = split_fields(args);
    if fields.len() < 4 {
        app.set_status("Usage: :edit <type> | <amount> | <category> | <description> [| <date>]");
        return Ok(());
    }

    let input = TransactionInput {
        kind: optional_field(&fields, 0),
        amount: fields[1].to_string(),
        category: optional_field(&fields, 2),
        description: fields[3].to_string(),
        date: optional_field(&fields, 4).or_else(|| Some(txn.date.format("%Y-%m-%d").to_string())),
    };

    match form::parse_transaction(&input) {
        Ok(draft) => {
            if ledger.update_transaction(&txn.id, draft) {
                app.set_status("Transaction updated");
            } else {
                app.set_status("Transaction no longer exists");
            }
            app.refresh(ledger);
        }
        Err(e) => app.set_status(format!("Invalid transaction: {e}")),
    }
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    if app.screen != Screen::Transactions || app.transactions.is_empty() {
        app.set_status("Navigate to Transactions and select one first");
        return Ok(());
    }

    if let Some(txn) = app.selected_transaction() {
        let id = txn.id.clone();
        let description = txn.description.clone();
        app.confirm_message = format!("Delete '{description}'?");
        app.pending_action = Some(PendingAction::DeleteTransaction { id, description });
        app.input_mode = InputMode::Confirm;
    }

    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let fields = split_fields(args);
    if fields.len() < 2 {
        app.set_status("Usage: :budget <category> | <amount> [| <month>]. Example: :budget Food & Dining | 500");
        return Ok(());
    }

    let input = BudgetInput {
        category: fields[0].to_string(),
        amount: fields[1].to_string(),
        month: optional_field(&fields, 2).or_else(|| Some(app.current_month.clone())),
    };

    match form::parse_budget(&input) {
        Ok(draft) => {
            let budget = ledger.add_budget(draft);
            app.refresh(ledger);
            app.screen = Screen::Budgets;
            app.set_status(format!(
                "Budget created: {} = ${} for {}",
                budget.category, budget.amount, budget.month
            ));
        }
        Err(e) => app.set_status(format!("Invalid budget: {e}")),
    }
    Ok(())
}

fn cmd_edit_budget(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let Some(budget) = app.selected_budget().cloned() else {
        app.set_status("No budget selected");
        return Ok(());
    };

    if args.is_empty() {
        app.command_input = format!(
            "edit-budget {} | {} | {}",
            budget.category, budget.amount, budget.month
        );
        app.input_mode = InputMode::Command;
        return Ok(());
    }

    let fields = split_fields(args);
    if fields.len() < 2 {
        app.set_status("Usage: :edit-budget <category> | <amount> [| <month>]");
        return Ok(());
    }

    let input = BudgetInput {
        category: fields[0].to_string(),
        amount: fields[1].to_string(),
        month: optional_field(&fields, 2).or_else(|| Some(budget.month.clone())),
    };

    match form::parse_budget(&input) {
        Ok(draft) => {
            if ledger.update_budget(&budget.id, draft) {
                app.set_status("Budget updated");
            } else {
                app.set_status("Budget no longer exists");
            }
            app.refresh(ledger);
        }
        Err(e) => app.set_status(format!("Invalid budget: {e}")),
    }
    Ok(())
}

fn cmd_delete_budget(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    if app.budgets.is_empty() {
        app.set_status("No budgets to delete");
        return Ok(());
    }

    if let Some(budget) = app.selected_budget() {
        let id = budget.id.clone();
        let name = budget.category.clone();
        app.confirm_message = format!("Delete budget for '{name}'?");
        app.pending_action = Some(PendingAction::DeleteBudget { id, name });
        app.input_mode = InputMode::Confirm;
    }

    Ok(())
}

fn cmd_month(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        set_month(app, ledger, current_month());
        return Ok(());
    }

    // Accept "2025-07" or just "07" / "7" within the viewed year
    let month = if args.len() <= 2 {
        let year = app.current_month.split('-').next().unwrap_or_default();
        format!("{year}-{args:0>2}")
    } else {
        args.to_string()
    };

    if parse_month(&month).is_some() {
        set_month(app, ledger, month);
    } else {
        app.set_status("Invalid month format. Use YYYY-MM (e.g. 2025-07)");
    }

    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let month = shift_month(&app.current_month, 1);
    set_month(app, ledger, month);
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let month = shift_month(&app.current_month, -1);
    set_month(app, ledger, month);
    Ok(())
}

fn set_month(app: &mut App, ledger: &Ledger, month: String) {
    app.set_status(format!("Month: {month}"));
    app.current_month = month;
    app.budget_cursor.top();
    app.refresh(ledger);
}

fn cmd_search(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Transactions;
    app.transaction_cursor.top();
    app.refresh_transactions(ledger);

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}

fn cmd_export(args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        export::shellexpand("~/finboard-export.csv")
    } else {
        export::shellexpand(args)
    };

    let listed: Vec<_> = app.transactions.iter().collect();
    let count = export::write_csv(Path::new(&path), &listed)?;
    if count == 0 {
        app.set_status("No transactions to export");
    } else {
        app.set_status(format!("Exported {count} transactions to {path}"));
    }
    Ok(())
}
