use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::export;
use crate::form::{self, BudgetInput, TransactionInput};
use crate::models::{
    category_glyph, current_month, month_label, parse_month, Budget, Transaction,
};
use crate::stats;
use crate::store::Ledger;

/// Finboard - a local-only personal finance tracker for the terminal.
///
/// Run without a subcommand to open the interactive dashboard.
#[derive(Parser, Debug)]
#[command(name = "finboard", version, about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Record a transaction
    Add(AddArgs),
    /// Change fields of an existing transaction
    Edit(EditArgs),
    /// Delete a transaction
    Delete {
        /// Transaction id (see `list`)
        id: String,
    },
    /// List transactions, newest first
    List {
        /// Only show transactions whose description or category contains this text
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Print balance, monthly totals and budget status
    Summary {
        /// Month to summarize (YYYY-MM, default: current)
        #[arg(long, short)]
        month: Option<String>,
    },
    /// Print expense totals by category
    Categories,
    /// Print monthly activity for the last N months
    Trend {
        /// Number of months (default from config, normally 12)
        #[arg(long, short)]
        months: Option<usize>,
    },
    /// Manage monthly budgets
    #[command(subcommand)]
    Budget(BudgetCommand),
    /// Export all transactions to a CSV file
    Export {
        /// Output file path
        path: String,
    },
    /// Launch the interactive dashboard (default)
    Tui,
}

#[derive(Args, Debug)]
pub(crate) struct AddArgs {
    /// Positive amount, e.g. 4.50
    amount: String,
    /// What the money was for
    description: String,
    /// Category (default: Other)
    #[arg(long, short)]
    category: Option<String>,
    /// Date as YYYY-MM-DD (default: today)
    #[arg(long, short)]
    date: Option<String>,
    /// income or expense (default: expense)
    #[arg(long = "type", short = 't')]
    kind: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct EditArgs {
    /// Transaction id (see `list`)
    id: String,
    #[arg(long, short)]
    amount: Option<String>,
    #[arg(long = "description", short = 'D')]
    description: Option<String>,
    #[arg(long, short)]
    category: Option<String>,
    #[arg(long, short)]
    date: Option<String>,
    #[arg(long = "type", short = 't')]
    kind: Option<String>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum BudgetCommand {
    /// Create a budget for one category and month
    Add {
        category: String,
        amount: String,
        /// YYYY-MM (default: current month)
        #[arg(long, short)]
        month: Option<String>,
    },
    /// Change fields of an existing budget
    Edit {
        id: String,
        #[arg(long, short)]
        category: Option<String>,
        #[arg(long, short)]
        amount: Option<String>,
        #[arg(long, short)]
        month: Option<String>,
    },
    /// Delete a budget
    Delete { id: String },
    /// List budgets of a month with their usage
    List {
        /// YYYY-MM (default: current month)
        #[arg(long, short)]
        month: Option<String>,
    },
}

pub(crate) fn as_cli(command: Command, ledger: &mut Ledger, config: &Config) -> Result<()> {
    match command {
        Command::Add(args) => cli_add(args, ledger),
        Command::Edit(args) => cli_edit(args, ledger),
        Command::Delete { id } => cli_delete(id.as_str(), ledger),
        Command::List { search } => cli_list(search.as_deref(), ledger),
        Command::Summary { month } => {
            cli_summary(month, config.recent_count, ledger, &mut io::stdout().lock())
        }
        Command::Categories => cli_categories(ledger),
        Command::Trend { months } => cli_trend(months.unwrap_or(config.trend_months), ledger),
        Command::Budget(cmd) => cli_budget(cmd, ledger),
        Command::Export { path } => cli_export(&path, ledger),
        Command::Tui => crate::run::as_tui(ledger, config),
    }
}

fn cli_add(args: AddArgs, ledger: &mut Ledger) -> Result<()> {
    let draft = form::parse_transaction(&TransactionInput {
        amount: args.amount,
        date: args.date,
        description: args.description,
        category: args.category,
        kind: args.kind,
    })?;
    let txn = ledger.add_transaction(draft);
    println!("Transaction added: {}", txn.id);
    print_transaction_header();
    print_transaction(&txn);
    Ok(())
}

fn cli_edit(args: EditArgs, ledger: &mut Ledger) -> Result<()> {
    let Some(base) = ledger.records().transaction(&args.id).map(Transaction::to_draft) else {
        bail!("No transaction with id {}", args.id);
    };

    // Unset flags keep the stored value
    let input = TransactionInput {
        amount: args.amount.unwrap_or_else(|| base.amount.abs().to_string()),
        date: Some(
            args.date
                .unwrap_or_else(|| base.date.format("%Y-%m-%d").to_string()),
        ),
        description: args.description.unwrap_or(base.description),
        category: Some(args.category.unwrap_or(base.category)),
        kind: Some(args.kind.unwrap_or_else(|| base.kind.to_string())),
    };
    let draft = form::parse_transaction(&input)?;
    ledger.update_transaction(&args.id, draft);
    println!("Transaction updated: {}", args.id);
    Ok(())
}

fn cli_delete(id: &str, ledger: &mut Ledger) -> Result<()> {
    if !ledger.delete_transaction(id) {
        bail!("No transaction with id {id}");
    }
    println!("Transaction deleted: {id}");
    Ok(())
}

fn cli_list(search: Option<&str>, ledger: &Ledger) -> Result<()> {
    let txns = stats::search(ledger.transactions(), search.unwrap_or(""));
    if txns.is_empty() {
        println!("No transactions");
        return Ok(());
    }

    print_transaction_header();
    for txn in &txns {
        print_transaction(txn);
    }
    println!("{} transactions", txns.len());
    Ok(())
}

fn print_transaction_header() {
    println!(
        "{:<30} {:<10} {:<7} {:<20} {:<30} {:>12}",
        "ID", "Date", "Type", "Category", "Description", "Amount"
    );
    println!("{}", "─".repeat(114));
}

fn print_transaction(txn: &Transaction) {
    println!(
        "{:<30} {:<10} {:<7} {:<20} {:<30} {:>12}",
        txn.id,
        txn.date.format("%Y-%m-%d").to_string(),
        txn.kind.as_str(),
        txn.category,
        txn.description,
        format!("{:.2}", txn.amount),
    );
}

fn resolve_month(month: Option<String>) -> Result<String> {
    match month {
        Some(m) if parse_month(&m).is_some() => Ok(m),
        Some(m) => bail!("Invalid month '{m}', expected YYYY-MM"),
        None => Ok(current_month()),
    }
}

fn cli_summary(
    month: Option<String>,
    recent_count: usize,
    ledger: &Ledger,
    out: &mut impl Write,
) -> Result<()> {
    let month = resolve_month(month)?;
    let s = stats::summary_totals(ledger.transactions(), &month);

    writeln!(out, "Finboard - {}", month_label(&month))?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Total Balance:   ${:.2}", s.total_balance)?;
    writeln!(out, "  Total Income:    ${:.2}", s.total_income)?;
    writeln!(out, "  Total Expenses:  ${:.2}", s.total_expenses)?;
    writeln!(out, "  Month Income:    ${:.2}", s.monthly_income)?;
    writeln!(out, "  Month Expenses:  ${:.2}", s.monthly_expenses)?;
    writeln!(out, "  Transactions:    {}", s.transaction_count)?;

    let budgets = stats::budgets_for_month(ledger.budgets(), &month);
    if !budgets.is_empty() {
        writeln!(out)?;
        writeln!(out, "Budgets:")?;
        for budget in budgets {
            let usage = stats::budget_usage(budget, ledger.transactions());
            writeln!(out, "{}", budget_usage_line(&usage, false))?;
        }
    }

    let recent = stats::recent(ledger.transactions(), recent_count);
    if !recent.is_empty() {
        writeln!(out)?;
        writeln!(out, "Recent:")?;
        for txn in recent {
            writeln!(
                out,
                "  {} {:<30} {:>12}",
                txn.date.format("%Y-%m-%d"),
                txn.description,
                format!("{:.2}", txn.amount)
            )?;
        }
    }

    Ok(())
}

fn cli_categories(ledger: &Ledger) -> Result<()> {
    let totals = stats::category_totals(ledger.transactions());
    if totals.is_empty() {
        println!("No expenses");
        return Ok(());
    }

    let grand_total: Decimal = totals.iter().map(|ct| ct.total).sum();
    println!("{:<26} {:>12} {:>7}", "Category", "Total", "Share");
    println!("{}", "─".repeat(47));
    for ct in &totals {
        println!(
            "{} {:<23} {:>12} {:>6}%",
            category_glyph(&ct.category),
            ct.category,
            format!("{:.2}", ct.total),
            format!("{:.1}", stats::share_of(ct.total, grand_total)),
        );
    }
    Ok(())
}

fn cli_trend(months: usize, ledger: &Ledger) -> Result<()> {
    let series = stats::monthly_series(ledger.transactions(), months.max(1));
    if series.is_empty() {
        println!("No transactions");
        return Ok(());
    }
    for point in &series {
        println!("{:<9} {:>12}", point.label, format!("{:.2}", point.amount));
    }
    Ok(())
}

fn cli_budget(cmd: BudgetCommand, ledger: &mut Ledger) -> Result<()> {
    match cmd {
        BudgetCommand::Add {
            category,
            amount,
            month,
        } => {
            let draft = form::parse_budget(&BudgetInput {
                category,
                amount,
                month,
            })?;
            let budget = ledger.add_budget(draft);
            println!(
                "Budget created: {} ({} {} = ${:.2})",
                budget.id, budget.category, budget.month, budget.amount
            );
        }
        BudgetCommand::Edit {
            id,
            category,
            amount,
            month,
        } => {
            let Some(base) = ledger.records().budget(&id).map(Budget::to_draft) else {
                bail!("No budget with id {id}");
            };
            let draft = form::parse_budget(&BudgetInput {
                category: category.unwrap_or(base.category),
                amount: amount.unwrap_or_else(|| base.amount.to_string()),
                month: Some(month.unwrap_or(base.month)),
            })?;
            ledger.update_budget(id.as_str(), draft);
            println!("Budget updated: {id}");
        }
        BudgetCommand::Delete { id } => {
            if !ledger.delete_budget(&id) {
                bail!("No budget with id {id}");
            }
            println!("Budget deleted: {id}");
        }
        BudgetCommand::List { month } => {
            let month = resolve_month(month)?;
            let budgets = stats::budgets_for_month(ledger.budgets(), &month);
            if budgets.is_empty() {
                println!("No budgets for {month}");
                return Ok(());
            }
            println!("Budgets for {}", month_label(&month));
            for budget in budgets {
                let usage = stats::budget_usage(budget, ledger.transactions());
                println!("{}", budget_usage_line(&usage, true));
            }
        }
    }
    Ok(())
}

fn budget_usage_line(usage: &stats::BudgetUsage, with_id: bool) -> String {
    let pct = match usage.percentage {
        Some(p) => format!("{p:.1}%"),
        None => "n/a".to_string(),
    };
    let flag = if usage.is_over_budget { "  OVER" } else { "" };
    let id = if with_id {
        format!("{:<30} ", usage.budget_id)
    } else {
        String::new()
    };
    format!(
        "  {id}{:<20} ${:.2} / ${:.2}  {pct}{flag}",
        usage.category, usage.spent, usage.limit
    )
}

fn cli_export(path: &str, ledger: &Ledger) -> Result<()> {
    let path = export::shellexpand(path);
    let txns: Vec<&Transaction> = ledger.transactions().iter().collect();
    let count = export::write_csv(Path::new(&path), &txns)?;
    if count == 0 {
        println!("No transactions to export (wrote header only to {path})");
    } else {
        println!("Exported {count} transactions to {path}");
    }
    Ok(())
}
