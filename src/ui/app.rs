use crate::config::Config;
use crate::models::{current_month, Budget, Transaction};
use crate::stats::{self, BudgetUsage, CategoryTotal, MonthlyPoint, Summary};
use crate::store::Ledger;
use crate::ui::util::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Overview,
    Transactions,
    Categories,
    Budgets,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Overview,
            Self::Transactions,
            Self::Categories,
            Self::Budgets,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overview => write!(f, "Overview"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Categories => write!(f, "Categories"),
            Self::Budgets => write!(f, "Budgets"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: String, description: String },
    DeleteBudget { id: String, name: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// Month the monthly cards and the budget list are computed for.
    pub(crate) current_month: String,
    pub(crate) recent_count: usize,
    pub(crate) trend_months: usize,

    // Overview
    pub(crate) summary: Summary,
    pub(crate) monthly_trend: Vec<MonthlyPoint>,
    pub(crate) recent: Vec<Transaction>,

    // Transactions (search applied)
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) transaction_cursor: Cursor,

    // Categories
    pub(crate) category_totals: Vec<CategoryTotal>,
    pub(crate) category_cursor: Cursor,

    // Budgets for `current_month`
    pub(crate) budgets: Vec<Budget>,
    pub(crate) budget_usage: Vec<BudgetUsage>,
    pub(crate) budget_cursor: Cursor,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            running: true,
            screen: Screen::Overview,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,
            current_month: current_month(),
            recent_count: config.recent_count,
            trend_months: config.trend_months,

            summary: Summary::default(),
            monthly_trend: Vec::new(),
            recent: Vec::new(),

            transactions: Vec::new(),
            transaction_cursor: Cursor::default(),

            category_totals: Vec::new(),
            category_cursor: Cursor::default(),

            budgets: Vec::new(),
            budget_usage: Vec::new(),
            budget_cursor: Cursor::default(),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Recompute every derived view from the ledger's current records.
    pub(crate) fn refresh(&mut self, ledger: &Ledger) {
        let all = ledger.transactions();

        self.summary = stats::summary_totals(all, &self.current_month);
        self.monthly_trend = stats::monthly_series(all, self.trend_months);
        self.recent = stats::recent(all, self.recent_count).to_vec();
        self.category_totals = stats::category_totals(all);

        self.refresh_transactions(ledger);

        self.budgets = stats::budgets_for_month(ledger.budgets(), &self.current_month)
            .into_iter()
            .cloned()
            .collect();
        self.budget_usage = self
            .budgets
            .iter()
            .map(|b| stats::budget_usage(b, all))
            .collect();

        self.category_cursor.clamp(self.category_totals.len());
        self.budget_cursor.clamp(self.budgets.len());
    }

    /// Re-run the search over the ledger without touching the other views.
    pub(crate) fn refresh_transactions(&mut self, ledger: &Ledger) {
        self.transactions = stats::search(ledger.transactions(), &self.search_input)
            .into_iter()
            .cloned()
            .collect();
        self.transaction_cursor.clamp(self.transactions.len());
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.transaction_cursor.index)
    }

    pub(crate) fn selected_budget(&self) -> Option<&Budget> {
        self.budgets.get(self.budget_cursor.index)
    }

    /// Cursor of the list on the active screen and that list's length.
    pub(crate) fn active_list(&mut self) -> Option<(&mut Cursor, usize)> {
        match self.screen {
            Screen::Transactions => Some((&mut self.transaction_cursor, self.transactions.len())),
            Screen::Categories => Some((&mut self.category_cursor, self.category_totals.len())),
            Screen::Budgets => Some((&mut self.budget_cursor, self.budgets.len())),
            Screen::Overview => None,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
