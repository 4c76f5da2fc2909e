use crate::advisor::{AdvisorConfig, FinancialSnapshot};
use crate::models::{Account, Budget, Transaction};
use crate::stats::{top_categories, MonthWindow, MonthlyStats};

const INSTRUCTIONS: &str = "\
Your role is to:
1. Provide personalized financial advice based on the user's spending patterns, income, and budget
2. Answer questions about their finances in a clear, concise manner
3. Suggest ways to improve their financial health
4. Explain financial concepts in simple terms
5. Be encouraging and positive, while being honest about financial realities

Keep your responses concise and focused on the user's question. Use specific numbers from their financial data when relevant.
Don't make up information that isn't provided in the context.
";

/// Renders the snapshot into the system prompt that opens every conversation.
pub fn system_prompt(snapshot: &FinancialSnapshot, config: &AdvisorConfig) -> String {
    format!(
        "You are {name}'s AI Financial Advisor, a helpful and knowledgeable financial assistant.\n\
         You have access to the following financial information about the user ({user}):\n\
         \n\
         {accounts}\n\
         \n\
         {budget}\n\
         \n\
         {current}\n\
         {previous}\n\
         Recent Transactions:\n\
         {recent}\n\
         \n\
         {INSTRUCTIONS}",
        name = config.assistant_name,
        user = snapshot.user_name,
        accounts = format_accounts(&snapshot.accounts),
        budget = format_budget(snapshot.budget.as_ref()),
        current = format_month(snapshot.current_month, &snapshot.current_month_stats, Some(config.top_categories)),
        previous = format_month(snapshot.previous_month, &snapshot.previous_month_stats, None),
        recent = format_recent(&snapshot.recent_transactions, config.recent_shown)
    )
}

fn format_accounts(accounts: &[Account]) -> String {
    accounts.iter()
        .map(|account| format!("Account: {} ({}), Balance: {}", account.name, account.account_type, account.balance))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_budget(budget: Option<&Budget>) -> String {
    match budget {
        Some(budget) => format!("Monthly Budget: {}", budget.amount),
        None => "No budget set".to_string()
    }
}

/// Income, expenses and net of one month; with `top` set, also its largest expense categories.
fn format_month(window: MonthWindow, stats: &MonthlyStats, top: Option<usize>) -> String {
    let mut block = format!(
        "{} Stats:\n- Total Income: {}\n- Total Expenses: {}\n- Net: {}\n",
        window.label(),
        stats.total_income,
        stats.total_expenses,
        stats.net()
    );

    if let Some(n) = top {
        let categories = top_categories(&stats.by_category, n)
            .into_iter()
            .map(|(category, amount)| format!("{category} ({amount})"))
            .collect::<Vec<_>>()
            .join(", ");

        block.push_str(&format!("- Top Expense Categories: {categories}\n"));
    }

    block
}

fn format_recent(transactions: &[Transaction], shown: usize) -> String {
    transactions.iter()
        .take(shown)
        .map(|transaction| {
            let sign = if transaction.is_expense() { "-" } else { "+" };
            format!("{}: {sign}{} - {}", transaction.date.format("%b %d"), transaction.amount, transaction.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
