use std::io::{stderr, stdout, BufWriter, StdoutLock, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use finance_advisor::advisor::{system_prompt, AdvisorConfig, FinancialSnapshot};
use finance_advisor::engine::IngestEngine;
use finance_advisor::records::Caller;
use finance_advisor::stats::{aggregate, progress_percent, top_categories, MonthWindow};
use finance_advisor::storage::{FinanceStorage, Storage};

const REPORT_TOP_CATEGORIES: usize = 3;

enum Command {
    Report { path: String, month: String },
    Progress { path: String, month: String },
    Prompt { path: String, user: String, day: String }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let Some((command, log_level)) = parse_command(&args) else {
        print_usage();
        exit(1);
    };

    setup_logging(log_level.map(parse_log_level).unwrap_or(LevelFilter::ERROR));

    match command {
        Command::Report { path, month } => {
            let window = MonthWindow::parse(&month)?;
            let storage = ingest(&path).await?;
            write_report(&storage, window)
        },
        Command::Progress { path, month } => {
            let window = MonthWindow::parse(&month)?;
            let storage = ingest(&path).await?;
            write_progress(&storage, window)
        },
        Command::Prompt { path, user, day } => {
            let today = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                .map_err(|_| anyhow!("invalid day '{day}', expected YYYY-MM-DD"))?;
            let storage = ingest(&path).await?;
            write_prompt(&storage, &user, today)
        }
    }
}

fn parse_command(args: &[String]) -> Option<(Command, Option<&str>)> {
    let name = args.get(1)?;

    match name.as_str() {
        "report" | "progress" => {
            let path = args.get(2)?.clone();
            let month = args.get(3)?.clone();
            let command = if name == "report" {
                Command::Report { path, month }
            } else {
                Command::Progress { path, month }
            };

            Some((command, args.get(4).map(String::as_str)))
        },
        "prompt" => {
            let command = Command::Prompt {
                path: args.get(2)?.clone(),
                user: args.get(3)?.clone(),
                day: args.get(4)?.clone()
            };

            Some((command, args.get(5).map(String::as_str)))
        },
        _ => None
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  finance-advisor report [ledger].csv [YYYY-MM] [log_level:optional] > [output].csv");
    eprintln!("  finance-advisor progress [ledger].csv [YYYY-MM] [log_level:optional] > [output].csv");
    eprintln!("  finance-advisor prompt [ledger].csv [user] [YYYY-MM-DD] [log_level:optional]");
    eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{level}', defaulting to 'error'");
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn ingest(path: &str) -> Result<Arc<FinanceStorage>> {
    let storage = Arc::new(FinanceStorage::new());
    let engine = IngestEngine::new(storage.clone());

    let timer = Instant::now();
    let summary = engine.run(path).await?;
    let duration = timer.elapsed();

    info!("Loaded {} users from {path} in: {duration:?}", summary.users);

    Ok(storage)
}

fn csv_output() -> csv::Writer<BufWriter<StdoutLock<'static>>> {
    csv::Writer::from_writer(BufWriter::new(stdout().lock()))
}

fn write_report(storage: &FinanceStorage, window: MonthWindow) -> Result<()> {
    let mut output = csv_output();

    output.write_record(["user", "month", "income", "expenses", "net", "transactions", "top_categories"])?;

    for user in storage.users() {
        let Some(record) = storage.load(&user) else {
            continue;
        };

        let stats = aggregate(&record.transactions_in(window));
        let top = top_categories(&stats.by_category, REPORT_TOP_CATEGORIES)
            .into_iter()
            .map(|(category, amount)| format!("{category}:{}", amount.to_fixed()))
            .collect::<Vec<_>>()
            .join(";");

        output.write_record([
            user,
            window.to_string(),
            stats.total_income.to_fixed(),
            stats.total_expenses.to_fixed(),
            stats.net().to_fixed(),
            stats.transaction_count.to_string(),
            top
        ])?;
    }

    output.flush()?;

    Ok(())
}

fn write_progress(storage: &FinanceStorage, window: MonthWindow) -> Result<()> {
    let mut output = csv_output();

    output.write_record(["user", "kind", "name", "amount", "target", "percent"])?;

    for user in storage.users() {
        let Some(record) = storage.load(&user) else {
            continue;
        };

        let stats = aggregate(&record.transactions_in(window));

        for budget in &record.budgets {
            let spent = budget.spent_in(&stats);
            let percent = progress_percent(spent.amount(), budget.amount.amount())
                .unwrap_or_else(|error| {
                    warn!("Budget [{}] of user [{user}]: {error}", budget.id);
                    Decimal::ZERO
                });

            output.write_record([
                user.as_str(),
                "budget",
                budget.name(),
                spent.to_fixed().as_str(),
                budget.amount.to_fixed().as_str(),
                format_percent(percent).as_str()
            ])?;
        }

        for goal in &record.goals {
            let percent = goal.progress().unwrap_or_else(|error| {
                warn!("Savings goal [{}] of user [{user}]: {error}", goal.id);
                Decimal::ZERO
            });

            output.write_record([
                user.as_str(),
                "goal",
                goal.name.as_str(),
                goal.current_amount.to_fixed().as_str(),
                goal.target_amount.to_fixed().as_str(),
                format_percent(percent).as_str()
            ])?;
        }
    }

    output.flush()?;

    Ok(())
}

fn format_percent(percent: Decimal) -> String {
    format!("{:.2}", percent.round_dp(2))
}

fn write_prompt(storage: &FinanceStorage, user: &str, today: NaiveDate) -> Result<()> {
    let config = AdvisorConfig::default();
    let caller = Caller::new(user, "");
    let snapshot = FinancialSnapshot::collect(storage, Some(&caller), today, config.recent_limit)?;

    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "{}", system_prompt(&snapshot, &config))?;
    output.flush()?;

    Ok(())
}
