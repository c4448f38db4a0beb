mod api;
mod config;
mod datagen;
mod error;
mod model;
mod query;

use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use crate::api::{fetch_customer_roster, fetch_dashboard_snapshot, FetchOptions};
use crate::config::{config_dir, load_config, Config, CONFIG_TEMPLATE};
use crate::error::Result;
use crate::model::InvoiceStatus;
use crate::query::{filter_by_status, paginate, search_customers, sort_invoices, SortDir, SortKey};

#[derive(Parser)]
#[command(name = "dashdemo")]
#[command(version, about = "Demo SaaS analytics dashboard with deterministic mock data", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.dashdemo or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with a template config file
    Init,

    /// Show KPI cards, the revenue trend and recent activity
    Overview {
        /// Override the configured data seed
        #[arg(long)]
        seed: Option<i64>,

        /// Skip the simulated network delay
        #[arg(long)]
        no_delay: bool,

        /// Emit the raw snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// List invoices with filtering, sorting and pagination
    Invoices {
        /// Filter by status (paid, pending, overdue)
        #[arg(short, long)]
        status: Option<String>,

        /// Sort key (issued, customer, amount, status)
        #[arg(long, default_value = "issued")]
        sort: String,

        /// Sort direction (asc, desc)
        #[arg(long, default_value = "desc")]
        dir: String,

        /// 1-based page number; out-of-range requests are clamped
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Rows per page (default: config table.page_size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Override the configured data seed
        #[arg(long)]
        seed: Option<i64>,

        /// Skip the simulated network delay
        #[arg(long)]
        no_delay: bool,

        /// Emit the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// List customers with optional search
    Customers {
        /// Case-insensitive search over name and email
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Override the configured data seed
        #[arg(long)]
        seed: Option<i64>,

        /// Skip the simulated network delay
        #[arg(long)]
        no_delay: bool,

        /// Emit the roster as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Overview {
            seed,
            no_delay,
            json,
        } => cmd_overview(&cfg_dir, seed, no_delay, json).await,
        Commands::Invoices {
            status,
            sort,
            dir,
            page,
            page_size,
            seed,
            no_delay,
            json,
        } => {
            cmd_invoices(
                &cfg_dir, status, &sort, &dir, page, page_size, seed, no_delay, json,
            )
            .await
        }
        Commands::Customers {
            search,
            seed,
            no_delay,
            json,
        } => cmd_customers(&cfg_dir, search, seed, no_delay, json).await,
    }
}

/// Initialize config directory with a template config file
fn cmd_init(cfg_dir: &PathBuf) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(crate::error::DashboardError::AlreadyInitialized(
            cfg_dir.clone(),
        ));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::write(cfg_dir.join("config.toml"), CONFIG_TEMPLATE)?;

    println!("Initialized dashdemo config at: {}", cfg_dir.display());
    println!();
    println!("Tweak the dataset with:  $EDITOR {}/config.toml", cfg_dir.display());
    println!();
    println!("Then explore the demo data:");
    println!("  dashdemo overview");
    println!("  dashdemo invoices --status overdue --sort amount --dir desc");
    println!("  dashdemo customers -q nova");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct InvoiceRow {
    #[tabled(rename = "ISSUED")]
    issued: String,
    #[tabled(rename = "CUSTOMER")]
    customer: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "PLAN")]
    plan: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "INVOICE")]
    id: String,
}

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "CUSTOMER")]
    name: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "PLAN")]
    plan: String,
    #[tabled(rename = "SEATS")]
    seats: u32,
    #[tabled(rename = "HEALTH")]
    health: String,
    #[tabled(rename = "ID")]
    id: String,
}

#[derive(Tabled)]
struct RevenueRow {
    #[tabled(rename = "DAY")]
    day: String,
    #[tabled(rename = "REVENUE")]
    revenue: String,
    #[tabled(rename = "MRR")]
    mrr: String,
}

fn format_money(value: f64) -> String {
    format!("${}", format_grouped_int(value.round() as i64))
}

fn format_grouped_int(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let mut grouped: String = out.chars().rev().collect();
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}

fn format_pct(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{value:.1}%")
}

fn fetch_options(config: &Config, seed: Option<i64>, no_delay: bool) -> FetchOptions {
    FetchOptions {
        seed: seed.unwrap_or(config.data.seed),
        invoice_count: config.data.invoice_count,
        revenue_days: config.data.revenue_days,
        simulate_delay: config.fetch.simulate_delay && !no_delay,
    }
}

/// Show KPI cards, the revenue trend and recent activity
async fn cmd_overview(
    cfg_dir: &PathBuf,
    seed: Option<i64>,
    no_delay: bool,
    json: bool,
) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let opts = fetch_options(&config, seed, no_delay);
    let snapshot = fetch_dashboard_snapshot(&opts).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Dashboard Overview (seed {})", opts.seed);
    println!("{}", "-".repeat(50));

    // First two KPIs are currency values, the rest are counts
    for (idx, kpi) in snapshot.kpis.iter().enumerate() {
        let value = if idx < 2 {
            format_money(kpi.value)
        } else {
            format_grouped_int(kpi.value.round() as i64)
        };
        println!(
            "{:<16} {:>10}   {} vs prior period",
            kpi.label,
            value,
            format_pct(kpi.delta_pct)
        );
    }
    println!("{:<16} {:>10}", "ARR", format_money(snapshot.arr));

    println!();
    println!("Revenue trend (last {} days):", snapshot.revenue.len());
    let rows: Vec<RevenueRow> = snapshot
        .revenue
        .iter()
        .map(|p| RevenueRow {
            day: p.day.clone(),
            revenue: format_money(p.revenue),
            mrr: format_money(p.mrr),
        })
        .collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    println!();
    println!("Activity (last few hours):");
    for event in &snapshot.activity {
        println!(
            "  {} [{:>4}] {} - {}",
            event.ts.with_timezone(&Local).format("%H:%M"),
            event.kind,
            event.title,
            event.detail
        );
    }

    Ok(())
}

/// List invoices with filtering, sorting and pagination
#[allow(clippy::too_many_arguments)]
async fn cmd_invoices(
    cfg_dir: &PathBuf,
    status: Option<String>,
    sort: &str,
    dir: &str,
    page: usize,
    page_size: Option<usize>,
    seed: Option<i64>,
    no_delay: bool,
    json: bool,
) -> Result<()> {
    let config = load_config(cfg_dir)?;

    // Validate view arguments before paying for the fetch
    let status = match status {
        Some(s) => Some(s.parse::<InvoiceStatus>()?),
        None => None,
    };
    let sort_key: SortKey = sort.parse()?;
    let sort_dir: SortDir = dir.parse()?;
    let page_size = page_size.unwrap_or(config.table.page_size);

    let opts = fetch_options(&config, seed, no_delay);
    let snapshot = fetch_dashboard_snapshot(&opts).await?;

    let filtered = filter_by_status(&snapshot.invoices, status);
    let sorted = sort_invoices(&filtered, sort_key, sort_dir);
    let page = paginate(&sorted, page, page_size)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.items.is_empty() {
        println!("No invoices match this filter.");
        return Ok(());
    }

    let rows: Vec<InvoiceRow> = page
        .items
        .iter()
        .map(|inv| InvoiceRow {
            issued: inv.issued.to_string(),
            customer: inv.customer.clone(),
            email: inv.email.clone(),
            plan: inv.plan.to_string(),
            amount: format!("${:.2}", inv.amount),
            status: inv.status.to_string(),
            id: inv.id.clone(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!(
        "Page {} of {} ({} invoices, sorted by {} {})",
        page.page, page.total_pages, page.total_items, sort_key, sort_dir
    );

    Ok(())
}

/// List customers with optional search
async fn cmd_customers(
    cfg_dir: &PathBuf,
    search: Option<String>,
    seed: Option<i64>,
    no_delay: bool,
    json: bool,
) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let opts = fetch_options(&config, seed, no_delay);
    let roster = fetch_customer_roster(&opts).await?;

    let term = search.unwrap_or_default();
    let list = search_customers(&roster, &term);

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    if list.is_empty() {
        println!("No customers match this search.");
        return Ok(());
    }

    let rows: Vec<CustomerRow> = list
        .iter()
        .map(|c| CustomerRow {
            name: c.name.clone(),
            email: c.email.clone(),
            plan: c.plan.to_string(),
            seats: c.seats,
            health: c.health.to_string(),
            id: c.id.clone(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!("{} shown", list.len());

    Ok(())
}
