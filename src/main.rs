//! Command-line front end for the tool rental pricing engine.
//!
//! # Usage
//!
//! ```bash
//! # Check a tool out and print the rental agreement
//! tool-rental checkout --tool LADW --days 3 --discount 10 --date 7/2/20
//!
//! # Same, as JSON
//! tool-rental checkout --tool LADW --days 3 --discount 10 --date 7/2/20 --json
//!
//! # List the catalog
//! tool-rental tools
//!
//! # Run the reference checkouts
//! tool-rental demo
//! ```
//!
//! # Environment Variables
//!
//! - `TOOL_RENTAL_CATALOG`: catalog directory, defaults to the built-in catalog
//! - `RUST_LOG`: log filter, defaults to `warn`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tool_rental::checkout::CheckoutService;
use tool_rental::config::ConfigLoader;
use tool_rental::format::{format_currency, format_percent};
use tracing_subscriber::EnvFilter;

/// Prices multi-day tool rentals.
#[derive(Parser)]
#[command(name = "tool-rental")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog directory containing tool_types.yaml and tools.yaml
    #[arg(long, global = true, env = "TOOL_RENTAL_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a tool out and print the rental agreement
    Checkout {
        /// Tool code (e.g., "LADW")
        #[arg(short, long)]
        tool: String,

        /// Number of rental days
        #[arg(short, long, allow_negative_numbers = true)]
        days: i32,

        /// Discount as a whole percentage
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        discount: i32,

        /// Checkout date, M/d/yy or MM/dd/yy
        #[arg(long)]
        date: String,

        /// Print the agreement as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the tools in the catalog
    Tools,

    /// Run the reference checkouts
    Demo,
}

/// Reference checkouts run by `demo`: tool, days, discount, date.
const DEMO_CHECKOUTS: [(&str, i32, i32, &str); 6] = [
    ("JAKR", 5, 101, "9/3/15"),
    ("LADW", 3, 10, "7/2/20"),
    ("CHNS", 5, 25, "7/2/15"),
    ("JAKD", 6, 0, "9/3/15"),
    ("JAKR", 9, 0, "7/2/15"),
    ("JAKR", 4, 50, "7/2/20"),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let loader = match &cli.catalog {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => ConfigLoader::builtin().context("Failed to load built-in catalog")?,
    };
    let service = CheckoutService::new(loader.into_catalog());

    match cli.command {
        Commands::Checkout {
            tool,
            days,
            discount,
            date,
            json,
        } => {
            let agreement = service.checkout(&tool, days, discount, &date)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&agreement)?);
            } else {
                println!("{agreement}");
            }
        }
        Commands::Tools => list_tools(&service),
        Commands::Demo => run_demo(&service),
    }

    Ok(())
}

/// Prints one line per catalog tool.
fn list_tools(service: &CheckoutService) {
    println!(
        "{:<6} {:<12} {:<8} {:>8}  {:<8} {:<8}",
        "Code", "Type", "Brand", "Daily", "Weekend", "Holiday"
    );
    for tool in service.catalog().tools() {
        println!(
            "{:<6} {:<12} {:<8} {:>8}  {:<8} {:<8}",
            tool.code,
            tool.tool_type,
            tool.brand,
            format_currency(tool.daily_charge),
            yes_no(tool.weekend_charge),
            yes_no(tool.holiday_charge),
        );
    }
}

fn yes_no(charged: bool) -> &'static str {
    if charged { "yes" } else { "no" }
}

/// Runs every reference checkout, printing the agreement or the error.
fn run_demo(service: &CheckoutService) {
    for (index, (tool, days, discount, date)) in DEMO_CHECKOUTS.iter().enumerate() {
        println!(
            "=== Checkout {}: {} for {} days at {} from {} ===",
            index + 1,
            tool,
            days,
            u32::try_from(*discount)
                .map(format_percent)
                .unwrap_or_else(|_| format!("{discount}%")),
            date
        );
        match service.checkout(tool, *days, *discount, date) {
            Ok(agreement) => println!("{agreement}"),
            Err(err) => println!("Error: {err}"),
        }
        println!();
    }
}
