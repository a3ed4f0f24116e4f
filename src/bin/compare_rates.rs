//! Compare the same deposits across every available investment rate
//!
//! Usage: cargo run --bin compare_rates -- --country NG --currency NGN --catalog data/investments.json

use anyhow::Context;
use clap::Parser;
use compound_returns::{
    catalog::{preset_options, Country},
    display::format_currency,
    CalculationInput, CompoundingFrequency, Currency, RateCatalog, RecurringFrequency,
    ScenarioRunner,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank investment options by projected balance", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 5000.0)]
    initial: f64,

    /// Monthly deposit
    #[arg(long, default_value_t = 100.0)]
    recurring: f64,

    #[arg(long, default_value_t = 5)]
    years: u32,

    /// Country code (NG, KE, ZA, GH, EG) or ALL
    #[arg(long)]
    country: Option<String>,

    #[arg(long, default_value = "USD")]
    currency: Currency,

    /// Fund catalog JSON; only the preset options are compared without it
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    if let Some(code) = args.country.as_deref() {
        if !code.eq_ignore_ascii_case("ALL") {
            Country::parse_code(code)?;
        }
    }

    let mut options = preset_options();
    if let Some(path) = &args.catalog {
        let catalog = RateCatalog::from_json_path(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?;
        println!("Loaded catalog with {} countries", catalog.country_count());
        options.extend(catalog.options(args.country.as_deref(), args.currency));
    }

    let base = CalculationInput::new(args.initial, 0.0, CompoundingFrequency::Monthly)
        .with_recurring(args.recurring, RecurringFrequency::Monthly)
        .with_years(args.years);

    println!("Running {} projections...", options.len());
    let runner = ScenarioRunner::new();
    let mut scenarios = runner.compare_rates(&base, &options);

    scenarios.sort_by(|a, b| {
        let a_total = a.summary().map(|s| s.final_balance).unwrap_or(0.0);
        let b_total = b.summary().map(|s| s.final_balance).unwrap_or(0.0);
        b_total.total_cmp(&a_total)
    });

    let currency = args.currency.code();
    println!(
        "\n{:<4} {:<32} {:>7} {:>20} {:>10} {:>20}",
        "Rank", "Option", "Rate", "Interest", "Interest %", "Final Balance"
    );
    println!("{}", "-".repeat(98));

    for (rank, scenario) in scenarios.iter().enumerate() {
        let label = match &scenario.option.flag {
            Some(flag) => format!("{} {}", flag, scenario.option.name),
            None => scenario.option.name.clone(),
        };
        match scenario.summary() {
            Some(summary) => println!(
                "{:<4} {:<32} {:>6}% {:>20} {:>9.1}% {:>20}",
                rank + 1,
                label,
                scenario.option.rate,
                format_currency(summary.interest_earned, currency),
                summary.interest_share() * 100.0,
                format_currency(summary.final_balance, currency),
            ),
            None => println!(
                "{:<4} {:<32} {:>6}% {:>20} {:>10} {:>20}",
                rank + 1,
                label,
                scenario.option.rate,
                "-",
                "-",
                "no projection"
            ),
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
