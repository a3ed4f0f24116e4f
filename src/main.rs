//! Compound Returns CLI
//!
//! Command-line interface for running a single growth projection

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use compound_returns::{
    display::{format_currency, year_label},
    export::{write_csv_file, ProjectionReport},
    try_project, CalculationInput, CompoundingFrequency, Currency, ProjectionSummary,
    RecurringFrequency,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DepositCadence {
    Weekly,
    Monthly,
}

impl From<DepositCadence> for RecurringFrequency {
    fn from(value: DepositCadence) -> Self {
        match value {
            DepositCadence::Weekly => RecurringFrequency::Weekly,
            DepositCadence::Monthly => RecurringFrequency::Monthly,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Compounding {
    Monthly,
    Quarterly,
    Annually,
}

impl From<Compounding> for CompoundingFrequency {
    fn from(value: Compounding) -> Self {
        match value {
            Compounding::Monthly => CompoundingFrequency::Monthly,
            Compounding::Quarterly => CompoundingFrequency::Quarterly,
            Compounding::Annually => CompoundingFrequency::Annually,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "See how your money can grow", long_about = None)]
struct Cli {
    /// Starting amount
    #[arg(long, default_value_t = 5000.0)]
    initial: f64,

    /// Regular deposit
    #[arg(long, default_value_t = 100.0)]
    recurring: f64,

    /// How often the regular deposit is made
    #[arg(long, value_enum, default_value = "monthly")]
    frequency: DepositCadence,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = 12.0)]
    rate: f64,

    /// How often interest is added to the balance
    #[arg(long, value_enum, default_value = "monthly")]
    compounding: Compounding,

    /// Years of growth
    #[arg(long, default_value_t = 5)]
    years: u32,

    /// Currency used when printing amounts
    #[arg(long, default_value = "USD")]
    currency: Currency,

    /// Number of months to print (0 prints none)
    #[arg(long, default_value_t = 24)]
    rows: usize,

    /// Write every month to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON report to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Cli {
    fn to_input(&self) -> CalculationInput {
        CalculationInput {
            initial: self.initial,
            recurring: self.recurring,
            recurring_frequency: self.frequency.into(),
            interest_rate: self.rate,
            compounding_frequency: self.compounding.into(),
            years: self.years,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let input = cli.to_input();
    let currency = cli.currency.code();

    let points = match try_project(&input) {
        Ok(points) => points,
        Err(e) => bail!("Nothing to display: {}", e),
    };

    println!("Compound Returns v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");
    println!(
        "Initial {} | Deposit {} {} | Rate {}% compounded {} | {} years\n",
        format_currency(input.initial, currency),
        format_currency(input.recurring, currency),
        input.recurring_frequency.as_str(),
        input.interest_rate,
        input.compounding_frequency.as_str(),
        input.years,
    );

    if cli.rows > 0 {
        println!("{:>5} {:>6} {:>16} {:>16} {:>16}", "Month", "Year", "Principal", "Interest", "Total");
        println!("{}", "-".repeat(63));
        for p in points.iter().take(cli.rows) {
            println!(
                "{:>5} {:>6} {:>16.2} {:>16.2} {:>16.2}",
                p.month,
                year_label(p.month),
                p.principal,
                p.interest,
                p.total
            );
        }
        if points.len() > cli.rows {
            println!("... ({} more months)", points.len() - cli.rows);
        }
    }

    if let Some(summary) = ProjectionSummary::from_points(&points) {
        println!("\nPortfolio Breakdown:");
        println!("  Interest Earned: {}", format_currency(summary.interest_earned, currency));
        println!("  Total Invested:  {}", format_currency(summary.total_invested, currency));
        println!("  Final Balance:   {}", format_currency(summary.final_balance, currency));
    }

    if let Some(path) = &cli.csv {
        write_csv_file(path, &points)
            .with_context(|| format!("Unable to write CSV file {}", path.display()))?;
        println!("\nFull results written to: {}", path.display());
    }

    if let Some(path) = &cli.json {
        ProjectionReport::new(input, points)
            .write_json_file(path)
            .with_context(|| format!("Unable to write JSON report {}", path.display()))?;
        println!("Report written to: {}", path.display());
    }

    Ok(())
}
