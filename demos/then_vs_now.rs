use aurum_rs::{AuClient, ComparisonBuilder, Unavailable};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "then_vs_now",
    about = "Gold needed for a purchase: today versus N years ago."
)]
struct Args {
    /// Item price in USD
    #[arg(long, default_value_t = 1000.0)]
    amount: f64,

    /// Years back to compare against
    #[arg(long, default_value_t = 2)]
    years: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 12)]
    timeout: u64,

    /// Print the CSV summary after the metrics
    #[arg(long, default_value_t = false)]
    csv: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if !(args.amount.is_finite() && args.amount >= 0.0) {
        return Err("amount must be a non-negative number".into());
    }

    let client = AuClient::builder()
        .timeout(Duration::from_secs(args.timeout))
        .with_cache()
        .build()?;

    let result = match ComparisonBuilder::new(&client)
        .purchase_amount(args.amount)
        .years_back(args.years)
        .fetch()
        .await
    {
        Ok(r) => r,
        Err(Unavailable::Spot) => {
            eprintln!("Could not load current spot price. Try again or check network.");
            std::process::exit(1);
        }
        Err(Unavailable::Historical) => {
            eprintln!("Historical price unavailable.");
            std::process::exit(1);
        }
    };

    println!("--- Gold needed: then vs today ---");
    println!("Spot today (USD/oz):     {:.2}", result.spot);
    println!(
        "Closest historical date: {} (~{}y, target {})",
        result.hist_date, args.years, result.target_date
    );
    println!(
        "Hist. price (USD/oz):    {:.2} ({:+.1}%)",
        result.hist_price,
        result.percent_change()
    );
    println!();
    println!("Today:        {:.6} oz  {:.2} g", result.ounces_now, result.grams_now);
    println!(
        "~{} years ago: {:.6} oz  {:.2} g",
        args.years, result.ounces_then, result.grams_then
    );
    println!();
    for bar in result.chart_bars() {
        println!("{:>6} | {:.3} g", bar.label, bar.grams);
    }

    if args.csv {
        println!();
        println!("{}", result.to_csv()?);
    }

    Ok(())
}
