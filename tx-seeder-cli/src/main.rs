use std::error::Error;
use std::time::Duration;

use clap::Parser;

use tx_seeder::client::ApiClient;
use tx_seeder::seeder::Seeder;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_COUNT: u32 = 100;
const DEFAULT_DELAY_MS: u64 = 100;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the transaction API
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub(crate) base_url: String,
    /// Number of transactions to generate and submit
    #[clap(long, default_value_t = DEFAULT_COUNT)]
    pub(crate) count: u32,
    /// Pause between submissions, in milliseconds
    #[clap(long, default_value_t = DEFAULT_DELAY_MS)]
    pub(crate) delay_ms: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("Seeding {} transactions against {}", cli.count, cli.base_url);

    println!("Starting to generate {} transactions...", cli.count);

    let client = ApiClient::new(&cli.base_url)?;
    let seeder = Seeder::new(client, cli.count, Duration::from_millis(cli.delay_ms));
    let report = seeder.run(&mut rand::thread_rng());

    println!();
    println!("Transaction Generation Summary:");
    println!("Total time: {:.2} seconds", report.elapsed.as_secs_f64());
    println!("Successful: {}/{}", report.success_count, cli.count);
    println!("Failed: {}/{}", report.error_count, cli.count);
    println!();
    println!("Transaction Types:");
    println!("  DEPOSIT: {}", report.type_counts.deposit);
    println!("  WITHDRAWAL: {}", report.type_counts.withdrawal);
    println!("  TRANSFER: {}", report.type_counts.transfer);

    Ok(())
}
