use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ranked_runner_info as rri;
use rri::ranked::RankedClient;
use rri::report::{self, ReportError};
use rri::settings::{self, RunnerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    // Set up logging, stdout is reserved for progress messages
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to start the logger");

    println!("Starting runner information fetcher...\n");

    if let Err(why) = start().await {
        eprintln!("Error: {}", why);
        std::process::exit(1);
    }

    println!("\n✓ All information fetched and saved successfully!");
}

async fn start() -> Result<(), ReportError> {
    let config = RunnerConfig::load()?;
    let api = RankedClient::from_env();

    report::run(&api, &config, &settings::report_dir()).await?;
    Ok(())
}
