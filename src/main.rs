use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tourismai::{formatter, TourismConfig, TripPlanner};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TourismConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let destination: String = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if destination.trim().is_empty() {
        eprintln!("Usage: tourismai <destination>");
        eprintln!("Example: tourismai Bangalore");
        std::process::exit(2);
    }

    println!("Planning your trip to {destination}...\n");

    let planner = TripPlanner::new(&config)?;
    let report = planner.plan(&destination).await?;

    println!("{}", formatter::render(&report));

    Ok(())
}
