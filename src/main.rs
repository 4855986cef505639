//! HotelWizard command line: serve the dashboard or run a one-off estimate.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hotel_wizard::api::{AppState, create_router};
use hotel_wizard::calculation::estimate_with_config;
use hotel_wizard::config::{BudgetConfig, ConfigLoader};
use hotel_wizard::dataset::Dataset;
use hotel_wizard::error::WizardError;
use hotel_wizard::models::EstimateRequest;
use hotel_wizard::views::Dashboard;

#[derive(Debug, Parser)]
#[command(name = "hotel-wizard", version, about = "Hotel booking dashboard and budget estimator")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the dataset and serve the dashboard API
    Serve {
        /// Configuration directory
        #[arg(long, default_value = "./config")]
        config: PathBuf,
        /// Directory holding the booking CSV files
        #[arg(long, default_value = "./data")]
        data: PathBuf,
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8050")]
        bind: SocketAddr,
    },
    /// Print the recommended monthly spending for one hotel
    Estimate {
        /// Number of rooms
        #[arg(long, allow_hyphen_values = true)]
        rooms: String,
        /// Nightly fee per room
        #[arg(long, allow_hyphen_values = true)]
        rate: String,
        /// Budget configuration directory (defaults to the built-in tables)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hotel_wizard=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hotel_wizard=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

async fn serve(config_dir: PathBuf, data_dir: PathBuf, bind: SocketAddr) -> anyhow::Result<()> {
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {}", config_dir.display()))?;
    let (budget, settings) = config.into_parts();

    let dataset = Dataset::load(&data_dir, &settings.data)
        .with_context(|| format!("loading dataset from {}", data_dir.display()))?;
    for report in dataset.reports() {
        info!(
            source = %report.source,
            loaded = report.loaded_rows,
            skipped = report.skipped_rows,
            "Dataset file read"
        );
    }
    let dashboard = Dashboard::build(&dataset, &settings);
    drop(dataset);

    let router = create_router(AppState::new(budget, dashboard));
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {}", bind))?;
    info!(address = %bind, "HotelWizard listening");

    axum::serve(listener, router).await.context("serving HTTP")?;
    Ok(())
}

fn run_estimate(rooms: &str, rate: &str, config_dir: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let budget = match config_dir {
        Some(dir) => ConfigLoader::load_budget(dir.join("budget"))
            .with_context(|| format!("loading budget tables from {}", dir.display()))?,
        None => BudgetConfig::standard(),
    };

    let result = match EstimateRequest::parse(rooms, rate)
        .and_then(|request| estimate_with_config(&request, &budget))
    {
        Ok(result) => result,
        Err(err @ WizardError::InvalidInput { .. }) => {
            eprintln!("{}", err);
            return Ok(ExitCode::from(2));
        }
        Err(err) => return Err(err.into()),
    };
    println!("Recommended spending (per month): {}", result);
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Serve { config, data, bind } => {
            serve(config, data, bind).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Estimate {
            rooms,
            rate,
            config,
        } => run_estimate(&rooms, &rate, config),
    }
}
