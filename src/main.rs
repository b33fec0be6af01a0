use anyhow::Context;
use rewards_sim::{RewardsConfig, RewardsSimulator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Rewards Simulator - brokerage free-share rewards program

USAGE:
    rewards-sim [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 3000)
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with defaults
    rewards-sim

    # Run with config file
    rewards-sim --config config.json

    # Run with custom port
    PORT=9000 rewards-sim
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rewards_sim=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = if let Some(path) = config_path {
        tracing::info!("Loading configuration from: {}", path);
        let config = RewardsConfig::from_file(&path)
            .with_context(|| format!("loading configuration from {}", path))?;
        tracing::info!("Service: {}", config.name);
        tracing::info!("Assets: {}", config.assets.len());
        tracing::info!("Users: {}", config.users.len());
        config
    } else {
        tracing::info!("Using default configuration");
        RewardsConfig::default()
    };

    // Env var overrides
    if let Ok(host) = std::env::var("HOST") {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port.parse().unwrap_or(config.server.port);
    }

    let simulator = RewardsSimulator::new(config);

    tracing::info!("Starting Rewards Simulator");
    tracing::info!(
        "REST API: http://{}:{}/api/",
        simulator.config.server.host,
        simulator.config.server.port
    );
    tracing::info!("Available endpoints:");
    tracing::info!("  POST /api/claim-free-share");
    tracing::info!("  GET  /api/tradable-assets");
    tracing::info!("  GET  /api/latest-price/{{tickerSymbol}}");
    tracing::info!("  GET  /api/status/market");
    tracing::info!("  POST /api/buy-shares-firm");
    tracing::info!("  GET  /api/shares-firm");
    tracing::info!("  POST /api/move-shares-firm");
    tracing::info!("  GET  /api/debug/data");

    simulator.run().await.map_err(|e| anyhow::anyhow!(e))
}
