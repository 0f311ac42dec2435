use reqtour::cli::{build_cli, parse_config};
use reqtour::internal::demo;
use reqtour::internal::http::Client;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments first
    let matches = build_cli().get_matches();
    let config = match parse_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    if let Err(e) = reqtour::internal::logger::init_logger(&config.logging) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    info!("Starting HTTP request tour");
    info!("Version: {}", reqtour::internal::config::get_version_info());
    info!("Echo service: {}", config.demo.base_url);

    let client = match Client::new(&config.http) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    demo::run(&client, &config).await;

    info!("Demonstration sequence complete");
    Ok(())
}
