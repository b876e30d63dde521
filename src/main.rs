use tracing::{error, info, warn};

use datadog_rum_rs::config::Config;
use datadog_rum_rs::runtime_host::start_with_config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "datadog_rum_rs=info".into()),
        )
        .init();

    let config = Config::from_env();
    if !config.datadog.has_credentials() {
        warn!("DD_API_KEY or DD_APP_KEY is not set; Datadog calls will be rejected");
    }
    info!("Datadog API: {}", config.datadog.base_url);

    let host = match start_with_config(config).await {
        Ok(host) => host,
        Err(err) => {
            error!("startup failed: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {err}");
    }
    info!("shutting down");

    if let Err(err) = host.stop().await {
        error!("shutdown failed: {err}");
        std::process::exit(1);
    }
}
