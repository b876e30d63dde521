use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::Config;
use crate::datadog::{DatadogClient, RumApiError, RumQuery};
use crate::state::AppState;

#[derive(Debug)]
pub enum RuntimeHostError {
    Client(RumApiError),
    Bind(std::io::Error),
    Server(std::io::Error),
    Join(tokio::task::JoinError),
}

impl fmt::Display for RuntimeHostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(err) => write!(f, "Datadog client initialization failed: {err}"),
            Self::Bind(err) => write!(f, "listener bind failed: {err}"),
            Self::Server(err) => write!(f, "server exited with error: {err}"),
            Self::Join(err) => write!(f, "task join failed: {err}"),
        }
    }
}

impl std::error::Error for RuntimeHostError {}

pub struct RuntimeHost {
    local_addr: SocketAddr,
    shutdown_tx: Option<watch::Sender<bool>>,
    server_handle: JoinHandle<std::io::Result<()>>,
}

impl RuntimeHost {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn stop(mut self) -> Result<(), RuntimeHostError> {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(true);
        }

        match self.server_handle.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => Err(RuntimeHostError::Server(err)),
            Err(err) => Err(RuntimeHostError::Join(err)),
        }
    }
}

/// Start serving with a Datadog client built from `config`.
pub async fn start_with_config(config: Config) -> Result<RuntimeHost, RuntimeHostError> {
    let client = DatadogClient::new(&config.datadog).map_err(RuntimeHostError::Client)?;
    start_with_client(config, Arc::new(client)).await
}

/// Start serving with any RUM query backend.
pub async fn start_with_client(
    config: Config,
    rum: Arc<dyn RumQuery>,
) -> Result<RuntimeHost, RuntimeHostError> {
    let bind_addr = config.bind_addr();
    let state: Arc<AppState> = AppState::new(rum, config);
    let app = crate::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(RuntimeHostError::Bind)?;
    let local_addr = listener.local_addr().map_err(RuntimeHostError::Bind)?;
    info!("datadog-rum-rs listening on {local_addr}");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_shutdown_signal(shutdown_rx))
            .await
    });

    Ok(RuntimeHost {
        local_addr,
        shutdown_tx: Some(shutdown_tx),
        server_handle,
    })
}

async fn wait_for_shutdown_signal(mut shutdown_rx: watch::Receiver<bool>) {
    while shutdown_rx.changed().await.is_ok() {
        if *shutdown_rx.borrow() {
            break;
        }
    }
}
