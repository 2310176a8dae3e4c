use super::{router, AppState};
use crate::db::todos::Todos;
use crate::libs::config::ServerConfig;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;

/// Binds `config.host:config.port` and serves the API until Ctrl+C or SIGTERM.
pub async fn serve(config: &ServerConfig, todos: Todos) -> Result<()> {
    let listener = bind(config).await?;
    serve_on(listener, todos, shutdown_signal()).await
}

/// Resolves and binds the configured address. The host may be an IP literal
/// or a name such as `localhost`.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port)).await.map_err(|error| {
        msg_error_anyhow!(Message::InvalidServerAddress(format!(
            "{}:{} ({})",
            config.host, config.port, error
        )))
    })
}

/// Serves the API on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, todos: Todos, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    tracing::info!("{}", Message::ServerStarting);
    let app = router(AppState::new(todos));

    let local = listener.local_addr()?;
    msg_info!(Message::ServerListening(local.to_string()));

    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;

    tracing::info!("{}", Message::ServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("{}", Message::ServerReceivedCtrlC),
        () = terminate => tracing::info!("{}", Message::ServerReceivedSigterm),
    }
}
