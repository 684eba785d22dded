/// Embedded server lifecycle
///
/// The playback front end starts and stops the streaming server in-process;
/// this handle owns the serving task and its shutdown trigger.
use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::state::AppState;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Handle to a running server instance
///
/// Dropping the handle without calling [`shutdown`](Self::shutdown) aborts
/// nothing: the serving task keeps running for the process lifetime.
#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// The address the server actually bound
    ///
    /// With a configured port of 0 this is where the kernel placed us, so it
    /// is the only truthful source for the base URL.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL clients should use to reach this instance
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Trigger graceful shutdown and wait for the serving task to finish
    pub async fn shutdown(self) -> Result<()> {
        // The serve task may already be gone; the join below reports that.
        let _ = self.shutdown_tx.send(());
        self.task
            .await
            .map_err(|e| ServerError::Lifecycle(format!("server task panicked: {}", e)))?;
        Ok(())
    }
}

/// Bind and start serving in a background task
///
/// Binding happens before this returns, so a port conflict or bad host
/// surfaces here rather than inside the spawned task.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<ServerHandle> {
    let host = config
        .server
        .host
        .parse::<std::net::IpAddr>()
        .map_err(|_| ServerError::Config(format!("invalid host: {}", config.server.host)))?;
    let addr = SocketAddr::new(host, config.server.port);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Lifecycle(format!("failed to bind {}: {}", addr, e)))?;
    let addr = listener.local_addr()?;

    let app = crate::create_router(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        tracing::info!("Streaming server listening on {}", addr);
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await;
        match result {
            Ok(()) => tracing::info!("Streaming server stopped"),
            Err(e) => tracing::error!("Streaming server failed: {}", e),
        }
    });

    Ok(ServerHandle {
        addr,
        shutdown_tx,
        task,
    })
}
