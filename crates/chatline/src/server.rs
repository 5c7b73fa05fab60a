//! `RelayServer` builder and accept loop.
//!
//! Ties the layers together: transport accepts channels, each one gets a
//! session task, and every session shares the one [`Hub`]. Unlike a
//! detached thread-per-connection design, session tasks are tracked in a
//! `JoinSet` and the server carries an explicit shutdown path: a
//! [`RelayHandle`] can stop the accept loop, close every subscriber, and
//! cancel outstanding sessions.

use std::sync::Arc;

use chatline_hub::Hub;
use chatline_transport::{Connection, TcpConnection, TcpTransport, Transport};
use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::session::Session;
use crate::{ChatlineError, RelayConfig};

/// Builder for configuring and starting a relay.
///
/// # Example
///
/// ```rust,no_run
/// use chatline::RelayServer;
///
/// # async fn run() -> Result<(), chatline::ChatlineError> {
/// let server = RelayServer::builder().bind("0.0.0.0:7440").build().await?;
/// server.run().await
/// # }
/// ```
pub struct RelayServerBuilder {
    config: RelayConfig,
}

impl RelayServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: RelayConfig::default(),
        }
    }

    /// Sets the address to bind the relay to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.config.bind_addr = addr.to_string();
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: RelayConfig) -> Self {
        self.config = config;
        self
    }

    /// Binds the listener and builds the relay.
    pub async fn build(self) -> Result<RelayServer, ChatlineError> {
        let transport = TcpTransport::bind(&self.config.bind_addr).await?;
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(RelayServer {
            transport,
            hub: Arc::new(Hub::new()),
            sessions: JoinSet::new(),
            shutdown_tx,
            shutdown_rx,
        })
    }
}

impl Default for RelayServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for requesting a graceful shutdown of a running relay.
#[derive(Clone)]
pub struct RelayHandle {
    shutdown: watch::Sender<bool>,
}

impl RelayHandle {
    /// Asks the relay to stop accepting, close all subscribers, and
    /// cancel outstanding sessions. Idempotent.
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(true);
    }
}

/// A running relay.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct RelayServer {
    transport: TcpTransport,
    hub: Arc<Hub<TcpConnection>>,
    sessions: JoinSet<()>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl RelayServer {
    /// Creates a new builder.
    pub fn builder() -> RelayServerBuilder {
        RelayServerBuilder::new()
    }

    /// Returns the local address the relay is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Returns a handle that can shut this relay down.
    pub fn handle(&self) -> RelayHandle {
        RelayHandle {
            shutdown: self.shutdown_tx.clone(),
        }
    }

    /// Runs the accept loop until shutdown is requested.
    ///
    /// Each accepted connection gets its own session task; the loop never
    /// blocks on per-connection work. Accept failures and per-session
    /// errors are logged, not propagated — no connection can take the
    /// relay down.
    pub async fn run(mut self) -> Result<(), ChatlineError> {
        tracing::info!("chatline relay running");

        loop {
            tokio::select! {
                accepted = self.transport.accept() => match accepted {
                    Ok(conn) => {
                        let hub = Arc::clone(&self.hub);
                        self.sessions.spawn(async move {
                            let id = conn.id();
                            if let Err(e) =
                                Session::new(conn).run(&hub).await
                            {
                                tracing::warn!(
                                    %id,
                                    error = %e,
                                    "session ended with error"
                                );
                            }
                        });
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "accept failed");
                    }
                },
                _ = self.shutdown_rx.changed() => break,
            }

            // Reap sessions that have already finished so the set does
            // not grow for the life of the process.
            while self.sessions.try_join_next().is_some() {}
        }

        tracing::info!("relay shutting down");
        self.hub.shutdown().await;
        self.sessions.shutdown().await;
        Ok(())
    }
}
