//! `chat-relay` — runs the relay on a listen port.
//!
//! Usage: `chat-relay <port or bind address>`

use std::process::ExitCode;

use chatline::RelayServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "chat-relay".into());
    let Some(port) = args.next() else {
        eprintln!("usage: {program} <port or bind address>");
        return ExitCode::FAILURE;
    };

    // A bare port listens on all interfaces; a full address is used as-is.
    let bind_addr = if port.contains(':') {
        port
    } else {
        format!("0.0.0.0:{port}")
    };

    let server = match RelayServer::builder().bind(&bind_addr).build().await {
        Ok(server) => server,
        Err(e) => {
            eprintln!("{program}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let handle = server.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, shutting down");
            handle.shutdown();
        }
    });

    match server.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{program}: {e}");
            ExitCode::FAILURE
        }
    }
}
