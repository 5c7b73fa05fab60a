//! `chat-browser` — watches a relay's chat room.
//!
//! Usage: `chat-browser <server host> <port or service name>`
//!
//! Prints the full transcript so far, then every live frame as it
//! arrives, until the relay closes the stream.

use std::process::ExitCode;

use chatline_client::BrowserClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or("chat-browser")
        .to_string();

    let (host, service) = match (args.get(1), args.get(2)) {
        (Some(host), Some(service)) => (host.clone(), service.clone()),
        _ => {
            eprintln!(
                "usage: {program} <server host> <port or service name>"
            );
            return ExitCode::FAILURE;
        }
    };

    let mut client = match BrowserClient::connect(&host, &service).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{program}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout();
    match client.run(&mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{program}: {e}");
            ExitCode::FAILURE
        }
    }
}
