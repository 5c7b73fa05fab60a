//! `chat-writer` — submits chat lines to a relay.
//!
//! Usage: `chat-writer <server host> <port or service name> [nickname]`
//!
//! Prompts for a nickname when the argument is omitted. Reading stops on
//! an empty line or the literal `\quit` (which is still sent, so other
//! participants see it).

use std::io::Write;
use std::process::ExitCode;

use chatline_client::WriterClient;
use tokio::io::{AsyncBufReadExt, BufReader};
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
        .unwrap_or("chat-writer")
        .to_string();

    let (host, service) = match (args.get(1), args.get(2)) {
        (Some(host), Some(service)) => (host.clone(), service.clone()),
        _ => {
            eprintln!(
                "usage: {program} <server host> <port or service name> \
                 [nickname]"
            );
            return ExitCode::FAILURE;
        }
    };

    let nickname = match args.get(3) {
        Some(nickname) => nickname.clone(),
        None => match prompt_nickname() {
            Ok(nickname) => nickname,
            Err(e) => {
                eprintln!("{program}: failed to read nickname: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let client = match WriterClient::connect(&host, &service, &nickname).await
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{program}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("{program}: failed to read input: {e}");
                return ExitCode::FAILURE;
            }
        };

        if line.is_empty() {
            break;
        }
        if let Err(e) = client.send_line(&line).await {
            eprintln!("{program}: {e}");
            return ExitCode::FAILURE;
        }
        if line == "\\quit" {
            break;
        }
    }

    let _ = client.close().await;
    ExitCode::SUCCESS
}

/// Prompts on stdout and reads one line from stdin, trimmed.
fn prompt_nickname() -> std::io::Result<String> {
    print!("Please enter your nickname: ");
    std::io::stdout().flush()?;
    let mut nickname = String::new();
    std::io::stdin().read_line(&mut nickname)?;
    Ok(nickname.trim_end_matches(['\r', '\n']).to_string())
}
