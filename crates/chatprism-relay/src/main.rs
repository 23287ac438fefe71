//! chatprism relay
//!
//! Reads JSON-line commands on stdin and writes broadcast / private-message
//! envelopes to stdout, one per line.
//!
//! Usage: `chatprism-relay [config.yaml]` (default `chatprism.yaml`; built-in
//! defaults when that file does not exist). Log level via `RUST_LOG`.

use std::path::Path;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::{fmt, EnvFilter};

use chatprism_relay::config::{self, RelayConfig};
use chatprism_relay::sink::StdoutSink;
use chatprism_relay::Relay;

const DEFAULT_CONFIG_PATH: &str = "chatprism.yaml";

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let cfg = if Path::new(&path).exists() {
        config::load_from_file(&path).expect("config load failed")
    } else {
        tracing::info!(%path, "config not found, using defaults");
        RelayConfig::default()
    };

    tracing::info!(log_label = %cfg.relay.log_label, "chatprism-relay starting");
    let relay = Relay::new(cfg, Arc::new(StdoutSink::new()));

    let stdin = BufReader::new(tokio::io::stdin());
    let failed = relay.run(stdin).await.expect("stdin read failed");
    tracing::info!(failed, "chatprism-relay finished");
}
