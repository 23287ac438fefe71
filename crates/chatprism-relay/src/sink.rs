//! Transport seam: where prepared envelopes go.
//!
//! The real chat transport lives outside this workspace; it implements
//! [`EnvelopeSink`]. `StdoutSink` writes JSON lines for piping into one.

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::AsyncWriteExt;

use chatprism_core::error::{ChatPrismError, Result};
use chatprism_core::protocol::PreparedEnvelope;

#[async_trait]
pub trait EnvelopeSink: Send + Sync {
    async fn deliver(&self, env: &PreparedEnvelope) -> Result<()>;
}

/// One compact JSON envelope per line on stdout.
#[derive(Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EnvelopeSink for StdoutSink {
    async fn deliver(&self, env: &PreparedEnvelope) -> Result<()> {
        let mut out = tokio::io::stdout();
        let mut line = Vec::with_capacity(env.bytes.len() + 1);
        line.extend_from_slice(&env.bytes);
        line.push(b'\n');
        out.write_all(&line)
            .await
            .map_err(|e| ChatPrismError::Internal(format!("stdout write failed: {e}")))?;
        out.flush()
            .await
            .map_err(|e| ChatPrismError::Internal(format!("stdout flush failed: {e}")))
    }
}

/// Keeps every delivered envelope in memory (dry runs, tests).
#[derive(Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<Bytes>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the delivered payloads, in delivery order.
    pub fn delivered(&self) -> Vec<Bytes> {
        match self.delivered.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl EnvelopeSink for MemorySink {
    async fn deliver(&self, env: &PreparedEnvelope) -> Result<()> {
        let mut g = self
            .delivered
            .lock()
            .map_err(|_| ChatPrismError::Internal("memory sink lock poisoned".into()))?;
        g.push(env.bytes.clone());
        Ok(())
    }
}
