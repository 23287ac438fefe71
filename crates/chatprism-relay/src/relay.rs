//! Relay driver: command line in, envelope out to the sink.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use chatprism_core::error::{ChatPrismError, Result};
use chatprism_core::log::log_message;
use chatprism_core::protocol::{Envelope, PreparedEnvelope};

use crate::command::Command;
use crate::config::RelayConfig;
use crate::sink::EnvelopeSink;

pub struct Relay {
    cfg: RelayConfig,
    sink: Arc<dyn EnvelopeSink>,
}

impl Relay {
    pub fn new(cfg: RelayConfig, sink: Arc<dyn EnvelopeSink>) -> Self {
        Self { cfg, sink }
    }

    /// Parse and build without delivering.
    pub fn build(&self, line: &str) -> Result<Envelope> {
        let cmd = Command::parse(line)?;
        debug!(kind = cmd.kind(), "command parsed");
        cmd.build(&self.cfg.presets)
    }

    /// Build one command and hand it to the sink. Blank lines are ignored.
    pub async fn handle_line(&self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let env = self.build(line)?;
        if self.cfg.relay.log_outgoing {
            log_message(&env, &self.cfg.relay.log_label);
        }
        let prepared = PreparedEnvelope::prepare(&env)?;
        self.sink.deliver(&prepared).await
    }

    /// Relay every line until EOF. A failing line is logged and skipped;
    /// only read errors stop the loop. Returns the number of failed lines.
    pub async fn run<R>(&self, reader: R) -> Result<usize>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut failed = 0usize;
        let mut lineno = 0usize;

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| ChatPrismError::Internal(format!("read failed: {e}")))?
        {
            lineno += 1;
            if let Err(e) = self.handle_line(&line).await {
                failed += 1;
                warn!(line = lineno, code = e.code().as_str(), error = %e, "command rejected");
            }
        }
        Ok(failed)
    }
}
