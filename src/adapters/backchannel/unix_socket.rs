//! Unix domain socket backchannel.
//!
//! One connection per call: connect, write one newline-terminated JSON
//! object, shut down the write half, read until the authority closes the
//! stream, parse. The whole exchange runs under a single timeout.
//!
//! # Usage
//!
//! ```ignore
//! use invite_gate::adapters::backchannel::UnixSocketBackchannel;
//!
//! let backchannel = UnixSocketBackchannel::from_config(&config.backchannel);
//! let reply = backchannel
//!     .send(WebhookName::RegisterValidate, EventPayload::new().with("groupCode", "ABCD1234"))
//!     .await;
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;

use crate::config::BackchannelConfig;
use crate::domain::backchannel::{AuthorityResponse, EventPayload, WebhookName};
use crate::ports::Backchannel;

/// Replies larger than this are cut off (and then fail to parse).
pub const MAX_REPLY_BYTES: u64 = 1024 * 1024;

/// Why an exchange failed. Never leaves this adapter.
#[derive(Debug, Error)]
pub enum BackchannelError {
    #[error("Failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to connect to {path}: {source}")]
    Connect {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write message: {0}")]
    Write(#[source] io::Error),

    #[error("Failed to read reply: {0}")]
    Read(#[source] io::Error),

    #[error("Malformed reply: {0}")]
    MalformedReply(#[source] serde_json::Error),

    #[error("Exchange timed out after {0:?}")]
    Timeout(Duration),
}

/// Backchannel over a local Unix stream socket.
#[derive(Debug, Clone)]
pub struct UnixSocketBackchannel {
    socket_path: PathBuf,
    timeout: Duration,
}

impl UnixSocketBackchannel {
    pub fn new(socket_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            socket_path: socket_path.into(),
            timeout,
        }
    }

    pub fn from_config(config: &BackchannelConfig) -> Self {
        Self::new(config.socket_path(), config.timeout())
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `message` and returns the parsed reply, or why it failed.
    pub async fn exchange(&self, message: &Value) -> Result<AuthorityResponse, BackchannelError> {
        tokio::time::timeout(self.timeout, self.exchange_unbounded(message))
            .await
            .map_err(|_| BackchannelError::Timeout(self.timeout))?
    }

    async fn exchange_unbounded(&self, message: &Value) -> Result<AuthorityResponse, BackchannelError> {
        let mut line = serde_json::to_string(message).map_err(BackchannelError::Encode)?;
        line.push('\n');

        let mut stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|source| BackchannelError::Connect {
                path: self.socket_path.display().to_string(),
                source,
            })?;

        stream
            .write_all(line.as_bytes())
            .await
            .map_err(BackchannelError::Write)?;
        stream.flush().await.map_err(BackchannelError::Write)?;

        // The authority reads to end-of-stream before answering
        if let Err(e) = stream.shutdown().await {
            tracing::debug!(error = %e, "Backchannel write shutdown failed");
        }

        let mut reply = String::new();
        (&mut stream)
            .take(MAX_REPLY_BYTES)
            .read_to_string(&mut reply)
            .await
            .map_err(BackchannelError::Read)?;

        AuthorityResponse::from_reply(&reply).map_err(BackchannelError::MalformedReply)
    }
}

#[async_trait]
impl Backchannel for UnixSocketBackchannel {
    async fn send(&self, event_type: WebhookName, payload: EventPayload) -> AuthorityResponse {
        let message = payload.into_message(event_type);

        match self.exchange(&message).await {
            Ok(response) => {
                tracing::debug!(
                    event_type = %event_type,
                    success = response.success,
                    "Backchannel reply received"
                );
                response
            }
            Err(e) => {
                tracing::warn!(
                    event_type = %event_type,
                    socket = %self.socket_path.display(),
                    error = %e,
                    "Backchannel exchange failed"
                );
                AuthorityResponse::failure()
            }
        }
    }
}
