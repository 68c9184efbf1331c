use super::envelope::{ChannelRequest, ChannelResponse};
use arp_channel_application::services::MethodDispatcher;
use arp_channel_domain::{DomainError, MethodResult};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Serves a [`MethodDispatcher`] over newline-delimited JSON.
///
/// Each non-blank request line gets exactly one response line, including
/// lines that are not UTF-8. Handlers run inline, so a request completes
/// before the next line is read.
pub struct LineChannel {
    dispatcher: Arc<MethodDispatcher>,
}

impl LineChannel {
    pub fn new(dispatcher: Arc<MethodDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Runs until `reader` reaches end of input and returns the number of
    /// requests answered.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<u64, DomainError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(channel = %self.dispatcher.channel(), "Method channel listening");

        let mut buf = Vec::new();
        let mut served = 0u64;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.respond(line.trim()),
                Err(e) => {
                    warn!(error = %e, "Rejected channel request");
                    ChannelResponse::invalid_request(DomainError::InvalidRequest(e.to_string()))
                }
            };

            let mut payload = response.encode()?;
            payload.push('\n');
            writer.write_all(payload.as_bytes()).await?;
            writer.flush().await?;
            served += 1;
        }

        info!(served, "Method channel closed");
        Ok(served)
    }

    pub fn respond(&self, line: &str) -> ChannelResponse {
        let request = match ChannelRequest::decode(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Rejected channel request");
                return ChannelResponse::invalid_request(e);
            }
        };

        if !request.is_addressed_to(self.dispatcher.channel()) {
            debug!(
                channel = request.channel.as_deref().unwrap_or_default(),
                method = %request.method,
                "Request for another channel"
            );
            return ChannelResponse::new(request.id, MethodResult::NotImplemented);
        }

        ChannelResponse::new(request.id, self.dispatcher.dispatch(&request.to_call()))
    }
}
