use arp_channel_domain::{DomainError, MethodCall, MethodResult};
use serde::{Deserialize, Serialize};

/// Error code for lines that do not decode into a [`ChannelRequest`].
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelRequest {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub channel: Option<String>,
    pub method: String,
}

impl ChannelRequest {
    pub fn decode(line: &str) -> Result<Self, DomainError> {
        serde_json::from_str(line).map_err(|e| DomainError::InvalidRequest(e.to_string()))
    }

    /// A request without a channel name is addressed to whichever channel
    /// receives it.
    pub fn is_addressed_to(&self, channel: &str) -> bool {
        self.channel.as_deref().map_or(true, |name| name == channel)
    }

    pub fn to_call(&self) -> MethodCall {
        MethodCall::new(self.method.as_str())
    }
}

/// One response line, e.g.
/// `{"id":1,"status":"success","result":"[]"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(flatten)]
    pub result: MethodResult,
}

impl ChannelResponse {
    pub fn new(id: Option<u64>, result: MethodResult) -> Self {
        Self { id, result }
    }

    pub fn invalid_request(error: DomainError) -> Self {
        Self {
            id: None,
            result: MethodResult::Error {
                code: INVALID_REQUEST.to_string(),
                message: error.to_string(),
            },
        }
    }

    pub fn encode(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string(self)?)
    }
}
