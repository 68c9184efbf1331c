use serde::Serialize;

/// A named request delivered on a method channel. Requests carry no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodCall {
    pub method: String,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }
}

/// Failure reported by a handler, surfaced to the caller as a named error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{code}: {message}")]
pub struct MethodError {
    pub code: String,
    pub message: String,
}

impl MethodError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Outcome of dispatching a [`MethodCall`].
///
/// `NotImplemented` is distinct from `Error`: the channel has no handler for
/// the method, which callers treat as a normal answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResult {
    Success { result: String },
    Error { code: String, message: String },
    NotImplemented,
}

impl MethodResult {
    pub fn success(result: impl Into<String>) -> Self {
        Self::Success {
            result: result.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<Result<String, MethodError>> for MethodResult {
    fn from(result: Result<String, MethodError>) -> Self {
        match result {
            Ok(result) => Self::Success { result },
            Err(MethodError { code, message }) => Self::Error { code, message },
        }
    }
}
