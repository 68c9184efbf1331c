use crate::ports::MethodHandler;
use arp_channel_domain::{MethodCall, MethodResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Dispatch table for a single named channel.
pub struct MethodDispatcher {
    channel: String,
    handlers: HashMap<String, Arc<dyn MethodHandler>>,
}

impl MethodDispatcher {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            handlers: HashMap::new(),
        }
    }

    pub fn register(mut self, method: impl Into<String>, handler: Arc<dyn MethodHandler>) -> Self {
        self.handlers.insert(method.into(), handler);
        self
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        methods.sort_unstable();
        methods
    }

    pub fn dispatch(&self, call: &MethodCall) -> MethodResult {
        let Some(handler) = self.handlers.get(&call.method) else {
            debug!(channel = %self.channel, method = %call.method, "Method not implemented");
            return MethodResult::NotImplemented;
        };

        let result = handler.handle(call);
        if let Err(e) = &result {
            warn!(channel = %self.channel, method = %call.method, code = %e.code, "Method failed");
        }
        result.into()
    }
}
