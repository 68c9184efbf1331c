use arp_channel_domain::{MethodCall, MethodError};

pub trait MethodHandler: Send + Sync {
    fn handle(&self, call: &MethodCall) -> Result<String, MethodError>;
}
