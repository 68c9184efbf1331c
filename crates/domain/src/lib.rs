//! arp-channel Domain Layer
pub mod channel;
pub mod config;
pub mod errors;
pub mod method_call;
pub mod neighbor;

pub use channel::{ARP_CHANNEL, ARP_ERROR, METHOD_GET_ARP_TABLE};
pub use config::{CliOverrides, Config, ConfigError, LogFormat, LoggingConfig};
pub use errors::DomainError;
pub use method_call::{MethodCall, MethodError, MethodResult};
pub use neighbor::{NeighborEntry, NeighborTable, PLACEHOLDER_MAC};
