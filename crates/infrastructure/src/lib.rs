//! arp-channel Infrastructure Layer
pub mod channel;
pub mod system;
