//! Line-delimited JSON transport standing in for the host's method channel.
pub mod envelope;
pub mod line_channel;

pub use envelope::{ChannelRequest, ChannelResponse, INVALID_REQUEST};
pub use line_channel::LineChannel;
