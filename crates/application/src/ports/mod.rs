mod arp_reader;
mod method_handler;

pub use arp_reader::ArpReader;
pub use method_handler::MethodHandler;
