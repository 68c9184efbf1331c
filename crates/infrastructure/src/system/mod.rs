pub mod arp_reader;

pub use arp_reader::LinuxArpReader;
