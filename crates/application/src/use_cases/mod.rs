pub mod arp;

pub use arp::GetArpTableUseCase;
