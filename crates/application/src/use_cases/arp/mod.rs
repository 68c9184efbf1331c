pub mod get_arp_table;

pub use get_arp_table::GetArpTableUseCase;
