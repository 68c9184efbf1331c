use arp_channel_domain::{DomainError, NeighborTable};

/// Source of the kernel neighbor table. Reads are synchronous and blocking.
pub trait ArpReader: Send + Sync {
    fn read_neighbors(&self) -> Result<NeighborTable, DomainError>;
}
