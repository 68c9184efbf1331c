use crate::ports::{ArpReader, MethodHandler};
use arp_channel_domain::{DomainError, MethodCall, MethodError, NeighborTable, ARP_ERROR};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case: Report the current neighbor table as a JSON array
///
/// Read failures never reach the caller; they degrade to an empty table.
pub struct GetArpTableUseCase {
    arp_reader: Arc<dyn ArpReader>,
}

impl GetArpTableUseCase {
    pub fn new(arp_reader: Arc<dyn ArpReader>) -> Self {
        Self { arp_reader }
    }

    pub fn read_table(&self) -> NeighborTable {
        match self.arp_reader.read_neighbors() {
            Ok(table) => {
                debug!(entries = table.len(), "ARP table read successfully");
                table
            }
            Err(e) => {
                warn!(error = %e, "ARP table unavailable, reporting empty table");
                NeighborTable::default()
            }
        }
    }

    pub fn execute(&self) -> Result<String, DomainError> {
        self.read_table().to_json()
    }
}

impl MethodHandler for GetArpTableUseCase {
    fn handle(&self, _call: &MethodCall) -> Result<String, MethodError> {
        self.execute()
            .map_err(|e| MethodError::new(ARP_ERROR, format!("Failed to read ARP table: {}", e)))
    }
}
