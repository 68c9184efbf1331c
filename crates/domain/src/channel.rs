//! Fixed identifiers of the method channel exposing the neighbor table.

/// Name of the channel the host registers the ARP handler on.
pub const ARP_CHANNEL: &str = "com.dds.dds_offline_monitoring/arp";

/// Method returning the current neighbor table as a JSON string.
pub const METHOD_GET_ARP_TABLE: &str = "getArpTable";

/// Error code reported when the handler itself fails outside the read routine.
pub const ARP_ERROR: &str = "ARP_ERROR";
