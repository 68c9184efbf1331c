use crate::errors::DomainError;
use serde::Serialize;

/// Hardware address the kernel reports for neighbors that never resolved.
pub const PLACEHOLDER_MAC: &str = "00:00:00:00:00:00";

/// Length of a canonical `XX:XX:XX:XX:XX:XX` address.
pub const MAC_ADDRESS_LEN: usize = 17;

/// One resolved row of the kernel neighbor table.
///
/// `flags` is carried for callers inside the process but is not part of the
/// serialized form, which is exactly `{"ip":…,"mac":…,"device":…}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborEntry {
    #[serde(rename = "ip")]
    ip_address: String,
    #[serde(rename = "mac")]
    mac_address: String,
    device: String,
    #[serde(skip)]
    flags: String,
}

impl NeighborEntry {
    /// Builds an entry from the raw columns of a record.
    ///
    /// Returns `None` for incomplete neighbors (placeholder MAC) and for
    /// hardware addresses that are not exactly 17 characters long.
    pub fn from_record(
        ip_address: &str,
        flags: &str,
        mac_address: &str,
        device: &str,
    ) -> Option<Self> {
        if !is_usable_mac(mac_address) {
            return None;
        }

        Some(Self {
            ip_address: ip_address.to_string(),
            mac_address: mac_address.to_ascii_uppercase(),
            device: device.to_string(),
            flags: flags.to_string(),
        })
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    pub fn mac_address(&self) -> &str {
        &self.mac_address
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }
}

pub fn is_usable_mac(mac_address: &str) -> bool {
    mac_address != PLACEHOLDER_MAC && mac_address.chars().count() == MAC_ADDRESS_LEN
}

/// Ordered snapshot of the neighbor table. The default value is the empty
/// table, which is what a failed read degrades to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NeighborTable {
    entries: Vec<NeighborEntry>,
}

impl NeighborTable {
    pub fn new(entries: Vec<NeighborEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[NeighborEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NeighborEntry> {
        self.entries.iter()
    }

    /// Serializes the table as a JSON array; an empty table yields `[]`.
    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromIterator<NeighborEntry> for NeighborTable {
    fn from_iter<I: IntoIterator<Item = NeighborEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NeighborTable {
    type Item = &'a NeighborEntry;
    type IntoIter = std::slice::Iter<'a, NeighborEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
