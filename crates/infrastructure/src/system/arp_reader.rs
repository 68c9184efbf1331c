use arp_channel_application::ports::ArpReader;
use arp_channel_domain::{DomainError, NeighborEntry, NeighborTable};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROC_NET_ARP: &str = "/proc/net/arp";
const MIN_FIELDS: usize = 6;

/// Linux ARP cache reader (reads /proc/net/arp)
pub struct LinuxArpReader {
    arp_path: PathBuf,
}

impl LinuxArpReader {
    pub fn new() -> Self {
        Self {
            arp_path: PathBuf::from(PROC_NET_ARP),
        }
    }

    /// Reader over a file laid out like /proc/net/arp.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            arp_path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for LinuxArpReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ArpReader for LinuxArpReader {
    fn read_neighbors(&self) -> Result<NeighborTable, DomainError> {
        let file = File::open(&self.arp_path).map_err(|e| {
            DomainError::ArpTableRead(format!("{}: {}", self.arp_path.display(), e))
        })?;

        let table = parse_arp_table(BufReader::new(file)).map_err(|e| {
            DomainError::ArpTableRead(format!("{}: {}", self.arp_path.display(), e))
        })?;

        debug!(entries = table.len(), path = %self.arp_path.display(), "ARP table parsed");
        Ok(table)
    }
}

/// Parses a neighbor table in /proc/net/arp layout.
///
/// Format of /proc/net/arp:
/// ```text
/// IP address       HW type     Flags       HW address            Mask     Device
/// 192.168.1.1      0x1         0x2         aa:bb:cc:dd:ee:ff     *        wlan0
/// ```
///
/// The first line is always treated as the header. Short records and
/// unresolved neighbors are skipped. Bytes that are not UTF-8 are replaced,
/// so only that record can be affected; an I/O error aborts the whole parse.
pub fn parse_arp_table<R: BufRead>(mut reader: R) -> io::Result<NeighborTable> {
    let mut buf = Vec::new();

    // header
    reader.read_until(b'\n', &mut buf)?;

    let mut entries = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        if let Some(entry) = parse_record(&String::from_utf8_lossy(&buf)) {
            entries.push(entry);
        }
    }

    Ok(NeighborTable::new(entries))
}

fn parse_record(line: &str) -> Option<NeighborEntry> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    // fields[1] is the hardware type and fields[4] the mask, neither is reported
    NeighborEntry::from_record(fields[0], fields[2], fields[3], fields[5])
}
