#![allow(dead_code)]

use arp_channel_application::ports::{ArpReader, MethodHandler};
use arp_channel_domain::{DomainError, MethodCall, MethodError, NeighborEntry, NeighborTable};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct MockArpReader {
    response: Mutex<Result<NeighborTable, DomainError>>,
    calls: AtomicUsize,
}

impl MockArpReader {
    pub fn with_entries(entries: Vec<NeighborEntry>) -> Self {
        Self {
            response: Mutex::new(Ok(NeighborTable::new(entries))),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            response: Mutex::new(Err(error)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_response(&self, response: Result<NeighborTable, DomainError>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ArpReader for MockArpReader {
    fn read_neighbors(&self) -> Result<NeighborTable, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.lock().unwrap().clone()
    }
}

pub struct FailingHandler {
    pub code: &'static str,
    pub message: &'static str,
}

impl MethodHandler for FailingHandler {
    fn handle(&self, _call: &MethodCall) -> Result<String, MethodError> {
        Err(MethodError::new(self.code, self.message))
    }
}

pub fn entry(ip: &str, mac: &str, device: &str) -> NeighborEntry {
    NeighborEntry::from_record(ip, "0x2", mac, device).unwrap()
}
