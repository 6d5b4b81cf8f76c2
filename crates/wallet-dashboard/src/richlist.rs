//! Placeholder for the rich-list cache described alongside the descriptor
//! cache. UTXO scanning is out of scope; this only reserves the shape so
//! `AppState` matches the original dashboard's cache layout.

use std::sync::RwLock;

use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct RichListSnapshot {
    pub height: i64,
    pub total_supply: f64,
    pub total_addresses: usize,
}

pub struct RichListCache {
    snapshot: RwLock<Option<RichListSnapshot>>,
}

impl RichListCache {
    pub fn new() -> Self {
        RichListCache { snapshot: RwLock::new(None) }
    }

    pub fn current(&self) -> Option<RichListSnapshot> {
        self.snapshot.read().expect("richlist cache lock poisoned").clone()
    }
}

impl Default for RichListCache {
    fn default() -> Self {
        Self::new()
    }
}
