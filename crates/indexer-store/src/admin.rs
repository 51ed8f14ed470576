use dashmap::DashMap;
use indexer_core::types::{AdminLogKey, AdminRecord};

/// Append-only log of administrative events (pause/unpause, role
/// changes), keyed by `(transaction hash, log index)`
#[derive(Debug, Default)]
pub struct AdminLog {
    records: DashMap<AdminLogKey, AdminRecord>,
}

impl AdminLog {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Append a record. An already-present key is kept untouched;
    /// audit records are never rewritten.
    pub fn append(&self, record: AdminRecord) -> bool {
        match self.records.entry(record.key) {
            dashmap::mapref::entry::Entry::Occupied(_) => false,
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    pub fn get(&self, key: &AdminLogKey) -> Option<AdminRecord> {
        self.records.get(key).map(|r| r.clone())
    }

    /// Most recent records, newest block first, at most `limit`
    pub fn recent(&self, limit: usize) -> Vec<AdminRecord> {
        let mut records: Vec<AdminRecord> =
            self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by(|a, b| {
            b.meta
                .block_timestamp
                .cmp(&a.meta.block_timestamp)
                .then(b.key.log_index.cmp(&a.key.log_index))
        });
        records.truncate(limit);
        records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }
}
