use alloy_primitives::{Address, B256};
use dashmap::DashMap;
use indexer_core::types::{DcaOrder, LimitOrder, SwapOrder, TransferOrder};
use std::collections::HashSet;

/// Access to the fields every order entity shares, so one table
/// implementation can serve all four kinds
pub trait OrderRecord: Clone + Send + Sync + 'static {
    fn identifier(&self) -> B256;
    fn actor(&self) -> Address;
    fn block_timestamp(&self) -> u64;
}

macro_rules! impl_order_record {
    ($($ty:ty),+) => {
        $(impl OrderRecord for $ty {
            fn identifier(&self) -> B256 {
                self.identifier
            }

            fn actor(&self) -> Address {
                self.actor
            }

            fn block_timestamp(&self) -> u64 {
                self.meta.block_timestamp
            }
        })+
    };
}

impl_order_record!(SwapOrder, LimitOrder, DcaOrder, TransferOrder);

/// Thread-safe table of order records keyed by identifier,
/// with a secondary index by actor
#[derive(Debug)]
pub struct OrderTable<T> {
    /// Primary storage: identifier -> record
    records: DashMap<B256, T>,

    /// Index: actor -> set of identifiers
    actor_index: DashMap<Address, HashSet<B256>>,
}

impl<T: OrderRecord> OrderTable<T> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            actor_index: DashMap::new(),
        }
    }

    /// Upsert a record. Returns the previous record if the identifier
    /// was already present (a duplicate Created overwrites).
    pub fn insert(&self, record: T) -> Option<T> {
        let identifier = record.identifier();

        self.actor_index
            .entry(record.actor())
            .or_insert_with(HashSet::new)
            .insert(identifier);

        self.records.insert(identifier, record)
    }

    /// Get a record by identifier
    pub fn get(&self, identifier: &B256) -> Option<T> {
        self.records.get(identifier).map(|r| r.clone())
    }

    /// Mutate a record in place. Returns false when the identifier is
    /// unknown, leaving the table untouched.
    pub fn update<F>(&self, identifier: &B256, update_fn: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.records.get_mut(identifier) {
            Some(mut record) => {
                update_fn(&mut record);
                true
            }
            None => false,
        }
    }

    /// All records created by an actor, in no particular order
    pub fn by_actor(&self, actor: &Address) -> Vec<T> {
        self.actor_index
            .get(actor)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.records.get(id).map(|r| r.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Records created by an actor, newest block first, at most `limit`
    pub fn recent_by_actor(&self, actor: &Address, limit: usize) -> Vec<T> {
        let mut records = self.by_actor(actor);
        records.sort_by(|a, b| b.block_timestamp().cmp(&a.block_timestamp()));
        records.truncate(limit);
        records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: OrderRecord> Default for OrderTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, B256, U256};
    use indexer_core::types::{BlockMeta, SwapOrder};

    fn order(identifier: B256, actor: Address, timestamp: u64) -> SwapOrder {
        SwapOrder {
            actor,
            identifier,
            token_in: Address::repeat_byte(0x11),
            token_out: Address::repeat_byte(0x22),
            amount_in: U256::from(1000u64),
            amount_out_min: U256::from(990u64),
            start_delay: 0,
            deadline: 0,
            executed: false,
            cancelled: false,
            meta: BlockMeta {
                block_number: 1,
                block_timestamp: timestamp,
                transaction_hash: B256::repeat_byte(0xfe),
            },
        }
    }

    #[test]
    fn insert_and_get() {
        let table = OrderTable::new();
        let id = B256::repeat_byte(0xaa);
        let actor = Address::repeat_byte(0x01);

        assert!(table.insert(order(id, actor, 100)).is_none());
        assert_eq!(table.count(), 1);

        let stored = table.get(&id).unwrap();
        assert_eq!(stored.identifier, id);
        assert_eq!(stored.actor, actor);
    }

    #[test]
    fn insert_duplicate_returns_previous() {
        let table = OrderTable::new();
        let id = B256::repeat_byte(0xaa);
        let actor = Address::repeat_byte(0x01);

        table.insert(order(id, actor, 100));
        let mut replacement = order(id, actor, 200);
        replacement.executed = true;

        let previous = table.insert(replacement).unwrap();
        assert_eq!(previous.meta.block_timestamp, 100);
        assert_eq!(table.count(), 1);
        assert!(table.get(&id).unwrap().executed);
    }

    #[test]
    fn update_unknown_identifier_is_noop() {
        let table: OrderTable<SwapOrder> = OrderTable::new();
        let updated = table.update(&B256::repeat_byte(0xdd), |o| o.cancelled = true);
        assert!(!updated);
        assert!(table.is_empty());
    }

    #[test]
    fn update_mutates_in_place() {
        let table = OrderTable::new();
        let id = B256::repeat_byte(0xaa);
        table.insert(order(id, Address::repeat_byte(0x01), 100));

        assert!(table.update(&id, |o| o.cancelled = true));
        assert!(table.get(&id).unwrap().cancelled);
    }

    #[test]
    fn recent_by_actor_orders_and_limits() {
        let table = OrderTable::new();
        let actor = Address::repeat_byte(0x01);
        let other = Address::repeat_byte(0x02);

        for (byte, ts) in [(0x01u8, 300u64), (0x02, 100), (0x03, 200)] {
            table.insert(order(B256::repeat_byte(byte), actor, ts));
        }
        table.insert(order(B256::repeat_byte(0x04), other, 400));

        let recent = table.recent_by_actor(&actor, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].meta.block_timestamp, 300);
        assert_eq!(recent[1].meta.block_timestamp, 200);

        assert!(table.recent_by_actor(&Address::repeat_byte(0x99), 10).is_empty());
    }
}
