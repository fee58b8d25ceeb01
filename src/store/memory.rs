use super::ReceiptStore;
use crate::error::StoreError;
use crate::models::{Receipt, StoredRecord};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

/// 进程内存储，进程退出即丢失
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<String, StoredRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for MemoryStore {
    fn create(&self, receipt: Receipt, points: u64) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            // entry 持有分片锁，检查与插入是原子的
            if let Entry::Vacant(slot) = self.records.entry(id.clone()) {
                slot.insert(StoredRecord {
                    id: id.clone(),
                    receipt,
                    points,
                });
                return id;
            }
            tracing::warn!("Receipt id {} collided, regenerating", id);
        }
    }

    fn get(&self, id: &str) -> Result<StoredRecord, StoreError> {
        self.records
            .get(id)
            .map(|record| record.value().clone())
            .ok_or(StoreError::NotFound)
    }

    fn lookup(&self, id: &str) -> Result<u64, StoreError> {
        self.records
            .get(id)
            .map(|record| record.points)
            .ok_or(StoreError::NotFound)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
