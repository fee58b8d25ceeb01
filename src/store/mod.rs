pub mod memory;

pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::models::{Receipt, StoredRecord};

/// 小票存储：只支持创建与按 ID 查询，不支持修改和删除
pub trait ReceiptStore: Send + Sync {
    /// 保存小票及积分，返回新生成的唯一 ID
    fn create(&self, receipt: Receipt, points: u64) -> String;

    /// 按 ID 查询已保存记录
    fn get(&self, id: &str) -> Result<StoredRecord, StoreError>;

    /// 按 ID 查询积分
    fn lookup(&self, id: &str) -> Result<u64, StoreError> {
        self.get(id).map(|record| record.points)
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
