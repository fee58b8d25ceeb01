use super::Receipt;
use serde::Serialize;

/// 已保存的小票及其积分，创建后不再修改
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredRecord {
    pub id: String,
    pub receipt: Receipt,
    pub points: u64,
}
