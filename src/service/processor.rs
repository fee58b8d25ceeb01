use super::scorer::{self, PointsBreakdown};
use super::validator;
use crate::error::{RejectReason, StoreError};
use crate::models::{Receipt, StoredRecord};
use crate::store::ReceiptStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// 时钟，便于测试注入固定时间
pub type Clock = fn() -> DateTime<Utc>;

/// 小票处理服务：校验 -> 计分 -> 保存
pub struct ReceiptProcessor {
    store: Arc<dyn ReceiptStore>,
    clock: Clock,
}

impl ReceiptProcessor {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self::with_clock(store, Utc::now)
    }

    pub fn with_clock(store: Arc<dyn ReceiptStore>, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// 解码原始 JSON 请求体后提交
    pub fn submit_raw(&self, body: &[u8]) -> Result<String, RejectReason> {
        let receipt: Receipt = serde_json::from_slice(body).map_err(|e| {
            tracing::warn!("Failed to decode receipt payload: {}", e);
            RejectReason::MalformedPayload
        })?;
        self.submit(&receipt)
    }

    /// 校验并计分，成功后保存并返回 ID；被拒绝的小票不会写入存储
    pub fn submit(&self, receipt: &Receipt) -> Result<String, RejectReason> {
        let valid = validator::validate(receipt, (self.clock)()).map_err(|reason| {
            tracing::warn!("Receipt from '{}' rejected: {}", receipt.retailer, reason);
            reason
        })?;

        let points = scorer::score(&valid);
        let id = self.store.create(receipt.clone(), points);
        tracing::info!("Receipt {} stored with {} points", id, points);
        Ok(id)
    }

    pub fn lookup(&self, id: &str) -> Result<u64, StoreError> {
        let result = self.store.lookup(id);
        if result.is_err() {
            tracing::debug!("No receipt found for id {}", id);
        }
        result
    }

    /// 已保存记录及其逐条规则明细
    pub fn details(&self, id: &str) -> Result<(StoredRecord, PointsBreakdown), StoreError> {
        let record = self.store.get(id)?;
        // 入库前已校验过，这里重新解析只为生成明细
        let breakdown = match validator::validate(&record.receipt, DateTime::<Utc>::MAX_UTC) {
            Ok(valid) => scorer::breakdown(&valid),
            Err(reason) => {
                tracing::error!(
                    "Stored receipt {} failed re-validation ({}), breakdown unavailable",
                    id,
                    reason
                );
                PointsBreakdown::default()
            }
        };
        Ok((record, breakdown))
    }
}
