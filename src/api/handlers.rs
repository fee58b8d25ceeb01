use crate::error::AppError;
use crate::models::Receipt;
use crate::service::{PointsBreakdown, ReceiptProcessor};
use axum::{
    body::Bytes,
    extract::{Json, Path, State},
    http::{header, HeaderMap},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 提交成功响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// 积分查询响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// 小票详情响应体（含积分明细）
#[derive(Debug, Serialize)]
pub struct ReceiptDetailResponse {
    pub id: String,
    pub receipt: Receipt,
    pub points: u64,
    pub breakdown: PointsBreakdown,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 只接受 application/json（允许带 charset 等参数）
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// POST /receipts/process
pub async fn process_receipt(
    State(processor): State<Arc<ReceiptProcessor>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ProcessResponse>, AppError> {
    if !is_json(&headers) {
        return Err(AppError::UnsupportedMediaType);
    }

    let id = processor.submit_raw(&body)?;
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/:id/points
pub async fn get_points(
    State(processor): State<Arc<ReceiptProcessor>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    let points = processor.lookup(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// GET /receipts/:id
pub async fn get_receipt(
    State(processor): State<Arc<ReceiptProcessor>>,
    Path(id): Path<String>,
) -> Result<Json<ReceiptDetailResponse>, AppError> {
    let (record, breakdown) = processor.details(&id)?;
    Ok(Json(ReceiptDetailResponse {
        id: record.id,
        receipt: record.receipt,
        points: record.points,
        breakdown,
    }))
}
