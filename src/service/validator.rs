use crate::error::RejectReason;
use crate::models::{Price, Receipt, ValidItem, ValidReceipt};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"))
}

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern is valid"))
}

/// 校验小票，按固定顺序检查，第一个失败即返回：
/// 必填字段 -> 日期格式 -> 未来日期 -> 时间格式 -> 明细金额 -> 总金额
///
/// `now` 由调用方注入，仅用于未来日期判断。
pub fn validate(receipt: &Receipt, now: DateTime<Utc>) -> Result<ValidReceipt, RejectReason> {
    if receipt.retailer.is_empty()
        || receipt.purchase_date.is_empty()
        || receipt.purchase_time.is_empty()
        || receipt.items.is_empty()
        || receipt.total.is_empty()
    {
        return Err(RejectReason::MissingField);
    }

    let purchase_date = parse_date(&receipt.purchase_date)?;

    // 购买日零点 (UTC) 晚于当前时间才算未来日期，当天可以提交
    if purchase_date.and_time(NaiveTime::MIN).and_utc() > now {
        return Err(RejectReason::FutureDate);
    }

    let purchase_time = parse_time(&receipt.purchase_time)?;

    let items = receipt
        .items
        .iter()
        .map(|item| {
            Ok(ValidItem {
                short_description: item.short_description.clone(),
                price: Price::parse(&item.price)?,
            })
        })
        .collect::<Result<Vec<_>, RejectReason>>()?;

    let total = Price::parse(&receipt.total)?;

    Ok(ValidReceipt {
        retailer: receipt.retailer.clone(),
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate, RejectReason> {
    if !date_pattern().is_match(raw) {
        return Err(RejectReason::InvalidDate);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| RejectReason::InvalidDate)
}

fn parse_time(raw: &str) -> Result<NaiveTime, RejectReason> {
    if !time_pattern().is_match(raw) {
        return Err(RejectReason::InvalidTime);
    }
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| RejectReason::InvalidTime)
}
