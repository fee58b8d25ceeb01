use crate::models::ValidReceipt;
use chrono::{Datelike, NaiveTime, Timelike};
use serde::Serialize;

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// 下午时段 (14:00, 16:00)，两端都不含
const AFTERNOON_START_MINUTES: u32 = 14 * 60;
const AFTERNOON_END_MINUTES: u32 = 16 * 60;

/// 各规则的积分明细
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub alphanumeric: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        [
            self.alphanumeric,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }
}

/// 计算小票积分
pub fn score(receipt: &ValidReceipt) -> u64 {
    breakdown(receipt).total()
}

/// 逐条规则计算积分，规则之间相互独立、可叠加
pub fn breakdown(receipt: &ValidReceipt) -> PointsBreakdown {
    PointsBreakdown {
        alphanumeric: alphanumeric_points(&receipt.retailer),
        round_dollar: if receipt.total.is_round_dollar() {
            ROUND_DOLLAR_POINTS
        } else {
            0
        },
        quarter_multiple: if receipt.total.is_quarter_multiple() {
            QUARTER_MULTIPLE_POINTS
        } else {
            0
        },
        item_pairs: (receipt.items.len() as u64 / 2) * ITEM_PAIR_POINTS,
        descriptions: description_points(receipt),
        odd_day: if receipt.purchase_date.day() % 2 == 1 {
            ODD_DAY_POINTS
        } else {
            0
        },
        afternoon: if is_afternoon(receipt.purchase_time) {
            AFTERNOON_POINTS
        } else {
            0
        },
    }
}

fn alphanumeric_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

/// 去除首尾空白后描述的字节长度为 3 的倍数（含空描述）时，加 ceil(价格 * 0.2)
fn description_points(receipt: &ValidReceipt) -> u64 {
    receipt
        .items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .map(|item| item.price.fifth_rounded_up())
        .fold(0u64, u64::saturating_add)
}

fn is_afternoon(time: NaiveTime) -> bool {
    let minutes = time.hour() * 60 + time.minute();
    minutes > AFTERNOON_START_MINUTES && minutes < AFTERNOON_END_MINUTES
}
