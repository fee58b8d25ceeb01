use crate::error::RejectReason;
use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

/// 金额格式：整数部分至少一位数字，可选小数点加两位小数
fn price_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]{2})?$").expect("price pattern is valid"))
}

/// 已校验的金额 (美元.美分)
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    amount: BigDecimal,
    cents_part: u8,
}

impl Price {
    /// 两阶段校验：先按字符串校验格式，再解析为数值并排除零值。
    /// 负数（以 "-" 开头）在格式阶段即被拒绝。
    pub fn parse(raw: &str) -> Result<Self, RejectReason> {
        if !price_pattern().is_match(raw) {
            return Err(RejectReason::InvalidPriceFormat);
        }

        let amount =
            BigDecimal::from_str(raw).map_err(|_| RejectReason::ZeroOrNegativePrice)?;
        if amount.is_zero() {
            return Err(RejectReason::ZeroOrNegativePrice);
        }

        let cents_part = raw
            .split_once('.')
            .and_then(|(_, cents)| cents.parse::<u8>().ok())
            .unwrap_or(0);

        Ok(Self { amount, cents_part })
    }

    /// 美分部分 (0..=99)
    pub fn cents_part(&self) -> u8 {
        self.cents_part
    }

    pub fn is_round_dollar(&self) -> bool {
        self.cents_part == 0
    }

    /// 总美分数能否被 25 整除；整美元部分恒为 25 的倍数，只需看美分部分
    pub fn is_quarter_multiple(&self) -> bool {
        self.cents_part % 25 == 0
    }

    /// ceil(金额 * 0.2)，精确十进制计算
    pub fn fifth_rounded_up(&self) -> u64 {
        let fifth = self.amount.clone() / BigDecimal::from(5);
        let floor = fifth.with_scale(0);
        let ceil = if floor < fifth {
            floor + BigDecimal::from(1)
        } else {
            floor
        };
        ceil.to_u64().unwrap_or(u64::MAX)
    }
}
