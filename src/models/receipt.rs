use super::Price;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

/// JSON null 与缺失字段同样按空值处理
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 小票明细（请求原始形态）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

/// 提交的小票（请求原始形态，缺失字段解码为空值）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receipt {
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
}

/// 校验通过的明细
#[derive(Debug, Clone, PartialEq)]
pub struct ValidItem {
    pub short_description: String,
    pub price: Price,
}

/// 校验通过的小票，只能由 validator 构造
#[derive(Debug, Clone, PartialEq)]
pub struct ValidReceipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ValidItem>,
    pub total: Price,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
            "total": "6.49"
        }"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let receipt: Receipt = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();
        assert!(receipt.purchase_date.is_empty());
        assert!(receipt.items.is_empty());
        assert!(receipt.total.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = r#"{"retailer": null, "items": null, "total": null}"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert!(receipt.retailer.is_empty());
        assert!(receipt.items.is_empty());
        assert!(receipt.total.is_empty());

        let item: Item = serde_json::from_str(r#"{"shortDescription": null, "price": "1.00"}"#).unwrap();
        assert!(item.short_description.is_empty());
    }

    #[test]
    fn test_wrong_type_fails_to_decode() {
        assert!(serde_json::from_str::<Receipt>(r#"{"retailer": 5}"#).is_err());
        assert!(serde_json::from_str::<Receipt>(r#"{"items": "none"}"#).is_err());
    }
}
