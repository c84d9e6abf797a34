use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::money::deserialize_money;

/// 小票明细行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub sku: String,
    pub quantity: u64,
    #[serde(deserialize_with = "deserialize_money")]
    pub sale_price: BigDecimal,
    #[serde(deserialize_with = "deserialize_money")]
    pub discount: BigDecimal, // 折扣百分比 0-100，不做范围校验
}

impl Item {
    pub fn new(sku: impl Into<String>, quantity: u64, sale_price: BigDecimal, discount: BigDecimal) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            sale_price,
            discount,
        }
    }
}

/// 购买记录 (一张小票)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub seller_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(deserialize_with = "deserialize_money")]
    pub total_amount: BigDecimal,
    #[serde(deserialize_with = "deserialize_money")]
    pub total_discount: BigDecimal,
    pub items: Vec<Item>,
}

impl PurchaseRecord {
    pub fn new(
        seller_id: impl Into<String>,
        total_amount: BigDecimal,
        total_discount: BigDecimal,
        items: Vec<Item>,
    ) -> Self {
        Self {
            receipt_id: None,
            date: None,
            seller_id: seller_id.into(),
            customer_id: None,
            total_amount,
            total_discount,
            items,
        }
    }

    /// 小票实收金额 (总额 - 折扣)
    pub fn net_amount(&self) -> BigDecimal {
        &self.total_amount - &self.total_discount
    }
}
