use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::money::{deserialize_money, deserialize_optional_money};

/// 商品卡片 (products)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub purchase_price: BigDecimal, // 进货价 (成本)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_money", skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<BigDecimal>,
}

impl Product {
    pub fn new(sku: impl Into<String>, purchase_price: BigDecimal) -> Self {
        Self {
            sku: sku.into(),
            purchase_price,
            name: None,
            category: None,
            retail_price: None,
        }
    }

    /// 该商品卖出 quantity 件的成本
    pub fn cost_of(&self, quantity: u64) -> BigDecimal {
        &self.purchase_price * BigDecimal::from(quantity)
    }
}
