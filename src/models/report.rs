use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::serialize_money;

/// 卖家热销商品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// 最终报表行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub seller_id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_money")]
    pub revenue: BigDecimal,
    #[serde(serialize_with = "serialize_money")]
    pub profit: BigDecimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    #[serde(serialize_with = "serialize_money")]
    pub bonus: BigDecimal,
}

/// 一次分析的统计信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub seller_count: usize,
    pub processed_records: usize,
    pub skipped_records: usize, // 卖家不存在
    pub skipped_items: usize,   // SKU 不存在
    #[serde(serialize_with = "serialize_money")]
    pub total_revenue: BigDecimal,
    #[serde(serialize_with = "serialize_money")]
    pub total_profit: BigDecimal,
    #[serde(serialize_with = "serialize_money")]
    pub total_bonus: BigDecimal,
    pub generated_at: DateTime<Utc>,
}
