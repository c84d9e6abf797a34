use super::{Product, PurchaseRecord, Seller};
use serde::{Deserialize, Serialize};

/// 一次分析的全部输入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}
