use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexMap;

use super::money::round_money;
use super::report::{ReportRow, TopProduct};
use super::{PurchaseRecord, Seller};

/// 卖家统计累加器 - 仅在一次分析调用内存在
#[derive(Debug, Clone)]
pub struct SellerStat {
    pub seller_id: String,
    pub name: String,
    pub revenue: BigDecimal,
    pub profit: BigDecimal,
    pub sales_count: u64,
    /// SKU -> 累计售出数量，保持首次出现顺序
    pub products_sold: IndexMap<String, u64>,
    pub bonus: BigDecimal,
    pub top_products: Vec<TopProduct>,
}

impl SellerStat {
    pub fn new(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: BigDecimal::zero(),
            profit: BigDecimal::zero(),
            sales_count: 0,
            products_sold: IndexMap::new(),
            bonus: BigDecimal::zero(),
            top_products: Vec::new(),
        }
    }

    /// 计入一张小票: 销售次数 +1，营收累加实收金额
    pub fn record_sale(&mut self, record: &PurchaseRecord) {
        self.sales_count += 1;
        self.revenue += record.net_amount();
    }

    /// 计入一行明细的利润和数量
    pub fn record_item(&mut self, sku: &str, quantity: u64, profit: &BigDecimal) {
        self.profit += profit;
        *self.products_sold.entry(sku.to_string()).or_insert(0) += quantity;
    }

    pub fn assign_bonus(&mut self, bonus: BigDecimal) {
        self.bonus = bonus;
    }

    /// 按数量降序取前 limit 个商品 (稳定排序，同数量保持首次出现顺序)
    pub fn rank_products(&mut self, limit: usize) {
        let mut ranked: Vec<TopProduct> = self
            .products_sold
            .iter()
            .map(|(sku, &quantity)| TopProduct {
                sku: sku.clone(),
                quantity,
            })
            .collect();

        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        self.top_products = ranked;
    }

    pub fn into_report_row(self) -> ReportRow {
        ReportRow {
            seller_id: self.seller_id,
            name: self.name,
            revenue: round_money(&self.revenue),
            profit: round_money(&self.profit),
            sales_count: self.sales_count,
            top_products: self.top_products,
            bonus: round_money(&self.bonus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> Seller {
        Seller::new("seller_1", "Ivan", "Ivanov")
    }

    #[test]
    fn test_new_stat_is_empty() {
        let stat = SellerStat::new(&seller());
        assert_eq!(stat.name, "Ivan Ivanov");
        assert_eq!(stat.sales_count, 0);
        assert!(stat.revenue.is_zero());
        assert!(stat.products_sold.is_empty());
    }

    #[test]
    fn test_record_item_accumulates_quantity() {
        let mut stat = SellerStat::new(&seller());
        stat.record_item("A", 2, &BigDecimal::from(5));
        stat.record_item("B", 1, &BigDecimal::from(3));
        stat.record_item("A", 4, &BigDecimal::from(-1));

        assert_eq!(stat.products_sold["A"], 6);
        assert_eq!(stat.products_sold["B"], 1);
        assert_eq!(stat.profit, BigDecimal::from(7));
    }

    #[test]
    fn test_rank_products_keeps_insertion_order_on_ties() {
        let mut stat = SellerStat::new(&seller());
        let zero = BigDecimal::zero();
        stat.record_item("C", 2, &zero);
        stat.record_item("A", 5, &zero);
        stat.record_item("B", 2, &zero);
        stat.record_item("D", 1, &zero);

        stat.rank_products(3);

        let skus: Vec<&str> = stat.top_products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["A", "C", "B"]);
    }
}
