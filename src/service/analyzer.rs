use bigdecimal::{BigDecimal, Zero};
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;

use crate::config::AnalysisSettings;
use crate::error::AnalysisResult;
use crate::models::{round_money, AnalysisSummary, Product, ReportRow, SalesData, SellerStat};
use crate::service::options::AnalysisOptions;
use crate::service::validator::{self, ValidatedInput};

/// 每个卖家报表中保留的热销商品数
pub const DEFAULT_TOP_PRODUCTS: usize = 10;

/// 一次分析的完整结果
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub rows: Vec<ReportRow>,
    pub summary: AnalysisSummary,
}

/// 销售数据分析入口
///
/// 返回按利润降序排列的报表行，每个卖家一行。
pub fn analyze_sales_data(
    data: Option<&SalesData>,
    options: Option<&AnalysisOptions>,
) -> AnalysisResult<Vec<ReportRow>> {
    let input = validator::validate(data, options)?;
    Ok(aggregate(&input, DEFAULT_TOP_PRODUCTS).rows)
}

/// 分析服务: 持有已配置的策略，可在多个请求间共享
#[derive(Debug, Clone)]
pub struct SalesAnalyzer {
    options: AnalysisOptions,
    top_products_limit: usize,
}

impl SalesAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            options,
            top_products_limit: DEFAULT_TOP_PRODUCTS,
        }
    }

    pub fn from_settings(settings: &AnalysisSettings) -> AnalysisResult<Self> {
        Ok(Self::new(AnalysisOptions::from_settings(settings)?)
            .with_top_products_limit(settings.top_products_limit))
    }

    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }

    pub fn analyze(&self, data: &SalesData) -> AnalysisResult<AnalysisOutcome> {
        let input = validator::validate(Some(data), Some(&self.options))?;
        Ok(aggregate(&input, self.top_products_limit))
    }

    /// 从无类型 JSON 解析后分析
    pub fn analyze_value(&self, value: &Value) -> AnalysisResult<AnalysisOutcome> {
        let data = validator::parse_sales_data(value)?;
        self.analyze(&data)
    }
}

impl Default for SalesAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisOptions::defaults())
    }
}

/// 聚合核心
fn aggregate(input: &ValidatedInput<'_>, top_products_limit: usize) -> AnalysisOutcome {
    let data = input.data;

    // Phase 1: 每个卖家一个累加器 (保持输入顺序)，建立索引
    let mut stats: Vec<SellerStat> = data.sellers.iter().map(SellerStat::new).collect();

    // 重复 id 时后出现的卖家覆盖前者
    let seller_index: HashMap<&str, usize> = data
        .sellers
        .iter()
        .enumerate()
        .map(|(idx, seller)| (seller.id.as_str(), idx))
        .collect();

    let product_index: HashMap<&str, &Product> = data
        .products
        .iter()
        .map(|product| (product.sku.as_str(), product))
        .collect();

    // Phase 2: 按输入顺序折叠所有小票
    let mut processed_records = 0usize;
    let mut skipped_records = 0usize;
    let mut skipped_items = 0usize;

    for record in &data.purchase_records {
        let Some(&idx) = seller_index.get(record.seller_id.as_str()) else {
            tracing::debug!("Unknown seller {}, skipping purchase record", record.seller_id);
            skipped_records += 1;
            continue;
        };
        let stat = &mut stats[idx];

        stat.record_sale(record);
        processed_records += 1;

        for item in &record.items {
            let Some(product) = product_index.get(item.sku.as_str()) else {
                tracing::debug!("Unknown sku {} in record of seller {}, skipping item", item.sku, record.seller_id);
                skipped_items += 1;
                continue;
            };

            let cost = product.cost_of(item.quantity);
            let revenue_item = input.revenue.calculate(item, product);
            let profit_item = revenue_item - cost;

            stat.record_item(&item.sku, item.quantity, &profit_item);
        }
    }

    // Phase 3: 按利润降序 (稳定排序，同利润保持卖家输入顺序)
    stats.sort_by(|a, b| b.profit.cmp(&a.profit));

    // Phase 4: 奖金 + 热销商品
    let total = stats.len();
    for (rank, stat) in stats.iter_mut().enumerate() {
        let bonus = input.bonus.calculate(rank, total, stat);
        stat.assign_bonus(bonus);
        stat.rank_products(top_products_limit);
    }

    let mut total_revenue = BigDecimal::zero();
    let mut total_profit = BigDecimal::zero();
    let mut total_bonus = BigDecimal::zero();
    for stat in &stats {
        total_revenue += &stat.revenue;
        total_profit += &stat.profit;
        total_bonus += &stat.bonus;
    }

    let summary = AnalysisSummary {
        seller_count: total,
        processed_records,
        skipped_records,
        skipped_items,
        total_revenue: round_money(&total_revenue),
        total_profit: round_money(&total_profit),
        total_bonus: round_money(&total_bonus),
        generated_at: Utc::now(),
    };

    tracing::info!(
        "Sales analysis done: sellers: {}, records: {} (skipped {}), skipped items: {}",
        total, processed_records, skipped_records, skipped_items
    );

    // Phase 5: 投影为报表行 (四舍五入到两位小数)
    let rows = stats.into_iter().map(SellerStat::into_report_row).collect();

    AnalysisOutcome { rows, summary }
}
