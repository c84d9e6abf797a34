use bigdecimal::{BigDecimal, Zero};
use std::str::FromStr;

use crate::config::BonusRates;
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{Item, Product, SellerStat};

/// 明细行营收计算策略
pub trait RevenueStrategy: Send + Sync {
    fn calculate(&self, item: &Item, product: &Product) -> BigDecimal;
}

/// 按排名计算奖金的策略
///
/// `rank` 为按利润降序排序后的下标 (从 0 开始)，`total` 为卖家总数。
pub trait BonusStrategy: Send + Sync {
    fn calculate(&self, rank: usize, total: usize, seller: &SellerStat) -> BigDecimal;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&Item, &Product) -> BigDecimal + Send + Sync,
{
    fn calculate(&self, item: &Item, product: &Product) -> BigDecimal {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStat) -> BigDecimal + Send + Sync,
{
    fn calculate(&self, rank: usize, total: usize, seller: &SellerStat) -> BigDecimal {
        self(rank, total, seller)
    }
}

/// 默认营收: 售价 * 数量 * (1 - 折扣/100)
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn calculate(&self, item: &Item, _product: &Product) -> BigDecimal {
        let discount_factor = BigDecimal::from(1) - &item.discount / BigDecimal::from(100);
        &item.sale_price * BigDecimal::from(item.quantity) * discount_factor
    }
}

/// 默认奖金: 末位 0，第一名 15%，第二、三名 10%，其余 5%
///
/// 末位判断在第一名之前，所以只有一个卖家时奖金为 0。
#[derive(Debug, Clone)]
pub struct ProfitRankBonus {
    first_place: BigDecimal,
    podium: BigDecimal,
    others: BigDecimal,
}

impl ProfitRankBonus {
    pub fn new(first_place: BigDecimal, podium: BigDecimal, others: BigDecimal) -> Self {
        Self {
            first_place,
            podium,
            others,
        }
    }

    pub fn from_rates(rates: &BonusRates) -> AnalysisResult<Self> {
        Ok(Self::new(
            rate_to_decimal("first_place", rates.first_place)?,
            rate_to_decimal("podium", rates.podium)?,
            rate_to_decimal("others", rates.others)?,
        ))
    }
}

impl Default for ProfitRankBonus {
    fn default() -> Self {
        Self::new(
            BigDecimal::new(15.into(), 2),
            BigDecimal::new(10.into(), 2),
            BigDecimal::new(5.into(), 2),
        )
    }
}

impl BonusStrategy for ProfitRankBonus {
    fn calculate(&self, rank: usize, total: usize, seller: &SellerStat) -> BigDecimal {
        if rank + 1 == total {
            BigDecimal::zero()
        } else if rank == 0 {
            &seller.profit * &self.first_place
        } else if rank == 1 || rank == 2 {
            &seller.profit * &self.podium
        } else {
            &seller.profit * &self.others
        }
    }
}

fn rate_to_decimal(name: &str, rate: f64) -> AnalysisResult<BigDecimal> {
    if !rate.is_finite() {
        return Err(AnalysisError::Config(format!("bonus rate {} is not finite", name)));
    }
    BigDecimal::from_str(&rate.to_string())
        .map_err(|e| AnalysisError::Config(format!("bonus rate {}: {}", name, e)))
}
