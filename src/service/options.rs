use std::fmt;
use std::sync::Arc;

use crate::config::AnalysisSettings;
use crate::error::AnalysisResult;
use crate::service::strategy::{BonusStrategy, ProfitRankBonus, RevenueStrategy, SimpleRevenue};

/// 分析选项: 注入营收与奖金计算策略
///
/// 策略为 `None` 时分析会以 `MissingStrategy` 失败。
#[derive(Clone, Default)]
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Arc<dyn RevenueStrategy>>,
    pub calculate_bonus: Option<Arc<dyn BonusStrategy>>,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 默认策略: SimpleRevenue + ProfitRankBonus
    pub fn defaults() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue)
            .with_bonus(ProfitRankBonus::default())
    }

    /// 默认营收策略 + 配置中的奖金比例
    pub fn from_settings(settings: &AnalysisSettings) -> AnalysisResult<Self> {
        Ok(Self::new()
            .with_revenue(SimpleRevenue)
            .with_bonus(ProfitRankBonus::from_rates(&settings.bonus)?))
    }

    pub fn with_revenue<R: RevenueStrategy + 'static>(mut self, strategy: R) -> Self {
        self.calculate_revenue = Some(Arc::new(strategy));
        self
    }

    pub fn with_bonus<B: BonusStrategy + 'static>(mut self, strategy: B) -> Self {
        self.calculate_bonus = Some(Arc::new(strategy));
        self
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}
