pub mod analyzer;
pub mod options;
pub mod strategy;
pub mod validator;

pub use analyzer::{analyze_sales_data, AnalysisOutcome, SalesAnalyzer, DEFAULT_TOP_PRODUCTS};
pub use options::AnalysisOptions;
pub use strategy::{BonusStrategy, ProfitRankBonus, RevenueStrategy, SimpleRevenue};
pub use validator::{parse_sales_data, validate, ValidatedInput};
