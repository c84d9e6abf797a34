use serde::Deserialize;
use serde_json::Value;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::SalesData;
use crate::service::options::AnalysisOptions;
use crate::service::strategy::{BonusStrategy, RevenueStrategy};

const COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

/// 校验通过后的输入引用
pub struct ValidatedInput<'a> {
    pub data: &'a SalesData,
    pub revenue: &'a dyn RevenueStrategy,
    pub bonus: &'a dyn BonusStrategy,
}

/// 从无类型 JSON 解析输入，形状不对一律视为 InvalidInput
pub fn parse_sales_data(value: &Value) -> AnalysisResult<SalesData> {
    let Some(object) = value.as_object() else {
        return Err(AnalysisError::InvalidInput("data must be an object".to_string()));
    };

    for name in COLLECTIONS {
        match object.get(name) {
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(AnalysisError::InvalidInput(format!("{} must be an array", name)));
            }
            None => {
                return Err(AnalysisError::InvalidInput(format!("{} is missing", name)));
            }
        }
    }

    Ok(SalesData::deserialize(value)?)
}

/// 校验顺序: 数据 -> 选项 -> 营收策略 -> 奖金策略
pub fn validate<'a>(
    data: Option<&'a SalesData>,
    options: Option<&'a AnalysisOptions>,
) -> AnalysisResult<ValidatedInput<'a>> {
    let Some(data) = data else {
        return Err(AnalysisError::InvalidInput("data not provided".to_string()));
    };

    let sizes = [
        data.sellers.len(),
        data.products.len(),
        data.purchase_records.len(),
    ];
    for (name, size) in COLLECTIONS.iter().zip(sizes) {
        if size == 0 {
            return Err(AnalysisError::InvalidInput(format!("{} is empty", name)));
        }
    }

    let Some(options) = options else {
        return Err(AnalysisError::MissingOptions);
    };

    let Some(revenue) = options.calculate_revenue.as_deref() else {
        return Err(AnalysisError::MissingStrategy("calculate_revenue"));
    };
    let Some(bonus) = options.calculate_bonus.as_deref() else {
        return Err(AnalysisError::MissingStrategy("calculate_bonus"));
    };

    Ok(ValidatedInput { data, revenue, bonus })
}
