/// 销售分析错误类型
///
/// 三类校验错误均在聚合开始前抛出，整个调用中止；聚合过程中
/// 未知卖家 / 未知 SKU 只会被跳过，不会产生错误。
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid input data: {0}")]
    InvalidInput(String),

    #[error("analysis options not provided")]
    MissingOptions,

    #[error("calculation strategy not provided: {0}")]
    MissingStrategy(&'static str),

    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        AnalysisError::InvalidInput(e.to_string())
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
