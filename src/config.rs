use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub analysis: AnalysisSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 分析参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    pub top_products_limit: usize,
    pub bonus: BonusRates,
}

/// 按排名的奖金比例 (末位固定为 0)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusRates {
    pub first_place: f64,
    pub podium: f64, // 第二、三名
    pub others: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            analysis: AnalysisSettings::default(),
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_products_limit: 10,
            bonus: BonusRates {
                first_place: 0.15,
                podium: 0.10,
                others: 0.05,
            },
        }
    }
}

impl AppConfig {
    /// 默认值 + 环境变量覆盖 (SALES_SERVER__PORT=9000, SALES_ANALYSIS__BONUS__PODIUM=0.12)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(env_source())
    }

    /// 默认值 + 指定的环境变量来源
    pub fn load(env: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("analysis.top_products_limit", defaults.analysis.top_products_limit as i64)?
            .set_default("analysis.bonus.first_place", defaults.analysis.bonus.first_place)?
            .set_default("analysis.bonus.podium", defaults.analysis.bonus.podium)?
            .set_default("analysis.bonus.others", defaults.analysis.bonus.others)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("SALES")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
