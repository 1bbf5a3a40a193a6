use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub engine: EngineSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Investment assumed when a request omits `initialInvestment`.
    pub default_investment: f64,
    /// Protocol assumed when a request omits `protocolType`.
    pub default_protocol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api: ApiSettings::default(),
            engine: EngineSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            default_investment: 2000.0,
            default_protocol: "uniswap-v2".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        let _settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Ok(Settings {
            api: ApiSettings {
                host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("API_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
            },
            engine: EngineSettings {
                default_investment: env::var("DEFAULT_INVESTMENT")
                    .unwrap_or_else(|_| "2000".to_string())
                    .parse()
                    .unwrap_or(2000.0),
                default_protocol: env::var("DEFAULT_PROTOCOL")
                    .unwrap_or_else(|_| "uniswap-v2".to_string()),
            },
            logging: LoggingSettings {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }
}
