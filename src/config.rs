// src/config.rs

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::SquareFootageRange;
use crate::session::DEFAULT_MAX_SESSIONS;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorConfig {
    /// `None` disables the advice service; requests then fail with a message.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub market_max_tokens: u32,
    pub chat_max_tokens: u32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            timeout_secs: 60,
            market_max_tokens: 4096,
            chat_max_tokens: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub workers: usize,
    pub max_sessions: usize,
    pub catalog_path: PathBuf,
    pub traffic_path: PathBuf,
    pub hourly_path: Option<PathBuf>,
    pub square_footage: SquareFootageRange,
    pub advisor: AdvisorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            max_sessions: DEFAULT_MAX_SESSIONS,
            catalog_path: PathBuf::from("data/sanjosedataset.csv"),
            traffic_path: PathBuf::from("data/sanjosefoottrafficdata.csv"),
            hourly_path: Some(PathBuf::from("data/sanjosehourlytraffic.csv")),
            square_footage: SquareFootageRange::default(),
            advisor: AdvisorConfig::default(),
        }
    }
}

fn parse<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = raw.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value: raw,
    })
}

impl AppConfig {
    /// Read the process environment (after `.env`, if `main` loaded one).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Every setting is optional; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();

        if let Some(v) = lookup("FOOTFLOW_ADDR") {
            cfg.addr = parse("FOOTFLOW_ADDR", v)?;
        }
        if let Some(v) = lookup("FOOTFLOW_WORKERS") {
            cfg.workers = parse("FOOTFLOW_WORKERS", v)?;
        }
        if let Some(v) = lookup("FOOTFLOW_MAX_SESSIONS") {
            cfg.max_sessions = parse("FOOTFLOW_MAX_SESSIONS", v)?;
        }
        if let Some(v) = lookup("FOOTFLOW_CATALOG_PATH") {
            cfg.catalog_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("FOOTFLOW_TRAFFIC_PATH") {
            cfg.traffic_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("FOOTFLOW_HOURLY_PATH") {
            // An empty value switches the hourly file off.
            cfg.hourly_path = Some(v).filter(|p| !p.trim().is_empty()).map(PathBuf::from);
        }
        if let Some(v) = lookup("FOOTFLOW_MIN_SQ_FT") {
            cfg.square_footage.min = parse("FOOTFLOW_MIN_SQ_FT", v)?;
        }
        if let Some(v) = lookup("FOOTFLOW_MAX_SQ_FT") {
            cfg.square_footage.max = parse("FOOTFLOW_MAX_SQ_FT", v)?;
        }
        if cfg.square_footage.min <= 0.0 || cfg.square_footage.min > cfg.square_footage.max {
            return Err(ConfigError::Invalid {
                key: "FOOTFLOW_MIN_SQ_FT",
                value: cfg.square_footage.min.to_string(),
                reason: format!("must be positive and at most {}", cfg.square_footage.max),
            });
        }

        cfg.advisor.api_key = lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty());
        if let Some(v) = lookup("OPENAI_BASE_URL") {
            cfg.advisor.base_url = v;
        }
        if let Some(v) = lookup("OPENAI_MODEL") {
            cfg.advisor.model = v;
        }
        if let Some(v) = lookup("FOOTFLOW_ADVISOR_TIMEOUT_SECS") {
            cfg.advisor.timeout_secs = parse("FOOTFLOW_ADVISOR_TIMEOUT_SECS", v)?;
        }

        Ok(cfg)
    }
}
