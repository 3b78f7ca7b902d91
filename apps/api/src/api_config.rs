use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use rolegate_core::AppError;
use tracing_subscriber::EnvFilter;

const DEFAULT_API_HOST: &str = "127.0.0.1";
const DEFAULT_API_PORT: u16 = 3001;
const DEFAULT_SESSION_IDLE_MINUTES: i64 = 30;
const MAX_SESSION_IDLE_MINUTES: i64 = 525_600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub cookie_secure: bool,
    pub session_idle_minutes: i64,
    pub seed_demo_data: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_host = lookup("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_owned());
        let api_port = lookup("API_PORT")
            .map(|value| {
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))
            })
            .transpose()?
            .unwrap_or(DEFAULT_API_PORT);

        let cookie_secure = lookup("SESSION_COOKIE_SECURE")
            .map(|value| parse_flag("SESSION_COOKIE_SECURE", &value))
            .transpose()?
            .unwrap_or(false);

        let session_idle_minutes = lookup("SESSION_IDLE_MINUTES")
            .map(|value| {
                value
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|minutes| (1..=MAX_SESSION_IDLE_MINUTES).contains(minutes))
                    .ok_or_else(|| {
                        AppError::Validation(format!(
                            "SESSION_IDLE_MINUTES must be between 1 and {MAX_SESSION_IDLE_MINUTES}, got '{value}'"
                        ))
                    })
            })
            .transpose()?
            .unwrap_or(DEFAULT_SESSION_IDLE_MINUTES);

        let seed_demo_data = lookup("SEED_DEMO_DATA")
            .map(|value| parse_flag("SEED_DEMO_DATA", &value))
            .transpose()?
            .unwrap_or(true);

        Ok(Self {
            api_host,
            api_port,
            cookie_secure,
            session_idle_minutes,
            seed_demo_data,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_flag(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(AppError::Validation(format!(
            "{name} must be 'true' or 'false', got '{other}'"
        ))),
    }
}
