use std::fmt;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use chrono::{Duration, FixedOffset};
use thiserror::Error;

use crate::modules::stats::core::aggregate::StatsZone;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be set")]
    Missing { name: &'static str },

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub auth: AuthConfig,
    pub cors_origin: HeaderValue,
    pub stats_zone: StatsZone,
}

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_TOKEN_TTL: &str = "24h";
const DEFAULT_BCRYPT_COST: u32 = 10;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDR", e))?;

        let jwt_secret = var("JWT_SECRET").ok_or(ConfigError::Missing { name: "JWT_SECRET" })?;

        let token_ttl = humantime::parse_duration(
            &var("JWT_EXPIRES_IN").unwrap_or_else(|| DEFAULT_TOKEN_TTL.to_string()),
        )
        .map_err(|e| invalid("JWT_EXPIRES_IN", e))?;
        if token_ttl.is_zero() {
            return Err(invalid("JWT_EXPIRES_IN", "must be positive"));
        }
        let token_ttl = Duration::from_std(token_ttl).map_err(|e| invalid("JWT_EXPIRES_IN", e))?;

        let bcrypt_cost = match var("BCRYPT_COST") {
            Some(raw) => raw.parse::<u32>().map_err(|e| invalid("BCRYPT_COST", e))?,
            None => DEFAULT_BCRYPT_COST,
        };
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(invalid("BCRYPT_COST", "must be between 4 and 31"));
        }

        let cors_origin = HeaderValue::from_str(
            &var("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        )
        .map_err(|e| invalid("CORS_ORIGIN", e))?;

        let stats_zone = match var("STATS_UTC_OFFSET") {
            Some(raw) => StatsZone::Fixed(
                raw.trim()
                    .parse::<FixedOffset>()
                    .map_err(|e| invalid("STATS_UTC_OFFSET", e))?,
            ),
            None => StatsZone::Local,
        };

        Ok(Self {
            bind_addr,
            auth: AuthConfig {
                jwt_secret,
                token_ttl,
                bcrypt_cost,
            },
            cors_origin,
            stats_zone,
        })
    }
}

fn invalid(name: &'static str, reason: impl fmt::Display) -> ConfigError {
    ConfigError::Invalid {
        name,
        reason: reason.to_string(),
    }
}
