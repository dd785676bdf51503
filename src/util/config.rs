extern crate dotenv;

use std::{env, str::FromStr};

use dotenv::dotenv;
use isahc::http::Uri;
use thiserror::Error;

pub const BASE_URL_VAR: &str = "TRANSACTION_POOL_BASE_URL";
pub const TIMEOUT_SECS_VAR: &str = "TRANSACTION_POOL_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 3600;

#[derive(Error, PartialEq, Debug)]
pub enum ConfigError {
    #[error("{} is not set", BASE_URL_VAR)]
    MissingBaseUrl,

    #[error("Invalid transaction pool base url `{0}`")]
    InvalidBaseUrl(String),

    #[error("Invalid transaction pool timeout `{0}`, expected 1 to {} seconds", MAX_TIMEOUT_SECS)]
    InvalidTimeout(u64),
}

#[derive(Debug)]
pub struct Config {
    // Transaction pool settings
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn read_envvar<T: FromStr>(key: &str, default_value: T) -> T {
        match env::var(key) {
            Ok(value) => value.trim().parse::<T>().unwrap_or(default_value),
            Err(_) => default_value,
        }
    }

    pub fn read() -> Config {
        dotenv().ok();

        Config {
            base_url: Config::read_envvar(BASE_URL_VAR, String::new()),
            timeout_secs: Config::read_envvar(TIMEOUT_SECS_VAR, DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Rejects a base url the sender could never post to, and drops a
    /// trailing slash so the target path stays `/transactions`. A zero
    /// timeout would let the request block forever.
    pub fn validate(mut self) -> Result<Config, ConfigError> {
        if !(1..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::InvalidTimeout(self.timeout_secs));
        }

        let base_url = self.base_url.trim().trim_end_matches('/').to_string();

        if base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let uri = base_url
            .parse::<Uri>()
            .map_err(|_| ConfigError::InvalidBaseUrl(self.base_url.clone()))?;

        let has_http_scheme = matches!(uri.scheme_str(), Some("http") | Some("https"));
        if !has_http_scheme || uri.authority().is_none() {
            return Err(ConfigError::InvalidBaseUrl(self.base_url));
        }

        self.base_url = base_url;
        Ok(self)
    }
}
