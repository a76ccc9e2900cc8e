/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the TalentScope API client
pub struct Config {
    /// Base URL of the TalentScope REST API
    pub base_url: String,
    /// Bearer access token; when absent no `Authorization` header is sent
    pub access_token: Option<String>,
    /// Token used by `AuthService::refresh_token`
    pub refresh_token: String,
    /// Total timeout in seconds for a request
    pub timeout_secs: u64,
    /// Timeout in seconds for establishing a connection
    pub connect_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first when present. Recognised variables:
    /// `TALENTSCOPE_BASE_URL`, `TALENTSCOPE_ACCESS_TOKEN`,
    /// `TALENTSCOPE_REFRESH_TOKEN`, `TALENTSCOPE_TIMEOUT` and
    /// `TALENTSCOPE_CONNECT_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let access_token: Option<String> = get_env_or_none("TALENTSCOPE_ACCESS_TOKEN");
        let refresh_token = get_env_or_default("TALENTSCOPE_REFRESH_TOKEN", String::new());

        if access_token.is_none() {
            error!("TALENTSCOPE_ACCESS_TOKEN not found in environment variables or .env file");
        }
        if refresh_token.is_empty() {
            error!("TALENTSCOPE_REFRESH_TOKEN not found in environment variables or .env file");
        }

        Config {
            base_url: get_env_or_default("TALENTSCOPE_BASE_URL", String::from(DEFAULT_BASE_URL)),
            access_token,
            refresh_token,
            timeout_secs: get_env_or_default("TALENTSCOPE_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            connect_timeout_secs: get_env_or_default(
                "TALENTSCOPE_CONNECT_TIMEOUT",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        }
    }

    /// Creates a configuration from explicit values with default timeouts
    pub fn with_credentials(
        base_url: impl Into<String>,
        access_token: Option<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.filter(|token| !token.is_empty()),
            refresh_token: refresh_token.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}
