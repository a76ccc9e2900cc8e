/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client facade for the TalentScope API
//!
//! Builds one transport and hands it to every resource service:
//! - `auth` for login and token refresh
//! - `resume_batch` for the resume batch lifecycle
//! - `candidate` for candidate review
//! - `cv_parsing` for single CV uploads
//! - `webhook` for webhook URL management
//!
//! # Example
//! ```ignore
//! use talentscope_client::prelude::*;
//!
//! let client = TalentScopeClient::new("https://api.talentscope.com", "access", "refresh")?;
//! let session = client.auth.login("user@example.com", "secret").await?;
//! ```

use crate::application::config::Config;
use crate::application::services::{
    AuthServiceImpl, CandidateServiceImpl, CvParsingServiceImpl, ResumeBatchServiceImpl,
    WebhookServiceImpl,
};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{HttpClient, Transport};
use crate::utils::validator::{ValidateType, validate};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Entry point to the TalentScope API
///
/// All services share one transport. The transport configuration is fixed
/// at construction.
pub struct TalentScopeClient<T: Transport = HttpClient> {
    /// Login and token refresh
    pub auth: AuthServiceImpl<T>,
    /// Resume batch lifecycle
    pub resume_batch: ResumeBatchServiceImpl<T>,
    /// Candidate review
    pub candidate: CandidateServiceImpl<T>,
    /// CV parsing
    pub cv_parsing: CvParsingServiceImpl<T>,
    /// Webhook URL management
    pub webhook: WebhookServiceImpl<T>,
    transport: Arc<T>,
}

impl TalentScopeClient<HttpClient> {
    /// Creates a client for `base_url`
    ///
    /// # Arguments
    /// * `base_url` - Absolute URL of the API; validated before anything is built
    /// * `access_token` - Bearer token; an empty string omits the `Authorization` header
    /// * `refresh_token` - Token used by `auth.refresh_token()`
    ///
    /// # Returns
    /// * `Err(AppError::InvalidArgument)` - If `base_url` is not a valid URL
    pub fn new(base_url: &str, access_token: &str, refresh_token: &str) -> Result<Self, AppError> {
        let config = Config::with_credentials(
            base_url,
            Some(access_token.to_string()),
            refresh_token,
        );
        Self::from_config(&config)
    }

    /// Creates a client from a [`Config`], applying its timeouts
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        validate_base_url(&config.base_url)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers(config.access_token.as_deref())?)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {e}")))?;

        debug!("TalentScope client configured for {}", config.base_url);
        Ok(Self::with_transport(
            Arc::new(HttpClient::new(client, config.base_url.clone())),
            config.refresh_token.clone(),
        ))
    }

    /// Creates a client around a caller-built `reqwest` client
    ///
    /// The injected client's default headers, timeouts and authentication
    /// are used unchanged.
    pub fn with_http_client(
        client: Client,
        base_url: &str,
        refresh_token: &str,
    ) -> Result<Self, AppError> {
        validate_base_url(base_url)?;
        Ok(Self::with_transport(
            Arc::new(HttpClient::new(client, base_url)),
            refresh_token,
        ))
    }
}

impl<T: Transport> TalentScopeClient<T> {
    /// Creates a client on top of any transport
    pub fn with_transport(transport: Arc<T>, refresh_token: impl Into<String>) -> Self {
        Self {
            auth: AuthServiceImpl::new(transport.clone(), refresh_token),
            resume_batch: ResumeBatchServiceImpl::new(transport.clone()),
            candidate: CandidateServiceImpl::new(transport.clone()),
            cv_parsing: CvParsingServiceImpl::new(transport.clone()),
            webhook: WebhookServiceImpl::new(transport.clone()),
            transport,
        }
    }

    /// Shared transport used by every service
    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }
}

/// Request paths are appended to the base URL, so it may not carry a query or fragment
fn validate_base_url(base_url: &str) -> Result<(), AppError> {
    validate("Base url", &Value::String(base_url.to_string()), ValidateType::Url)?;
    match Url::parse(base_url) {
        Ok(url) if url.query().is_none() && url.fragment().is_none() => Ok(()),
        _ => Err(AppError::invalid_argument("Invalid Base url URL.")),
    }
}

fn default_headers(access_token: Option<&str>) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(token) = access_token.filter(|token| !token.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| AppError::invalid_argument("Access token contains invalid characters."))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}
