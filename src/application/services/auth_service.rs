/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::auth::AuthService;
use crate::error::AppError;
use crate::model::http::{ApiRequest, Transport, execute};
use crate::utils::validator::{ValidateType, validate};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the authentication service
///
/// Holds the refresh token for its whole lifetime; it is never replaced by
/// tokens returned from the API.
pub struct AuthServiceImpl<T: Transport> {
    transport: Arc<T>,
    refresh_token: String,
}

impl<T: Transport> AuthServiceImpl<T> {
    /// Creates a new authentication service
    pub fn new(transport: Arc<T>, refresh_token: impl Into<String>) -> Self {
        Self {
            transport,
            refresh_token: refresh_token.into(),
        }
    }
}

impl<T: Transport> fmt::Debug for AuthServiceImpl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthServiceImpl")
            .field("refresh_token", &"***")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: Transport + 'static> AuthService for AuthServiceImpl<T> {
    async fn login(&self, email: &str, password: &str) -> Result<Value, AppError> {
        validate("email", &json!(email), ValidateType::Email)?;
        validate("password", &json!(password), ValidateType::Password)?;
        info!("Logging in as {}", email);

        let request = ApiRequest::post("/auth/login").json(json!({
            "email": email,
            "password": password,
        }));
        let result = execute(self.transport.as_ref(), request).await?;

        debug!("Login completed for {}", email);
        Ok(result)
    }

    async fn refresh_token(&self) -> Result<Value, AppError> {
        validate(
            "Refresh token",
            &json!(self.refresh_token),
            ValidateType::NotEmpty,
        )?;
        info!("Refreshing access token");

        let request = ApiRequest::post("/auth/refresh-token").json(json!({
            "refresh_token": self.refresh_token,
        }));
        let result = execute(self.transport.as_ref(), request).await?;

        debug!("Access token refreshed");
        Ok(result)
    }
}
