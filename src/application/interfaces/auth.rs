use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the authentication service
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in with an email address and password
    ///
    /// # Returns
    /// * The decoded JSON response, typically carrying the issued tokens
    async fn login(&self, email: &str, password: &str) -> Result<Value, AppError>;

    /// Exchanges the stored refresh token for new tokens
    async fn refresh_token(&self) -> Result<Value, AppError>;
}
