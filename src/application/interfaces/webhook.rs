use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for managing webhook URLs
#[async_trait]
pub trait WebhookService: Send + Sync {
    /// Lists webhook URLs
    async fn listing(&self) -> Result<Value, AppError>;

    /// Registers a webhook URL
    async fn create(&self, data: &Value) -> Result<Value, AppError>;

    /// Gets a single webhook URL
    async fn show(&self, webhook_url_id: &str) -> Result<Value, AppError>;

    /// Updates a webhook URL
    async fn update(&self, webhook_url_id: &str, data: &Value) -> Result<Value, AppError>;

    /// Enables or disables a webhook URL
    async fn update_status(&self, webhook_url_id: &str, status: &str) -> Result<Value, AppError>;

    /// Deletes a webhook URL
    async fn delete(&self, webhook_url_id: &str) -> Result<Value, AppError>;
}
