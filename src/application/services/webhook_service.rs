/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::webhook::WebhookService;
use crate::error::AppError;
use crate::model::http::{ApiRequest, Transport, execute};
use crate::utils::validator::{ValidateType, validate};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the webhook service
pub struct WebhookServiceImpl<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> WebhookServiceImpl<T> {
    /// Creates a new webhook service
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }
}

fn webhook_path(webhook_url_id: &str) -> Result<String, AppError> {
    validate("Webhook URL ID", &json!(webhook_url_id), ValidateType::Text)?;
    Ok(format!("/v1/webhook-url/{webhook_url_id}"))
}

#[async_trait]
impl<T: Transport + 'static> WebhookService for WebhookServiceImpl<T> {
    async fn listing(&self) -> Result<Value, AppError> {
        info!("Listing webhook URLs");
        execute(self.transport.as_ref(), ApiRequest::get("/v1/webhook-url")).await
    }

    async fn create(&self, data: &Value) -> Result<Value, AppError> {
        validate("Webhook data", data, ValidateType::Array)?;
        info!("Creating webhook URL");

        let request = ApiRequest::post("/v1/webhook-url").json(data.clone());
        let result = execute(self.transport.as_ref(), request).await?;

        debug!("Webhook URL created");
        Ok(result)
    }

    async fn show(&self, webhook_url_id: &str) -> Result<Value, AppError> {
        let path = webhook_path(webhook_url_id)?;
        info!("Getting webhook URL: {}", webhook_url_id);
        execute(self.transport.as_ref(), ApiRequest::get(path)).await
    }

    async fn update(&self, webhook_url_id: &str, data: &Value) -> Result<Value, AppError> {
        let path = webhook_path(webhook_url_id)?;
        validate("Webhook data", data, ValidateType::Array)?;
        info!("Updating webhook URL: {}", webhook_url_id);

        // The API updates webhooks with POST, not PUT.
        let request = ApiRequest::post(path).json(data.clone());
        let result = execute(self.transport.as_ref(), request).await?;

        debug!("Webhook URL {} updated", webhook_url_id);
        Ok(result)
    }

    async fn update_status(&self, webhook_url_id: &str, status: &str) -> Result<Value, AppError> {
        let path = webhook_path(webhook_url_id)?;
        validate("Webhook status", &json!(status), ValidateType::Text)?;
        info!("Setting status of webhook URL {} to {}", webhook_url_id, status);

        let request = ApiRequest::patch(path).json(json!({ "status": status }));
        execute(self.transport.as_ref(), request).await
    }

    async fn delete(&self, webhook_url_id: &str) -> Result<Value, AppError> {
        let path = webhook_path(webhook_url_id)?;
        info!("Deleting webhook URL: {}", webhook_url_id);

        let result = execute(self.transport.as_ref(), ApiRequest::delete(path)).await?;
        debug!("Webhook URL {} deleted", webhook_url_id);
        Ok(result)
    }
}
