/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::resume_batch::ResumeBatchService;
use crate::error::AppError;
use crate::model::http::{ApiRequest, Transport, execute};
use crate::utils::validator::{ValidateType, string_fields, validate, validate_multiple};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the resume batch service
pub struct ResumeBatchServiceImpl<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> ResumeBatchServiceImpl<T> {
    /// Creates a new resume batch service
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T: Transport + 'static> ResumeBatchService for ResumeBatchServiceImpl<T> {
    async fn listing(&self) -> Result<Value, AppError> {
        info!("Listing resume batches");
        let request = ApiRequest::get("/v1/resume-batch");
        let result = execute(self.transport.as_ref(), request).await?;
        debug!("Resume batches obtained");
        Ok(result)
    }

    async fn list_of_variables(&self) -> Result<Value, AppError> {
        info!("Listing resume batch variables");
        execute(
            self.transport.as_ref(),
            ApiRequest::get("/v1/resume-batch/list-of-variables"),
        )
        .await
    }

    async fn create_and_parse(&self, data: &Value) -> Result<Value, AppError> {
        validate("Resume batch data", data, ValidateType::Array)?;
        info!("Creating resume batch");

        let request = ApiRequest::post("/v1/resume-batch").json(data.clone());
        let result = execute(self.transport.as_ref(), request).await?;

        debug!("Resume batch created");
        Ok(result)
    }

    async fn show(&self, resume_batch_id: &str) -> Result<Value, AppError> {
        validate("Resume batch ID", &json!(resume_batch_id), ValidateType::Text)?;
        info!("Getting resume batch: {}", resume_batch_id);

        let path = format!("/v1/resume-batch/{resume_batch_id}");
        execute(self.transport.as_ref(), ApiRequest::get(path)).await
    }

    async fn update(&self, resume_batch_id: &str, data: &Value) -> Result<Value, AppError> {
        validate("Resume batch ID", &json!(resume_batch_id), ValidateType::Text)?;
        info!("Updating resume batch: {}", resume_batch_id);

        let path = format!("/v1/resume-batch/{resume_batch_id}");
        let request = ApiRequest::put(path).json(data.clone());
        let result = execute(self.transport.as_ref(), request).await?;

        debug!("Resume batch {} updated", resume_batch_id);
        Ok(result)
    }

    async fn update_status(&self, resume_batch_id: &str, status: &str) -> Result<Value, AppError> {
        let data = string_fields(&[("resumeBatchId", resume_batch_id), ("status", status)]);
        validate_multiple(
            &data,
            &[
                ("resumeBatchId", ValidateType::Text),
                ("status", ValidateType::Text),
            ],
        )?;
        info!(
            "Updating status of resume batch {} to {}",
            resume_batch_id, status
        );

        let path = format!("/v1/resume-batch/{resume_batch_id}/status");
        let request = ApiRequest::patch(path).json(json!({ "status": status }));
        execute(self.transport.as_ref(), request).await
    }
}
