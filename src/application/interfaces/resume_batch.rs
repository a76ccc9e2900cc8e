use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the resume batch service
#[async_trait]
pub trait ResumeBatchService: Send + Sync {
    /// Lists resume batches
    async fn listing(&self) -> Result<Value, AppError>;

    /// Lists the variables that can be extracted from resumes
    async fn list_of_variables(&self) -> Result<Value, AppError>;

    /// Creates a resume batch and starts parsing it
    ///
    /// # Arguments
    /// * `data` - Non-empty JSON object or array describing the batch
    async fn create_and_parse(&self, data: &Value) -> Result<Value, AppError>;

    /// Gets a single resume batch
    async fn show(&self, resume_batch_id: &str) -> Result<Value, AppError>;

    /// Replaces the attributes of a resume batch
    async fn update(&self, resume_batch_id: &str, data: &Value) -> Result<Value, AppError>;

    /// Changes the status of a resume batch
    async fn update_status(&self, resume_batch_id: &str, status: &str)
    -> Result<Value, AppError>;
}
