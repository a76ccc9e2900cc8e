use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// Interface for the CV parsing service
#[async_trait]
pub trait CvParsingService: Send + Sync {
    /// Uploads a CV file and returns the parsed data
    ///
    /// The file must exist, be one of the accepted document or image types
    /// and not exceed 2MB.
    async fn parsing(&self, file: &Path) -> Result<Value, AppError>;
}
