use crate::application::interfaces::cv_parsing::CvParsingService;
use crate::error::AppError;
use crate::model::http::{ApiRequest, Transport, execute};
use crate::utils::validator::{ValidateType, validate};
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the CV parsing service
pub struct CvParsingServiceImpl<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> CvParsingServiceImpl<T> {
    /// Creates a new CV parsing service
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T: Transport + 'static> CvParsingService for CvParsingServiceImpl<T> {
    async fn parsing(&self, file: &Path) -> Result<Value, AppError> {
        let value = Value::String(file.to_string_lossy().into_owned());
        validate("CV File", &value, ValidateType::File)?;
        info!("Uploading CV for parsing: {}", file.display());

        let request = ApiRequest::post("/v1/cv-parsing").file(file);
        let result = execute(self.transport.as_ref(), request).await?;

        debug!("CV parsed: {}", file.display());
        Ok(result)
    }
}
