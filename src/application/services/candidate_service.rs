/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::candidate::CandidateService;
use crate::error::AppError;
use crate::model::http::{ApiRequest, Transport, execute};
use crate::utils::validator::{ValidateType, string_fields, validate, validate_multiple};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the candidate service
pub struct CandidateServiceImpl<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> CandidateServiceImpl<T> {
    /// Creates a new candidate service
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T: Transport + 'static> CandidateService for CandidateServiceImpl<T> {
    async fn listing(&self, resume_batch_id: &str) -> Result<Value, AppError> {
        validate("Resume batch ID", &json!(resume_batch_id), ValidateType::Text)?;
        info!("Listing candidates of resume batch {}", resume_batch_id);

        let path = format!("/v1/resume-batch/{resume_batch_id}/candidate");
        let result = execute(self.transport.as_ref(), ApiRequest::get(path)).await?;

        debug!("Candidates obtained for resume batch {}", resume_batch_id);
        Ok(result)
    }

    async fn show(&self, resume_batch_id: &str, candidate_id: &str) -> Result<Value, AppError> {
        let data = string_fields(&[
            ("resumeBatchId", resume_batch_id),
            ("candidateId", candidate_id),
        ]);
        validate_multiple(
            &data,
            &[
                ("resumeBatchId", ValidateType::Text),
                ("candidateId", ValidateType::Text),
            ],
        )?;
        info!("Getting candidate {} of resume batch {}", candidate_id, resume_batch_id);

        let path = format!("/v1/resume-batch/{resume_batch_id}/candidate/{candidate_id}");
        execute(self.transport.as_ref(), ApiRequest::get(path)).await
    }

    async fn update_action_status(
        &self,
        resume_batch_id: &str,
        candidate_id: &str,
        action: &str,
        status: &str,
    ) -> Result<Value, AppError> {
        let data = string_fields(&[
            ("resumeBatchId", resume_batch_id),
            ("candidateId", candidate_id),
            ("action", action),
            ("status", status),
        ]);
        validate_multiple(
            &data,
            &[
                ("resumeBatchId", ValidateType::Text),
                ("candidateId", ValidateType::Text),
                ("action", ValidateType::Text),
                ("status", ValidateType::Text),
            ],
        )?;
        info!(
            "Setting action {} to {} for candidate {} of resume batch {}",
            action, status, candidate_id, resume_batch_id
        );

        let path =
            format!("/v1/resume-batch/{resume_batch_id}/candidate/{candidate_id}/action-status");
        let request = ApiRequest::patch(path).json(json!({
            "action": action,
            "status": status,
        }));
        let result = execute(self.transport.as_ref(), request).await?;

        debug!("Action status updated for candidate {}", candidate_id);
        Ok(result)
    }
}
