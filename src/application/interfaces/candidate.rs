use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for reviewing candidates of a resume batch
#[async_trait]
pub trait CandidateService: Send + Sync {
    /// Lists the candidates of a resume batch
    async fn listing(&self, resume_batch_id: &str) -> Result<Value, AppError>;

    /// Gets a single candidate of a resume batch
    async fn show(&self, resume_batch_id: &str, candidate_id: &str) -> Result<Value, AppError>;

    /// Records a review action and its status for a candidate
    ///
    /// # Arguments
    /// * `resume_batch_id` - The resume batch the candidate belongs to
    /// * `candidate_id` - The candidate
    /// * `action` - Review action, e.g. `"shortlist"`
    /// * `status` - New status of that action
    async fn update_action_status(
        &self,
        resume_batch_id: &str,
        candidate_id: &str,
        action: &str,
        status: &str,
    ) -> Result<Value, AppError>;
}
