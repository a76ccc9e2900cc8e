/// Authentication service interface
pub mod auth;
/// Candidate service interface
pub mod candidate;
/// CV parsing service interface
pub mod cv_parsing;
/// Resume batch service interface
pub mod resume_batch;
/// Webhook service interface
pub mod webhook;
