/// Module containing the authentication service
pub mod auth_service;
/// Module containing the candidate service
pub mod candidate_service;
/// Module containing the CV parsing service
pub mod cv_parsing_service;
/// Module containing the resume batch service
pub mod resume_batch_service;
/// Module containing the webhook service
pub mod webhook_service;

pub use crate::application::interfaces::auth::*;
pub use crate::application::interfaces::candidate::*;
pub use crate::application::interfaces::cv_parsing::*;
pub use crate::application::interfaces::resume_batch::*;
pub use crate::application::interfaces::webhook::*;
pub use auth_service::*;
pub use candidate_service::*;
pub use cv_parsing_service::*;
pub use resume_batch_service::*;
pub use webhook_service::*;
