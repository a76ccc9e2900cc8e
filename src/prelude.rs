/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # TalentScope Client Prelude
//!
//! Re-exports the types needed for most interactions with the TalentScope API.
//!
//! ## Usage
//!
//! ```rust
//! use talentscope_client::prelude::*;
//!
//! let client = TalentScopeClient::new("https://api.talentscope.com", "", "refresh").unwrap();
//! let _ = &client.webhook;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the TalentScope API client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

/// Client facade
pub use crate::application::client::TalentScopeClient;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::services::{
    AuthService, CandidateService, CvParsingService, ResumeBatchService, WebhookService,
};

/// Service implementations
pub use crate::application::services::{
    AuthServiceImpl, CandidateServiceImpl, CvParsingServiceImpl, ResumeBatchServiceImpl,
    WebhookServiceImpl,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Transport trait, reqwest-backed implementation and request models
pub use crate::model::http::{
    ApiRequest, HttpClient, HttpResponse, RequestBody, Transport, execute,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Input validation
pub use crate::utils::validator::{ValidateType, validate, validate_multiple};

/// Logger setup
pub use crate::utils::logger::setup_logger;

/// Environment helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

/// Constants
pub use crate::constants::*;
