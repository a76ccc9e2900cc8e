/// Module containing environment configuration helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing input validation rules
pub mod validator;

pub use logger::*;
pub use validator::*;
