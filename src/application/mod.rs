/// Client facade composing all resource services
pub mod client;
/// Application configuration module
pub mod config;
/// Resource service interfaces
pub mod interfaces;
/// Resource service implementations
pub mod services;
