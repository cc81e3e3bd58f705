//! Data models: the application form and record, and configuration.

pub mod application;
pub mod config;
