//! Core library for capturing job postings.
//!
//! This crate provides:
//! - Heuristic field extraction from job posting text (company, position, location, salary)
//! - Application form state with a non-destructive merge policy
//! - Application records and their Notion page mapping
//! - Collaborator traits for page content, settings storage and remote submission

pub mod error;
pub mod models;
pub mod posting;
pub mod settings;
pub mod submit;

pub use error::{JobnoteError, Result, SettingsError, SubmissionError};
pub use models::application::{Advisory, AdvisoryLevel, ApplicationForm, ApplicationRecord};
pub use models::config::JobnoteConfig;
pub use posting::{extract, ExtractionResult, FieldExtractor, PostingParser};
pub use settings::{save_settings, Credentials, JsonFileSettingsStore, SettingsStore, StoredSettings};
pub use submit::{submit_application, PageContent, PageContentProvider, RemoteSink};
