//! Collaborators around the extraction engine and the submission flow.

pub mod notion;

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SubmissionError;
use crate::models::application::{Advisory, ApplicationForm, ApplicationRecord};
use crate::settings::{Credentials, SettingsStore};

/// Visible text and URL of the page being captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub text: String,
    pub url: String,
}

/// Source of page content (browser tab, file, stdin).
pub trait PageContentProvider {
    /// The current page, or `None` if it could not be retrieved.
    fn page_content(&self) -> Option<PageContent>;
}

/// Destination that persists application records.
pub trait RemoteSink {
    /// Persist one record. No retries are expected from the implementation.
    fn submit(
        &self,
        credentials: &Credentials,
        record: &ApplicationRecord,
    ) -> impl Future<Output = Result<(), SubmissionError>>;
}

/// Submit the form through `sink`, using credentials read from `settings`.
///
/// The sink is not called unless both credentials are configured.
pub async fn submit_application<S, K>(settings: &S, sink: &K, form: &ApplicationForm) -> Advisory
where
    S: SettingsStore + ?Sized,
    K: RemoteSink,
{
    let credentials = match settings.credentials() {
        Ok(Some(credentials)) => credentials,
        Ok(None) => {
            warn!("Submission refused: credentials are not configured");
            return Advisory::error("Please configure Notion settings first");
        }
        Err(e) => {
            warn!("Failed to read settings: {}", e);
            return Advisory::error(format!("Error: {e}"));
        }
    };

    let record = form.to_record();
    info!(
        "Submitting application to {:?} for {:?}",
        record.company, record.position
    );

    match sink.submit(&credentials, &record).await {
        Ok(()) => Advisory::success("Successfully saved to Notion!"),
        Err(e) => {
            warn!("Submission failed: {}", e);
            Advisory::error(format!("Error: {e}"))
        }
    }
}
