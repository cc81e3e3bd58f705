//! Notion sink over HTTP.

use std::time::Duration;

use tracing::{debug, warn};

use jobnote_core::models::config::NotionConfig;
use jobnote_core::submit::notion::{error_message, page_payload, request_headers};
use jobnote_core::{ApplicationRecord, Credentials, RemoteSink, SubmissionError};

/// Creates one Notion database page per submitted record.
pub struct NotionClient {
    http: reqwest::Client,
    api_url: String,
    api_version: String,
}

impl NotionClient {
    pub fn new(config: &NotionConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("jobnote/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_version: config.api_version.clone(),
        })
    }
}

impl RemoteSink for NotionClient {
    async fn submit(
        &self,
        credentials: &Credentials,
        record: &ApplicationRecord,
    ) -> Result<(), SubmissionError> {
        let body = page_payload(record, credentials.database_id());

        let mut request = self.http.post(&self.api_url).body(body.to_string());
        for (name, value) in request_headers(credentials, &self.api_version) {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!("Notion accepted the page ({})", status);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Notion responded with {}", status);
        Err(SubmissionError::Rejected(error_message(&body)))
    }
}
