//! Mapping of application records onto the Notion "create page" API.
//!
//! Only the request and response shapes live here; the HTTP transport is up to
//! the caller (reqwest in the CLI, `fetch` in the browser).

use serde_json::{json, Map, Value};

use crate::models::application::ApplicationRecord;
use crate::settings::Credentials;

/// Endpoint that creates a page in a database.
pub const NOTION_PAGES_URL: &str = "https://api.notion.com/v1/pages";

/// API version the property shapes below were written against.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Shown when Notion rejects a request without a usable message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to save to Notion";

/// Request body creating one database page for `record`.
///
/// Optional properties are only present when the record carries a value.
pub fn page_payload(record: &ApplicationRecord, database_id: &str) -> Value {
    let mut properties = Map::new();
    properties.insert(
        "Company".to_string(),
        json!({ "title": [text_content(&record.company)] }),
    );
    properties.insert("Position".to_string(), rich_text(&record.position));
    properties.insert(
        "Application Date".to_string(),
        json!({ "date": { "start": record.application_date.format("%Y-%m-%d").to_string() } }),
    );
    properties.insert(
        "Stage".to_string(),
        json!({ "status": { "name": record.stage } }),
    );

    if let Some(link) = &record.link {
        properties.insert("Link".to_string(), json!({ "url": link }));
    }
    if let Some(location) = &record.location {
        properties.insert("Location".to_string(), rich_text(location));
    }
    if let Some(salary) = &record.salary {
        properties.insert("Salary".to_string(), rich_text(salary));
    }
    if let Some(expectation) = &record.salary_expectation {
        properties.insert("Salary Expectation".to_string(), rich_text(expectation));
    }

    json!({
        "parent": { "database_id": database_id },
        "properties": properties,
    })
}

/// Headers every request needs, as (name, value) pairs.
pub fn request_headers(credentials: &Credentials, api_version: &str) -> [(&'static str, String); 3] {
    [
        ("Authorization", format!("Bearer {}", credentials.token())),
        ("Notion-Version", api_version.to_string()),
        ("Content-Type", "application/json".to_string()),
    ]
}

/// The message to show for a failed request, taken from Notion's error body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_owned))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string())
}

fn text_content(content: &str) -> Value {
    json!({ "text": { "content": content } })
}

fn rich_text(content: &str) -> Value {
    json!({ "rich_text": [text_content(content)] })
}
