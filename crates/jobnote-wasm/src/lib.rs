//! WASM bindings for job posting capture.
//!
//! This crate lets a browser-extension popup run the field extractor, keep its
//! form state and build the Notion request body.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use jobnote_core::submit::notion::page_payload;
use jobnote_core::{Advisory, ApplicationForm, ApplicationRecord, PostingParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Today's date in the browser's local time zone.
fn local_today() -> Result<NaiveDate, JsValue> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .ok_or_else(|| JsValue::from_str("Invalid local date"))
}

/// Extract company, position, location and salary from posting text.
///
/// Missing fields are left out of the returned object.
#[wasm_bindgen]
pub fn extract_posting(text: &str) -> Result<JsValue, JsValue> {
    to_js(&jobnote_core::extract(text))
}

/// An empty application form dated today.
#[wasm_bindgen]
pub fn new_form(stage: &str) -> Result<JsValue, JsValue> {
    to_js(&ApplicationForm::new(local_today()?, stage))
}

/// Outcome of feeding posting text into a form.
#[derive(Serialize)]
struct FormUpdate {
    form: ApplicationForm,
    advisory: Advisory,
}

/// Extract from `text` and merge the fields found into `form`.
///
/// Returns `{ form, advisory }`; fields not found keep their current value.
#[wasm_bindgen]
pub fn apply_posting_text(form: JsValue, text: &str) -> Result<JsValue, JsValue> {
    let mut form: ApplicationForm = from_js(form)?;
    let advisory = form.apply_text(&PostingParser::new(), text);
    to_js(&FormUpdate { form, advisory })
}

/// The record a form would be submitted as.
#[wasm_bindgen]
pub fn form_to_record(form: JsValue) -> Result<JsValue, JsValue> {
    let form: ApplicationForm = from_js(form)?;
    to_js(&form.to_record())
}

/// Request body for Notion's create-page endpoint.
#[wasm_bindgen]
pub fn build_notion_payload(record: JsValue, database_id: &str) -> Result<JsValue, JsValue> {
    let record: ApplicationRecord = from_js(record)?;
    to_js(&page_payload(&record, database_id))
}

/// Job posting extractor class for browser use.
#[wasm_bindgen]
pub struct JobPostingExtractor {
    parser: PostingParser,
}

#[wasm_bindgen]
impl JobPostingExtractor {
    /// Create a new extractor with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: PostingParser::new(),
        }
    }

    /// Set how many leading lines are scanned for a job title.
    #[wasm_bindgen]
    pub fn set_position_scan_lines(&mut self, lines: usize) {
        self.parser = PostingParser::new().with_position_scan_lines(lines);
    }

    /// Extract posting fields from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text))
    }

    /// Every accepted candidate per field, with the rule that produced it.
    #[wasm_bindgen]
    pub fn candidates(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.candidates(text))
    }
}

impl Default for JobPostingExtractor {
    fn default() -> Self {
        Self::new()
    }
}
