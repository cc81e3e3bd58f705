//! Posting text read from a file or stdin.

use std::fs;
use std::io::{self, Read};

use tracing::{debug, warn};

use jobnote_core::{PageContent, PageContentProvider};

/// Reads posting text from a path, or from stdin when the path is `-`.
pub struct PostingSource {
    input: String,
    url: Option<String>,
}

impl PostingSource {
    pub fn new(input: impl Into<String>, url: Option<String>) -> Self {
        Self {
            input: input.into(),
            url,
        }
    }

    fn read_text(&self) -> io::Result<String> {
        if self.input == "-" {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        } else {
            fs::read_to_string(&self.input)
        }
    }
}

impl PageContentProvider for PostingSource {
    fn page_content(&self) -> Option<PageContent> {
        match self.read_text() {
            Ok(text) => {
                debug!("Read {} bytes from {}", text.len(), self.input);
                Some(PageContent {
                    text,
                    url: self.url.clone().unwrap_or_default(),
                })
            }
            Err(e) => {
                warn!("Failed to read posting from {}: {}", self.input, e);
                None
            }
        }
    }
}
