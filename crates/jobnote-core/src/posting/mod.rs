//! Job posting field extraction module.

mod parser;
pub mod rules;
pub mod text;

pub use parser::{extract, ExtractionResult, PostingCandidates, PostingParser};
pub use rules::{FieldExtractor, Rule, RuleMatch};
