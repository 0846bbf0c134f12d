//! Tagging adapters
//!
//! This module provides the boundary between the pure extraction core and
//! the external POS taggers: an HTTP adapter for English and an in-process
//! morphological analyzer for Japanese.

pub mod corenlp;
pub mod japanese;

pub use corenlp::CoreNlpTagger;
pub use japanese::LinderaAnalyzer;

use crate::error::ExtractError;
use crate::types::Token;

/// A source of POS-tagged tokens for a single sentence.
///
/// Implementations normalize their backend's output into an ordered token
/// sequence and discard non-content sentinel entries. The call blocks until
/// the backend responds; no retry is performed here.
pub trait PosTagger {
    /// Tag one sentence, returning tokens in sentence order.
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, ExtractError>;
}
