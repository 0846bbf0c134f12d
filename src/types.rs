//! Core value types
//!
//! This module provides the data model shared by the tagging adapters,
//! the tag classifier, and the phrase matcher: tokens, role symbols,
//! languages, and split granularity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A surface word paired with the raw POS tag the external tagger gave it.
///
/// Tokens are immutable once produced by a tagging adapter. Order within a
/// sentence is significant: adjacency drives phrase matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as tokenized by the tagger.
    pub text: String,
    /// Raw POS tag from the tagger's own tagset (e.g., `NN`, `名詞`).
    pub pos_tag: String,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, pos_tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos_tag: pos_tag.into(),
        }
    }
}

/// The classifier's three-symbol alphabet over raw POS tags.
///
/// One symbol per token; `symbols[i]` classifies `tokens[i].pos_tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosSymbol {
    Adjective,
    Noun,
    Other,
}

/// Supported input languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Japanese,
}

impl Language {
    /// Returns the user-facing name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Japanese => "japanese",
        }
    }
}

/// Split granularity for the Japanese morphological analyzer, coarser to
/// finer: `A` < `B` < `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMode {
    A,
    B,
    C,
}

impl Default for SplitMode {
    /// The finest granularity, matching the analyzer's usual default.
    fn default() -> Self {
        Self::C
    }
}

/// Error returned when parsing an unrecognized split mode letter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized split mode {0:?} (expected A, B, or C)")]
pub struct ParseSplitModeError(String);

impl std::str::FromStr for SplitMode {
    type Err = ParseSplitModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "C" | "c" => Ok(Self::C),
            other => Err(ParseSplitModeError(other.to_string())),
        }
    }
}

/// The public result pair: filtered token texts and matched phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeOutput {
    /// Token texts whose raw POS tag passed the caller's filter, in
    /// sentence order.
    pub tokens: Vec<String>,
    /// Joined phrase strings in left-to-right match order.
    pub phrases: Vec<String>,
}
