//! Error taxonomy
//!
//! Callers receive either a full result or one typed error identifying
//! which external dependency failed; no partial results are returned.

use thiserror::Error;

/// Errors surfaced by the tagging adapters and the phrase matcher.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The POS tagging service could not be reached or refused the request.
    /// Not retried internally; retry policy belongs to the caller.
    #[error("POS tagging service unavailable at {endpoint}")]
    TaggerUnavailable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The morphological analyzer's dictionary or segmenter could not be
    /// built. Fatal for that analyzer instance.
    #[error("morphological analyzer initialization failed: {0}")]
    AnalyzerInitialization(String),

    /// The external tagger returned output the adapter could not decode.
    #[error("tagger returned malformed output: {0}")]
    MalformedTaggerOutput(String),

    /// Token and symbol sequences disagree in length. Detected before
    /// pattern matching so misaligned data never produces phrases.
    #[error("token/symbol misalignment: {tokens} tokens vs {symbols} symbols")]
    MisalignedSymbols { tokens: usize, symbols: usize },
}
