//! Phrase pattern matching
//!
//! Identifies candidate phrases by matching the pattern
//! "(Adjective)*(Noun)+" over the classified symbol sequence.
//! Matching is leftmost-longest and repeated: each match consumes the
//! longest adjective-then-noun run starting at the scan position, and
//! scanning resumes immediately after it, so matches never overlap.
//!
//! Implemented as a single linear scan with a three-state machine rather
//! than a regex engine; the alphabet has only three symbols.

use serde::Serialize;

use crate::error::ExtractError;
use crate::types::{PosSymbol, Token};

/// Configuration for phrase matching.
#[derive(Debug, Clone)]
pub struct PhraseConfig {
    /// Maximum number of tokens in a phrase. Longer matches are dropped
    /// entirely, never truncated.
    pub max_len: usize,
    /// Separator joining token texts into the phrase string.
    pub separator: String,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            max_len: 3,
            separator: "_".to_string(),
        }
    }
}

/// A matched span over the token sequence, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhraseSpan {
    /// Index of the first token in the match.
    pub start: usize,
    /// Index one past the last token in the match.
    pub end: usize,
}

impl PhraseSpan {
    /// Number of tokens covered by the span.
    pub fn token_count(&self) -> usize {
        self.end - self.start
    }
}

/// Scanner state while walking the symbol sequence.
#[derive(Debug, Clone, Copy)]
enum ScanState {
    /// Not inside a potential match.
    Start,
    /// Consuming adjectives since the recorded start index; no noun yet.
    InAdjectiveRun(usize),
    /// Consuming nouns; the span from the recorded start index is a match.
    InNounRun(usize),
}

/// Phrase pattern matcher.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    config: PhraseConfig,
}

impl Default for PhraseMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseMatcher {
    /// Create a matcher with the default config (max 3 tokens, `_` join).
    pub fn new() -> Self {
        Self {
            config: PhraseConfig::default(),
        }
    }

    /// Create a matcher with a custom config.
    pub fn with_config(config: PhraseConfig) -> Self {
        Self { config }
    }

    /// Set the maximum phrase length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.config.max_len = max_len;
        self
    }

    /// Set the separator joining token texts.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Extract phrase strings from an index-aligned token/symbol pair.
    ///
    /// Fails fast with [`ExtractError::MisalignedSymbols`] when the two
    /// sequences disagree in length. Phrases appear in left-to-right match
    /// order; identical text at different positions yields duplicates.
    pub fn extract(
        &self,
        tokens: &[Token],
        symbols: &[PosSymbol],
    ) -> Result<Vec<String>, ExtractError> {
        if tokens.len() != symbols.len() {
            return Err(ExtractError::MisalignedSymbols {
                tokens: tokens.len(),
                symbols: symbols.len(),
            });
        }

        let phrases = self
            .extract_spans(symbols)
            .into_iter()
            .filter(|span| span.token_count() <= self.config.max_len)
            .map(|span| self.join_span(tokens, span))
            .collect();
        Ok(phrases)
    }

    /// Find all maximal non-overlapping matches of "(Adjective)*(Noun)+".
    ///
    /// Returns raw spans before the length filter is applied, in
    /// left-to-right order.
    pub fn extract_spans(&self, symbols: &[PosSymbol]) -> Vec<PhraseSpan> {
        let mut spans = Vec::new();
        let mut state = ScanState::Start;

        for (i, symbol) in symbols.iter().enumerate() {
            state = match (state, symbol) {
                (ScanState::Start, PosSymbol::Adjective) => ScanState::InAdjectiveRun(i),
                (ScanState::Start, PosSymbol::Noun) => ScanState::InNounRun(i),
                (ScanState::Start, PosSymbol::Other) => ScanState::Start,

                (ScanState::InAdjectiveRun(start), PosSymbol::Adjective) => {
                    ScanState::InAdjectiveRun(start)
                }
                (ScanState::InAdjectiveRun(start), PosSymbol::Noun) => ScanState::InNounRun(start),
                // An adjective run never followed by a noun is not a phrase.
                (ScanState::InAdjectiveRun(_), PosSymbol::Other) => ScanState::Start,

                (ScanState::InNounRun(start), PosSymbol::Noun) => ScanState::InNounRun(start),
                // The noun run ends here; the next symbol may open a new match.
                (ScanState::InNounRun(start), PosSymbol::Adjective) => {
                    spans.push(PhraseSpan { start, end: i });
                    ScanState::InAdjectiveRun(i)
                }
                (ScanState::InNounRun(start), PosSymbol::Other) => {
                    spans.push(PhraseSpan { start, end: i });
                    ScanState::Start
                }
            };
        }

        if let ScanState::InNounRun(start) = state {
            spans.push(PhraseSpan {
                start,
                end: symbols.len(),
            });
        }

        spans
    }

    /// Join a span's token texts with the configured separator, preserving
    /// sentence order.
    fn join_span(&self, tokens: &[Token], span: PhraseSpan) -> String {
        tokens[span.start..span.end]
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(&self.config.separator)
    }
}
