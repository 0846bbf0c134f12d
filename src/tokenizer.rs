//! Tokenizer façade
//!
//! Ties the stages together: tag the sentence, classify the tags, match
//! phrases, filter keyword tokens. Per-language constructors pick the
//! backing tagger; the pipeline itself is language-agnostic.

use tracing::debug;

use crate::error::ExtractError;
use crate::filter::{filter_tokens, PosFilter};
use crate::phrase::PhraseMatcher;
use crate::tagging::{CoreNlpTagger, LinderaAnalyzer, PosTagger};
use crate::tagset::classify_tokens;
use crate::types::{Language, SplitMode, TokenizeOutput};

/// Keyword and phrase tokenizer for one language.
///
/// Holds no mutable state; `&self` methods are safe to call from multiple
/// threads when the backing tagger handle is `Sync`.
#[derive(Debug, Clone)]
pub struct PhraseTokenizer<T = CoreNlpTagger> {
    tagger: T,
    language: Language,
    matcher: PhraseMatcher,
}

impl PhraseTokenizer<CoreNlpTagger> {
    /// English tokenizer backed by a CoreNLP-style POS tagging server.
    ///
    /// `base_url` addresses a running server, e.g. `http://localhost:9000`.
    pub fn english(base_url: impl Into<String>) -> Self {
        Self::with_tagger(CoreNlpTagger::new(base_url), Language::English)
    }
}

impl PhraseTokenizer<LinderaAnalyzer> {
    /// Japanese tokenizer backed by the embedded-dictionary analyzer.
    ///
    /// Fails when the dictionary cannot be loaded.
    pub fn japanese(mode: SplitMode) -> Result<Self, ExtractError> {
        Ok(Self::with_tagger(
            LinderaAnalyzer::new(mode)?,
            Language::Japanese,
        ))
    }
}

impl<T: PosTagger> PhraseTokenizer<T> {
    /// Build a tokenizer over any [`PosTagger`] implementation.
    pub fn with_tagger(tagger: T, language: Language) -> Self {
        Self {
            tagger,
            language,
            matcher: PhraseMatcher::new(),
        }
    }

    /// Replace the phrase matcher (custom max length or separator).
    pub fn with_matcher(mut self, matcher: PhraseMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// The language this tokenizer was built for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Tokenize a sentence with the language's default POS filter.
    ///
    /// The default filter is constructed fresh on every call; nothing is
    /// shared between invocations.
    pub fn tokenize(&self, sentence: &str) -> Result<TokenizeOutput, ExtractError> {
        self.tokenize_filtered(sentence, &PosFilter::for_language(self.language))
    }

    /// Tokenize a sentence with a caller-supplied POS filter.
    ///
    /// Returns the filtered token texts and the matched phrases, or the
    /// first error from the tagging backend. Never a partial result.
    pub fn tokenize_filtered(
        &self,
        sentence: &str,
        filter: &PosFilter,
    ) -> Result<TokenizeOutput, ExtractError> {
        let tagged = self.tagger.tag(sentence)?;
        let symbols = classify_tokens(&tagged, self.language);
        let phrases = self.matcher.extract(&tagged, &symbols)?;
        let tokens = filter_tokens(&tagged, filter);
        debug!(
            language = self.language.as_str(),
            tokens = tokens.len(),
            phrases = phrases.len(),
            "tokenized sentence"
        );
        Ok(TokenizeOutput { tokens, phrases })
    }

    /// Tokenize many sentences with the default filter, failing on the
    /// first error.
    pub fn tokenize_batch(&self, sentences: &[String]) -> Result<Vec<TokenizeOutput>, ExtractError> {
        sentences
            .iter()
            .map(|sentence| self.tokenize(sentence))
            .collect()
    }
}
