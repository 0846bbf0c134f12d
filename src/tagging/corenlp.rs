//! English POS tagging over HTTP
//!
//! Adapter for a Stanford-CoreNLP-style tagging server. The server's own
//! tokenization and tagging are trusted; this adapter only decodes the
//! response document into an ordered token sequence.

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::ExtractError;
use crate::tagging::PosTagger;
use crate::types::Token;

/// Port a locally-started CoreNLP server listens on by default.
pub const DEFAULT_PORT: u16 = 9000;

/// Annotator settings sent with every request: tokenization, sentence
/// split, and POS tagging, with JSON output.
const TAGGER_PROPERTIES: &str = r#"{"annotators":"tokenize,ssplit,pos","outputFormat":"json"}"#;

/// Blocking HTTP client for a POS tagging server.
pub struct CoreNlpTagger {
    client: Client,
    endpoint: String,
}

impl CoreNlpTagger {
    /// Create a tagger addressing a running server, e.g.
    /// `http://localhost:9000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: base_url.into(),
        }
    }

    /// Create a tagger from a host and port.
    pub fn with_port(host: &str, port: u16) -> Self {
        Self::new(format!("{host}:{port}"))
    }

    /// The endpoint this tagger talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, sentence: &str) -> Result<TaggedDocument, ExtractError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("properties", TAGGER_PROPERTIES)])
            .body(sentence.to_string())
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|source| ExtractError::TaggerUnavailable {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        response
            .json::<TaggedDocument>()
            .map_err(|err| ExtractError::MalformedTaggerOutput(err.to_string()))
    }
}

impl PosTagger for CoreNlpTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, ExtractError> {
        if sentence.trim().is_empty() {
            return Ok(Vec::new());
        }

        debug!(endpoint = %self.endpoint, "requesting POS tags");
        let document = self.request(sentence)?;
        Ok(document.into_tokens())
    }
}

// ─── Response document ──────────────────────────────────────────────────────

/// Top-level response: sentences, each carrying its token annotations.
#[derive(Debug, Deserialize)]
struct TaggedDocument {
    #[serde(default)]
    sentences: Vec<TaggedSentence>,
}

#[derive(Debug, Deserialize)]
struct TaggedSentence {
    #[serde(default)]
    tokens: Vec<TaggedWord>,
}

/// One token annotation; fields beyond the surface and POS tag are ignored.
#[derive(Debug, Deserialize)]
struct TaggedWord {
    word: String,
    pos: String,
}

impl TaggedDocument {
    /// Flatten `sentences[].tokens[]` to tokens in document order.
    fn into_tokens(self) -> Vec<Token> {
        self.sentences
            .into_iter()
            .flat_map(|sentence| sentence.tokens)
            .map(|word| Token::new(word.word, word.pos))
            .collect()
    }
}
