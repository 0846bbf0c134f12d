//! Keyword token and noun-phrase extraction for English and Japanese.
//!
//! `phrasal` wraps an external part-of-speech tagger per language (an HTTP
//! tagging server for English, an in-process morphological analyzer for
//! Japanese) and applies a POS-pattern rule to group adjacent tokens into
//! candidate phrases. Raw tags collapse into a three-symbol alphabet
//! (Adjective / Noun / Other); phrases are maximal non-overlapping matches
//! of "(Adjective)*(Noun)+", capped at a configurable token count.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use phrasal::{PhraseTokenizer, SplitMode};
//!
//! // English, against a running CoreNLP-style server.
//! let en = PhraseTokenizer::english("http://localhost:9000");
//! let output = en.tokenize("the quick brown fox jumps over the lazy dog")?;
//! assert_eq!(output.phrases, vec!["quick_brown_fox", "lazy_dog"]);
//!
//! // Japanese, against the embedded dictionary.
//! let ja = PhraseTokenizer::japanese(SplitMode::C)?;
//! let output = ja.tokenize("美しい花が咲く")?;
//! assert_eq!(output.phrases, vec!["美しい_花"]);
//! ```

pub mod error;
pub mod filter;
pub mod phrase;
pub mod tagging;
pub mod tagset;
pub mod tokenizer;
pub mod types;

pub use error::ExtractError;
pub use filter::{filter_tokens, PosFilter};
pub use phrase::{PhraseConfig, PhraseMatcher, PhraseSpan};
pub use tagging::{CoreNlpTagger, LinderaAnalyzer, PosTagger};
pub use tagset::{classify, classify_tokens};
pub use tokenizer::PhraseTokenizer;
pub use types::{Language, PosSymbol, SplitMode, Token, TokenizeOutput};
