//! Japanese morphological analysis
//!
//! In-process adapter around lindera with the embedded IPADIC dictionary.
//! Morphemes map to tokens carrying the top-level POS category (名詞,
//! 形容詞, ...); boundary sentinels and empty surfaces are discarded before
//! the core sees them.

use lindera::dictionary::{load_embedded_dictionary, DictionaryKind};
use lindera::mode::{Mode, Penalty};
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer;
use tracing::{debug, info};

use crate::error::ExtractError;
use crate::tagging::PosTagger;
use crate::types::{SplitMode, Token};

/// Surfaces emitted by MeCab-style analyzers as sentence boundary markers.
const BOUNDARY_SENTINELS: &[&str] = &["BOS", "EOS"];

/// POS category used when the dictionary has no information for a morpheme.
const UNKNOWN_POS: &str = "UNK";

/// Morphological analyzer for Japanese sentences.
///
/// The split granularity is bound at construction time; one instance tags
/// every sentence with the same segmentation.
pub struct LinderaAnalyzer {
    tokenizer: Tokenizer,
    mode: SplitMode,
}

impl LinderaAnalyzer {
    /// Build an analyzer over the embedded IPADIC dictionary.
    ///
    /// Fails with [`ExtractError::AnalyzerInitialization`] when the
    /// dictionary cannot be loaded; the failure is fatal for this instance.
    pub fn new(mode: SplitMode) -> Result<Self, ExtractError> {
        let dictionary = load_embedded_dictionary(DictionaryKind::IPADIC)
            .map_err(|err| ExtractError::AnalyzerInitialization(err.to_string()))?;
        let segmenter = Segmenter::new(segmentation_mode(mode), dictionary, None);
        info!(?mode, "initialized Japanese morphological analyzer");
        Ok(Self {
            tokenizer: Tokenizer::new(segmenter),
            mode,
        })
    }

    /// The split granularity this analyzer was built with.
    pub fn mode(&self) -> SplitMode {
        self.mode
    }
}

/// Map the split granularity onto the segmentation modes lindera offers.
///
/// `A` keeps compound words whole; `B` and `C` decompose them. lindera has
/// a single decomposition granularity, so the two finer modes coincide.
fn segmentation_mode(mode: SplitMode) -> Mode {
    match mode {
        SplitMode::A => Mode::Normal,
        SplitMode::B | SplitMode::C => Mode::Decompose(Penalty::default()),
    }
}

/// Boundary sentinels and empty surfaces carry no lexical content and
/// would corrupt token/symbol alignment downstream.
fn is_content_surface(surface: &str) -> bool {
    !surface.is_empty() && !BOUNDARY_SENTINELS.contains(&surface)
}

impl PosTagger for LinderaAnalyzer {
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, ExtractError> {
        if sentence.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut morphemes = self
            .tokenizer
            .tokenize(sentence)
            .map_err(|err| ExtractError::MalformedTaggerOutput(err.to_string()))?;
        debug!(count = morphemes.len(), "analyzed sentence");

        let mut tokens = Vec::with_capacity(morphemes.len());
        for morpheme in morphemes.iter_mut() {
            let surface = morpheme.surface.to_string();
            if !is_content_surface(&surface) {
                continue;
            }

            let details = morpheme.details();
            let pos = details.first().copied().unwrap_or(UNKNOWN_POS);
            tokens.push(Token::new(surface, pos));
        }

        Ok(tokens)
    }
}
