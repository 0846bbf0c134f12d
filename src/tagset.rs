//! POS tag classification
//!
//! Collapses each language's raw POS tagset into the three-symbol alphabet
//! driving phrase matching. The tables are data: adding a language means
//! adding tag arrays and a default filter, not new control flow.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::types::{Language, PosSymbol, Token};

/// Penn Treebank adjective tags.
pub const ENGLISH_ADJECTIVE_TAGS: &[&str] = &["JJ", "JJR", "JJS"];

/// Penn Treebank noun tags.
pub const ENGLISH_NOUN_TAGS: &[&str] = &["NN", "NNS", "NNP", "NNPS"];

/// Japanese adjective category.
pub const JAPANESE_ADJECTIVE_TAGS: &[&str] = &["形容詞"];

/// Japanese noun category.
pub const JAPANESE_NOUN_TAGS: &[&str] = &["名詞"];

static ENGLISH_TABLE: Lazy<FxHashMap<&'static str, PosSymbol>> =
    Lazy::new(|| build_table(ENGLISH_ADJECTIVE_TAGS, ENGLISH_NOUN_TAGS));

static JAPANESE_TABLE: Lazy<FxHashMap<&'static str, PosSymbol>> =
    Lazy::new(|| build_table(JAPANESE_ADJECTIVE_TAGS, JAPANESE_NOUN_TAGS));

fn build_table(
    adjectives: &[&'static str],
    nouns: &[&'static str],
) -> FxHashMap<&'static str, PosSymbol> {
    let mut table = FxHashMap::default();
    for tag in adjectives {
        table.insert(*tag, PosSymbol::Adjective);
    }
    for tag in nouns {
        table.insert(*tag, PosSymbol::Noun);
    }
    table
}

/// Classify a raw POS tag under the given language's table.
///
/// Pure and total: tags are matched exactly, and unknown tags classify as
/// [`PosSymbol::Other`] rather than failing.
pub fn classify(pos_tag: &str, language: Language) -> PosSymbol {
    let table = match language {
        Language::English => &*ENGLISH_TABLE,
        Language::Japanese => &*JAPANESE_TABLE,
    };
    table.get(pos_tag).copied().unwrap_or(PosSymbol::Other)
}

/// Classify every token, producing a symbol sequence index-aligned with
/// the input.
pub fn classify_tokens(tokens: &[Token], language: Language) -> Vec<PosSymbol> {
    tokens
        .iter()
        .map(|token| classify(&token.pos_tag, language))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_adjectives() {
        for tag in ["JJ", "JJR", "JJS"] {
            assert_eq!(classify(tag, Language::English), PosSymbol::Adjective);
        }
    }

    #[test]
    fn test_english_nouns() {
        for tag in ["NN", "NNS", "NNP", "NNPS"] {
            assert_eq!(classify(tag, Language::English), PosSymbol::Noun);
        }
    }

    #[test]
    fn test_english_other() {
        for tag in ["VBZ", "DT", "IN", "RB", ""] {
            assert_eq!(classify(tag, Language::English), PosSymbol::Other);
        }
    }

    #[test]
    fn test_japanese_tags() {
        assert_eq!(classify("形容詞", Language::Japanese), PosSymbol::Adjective);
        assert_eq!(classify("名詞", Language::Japanese), PosSymbol::Noun);
        assert_eq!(classify("動詞", Language::Japanese), PosSymbol::Other);
        assert_eq!(classify("助詞", Language::Japanese), PosSymbol::Other);
    }

    #[test]
    fn test_tables_do_not_cross_languages() {
        // English tags mean nothing under the Japanese table and vice versa.
        assert_eq!(classify("NN", Language::Japanese), PosSymbol::Other);
        assert_eq!(classify("名詞", Language::English), PosSymbol::Other);
    }

    #[test]
    fn test_match_is_exact() {
        assert_eq!(classify("nn", Language::English), PosSymbol::Other);
        assert_eq!(classify("NN ", Language::English), PosSymbol::Other);
    }

    #[test]
    fn test_classification_is_idempotent() {
        for _ in 0..3 {
            assert_eq!(classify("JJ", Language::English), PosSymbol::Adjective);
        }
    }

    #[test]
    fn test_classify_tokens_preserves_alignment() {
        let tokens = vec![
            Token::new("quick", "JJ"),
            Token::new("fox", "NN"),
            Token::new("jumps", "VBZ"),
        ];
        let symbols = classify_tokens(&tokens, Language::English);
        assert_eq!(symbols.len(), tokens.len());
        assert_eq!(
            symbols,
            vec![PosSymbol::Adjective, PosSymbol::Noun, PosSymbol::Other]
        );
    }

    #[test]
    fn test_classify_tokens_empty() {
        assert!(classify_tokens(&[], Language::English).is_empty());
    }
}
