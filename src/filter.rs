//! Token filtering
//!
//! This module provides the allow-set over raw POS tags used to select
//! keyword tokens, with per-language defaults.

use rustc_hash::FxHashSet;

use crate::tagset::{
    ENGLISH_ADJECTIVE_TAGS, ENGLISH_NOUN_TAGS, JAPANESE_ADJECTIVE_TAGS, JAPANESE_NOUN_TAGS,
};
use crate::types::{Language, Token};

/// A set of accepted raw POS tags.
///
/// Tags are matched exactly against `Token::pos_tag`. Defaults differ per
/// language and are constructed fresh per call site; filters are never
/// shared mutable state.
#[derive(Debug, Clone)]
pub struct PosFilter {
    tags: FxHashSet<String>,
}

impl PosFilter {
    /// Create a filter accepting exactly the given tags.
    pub fn from_tags(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// The default English filter: adjective and noun tags.
    pub fn english_default() -> Self {
        let tags = [ENGLISH_ADJECTIVE_TAGS, ENGLISH_NOUN_TAGS].concat();
        Self::from_tags(&tags)
    }

    /// The default Japanese filter: 名詞 and 形容詞.
    pub fn japanese_default() -> Self {
        let tags = [JAPANESE_ADJECTIVE_TAGS, JAPANESE_NOUN_TAGS].concat();
        Self::from_tags(&tags)
    }

    /// The default filter for a language.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english_default(),
            Language::Japanese => Self::japanese_default(),
        }
    }

    /// Accept additional tags.
    pub fn add_tags(&mut self, tags: &[&str]) {
        for tag in tags {
            self.tags.insert((*tag).to_string());
        }
    }

    /// Stop accepting the given tags.
    pub fn remove_tags(&mut self, tags: &[&str]) {
        for tag in tags {
            self.tags.remove(*tag);
        }
    }

    /// Check whether a raw POS tag is accepted.
    pub fn contains(&self, pos_tag: &str) -> bool {
        self.tags.contains(pos_tag)
    }

    /// Number of accepted tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check whether the filter accepts nothing.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Select the texts of tokens whose raw POS tag is accepted by `filter`,
/// preserving sentence order. Pure and total.
pub fn filter_tokens(tokens: &[Token], filter: &PosFilter) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| filter.contains(&token.pos_tag))
        .map(|token| token.text.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_default_accepts_content_tags() {
        let filter = PosFilter::english_default();
        for tag in ["JJ", "JJR", "JJS", "NN", "NNS", "NNP", "NNPS"] {
            assert!(filter.contains(tag), "expected {tag} to be accepted");
        }
        assert_eq!(filter.len(), 7);
        assert!(!filter.contains("VBZ"));
        assert!(!filter.contains("DT"));
    }

    #[test]
    fn test_japanese_default_accepts_content_tags() {
        let filter = PosFilter::japanese_default();
        assert!(filter.contains("名詞"));
        assert!(filter.contains("形容詞"));
        assert!(!filter.contains("動詞"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_for_language_dispatch() {
        assert!(PosFilter::for_language(Language::English).contains("NN"));
        assert!(PosFilter::for_language(Language::Japanese).contains("名詞"));
    }

    #[test]
    fn test_add_and_remove_tags() {
        let mut filter = PosFilter::from_tags(&["NN"]);
        filter.add_tags(&["VB", "VBZ"]);
        assert!(filter.contains("VB"));
        filter.remove_tags(&["NN"]);
        assert!(!filter.contains("NN"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_filter_tokens_preserves_order() {
        let tokens = vec![
            Token::new("quick", "JJ"),
            Token::new("brown", "JJ"),
            Token::new("fox", "NN"),
            Token::new("jumps", "VBZ"),
        ];
        let filtered = filter_tokens(&tokens, &PosFilter::english_default());
        assert_eq!(filtered, vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn test_filter_tokens_empty_filter() {
        let tokens = vec![Token::new("fox", "NN")];
        let filter = PosFilter::from_tags(&[]);
        assert!(filter.is_empty());
        assert!(filter_tokens(&tokens, &filter).is_empty());
    }

    #[test]
    fn test_filter_tokens_empty_input() {
        assert!(filter_tokens(&[], &PosFilter::english_default()).is_empty());
    }

    #[test]
    fn test_duplicate_surfaces_are_kept() {
        let tokens = vec![
            Token::new("fox", "NN"),
            Token::new("and", "CC"),
            Token::new("fox", "NN"),
        ];
        let filtered = filter_tokens(&tokens, &PosFilter::english_default());
        assert_eq!(filtered, vec!["fox", "fox"]);
    }
}
