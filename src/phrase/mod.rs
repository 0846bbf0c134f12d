//! Phrase extraction components
//!
//! This module provides POS-pattern phrase matching over classified
//! token sequences.

pub mod matcher;

pub use matcher::{PhraseConfig, PhraseMatcher, PhraseSpan};
