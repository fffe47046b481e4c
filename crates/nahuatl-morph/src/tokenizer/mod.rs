// Text-level analysis pipeline
//
// A run normalizes the spelling of the whole text, splits it on whitespace
// and analyzes each distinct word once. Words listed in the lexicon are
// passed through whole. Every other word is classified, segmented
// according to its class and optionally checked for compounds; the result
// is cached and mapped back onto every occurrence of the word.

pub mod cache;

pub use cache::{Analysis, AnalysisCache};

use std::fmt;
use std::sync::Arc;

use hashbrown::HashSet;
use nahuatl_core::{Classification, ParseResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::affix::Inventory;
use crate::classify::classify;
use crate::compound::{CompoundCandidates, check_noun_incorporation, check_verb_chaining};
use crate::error::MorphError;
use crate::lexicon::Lexicon;
use crate::orthography::{self, Orthography};
use crate::segment::{segment_noun, segment_verb};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Spelling conversion applied to a text before analysis.
#[derive(Clone)]
pub enum OrthographyChoice {
    /// A built-in orthography, looked up with [`orthography::by_name`].
    Named(String),
    /// A caller-supplied converter.
    Custom(Arc<dyn Orthography>),
}

impl OrthographyChoice {
    pub fn resolve(&self) -> Result<Arc<dyn Orthography>, MorphError> {
        match self {
            Self::Named(name) => orthography::by_name(name),
            Self::Custom(orthography) => Ok(Arc::clone(orthography)),
        }
    }
}

impl fmt::Debug for OrthographyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Options for one text analysis run.
#[derive(Debug, Clone, Default)]
pub struct TokenizeConfig {
    pub lexicon: Lexicon,
    /// Split known nouns off the front of lemmas.
    pub noun_compound_check: bool,
    /// Split known verbs plus ligature off the front of lemmas.
    pub verb_compound_check: bool,
    /// Keep a compound split only when the remaining lemma is a known word.
    pub verify_lemmas: bool,
    /// Spelling conversion, or `None` if the text is already normalized.
    pub orthography: Option<OrthographyChoice>,
}

impl TokenizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_noun_compound_check(mut self, enabled: bool) -> Self {
        self.noun_compound_check = enabled;
        self
    }

    pub fn with_verb_compound_check(mut self, enabled: bool) -> Self {
        self.verb_compound_check = enabled;
        self
    }

    pub fn with_verify_lemmas(mut self, enabled: bool) -> Self {
        self.verify_lemmas = enabled;
        self
    }

    /// Use a built-in orthography by name.
    pub fn with_orthography_name(mut self, name: impl Into<String>) -> Self {
        self.orthography = Some(OrthographyChoice::Named(name.into()));
        self
    }

    pub fn with_orthography(mut self, orthography: Arc<dyn Orthography>) -> Self {
        self.orthography = Some(OrthographyChoice::Custom(orthography));
        self
    }

    fn checks_compounds(&self) -> bool {
        self.noun_compound_check || self.verb_compound_check
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One whitespace-separated token of the analyzed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token after spelling conversion.
    pub word: String,
    pub parse: ParseResult,
    /// `None` for lexicon words, which are not analyzed.
    pub classification: Option<Classification>,
}

/// Tokens of a text in order, with the cache the run filled.
#[derive(Debug, Clone, Default)]
pub struct TextAnalysis {
    pub tokens: Vec<Token>,
    pub cache: AnalysisCache,
}

impl TextAnalysis {
    /// Segmentation of every token, in text order.
    pub fn into_parses(self) -> Vec<ParseResult> {
        self.tokens.into_iter().map(|token| token.parse).collect()
    }

    /// Morphemes of every token with empty strings left out.
    pub fn surface_morphemes(&self) -> Vec<Vec<&str>> {
        self.tokens
            .iter()
            .map(|token| token.parse.surface_morphemes())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

fn analyze_word(
    word: &str,
    inventory: &Inventory,
    config: &TokenizeConfig,
    candidates: Option<&CompoundCandidates>,
) -> Analysis {
    let lexicon = &config.lexicon;
    let classification = classify(word, inventory, &lexicon.verbs, &lexicon.nouns);

    // Indeterminate words are segmented as nouns.
    let mut parse = if classification.is_verb() {
        segment_verb(word, inventory)
    } else {
        segment_noun(word, inventory)
    };

    if let Some(candidates) = candidates {
        if config.verb_compound_check {
            parse = check_verb_chaining(parse, candidates, lexicon, config.verify_lemmas);
        }
        if config.noun_compound_check {
            parse = check_noun_incorporation(parse, candidates, lexicon, config.verify_lemmas);
        }
    }

    Analysis {
        parse,
        classification,
    }
}

/// Analyze a whole text.
///
/// Fails only when the configured orthography cannot be resolved.
pub fn analyze_text(
    text: &str,
    config: &TokenizeConfig,
    inventory: &Inventory,
) -> Result<TextAnalysis, MorphError> {
    let converted = match &config.orthography {
        Some(choice) => Some(choice.resolve()?.convert(text)),
        None => None,
    };
    let text = converted.as_deref().unwrap_or(text);

    let words: Vec<&str> = text.split_whitespace().collect();
    let lexicon = &config.lexicon;

    let mut seen = HashSet::new();
    let unique: Vec<&str> = words
        .iter()
        .copied()
        .filter(|word| !lexicon.contains(word) && seen.insert(*word))
        .collect();

    tracing::debug!(
        tokens = words.len(),
        unique = unique.len(),
        "analyzing text"
    );

    let candidates = config
        .checks_compounds()
        .then(|| CompoundCandidates::new(lexicon));
    let analyze = |word: &&str| analyze_word(word, inventory, config, candidates.as_ref());

    #[cfg(feature = "parallel")]
    let analyses: Vec<Analysis> = unique.par_iter().map(analyze).collect();
    #[cfg(not(feature = "parallel"))]
    let analyses: Vec<Analysis> = unique.iter().map(analyze).collect();

    let mut cache = AnalysisCache::with_capacity(unique.len());
    for (word, analysis) in unique.iter().zip(analyses) {
        cache.store(word, analysis);
    }

    let tokens = words
        .iter()
        .map(|&word| match cache.check(word) {
            Some(analysis) => Token {
                word: word.to_string(),
                parse: analysis.parse.clone(),
                classification: Some(analysis.classification),
            },
            None => Token {
                word: word.to_string(),
                parse: ParseResult::whole(word),
                classification: None,
            },
        })
        .collect();

    Ok(TextAnalysis { tokens, cache })
}

/// Segment every token of a text.
pub fn tokenize_text(
    text: &str,
    config: &TokenizeConfig,
    inventory: &Inventory,
) -> Result<Vec<ParseResult>, MorphError> {
    analyze_text(text, config, inventory).map(TextAnalysis::into_parses)
}

// ===========================================================================
// Tests
// ===========================================================================
