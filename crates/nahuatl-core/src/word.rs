// Per-word analysis variant

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::enums::Classification;
use crate::parse::ParseResult;
use crate::verb::VerbFeatures;

/// A word together with the analysis matching its classification.
///
/// Verbs carry their decoded features, nouns only their segmentation, and
/// words the disambiguator could not place are kept whole.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum AnalyzedWord {
    Verb {
        parse: ParseResult,
        features: VerbFeatures,
    },
    Noun {
        parse: ParseResult,
    },
    Other {
        word: String,
    },
}

impl AnalyzedWord {
    /// The classification this variant stands for.
    pub fn classification(&self) -> Classification {
        match self {
            Self::Verb { .. } => Classification::Verb,
            Self::Noun { .. } => Classification::Noun,
            Self::Other { .. } => Classification::Indeterminate,
        }
    }

    /// Morphemes of the word; an unclassified word is a single morpheme.
    pub fn morphemes(&self) -> Vec<&str> {
        match self {
            Self::Verb { parse, .. } | Self::Noun { parse } => {
                parse.morphemes().iter().map(String::as_str).collect()
            }
            Self::Other { word } => vec![word.as_str()],
        }
    }

    /// Lemma of the word; an unclassified word is its own lemma.
    pub fn lemma(&self) -> &str {
        match self {
            Self::Verb { parse, .. } | Self::Noun { parse } => parse.lemma(),
            Self::Other { word } => word,
        }
    }

    /// Verb features, for verbs.
    pub fn features(&self) -> Option<&VerbFeatures> {
        match self {
            Self::Verb { features, .. } => Some(features),
            _ => None,
        }
    }
}
