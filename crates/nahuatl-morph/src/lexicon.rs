// Caller-supplied word lists

use hashbrown::HashSet;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// A set of known lemmas or words.
pub type LemmaSet = HashSet<String>;

/// The three word lists an analysis run consults.
///
/// `basic` holds words that are passed through unanalyzed (function words,
/// loans); `verbs` and `nouns` hold known lemmas. The lists are read-only
/// for the duration of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Lexicon {
    pub basic: LemmaSet,
    pub verbs: LemmaSet,
    pub nouns: LemmaSet,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_basic<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.basic.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_verbs<I, S>(mut self, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.verbs.extend(lemmas.into_iter().map(Into::into));
        self
    }

    pub fn with_nouns<I, S>(mut self, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nouns.extend(lemmas.into_iter().map(Into::into));
        self
    }

    /// Check whether `word` is an entry of any of the three lists.
    pub fn contains(&self, word: &str) -> bool {
        self.basic.contains(word) || self.verbs.contains(word) || self.nouns.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.basic.is_empty() && self.verbs.is_empty() && self.nouns.is_empty()
    }
}
