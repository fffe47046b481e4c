// Morpheme segmentation result type

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::character::is_legal_root;

/// Error returned when a `ParseResult` is assembled from inconsistent parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseResultError {
    /// The lemma index does not point into the morpheme sequence.
    #[error("lemma index {index} is out of range for {len} morphemes")]
    LemmaOutOfRange { index: usize, len: usize },
}

/// An ordered morpheme sequence with one designated lemma.
///
/// Segmentation only partitions the input word: concatenating
/// [`morphemes`](Self::morphemes) in order always reproduces the word that
/// was segmented. The lemma is stored as an index, so an affix that happens
/// to be spelled like the root is never mistaken for it.
///
/// Values are immutable; the transforming operations consume `self` and
/// return a new result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawParseResult"))]
pub struct ParseResult {
    morphemes: Vec<String>,
    lemma: usize,
}

/// Unchecked wire form, validated on deserialization.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawParseResult {
    morphemes: Vec<String>,
    lemma: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParseResult> for ParseResult {
    type Error = ParseResultError;

    fn try_from(raw: RawParseResult) -> Result<Self, Self::Error> {
        Self::new(raw.morphemes, raw.lemma)
    }
}

impl ParseResult {
    /// Build a result from a morpheme sequence and the position of its lemma.
    pub fn new(morphemes: Vec<String>, lemma: usize) -> Result<Self, ParseResultError> {
        if lemma >= morphemes.len() {
            return Err(ParseResultError::LemmaOutOfRange {
                index: lemma,
                len: morphemes.len(),
            });
        }
        Ok(Self { morphemes, lemma })
    }

    /// Build a result from prefixes (in word order), the lemma, and suffixes
    /// (in word order).
    pub fn from_parts(prefixes: Vec<String>, lemma: String, suffixes: Vec<String>) -> Self {
        let lemma_index = prefixes.len();
        let mut morphemes = prefixes;
        morphemes.push(lemma);
        morphemes.extend(suffixes);
        Self {
            morphemes,
            lemma: lemma_index,
        }
    }

    /// A word left unanalyzed: the whole word is its own lemma.
    pub fn whole(word: impl Into<String>) -> Self {
        Self {
            morphemes: vec![word.into()],
            lemma: 0,
        }
    }

    /// All morphemes in word order, including an empty lemma if there is one.
    pub fn morphemes(&self) -> &[String] {
        &self.morphemes
    }

    /// Morphemes in word order with empty strings left out.
    pub fn surface_morphemes(&self) -> Vec<&str> {
        self.morphemes
            .iter()
            .map(String::as_str)
            .filter(|m| !m.is_empty())
            .collect()
    }

    /// The lemma (root) morpheme.
    pub fn lemma(&self) -> &str {
        &self.morphemes[self.lemma]
    }

    /// Position of the lemma in the morpheme sequence.
    pub fn lemma_index(&self) -> usize {
        self.lemma
    }

    /// Morphemes before the lemma.
    pub fn prefixes(&self) -> &[String] {
        &self.morphemes[..self.lemma]
    }

    /// Morphemes after the lemma.
    pub fn suffixes(&self) -> &[String] {
        &self.morphemes[self.lemma + 1..]
    }

    /// Number of morphemes.
    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    /// Always false: a result holds at least its lemma.
    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    /// The word this result was segmented from.
    pub fn surface(&self) -> String {
        self.morphemes.concat()
    }

    /// Consume the result, returning its morphemes.
    pub fn into_morphemes(self) -> Vec<String> {
        self.morphemes
    }

    /// Replace the lemma by `parts`, making `parts[lemma_offset]` the new
    /// lemma.
    ///
    /// The parts must concatenate to the old lemma for the partition
    /// invariant to hold; callers split the lemma, they never rewrite it.
    /// An out-of-range offset leaves the result unchanged.
    pub fn splice_lemma(self, parts: Vec<String>, lemma_offset: usize) -> Self {
        if lemma_offset >= parts.len() {
            return self;
        }
        debug_assert_eq!(parts.concat(), self.lemma());
        let Self {
            mut morphemes,
            lemma,
        } = self;
        morphemes.splice(lemma..=lemma, parts);
        Self {
            morphemes,
            lemma: lemma + lemma_offset,
        }
    }

    /// Merge an illegal root into the morpheme before it.
    ///
    /// A root that opens with two consonants (or is a lone consonant) cannot
    /// stand alone, so it is appended to the preceding morpheme and the
    /// merged string becomes the lemma. A lemma in first position, or a
    /// legal one, is returned untouched. Applied once; the merged lemma is
    /// not re-checked.
    pub fn repair_phonotactics(self) -> Self {
        if self.lemma == 0 || is_legal_root(self.lemma()) {
            return self;
        }
        let Self {
            mut morphemes,
            lemma,
        } = self;
        let root = morphemes.remove(lemma);
        morphemes[lemma - 1].push_str(&root);
        Self {
            morphemes,
            lemma: lemma - 1,
        }
    }
}
