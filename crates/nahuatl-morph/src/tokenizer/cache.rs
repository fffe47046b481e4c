// Per-run analysis cache keyed by surface form

use hashbrown::HashMap;
use nahuatl_core::{Classification, ParseResult};

/// The analysis of one distinct surface word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub parse: ParseResult,
    pub classification: Classification,
}

/// Surface word → analysis, filled once per distinct word during a run.
///
/// Entries are write-once: storing a word that is already present keeps the
/// first analysis. A text repeating a word therefore always maps every
/// occurrence to the same result.
#[derive(Debug, Clone, Default)]
pub struct AnalysisCache {
    entries: HashMap<String, Analysis>,
}

impl AnalysisCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Look up the analysis of `word`.
    pub fn check(&self, word: &str) -> Option<&Analysis> {
        self.entries.get(word)
    }

    /// Store the analysis of `word` unless one is already present.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn store(&mut self, word: &str, analysis: Analysis) -> bool {
        if self.entries.contains_key(word) {
            return false;
        }
        self.entries.insert(word.to_string(), analysis);
        true
    }

    /// Number of distinct words analyzed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Analysis)> {
        self.entries.iter().map(|(word, analysis)| (word.as_str(), analysis))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(word: &str, classification: Classification) -> Analysis {
        Analysis {
            parse: ParseResult::whole(word),
            classification,
        }
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = AnalysisCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert!(cache.check("kal").is_none());
    }

    #[test]
    fn store_then_check() {
        let mut cache = AnalysisCache::new();
        assert!(cache.store("kal", analysis("kal", Classification::Noun)));
        let hit = cache.check("kal").unwrap();
        assert_eq!(hit.classification, Classification::Noun);
        assert_eq!(hit.parse.lemma(), "kal");
    }

    #[test]
    fn first_store_wins() {
        let mut cache = AnalysisCache::new();
        cache.store("kal", analysis("kal", Classification::Noun));
        assert!(!cache.store("kal", analysis("kal", Classification::Verb)));
        assert_eq!(cache.check("kal").unwrap().classification, Classification::Noun);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn iter_visits_every_entry() {
        let mut cache = AnalysisCache::with_capacity(2);
        cache.store("kal", analysis("kal", Classification::Noun));
        cache.store("kochi", analysis("kochi", Classification::Verb));
        let mut words: Vec<&str> = cache.iter().map(|(word, _)| word).collect();
        words.sort_unstable();
        assert_eq!(words, vec!["kal", "kochi"]);
    }
}
