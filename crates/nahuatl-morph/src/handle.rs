// Morphology: entry point owning the compiled affix inventory.
//
// Compiling the inventory is the only fallible step, so it happens once in
// `Morphology::new`. Every analysis method borrows the inventory and is
// pure; a handle can be shared between threads and reused across texts.

use nahuatl_core::{AnalyzedWord, Classification, ParseResult, VerbFeatures};

use crate::affix::Inventory;
use crate::classify::{self, Rule};
use crate::error::MorphError;
use crate::features;
use crate::lexicon::Lexicon;
use crate::segment;
use crate::tokenizer::{self, TextAnalysis, TokenizeConfig};

/// Top-level handle for Nahuatl morphological analysis.
#[derive(Debug, Clone)]
pub struct Morphology {
    inventory: Inventory,
}

impl Morphology {
    /// Compile the affix inventory.
    pub fn new() -> Result<Self, MorphError> {
        Ok(Self::with_inventory(Inventory::new()?))
    }

    /// Use an inventory built elsewhere.
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self { inventory }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    // -- Segmentation ---------------------------------------------------------

    pub fn segment_verb(&self, word: &str) -> ParseResult {
        segment::segment_verb(word, &self.inventory)
    }

    pub fn segment_noun(&self, word: &str) -> ParseResult {
        segment::segment_noun(word, &self.inventory)
    }

    pub fn lemmatize_verb(&self, word: &str) -> String {
        segment::lemmatize_verb(word, &self.inventory)
    }

    pub fn lemmatize_noun(&self, word: &str) -> String {
        segment::lemmatize_noun(word, &self.inventory)
    }

    // -- Disambiguation -------------------------------------------------------

    /// Classify `word` using the verb and noun lemmas of `lexicon`.
    pub fn classify(&self, word: &str, lexicon: &Lexicon) -> Classification {
        classify::classify(word, &self.inventory, &lexicon.verbs, &lexicon.nouns)
    }

    /// Like [`classify`](Self::classify), also reporting the deciding rule.
    pub fn classify_with_rule(&self, word: &str, lexicon: &Lexicon) -> (Classification, Rule) {
        classify::classify_with_rule(word, &self.inventory, &lexicon.verbs, &lexicon.nouns)
    }

    pub fn extract_verb_features(&self, parse: &ParseResult) -> VerbFeatures {
        features::extract_verb_features(parse)
    }

    /// Classify a single word and analyze it accordingly.
    ///
    /// Verbs carry their decoded features. A word the rules cannot decide is
    /// returned unanalyzed as [`AnalyzedWord::Other`].
    pub fn analyze_word(&self, word: &str, lexicon: &Lexicon) -> AnalyzedWord {
        match self.classify(word, lexicon) {
            Classification::Verb => {
                let parse = self.segment_verb(word);
                let features = features::extract_verb_features(&parse);
                AnalyzedWord::Verb { parse, features }
            }
            Classification::Noun => AnalyzedWord::Noun {
                parse: self.segment_noun(word),
            },
            Classification::Indeterminate => AnalyzedWord::Other {
                word: word.to_string(),
            },
        }
    }

    // -- Text -----------------------------------------------------------------

    pub fn analyze_text(
        &self,
        text: &str,
        config: &TokenizeConfig,
    ) -> Result<TextAnalysis, MorphError> {
        tokenizer::analyze_text(text, config, &self.inventory)
    }

    pub fn tokenize_text(
        &self,
        text: &str,
        config: &TokenizeConfig,
    ) -> Result<Vec<ParseResult>, MorphError> {
        tokenizer::tokenize_text(text, config, &self.inventory)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nahuatl_core::{ObjectAgreement, Person};

    fn morphology() -> Morphology {
        Morphology::new().unwrap()
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Morphology>();
    }

    #[test]
    fn analyze_verb_carries_features() {
        let m = morphology();
        match m.analyze_word("nikinitta", &Lexicon::new()) {
            AnalyzedWord::Verb { parse, features } => {
                assert_eq!(parse.surface_morphemes(), vec!["ni", "kin", "itta"]);
                assert_eq!(features.person, Person::First);
                assert_eq!(features.object, Some(ObjectAgreement::ThirdPlural));
                assert_eq!(features.impersonal, Some(false));
            }
            other => panic!("expected verb, got {other:?}"),
        }
    }

    #[test]
    fn analyze_noun() {
        let m = morphology();
        let word = m.analyze_word("kalli", &Lexicon::new());
        assert_eq!(word.classification(), Classification::Noun);
        assert_eq!(word.lemma(), "kall");
    }

    #[test]
    fn undecided_word_is_other() {
        let m = morphology();
        assert_eq!(
            m.analyze_word("ewa", &Lexicon::new()),
            AnalyzedWord::Other {
                word: "ewa".to_string()
            }
        );
    }

    #[test]
    fn lexicon_decides_classification() {
        let m = morphology();
        let lexicon = Lexicon::new().with_verbs(["itta"]);
        assert_eq!(
            m.classify_with_rule("niitta", &lexicon),
            (Classification::Verb, Rule::LexiconVerb)
        );
    }

    #[test]
    fn lemmatizers_delegate() {
        let m = morphology();
        assert_eq!(m.lemmatize_noun("nokal"), "kal");
        assert_eq!(m.lemmatize_verb("nikkwa"), "kkwa");
    }
}
