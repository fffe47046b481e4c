// Affix inventory of the normalized orthography
//
// Literal lists are kept as constants so that the disambiguator and the
// feature extractor can refer to the same spellings the segmenter strips.
// Within a list, order is search order and the first literal that matches
// wins, so a shorter affix shadows every longer one that begins (or ends)
// with it.

use super::{Anchor, Tier};
use crate::error::MorphError;

// ---------------------------------------------------------------------------
// Verb prefixes
// ---------------------------------------------------------------------------

pub const NEGATION_PREFIXES: &[&str] = &["ax", "amo"];
pub const SUBJECT_PREFIXES: &[&str] = &["ni", "ti", "in", "xi"];
pub const REFLEXIVE_PREFIXES: &[&str] = &["no", "mo"];
pub const OBJECT_PREFIXES: &[&str] = &["nec", "miz", "tec", "kin", "ki", "k", "j", "te", "La"];
/// Object prefixes denoting a non-specific person or thing.
pub const IMPERSONAL_OBJECT_PREFIXES: &[&str] = &["te", "La"];
pub const COMMON_SEMANTIC_PREFIXES: &[&str] = &["ne"];
pub const DIRECTIONAL_PREFIXES: &[&str] = &["wal", "on"];

/// Past tense prefix.
pub const PAST_PREFIX: &str = "o";
/// Second-person optative subject prefix.
pub const OPTATIVE_PREFIX: &str = "xi";

// ---------------------------------------------------------------------------
// Verb suffixes
// ---------------------------------------------------------------------------

pub const NUMBER_SUFFIXES: &[&str] = &["j"];
pub const DIRECTIONAL_SUFFIXES: &[&str] = &["ti", "to", "ki", "ko"];
pub const TENSE_SUFFIXES: &[&str] = &["se", "s", "yaya", "ktok", "jtok", "toya", "k", "ke"];
pub const CAUSATIVE_SUFFIXES: &[&str] = &["ltia", "tia"];
pub const OPTATIVE_PLURAL_SUFFIXES: &[&str] = &["kan"];

// ---------------------------------------------------------------------------
// Noun affixes
// ---------------------------------------------------------------------------

/// Absolutive suffixes as `(pattern, removed literal)`. The `i` absolutive
/// only follows `l`; the `in` absolutive never follows `z`, where it would be
/// the tail of a diminutive.
///
/// The `z` exclusion is a real "not after" test, stricter than the
/// `(?!<=[z])in` form this list descends from, which accepts `zin` as well.
pub const ABSOLUTIVE_SUFFIXES: &[(&str, &str)] = &[
    ("Li", "Li"),
    ("L", "L"),
    ("li", "i"),
    ("(?:^|[^z])in", "in"),
    ("me", "me"),
    ("mej", "mej"),
];
pub const GENITIVE_PREFIXES: &[&str] = &["no", "mo", "to", "inin", "ini", "in", "i", "imo"];
pub const DIMINUTIVE_PREFIXES: &[&str] = &[];
pub const PLURAL_SUFFIXES: &[&str] = &["mej", "me"];
pub const GENITIVE_SUFFIXES: &[&str] = &["wan", "wa", "yo"];
pub const DIMINUTIVE_SUFFIXES: &[&str] = &["zizin", "zinzin", "zin", "zizi", "zi"];

// ---------------------------------------------------------------------------
// Disambiguation cues
// ---------------------------------------------------------------------------

/// Suffixes shared with noun morphology, so weak evidence for a verb.
pub const COMMON_SUFFIXES: &[&str] = &["ko", "s"];
/// Subject prefixes compatible with a plural subject.
pub const PLURAL_SUBJECT_PREFIXES: &[&str] = &["ti", "in", "an"];
/// Endings that derive verbs.
pub const VERB_ENDINGS: &[&str] = &["owa", "iya", "oa", "ia"];
/// Word-initial spelling that only occurs on verbs.
pub const VERB_ONLY_ONSET: &str = "kii";

/// Ligature joining a chained verb to the following one.
pub const CHAINING_LIGATURE: &str = "s";

// ---------------------------------------------------------------------------
// Compiled tiers
// ---------------------------------------------------------------------------

/// Verb tiers in the order segmentation applies them.
#[derive(Debug, Clone)]
pub struct VerbTiers {
    pub negation: Tier,
    pub subject: Tier,
    pub reflexive: Tier,
    pub object: Tier,
    /// Object tier without the impersonal prefixes.
    pub specific_object: Tier,
    pub common_semantic: Tier,
    pub directional_prefix: Tier,
    pub number: Tier,
    pub directional_suffix: Tier,
    pub tense: Tier,
    pub causative: Tier,
}

impl VerbTiers {
    /// Prefix tiers, outermost first.
    pub fn prefixes(&self) -> [&Tier; 6] {
        [
            &self.negation,
            &self.subject,
            &self.reflexive,
            &self.object,
            &self.common_semantic,
            &self.directional_prefix,
        ]
    }

    /// Suffix tiers, outermost (word-final) first.
    pub fn suffixes(&self) -> [&Tier; 4] {
        [
            &self.number,
            &self.directional_suffix,
            &self.tense,
            &self.causative,
        ]
    }
}

/// Noun tiers.
#[derive(Debug, Clone)]
pub struct NounTiers {
    pub absolutive: Tier,
    pub subject: Tier,
    pub genitive: Tier,
    pub diminutive_prefix: Tier,
    pub plural: Tier,
    pub genitive_suffix: Tier,
    pub diminutive: Tier,
}

/// Every tier the analyzer uses, compiled once.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub verb: VerbTiers,
    pub noun: NounTiers,
}

impl Inventory {
    /// Compile the inventory. Fails only if a pattern does not compile.
    pub fn new() -> Result<Self, MorphError> {
        let specific_objects = OBJECT_PREFIXES
            .iter()
            .copied()
            .filter(|prefix| !IMPERSONAL_OBJECT_PREFIXES.contains(prefix));

        let verb = VerbTiers {
            negation: Tier::literals("negation", Anchor::Start, NEGATION_PREFIXES.iter().copied()),
            subject: Tier::literals("subject", Anchor::Start, SUBJECT_PREFIXES.iter().copied()),
            reflexive: Tier::literals(
                "reflexive",
                Anchor::Start,
                REFLEXIVE_PREFIXES.iter().copied(),
            ),
            object: Tier::literals("object", Anchor::Start, OBJECT_PREFIXES.iter().copied()),
            specific_object: Tier::literals("specific-object", Anchor::Start, specific_objects),
            common_semantic: Tier::literals(
                "common-semantic",
                Anchor::Start,
                COMMON_SEMANTIC_PREFIXES.iter().copied(),
            ),
            directional_prefix: Tier::literals(
                "directional-prefix",
                Anchor::Start,
                DIRECTIONAL_PREFIXES.iter().copied(),
            ),
            number: Tier::literals("number", Anchor::End, NUMBER_SUFFIXES.iter().copied()),
            directional_suffix: Tier::literals(
                "directional-suffix",
                Anchor::End,
                DIRECTIONAL_SUFFIXES.iter().copied(),
            ),
            tense: Tier::literals("tense", Anchor::End, TENSE_SUFFIXES.iter().copied()),
            causative: Tier::literals("causative", Anchor::End, CAUSATIVE_SUFFIXES.iter().copied()),
        };

        let noun = NounTiers {
            absolutive: Tier::patterns("absolutive", Anchor::End, ABSOLUTIVE_SUFFIXES)?,
            subject: Tier::literals("subject", Anchor::Start, SUBJECT_PREFIXES.iter().copied()),
            genitive: Tier::literals("genitive", Anchor::Start, GENITIVE_PREFIXES.iter().copied()),
            diminutive_prefix: Tier::literals(
                "diminutive-prefix",
                Anchor::Start,
                DIMINUTIVE_PREFIXES.iter().copied(),
            ),
            plural: Tier::literals("plural", Anchor::End, PLURAL_SUFFIXES.iter().copied()),
            genitive_suffix: Tier::literals(
                "genitive-suffix",
                Anchor::End,
                GENITIVE_SUFFIXES.iter().copied(),
            ),
            diminutive: Tier::literals("diminutive", Anchor::End, DIMINUTIVE_SUFFIXES.iter().copied()),
        };

        Ok(Self { verb, noun })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_compiles() {
        let inventory = Inventory::new().unwrap();
        assert_eq!(inventory.noun.absolutive.canonical_literals().count(), ABSOLUTIVE_SUFFIXES.len());
        assert!(inventory.noun.diminutive_prefix.is_empty());
    }

    #[test]
    fn specific_object_tier_excludes_impersonals() {
        let inventory = Inventory::new().unwrap();
        assert!(inventory.verb.specific_object.contains("kin"));
        assert!(!inventory.verb.specific_object.contains("te"));
        assert!(!inventory.verb.specific_object.contains("La"));
        assert!(inventory.verb.object.contains("te"));
    }

    #[test]
    fn tier_anchors_match_their_role() {
        let inventory = Inventory::new().unwrap();
        for tier in inventory.verb.prefixes() {
            assert_eq!(tier.anchor(), Anchor::Start, "{}", tier.name());
        }
        for tier in inventory.verb.suffixes() {
            assert_eq!(tier.anchor(), Anchor::End, "{}", tier.name());
        }
    }

    #[test]
    fn object_and_diminutive_lists_try_longer_forms_first() {
        // "kin" must be tried before "ki", "ki" before "k".
        let position = |literal: &str| OBJECT_PREFIXES.iter().position(|p| *p == literal).unwrap();
        assert!(position("kin") < position("ki"));
        assert!(position("ki") < position("k"));
        let position = |literal: &str| DIMINUTIVE_SUFFIXES.iter().position(|p| *p == literal).unwrap();
        assert!(position("zizin") < position("zin"));
        assert!(position("zizi") < position("zi"));
    }

    #[test]
    fn absolutive_in_is_rejected_after_z_only() {
        let inventory = Inventory::new().unwrap();
        let absolutive = &inventory.noun.absolutive;
        assert_eq!(absolutive.strip("kalzin").affix, None);
        assert_eq!(absolutive.strip("kalin").affix, Some("in"));
        assert_eq!(absolutive.strip("in").affix, Some("in"));
    }
}
