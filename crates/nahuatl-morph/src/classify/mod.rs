// Rule-based part-of-speech disambiguation
//
// A word is split both as a verb and as a noun, and an ordered cascade of
// rules inspects the two splits. Phonotactic repair comes after
// classification, so the rules see every stripped affix. The first rule that fires decides.
// Earlier rules carry stronger evidence: lexicon membership first, then
// markers that only one part of speech can carry, then weaker heuristics.

use nahuatl_core::{Classification, ParseResult};

use crate::affix::Inventory;
use crate::affix::inventory::{
    COMMON_SUFFIXES, OPTATIVE_PREFIX, PLURAL_SUBJECT_PREFIXES, VERB_ENDINGS, VERB_ONLY_ONSET,
};
use crate::lexicon::LemmaSet;
use crate::segment::{find_absolutive, split_noun, split_verb};

/// The rule that decided a classification, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    /// Noun lemma is a known noun, verb lemma is not a known verb.
    LexiconNoun,
    /// Verb lemma is a known verb, noun lemma is not a known noun.
    LexiconVerb,
    /// Subject prefix followed by a specific object prefix.
    SubjectAndObject,
    /// Word opens with a spelling only verbs have.
    VerbOnlyOnset,
    /// Absolutive suffix.
    Absolutive,
    /// Number suffix with a plural-compatible subject prefix.
    PluralAgreement,
    /// Optative prefix or a verb-deriving ending on the lemma.
    OptativeOrVerbEnding,
    /// Tense or directional suffix not shared with nouns.
    VerbalSuffix,
    /// Object prefix in front of the verb lemma.
    ObjectPrefix,
    /// Genitive prefix in front of the noun lemma.
    GenitivePrefix,
    /// Diminutive suffix after the noun lemma.
    DiminutiveSuffix,
    /// Subject prefix with a suffix shared by nouns and verbs.
    SubjectWithCommonSuffix,
    /// Nothing fired.
    NoEvidence,
}

/// What the rules look at for one word.
struct Evidence<'a> {
    word: &'a str,
    inventory: &'a Inventory,
    verb: ParseResult,
    noun: ParseResult,
    verbs: &'a LemmaSet,
    nouns: &'a LemmaSet,
}

type RuleFn = fn(&Evidence<'_>) -> Option<Classification>;

/// The cascade. Order is significant.
const RULES: &[(Rule, RuleFn)] = &[
    (Rule::LexiconNoun, lexicon_noun),
    (Rule::LexiconVerb, lexicon_verb),
    (Rule::SubjectAndObject, subject_and_object),
    (Rule::VerbOnlyOnset, verb_only_onset),
    (Rule::Absolutive, absolutive),
    (Rule::PluralAgreement, plural_agreement),
    (Rule::OptativeOrVerbEnding, optative_or_verb_ending),
    (Rule::VerbalSuffix, verbal_suffix),
    (Rule::ObjectPrefix, object_prefix),
    (Rule::GenitivePrefix, genitive_prefix),
    (Rule::DiminutiveSuffix, diminutive_suffix),
    (Rule::SubjectWithCommonSuffix, subject_with_common_suffix),
];

fn verdict(fires: bool, classification: Classification) -> Option<Classification> {
    fires.then_some(classification)
}

fn lexicon_noun(e: &Evidence<'_>) -> Option<Classification> {
    verdict(
        e.nouns.contains(e.noun.lemma()) && !e.verbs.contains(e.verb.lemma()),
        Classification::Noun,
    )
}

fn lexicon_verb(e: &Evidence<'_>) -> Option<Classification> {
    verdict(
        !e.nouns.contains(e.noun.lemma()) && e.verbs.contains(e.verb.lemma()),
        Classification::Verb,
    )
}

fn subject_and_object(e: &Evidence<'_>) -> Option<Classification> {
    let tiers = &e.inventory.verb;
    let subject = tiers.subject.strip(e.word);
    let fires = subject.affix.is_some() && tiers.specific_object.strip(subject.rest).affix.is_some();
    verdict(fires, Classification::Verb)
}

fn verb_only_onset(e: &Evidence<'_>) -> Option<Classification> {
    verdict(e.word.starts_with(VERB_ONLY_ONSET), Classification::Verb)
}

fn absolutive(e: &Evidence<'_>) -> Option<Classification> {
    verdict(find_absolutive(e.word, e.inventory).is_some(), Classification::Noun)
}

fn plural_agreement(e: &Evidence<'_>) -> Option<Classification> {
    let number = &e.inventory.verb.number;
    let has_number = e.verb.suffixes().last().is_some_and(|s| number.contains(s));
    let plural_subject = e
        .verb
        .prefixes()
        .iter()
        .any(|p| PLURAL_SUBJECT_PREFIXES.contains(&p.as_str()));
    verdict(has_number && plural_subject, Classification::Verb)
}

fn optative_or_verb_ending(e: &Evidence<'_>) -> Option<Classification> {
    let optative = e.verb.morphemes().first().is_some_and(|m| m == OPTATIVE_PREFIX);
    let lemma = e.verb.lemma();
    let verb_ending = VERB_ENDINGS.iter().any(|ending| lemma.ends_with(ending));
    verdict(optative || verb_ending, Classification::Verb)
}

fn verbal_suffix(e: &Evidence<'_>) -> Option<Classification> {
    let tiers = &e.inventory.verb;
    let fires = e.verb.suffixes().iter().any(|s| {
        (tiers.tense.contains(s) || tiers.directional_suffix.contains(s))
            && !COMMON_SUFFIXES.contains(&s.as_str())
    });
    verdict(fires, Classification::Verb)
}

fn object_prefix(e: &Evidence<'_>) -> Option<Classification> {
    let object = &e.inventory.verb.object;
    verdict(
        e.verb.prefixes().iter().any(|p| object.contains(p)),
        Classification::Verb,
    )
}

fn genitive_prefix(e: &Evidence<'_>) -> Option<Classification> {
    let genitive = &e.inventory.noun.genitive;
    verdict(
        e.noun.prefixes().iter().any(|p| genitive.contains(p)),
        Classification::Noun,
    )
}

fn diminutive_suffix(e: &Evidence<'_>) -> Option<Classification> {
    let diminutive = &e.inventory.noun.diminutive;
    verdict(
        e.noun.suffixes().iter().any(|s| diminutive.contains(s)),
        Classification::Noun,
    )
}

fn subject_with_common_suffix(e: &Evidence<'_>) -> Option<Classification> {
    let subject = &e.inventory.verb.subject;
    let has_subject = e.verb.prefixes().iter().any(|p| subject.contains(p));
    let has_common = e
        .verb
        .suffixes()
        .iter()
        .any(|s| COMMON_SUFFIXES.contains(&s.as_str()));
    verdict(has_subject && has_common, Classification::Verb)
}

/// Classify a word, also reporting which rule decided.
pub fn classify_with_rule(
    word: &str,
    inventory: &Inventory,
    verbs: &LemmaSet,
    nouns: &LemmaSet,
) -> (Classification, Rule) {
    let evidence = Evidence {
        word,
        inventory,
        verb: split_verb(word, inventory),
        noun: split_noun(word, inventory),
        verbs,
        nouns,
    };

    let (classification, rule) = RULES
        .iter()
        .find_map(|&(rule, check)| check(&evidence).map(|c| (c, rule)))
        .unwrap_or((Classification::Indeterminate, Rule::NoEvidence));

    tracing::trace!(word, ?rule, ?classification, "classified word");
    (classification, rule)
}

/// Classify a word as verb, noun, or indeterminate.
pub fn classify(
    word: &str,
    inventory: &Inventory,
    verbs: &LemmaSet,
    nouns: &LemmaSet,
) -> Classification {
    classify_with_rule(word, inventory, verbs, nouns).0
}
