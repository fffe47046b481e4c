// Compound detection: noun incorporation and verb chaining
//
// Both checks look for a known lemma at the start of the current lemma and
// split it off. Candidates are kept in a prefix tier so the search is the
// same first-match-wins search the segmenter uses. Lexicons are unordered,
// so candidates are sorted longest first, then alphabetically.

use nahuatl_core::ParseResult;

use crate::affix::inventory::CHAINING_LIGATURE;
use crate::affix::{Anchor, Tier};
use crate::lexicon::{LemmaSet, Lexicon};

fn candidate_tier(name: &'static str, mut candidates: Vec<String>) -> Tier {
    candidates.retain(|candidate| !candidate.is_empty());
    candidates.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    candidates.dedup();
    Tier::literals(name, Anchor::Start, candidates)
}

/// Split candidates built from a lexicon.
#[derive(Debug, Clone)]
pub struct CompoundCandidates {
    /// Known noun lemmas.
    incorporated: Tier,
    /// Known verb lemmas, each followed by the ligature.
    chained: Tier,
}

impl CompoundCandidates {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self::from_sets(&lexicon.verbs, &lexicon.nouns)
    }

    pub fn from_sets(verbs: &LemmaSet, nouns: &LemmaSet) -> Self {
        let incorporated = candidate_tier("incorporated-noun", nouns.iter().cloned().collect());
        let chained = candidate_tier(
            "chained-verb",
            verbs
                .iter()
                .filter(|verb| !verb.is_empty())
                .map(|verb| format!("{verb}{CHAINING_LIGATURE}"))
                .collect(),
        );
        Self {
            incorporated,
            chained,
        }
    }

    /// Incorporated-noun candidates in search order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.incorporated.canonical_literals()
    }

    /// Chained-verb candidates (with ligature) in search order.
    pub fn chained_verbs(&self) -> impl Iterator<Item = &str> {
        self.chained.canonical_literals()
    }
}

/// Whether a split leaving `remainder` as the new lemma is kept.
fn accept(remainder: &str, lexicon: &Lexicon, verify_lemmas: bool) -> bool {
    !verify_lemmas || lexicon.contains(remainder)
}

/// Split a known noun off the front of the lemma.
///
/// `[.., lemma, ..]` becomes `[.., noun, remainder, ..]` with the remainder
/// as the new lemma. A lemma that is itself a lexicon entry is left alone.
/// Phonotactic repair is applied to the new lemma only when a split
/// happens; an unsplit parse comes back as it went in.
pub fn check_noun_incorporation(
    parse: ParseResult,
    candidates: &CompoundCandidates,
    lexicon: &Lexicon,
    verify_lemmas: bool,
) -> ParseResult {
    if lexicon.contains(parse.lemma()) {
        return parse;
    }
    let stripped = candidates.incorporated.strip(parse.lemma());
    let Some(noun) = stripped.affix else {
        return parse;
    };
    if !accept(stripped.rest, lexicon, verify_lemmas) {
        return parse;
    }

    tracing::trace!(lemma = parse.lemma(), noun, "incorporated noun");
    let parts = vec![noun.to_string(), stripped.rest.to_string()];
    parse.splice_lemma(parts, 1).repair_phonotactics()
}

/// Split a known verb and its ligature off the front of the lemma.
///
/// `[.., lemma, ..]` becomes `[.., verb, "s", remainder, ..]` with the
/// remainder as the new lemma. A lemma that is itself a lexicon entry is
/// left alone. As with noun incorporation, only a split parse is repaired.
pub fn check_verb_chaining(
    parse: ParseResult,
    candidates: &CompoundCandidates,
    lexicon: &Lexicon,
    verify_lemmas: bool,
) -> ParseResult {
    if lexicon.contains(parse.lemma()) {
        return parse;
    }
    let stripped = candidates.chained.strip(parse.lemma());
    let Some(chained) = stripped.affix else {
        return parse;
    };
    if !accept(stripped.rest, lexicon, verify_lemmas) {
        return parse;
    }

    let verb = &chained[..chained.len() - CHAINING_LIGATURE.len()];
    tracing::trace!(lemma = parse.lemma(), verb, "chained verb");
    let parts = vec![
        verb.to_string(),
        CHAINING_LIGATURE.to_string(),
        stripped.rest.to_string(),
    ];
    parse.splice_lemma(parts, 2).repair_phonotactics()
}
