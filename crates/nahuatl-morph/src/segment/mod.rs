// Morpheme segmentation for verbs and nouns
//
// Segmentation peels one affix per tier off the word: prefix tiers from the
// start in order, then suffix tiers from the end in order. What is left is
// the lemma. Suffixes are found outermost first and are put back in word
// order behind the lemma. Every morpheme is a slice of the input, so the
// result always concatenates back to the word.

use nahuatl_core::ParseResult;

use crate::affix::{Inventory, Tier};

/// Affixes and core of a word split over a set of tiers.
struct Split<'a> {
    prefixes: Vec<String>,
    core: &'a str,
    /// In word order.
    suffixes: Vec<String>,
}

impl Split<'_> {
    fn into_parse(self) -> ParseResult {
        ParseResult::from_parts(self.prefixes, self.core.to_string(), self.suffixes)
    }
}

fn split<'a>(word: &'a str, prefix_tiers: &[&Tier], suffix_tiers: &[&Tier]) -> Split<'a> {
    let mut rest = word;

    let mut prefixes = Vec::new();
    for tier in prefix_tiers {
        let stripped = tier.strip(rest);
        rest = stripped.rest;
        if let Some(prefix) = stripped.affix {
            prefixes.push(prefix.to_string());
        }
    }

    let mut suffixes = Vec::new();
    for tier in suffix_tiers {
        let stripped = tier.strip(rest);
        rest = stripped.rest;
        if let Some(suffix) = stripped.affix {
            suffixes.push(suffix.to_string());
        }
    }
    suffixes.reverse();

    Split {
        prefixes,
        core: rest,
        suffixes,
    }
}

/// Segment `word` over arbitrary prefix and suffix tiers, without
/// phonotactic repair.
pub fn segment_word(word: &str, prefix_tiers: &[&Tier], suffix_tiers: &[&Tier]) -> ParseResult {
    split(word, prefix_tiers, suffix_tiers).into_parse()
}

/// Split a word over the verb tiers, without phonotactic repair.
///
/// Prefixes: negation, subject, reflexive, object, common-semantic,
/// directional. Suffixes from the end: number, directional, tense/aspect,
/// causative.
pub fn split_verb(word: &str, inventory: &Inventory) -> ParseResult {
    let verb = &inventory.verb;
    segment_word(word, &verb.prefixes(), &verb.suffixes())
}

/// Segment a word as a verb: [`split_verb`] followed by repair.
pub fn segment_verb(word: &str, inventory: &Inventory) -> ParseResult {
    split_verb(word, inventory).repair_phonotactics()
}

/// Split a word over the noun tiers, without phonotactic repair.
///
/// An absolutive suffix excludes plural and possessive marking, so when one
/// is present only subject and diminutive prefixes are looked for in front
/// of it. Otherwise a genitive prefix on the word selects the possessed
/// suffix set (diminutive, genitive) over the plain one (plural,
/// diminutive).
pub fn split_noun(word: &str, inventory: &Inventory) -> ParseResult {
    let noun = &inventory.noun;

    let absolutive = noun.absolutive.strip(word);
    if let Some(suffix) = absolutive.affix {
        let mut parts = split(absolutive.rest, &[&noun.subject, &noun.diminutive_prefix], &[]);
        parts.suffixes.push(suffix.to_string());
        return parts.into_parse();
    }

    let prefix_tiers = [&noun.subject, &noun.genitive, &noun.diminutive_prefix];
    let possessed = noun.genitive.strip(word).affix.is_some();
    let suffix_tiers = if possessed {
        [&noun.diminutive, &noun.genitive_suffix]
    } else {
        [&noun.plural, &noun.diminutive]
    };
    segment_word(word, &prefix_tiers, &suffix_tiers)
}

/// Segment a word as a noun: [`split_noun`] followed by repair.
pub fn segment_noun(word: &str, inventory: &Inventory) -> ParseResult {
    split_noun(word, inventory).repair_phonotactics()
}

/// Check a word for an absolutive suffix, returning it if present.
pub fn find_absolutive<'a>(word: &'a str, inventory: &Inventory) -> Option<&'a str> {
    inventory.noun.absolutive.strip(word).affix
}

/// Lemma of `word` segmented as a verb.
pub fn lemmatize_verb(word: &str, inventory: &Inventory) -> String {
    segment_verb(word, inventory).lemma().to_string()
}

/// Lemma of `word` segmented as a noun.
pub fn lemmatize_noun(word: &str, inventory: &Inventory) -> String {
    segment_noun(word, inventory).lemma().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Inventory {
        Inventory::new().unwrap()
    }

    fn morphemes(parse: &ParseResult) -> Vec<&str> {
        parse.morphemes().iter().map(String::as_str).collect()
    }

    #[test]
    fn noun_with_subject_prefix() {
        let parse = segment_noun("nikochi", &inventory());
        assert_eq!(morphemes(&parse), vec!["ni", "kochi"]);
        assert_eq!(parse.lemma(), "kochi");
    }

    #[test]
    fn verb_with_cluster_is_repaired() {
        let parse = segment_verb("nikkwa", &inventory());
        assert_eq!(morphemes(&parse), vec!["ni", "kkwa"]);
        assert_eq!(parse.lemma(), "kkwa");
        assert_eq!(parse.surface(), "nikkwa");
    }

    #[test]
    fn split_keeps_illegal_root_apart() {
        let inventory = inventory();
        let split = split_verb("nikkwa", &inventory);
        assert_eq!(morphemes(&split), vec!["ni", "k", "kwa"]);
        assert_eq!(split.lemma(), "kwa");
        assert_eq!(split.clone().repair_phonotactics(), segment_verb("nikkwa", &inventory));
    }

    #[test]
    fn possessed_noun() {
        let parse = segment_noun("nokal", &inventory());
        assert_eq!(morphemes(&parse), vec!["no", "kal"]);
        assert_eq!(parse.lemma(), "kal");
    }

    #[test]
    fn verb_prefix_chain_in_order() {
        // negation, subject, reflexive, directional
        let parse = segment_verb("axnimowalitta", &inventory());
        assert_eq!(morphemes(&parse), vec!["ax", "ni", "mo", "wal", "itta"]);
        assert_eq!(parse.lemma(), "itta");
    }

    #[test]
    fn verb_suffixes_return_in_word_order() {
        // number "j" is found first, directional "to" second
        let parse = segment_verb("tiwetzitoj", &inventory());
        assert_eq!(morphemes(&parse), vec!["ti", "wetzi", "to", "j"]);
        assert_eq!(parse.lemma(), "wetzi");
    }

    #[test]
    fn each_tier_contributes_at_most_once() {
        // Only one tense suffix comes off even though "ses" ends in two.
        let parse = segment_verb("kochises", &inventory());
        assert_eq!(morphemes(&parse), vec!["k", "ochise", "s"]);
    }

    #[test]
    fn causative_is_innermost_suffix() {
        let parse = segment_verb("nikochiltiaj", &inventory());
        assert_eq!(morphemes(&parse), vec!["ni", "k", "ochi", "ltia", "j"]);
    }

    #[test]
    fn absolutive_noun_keeps_only_subject_prefix() {
        // "no" is not stripped as genitive in front of an absolutive.
        let parse = segment_noun("tinokaLi", &inventory());
        assert_eq!(morphemes(&parse), vec!["ti", "noka", "Li"]);
        assert_eq!(parse.lemma(), "noka");
    }

    #[test]
    fn absolutive_after_l() {
        let parse = segment_noun("kalli", &inventory());
        assert_eq!(morphemes(&parse), vec!["kall", "i"]);
        assert_eq!(find_absolutive("kalli", &inventory()), Some("i"));
    }

    #[test]
    fn in_after_z_is_diminutive_not_absolutive() {
        let inventory = inventory();
        assert_eq!(find_absolutive("kalzin", &inventory), None);
        let parse = segment_noun("kalzin", &inventory);
        assert_eq!(morphemes(&parse), vec!["kal", "zin"]);
    }

    #[test]
    fn possessed_noun_uses_genitive_suffixes() {
        let parse = segment_noun("nokalwan", &inventory());
        assert_eq!(morphemes(&parse), vec!["no", "kal", "wan"]);
    }

    #[test]
    fn possessed_noun_with_diminutive_and_genitive_suffix() {
        let parse = segment_noun("nokalwazin", &inventory());
        assert_eq!(morphemes(&parse), vec!["no", "kal", "wa", "zin"]);
    }

    #[test]
    fn unpossessed_noun_uses_plural_suffixes() {
        // "wan" is not a suffix without a genitive prefix.
        let parse = segment_noun("kalwan", &inventory());
        assert_eq!(morphemes(&parse), vec!["kalwan"]);
    }

    #[test]
    fn word_without_affixes_is_its_own_lemma() {
        let parse = segment_verb("ewa", &inventory());
        assert_eq!(morphemes(&parse), vec!["ewa"]);
        assert_eq!(parse.lemma_index(), 0);
    }

    #[test]
    fn affix_only_word_has_empty_lemma() {
        let parse = segment_verb("ni", &inventory());
        assert_eq!(morphemes(&parse), vec!["ni", ""]);
        assert_eq!(parse.lemma(), "");
        assert_eq!(parse.surface_morphemes(), vec!["ni"]);
    }

    #[test]
    fn empty_word() {
        let inventory = inventory();
        assert_eq!(segment_verb("", &inventory), ParseResult::whole(""));
        assert_eq!(segment_noun("", &inventory), ParseResult::whole(""));
    }

    #[test]
    fn lemmatizers_return_lemma_only() {
        let inventory = inventory();
        assert_eq!(lemmatize_noun("nokal", &inventory), "kal");
        assert_eq!(lemmatize_verb("nikkwa", &inventory), "kkwa");
    }

    #[test]
    fn segment_word_with_custom_tiers() {
        let prefix = Tier::literals("p", crate::affix::Anchor::Start, ["a"]);
        let suffix = Tier::literals("s", crate::affix::Anchor::End, ["z"]);
        let parse = segment_word("abz", &[&prefix], &[&suffix]);
        assert_eq!(morphemes(&parse), vec!["a", "b", "z"]);
    }
}
