// Ordered affix tiers and the template matcher
//
// A tier is a list of mutually exclusive affix templates tried in order; the
// first one that matches is removed from the word and no other template of
// the tier is tried. Templates are either plain literals or anchored regular
// expressions paired with the canonical literal they remove, which lets a
// template demand some context (e.g. "i, but only after l") while removing
// only the affix itself.

pub mod inventory;

pub use inventory::{Inventory, NounTiers, VerbTiers};

use regex::Regex;

use crate::error::MorphError;

/// Which end of the word a tier is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Prefix tier, matched at the start of the word.
    Start,
    /// Suffix tier, matched at the end of the word.
    End,
}

/// One alternative of a tier.
#[derive(Debug, Clone)]
pub enum AffixTemplate {
    /// Matches when the word starts (or ends) with this text.
    Literal(String),
    /// Matches when the anchored pattern matches the word and the word
    /// starts (or ends) with `literal`. Only `literal` is removed.
    Pattern { regex: Regex, literal: String },
}

impl AffixTemplate {
    /// The text this template removes from a word.
    pub fn literal(&self) -> &str {
        match self {
            Self::Literal(literal) | Self::Pattern { literal, .. } => literal,
        }
    }

    fn matches(&self, word: &str, anchor: Anchor) -> bool {
        let literal = self.literal();
        let at_edge = match anchor {
            Anchor::Start => word.starts_with(literal),
            Anchor::End => word.ends_with(literal),
        };
        match self {
            Self::Literal(_) => at_edge,
            Self::Pattern { regex, .. } => at_edge && regex.is_match(word),
        }
    }
}

/// Outcome of searching a word for one tier's affix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stripped<'a> {
    /// The word with the affix removed (the whole word if nothing matched).
    pub rest: &'a str,
    /// The removed affix, sliced from the word.
    pub affix: Option<&'a str>,
}

impl<'a> Stripped<'a> {
    fn unmatched(word: &'a str) -> Self {
        Self {
            rest: word,
            affix: None,
        }
    }
}

/// An ordered tier of mutually exclusive affix templates.
#[derive(Debug, Clone)]
pub struct Tier {
    name: &'static str,
    anchor: Anchor,
    templates: Vec<AffixTemplate>,
}

impl Tier {
    /// Build a tier of literal templates. Empty literals are skipped.
    pub fn literals<I, S>(name: &'static str, anchor: Anchor, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates = literals
            .into_iter()
            .map(Into::into)
            .filter(|literal: &String| !literal.is_empty())
            .map(AffixTemplate::Literal)
            .collect();
        Self {
            name,
            anchor,
            templates,
        }
    }

    /// Build a tier of `(pattern, canonical literal)` templates.
    ///
    /// Each pattern is anchored to the tier's end of the word and compiled
    /// immediately, so a malformed pattern surfaces here rather than on the
    /// first word that reaches it.
    pub fn patterns(
        name: &'static str,
        anchor: Anchor,
        patterns: &[(&str, &str)],
    ) -> Result<Self, MorphError> {
        let mut templates = Vec::with_capacity(patterns.len());
        for &(pattern, literal) in patterns {
            if literal.is_empty() {
                continue;
            }
            let anchored = match anchor {
                Anchor::Start => format!("^(?:{pattern})"),
                Anchor::End => format!("(?:{pattern})$"),
            };
            let regex = Regex::new(&anchored).map_err(|source| MorphError::InvalidPattern {
                tier: name,
                pattern: pattern.to_string(),
                source,
            })?;
            templates.push(AffixTemplate::Pattern {
                regex,
                literal: literal.to_string(),
            });
        }
        Ok(Self {
            name,
            anchor,
            templates,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Canonical literals of the tier, in search order.
    pub fn canonical_literals(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(AffixTemplate::literal)
    }

    /// Check whether a morpheme is spelled like one of the tier's literals.
    pub fn contains(&self, morpheme: &str) -> bool {
        self.canonical_literals().any(|literal| literal == morpheme)
    }

    /// Remove the first matching affix from the tier's end of `word`.
    pub fn strip<'a>(&self, word: &'a str) -> Stripped<'a> {
        let Some(template) = self
            .templates
            .iter()
            .find(|template| template.matches(word, self.anchor))
        else {
            return Stripped::unmatched(word);
        };
        let len = template.literal().len();
        match self.anchor {
            Anchor::Start => Stripped {
                rest: &word[len..],
                affix: Some(&word[..len]),
            },
            Anchor::End => {
                let split = word.len() - len;
                Stripped {
                    rest: &word[..split],
                    affix: Some(&word[split..]),
                }
            }
        }
    }
}

/// Search `word` for a prefix of `tier`.
pub fn search_prefix<'a>(word: &'a str, tier: &Tier) -> Stripped<'a> {
    debug_assert_eq!(tier.anchor(), Anchor::Start, "tier {} is not a prefix tier", tier.name());
    tier.strip(word)
}

/// Search `word` for a suffix of `tier`.
pub fn search_suffix<'a>(word: &'a str, tier: &Tier) -> Stripped<'a> {
    debug_assert_eq!(tier.anchor(), Anchor::End, "tier {} is not a suffix tier", tier.name());
    tier.strip(word)
}
