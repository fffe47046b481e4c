// Closed enumerations shared by the analysis crates

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Part-of-speech outcome of disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Classification {
    Verb,
    Noun,
    /// No rule of the cascade fired. Callers pick their own default.
    Indeterminate,
}

impl Classification {
    /// True only for an explicit verb classification.
    pub fn is_verb(self) -> bool {
        self == Self::Verb
    }
}

/// Tense marked on the verb prefix chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tense {
    #[default]
    Unmarked,
    /// Past prefix `o`.
    Past,
}

/// Grammatical person of the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    /// The person as a number: 1, 2 or 3.
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

/// Object agreement encoded by an object prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ObjectAgreement {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
    /// Non-specific human object (`te`).
    ImpersonalPerson,
    /// Non-specific non-human object (`La`).
    ImpersonalNonperson,
}

impl ObjectAgreement {
    /// True for the non-specific person and non-specific thing objects.
    pub fn is_impersonal(self) -> bool {
        matches!(self, Self::ImpersonalPerson | Self::ImpersonalNonperson)
    }

    /// Short tag such as `1-singular` or `impersonal-person`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::FirstSingular => "1-singular",
            Self::SecondSingular => "2-singular",
            Self::ThirdSingular => "3-singular",
            Self::FirstPlural => "1-plural",
            Self::SecondPlural => "2-plural",
            Self::ThirdPlural => "3-plural",
            Self::ImpersonalPerson => "impersonal-person",
            Self::ImpersonalNonperson => "impersonal-nonperson",
        }
    }
}

/// Direction marked by a directional prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// `wal`
    Towards,
    /// `on`
    Away,
}
