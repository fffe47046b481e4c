// Decoded grammatical features of a verb

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::enums::{Direction, ObjectAgreement, Person, Tense};

/// Grammatical features read off a verb's prefix chain.
///
/// Built once by the feature extractor and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VerbFeatures {
    /// Subject is plural.
    pub plural: bool,
    pub negative: bool,
    pub tense: Tense,
    pub person: Person,
    /// Second-person optative (`xi`). Other optatives are periphrastic and
    /// not marked on the verb.
    pub optative: bool,
    pub reflexive: bool,
    pub object: Option<ObjectAgreement>,
    /// `Some` exactly when `object` is, telling whether it is non-specific.
    pub impersonal: Option<bool>,
    pub direction: Option<Direction>,
}

impl Default for VerbFeatures {
    /// An unmarked third-person verb.
    fn default() -> Self {
        Self {
            plural: false,
            negative: false,
            tense: Tense::Unmarked,
            person: Person::Third,
            optative: false,
            reflexive: false,
            object: None,
            impersonal: None,
            direction: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unmarked_third_person() {
        let features = VerbFeatures::default();
        assert_eq!(features.person, Person::Third);
        assert_eq!(features.tense, Tense::Unmarked);
        assert!(!features.negative);
        assert!(features.object.is_none());
        assert!(features.impersonal.is_none());
    }
}
