// Grammatical feature extraction for segmented verbs
//
// The prefix chain of a verb has a fixed slot order: negation, past tense,
// subject, reflexive, object, direction. A single cursor walks the
// morphemes from the front; each state looks at the morpheme under the
// cursor, records what it finds and advances only on a match. A cursor that
// has run off the end matches nothing, so every verb parse yields features.

use nahuatl_core::{Direction, ObjectAgreement, ParseResult, Person, Tense, VerbFeatures};

use crate::affix::inventory::{
    NEGATION_PREFIXES, NUMBER_SUFFIXES, OPTATIVE_PLURAL_SUFFIXES, OPTATIVE_PREFIX, PAST_PREFIX,
};

// ---------------------------------------------------------------------------
// Morpheme tables
// ---------------------------------------------------------------------------

fn subject_person(morpheme: &str, plural: bool) -> Option<Person> {
    match (plural, morpheme) {
        (false, "ni") => Some(Person::First),
        (false, "ti") => Some(Person::Second),
        (true, "ti") => Some(Person::First),
        (true, "an") => Some(Person::Second),
        _ => None,
    }
}

fn object_agreement(morpheme: &str) -> Option<ObjectAgreement> {
    let object = match morpheme {
        "nec" => ObjectAgreement::FirstSingular,
        "miz" => ObjectAgreement::SecondSingular,
        "tec" => ObjectAgreement::FirstPlural,
        "kin" => ObjectAgreement::ThirdPlural,
        "mec" => ObjectAgreement::SecondPlural,
        "ki" | "k" | "j" => ObjectAgreement::ThirdSingular,
        "te" => ObjectAgreement::ImpersonalPerson,
        "La" => ObjectAgreement::ImpersonalNonperson,
        _ => return None,
    };
    Some(object)
}

fn direction(morpheme: &str) -> Option<Direction> {
    match morpheme {
        "wal" => Some(Direction::Towards),
        "on" => Some(Direction::Away),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    PostNegation,
    PostTense,
    PostSubject,
    PostReflexive,
    PostObject,
    PostDirection,
    Done,
}

struct Extractor<'a> {
    morphemes: &'a [String],
    /// Next unread prefix position.
    prefix_cursor: usize,
    /// Last unread suffix position. Nothing reads suffixes yet.
    #[allow(dead_code)]
    suffix_cursor: usize,
    features: VerbFeatures,
}

impl<'a> Extractor<'a> {
    fn new(morphemes: &'a [String]) -> Self {
        Self {
            morphemes,
            prefix_cursor: 0,
            suffix_cursor: morphemes.len().saturating_sub(1),
            features: VerbFeatures {
                plural: is_plural(morphemes),
                ..VerbFeatures::default()
            },
        }
    }

    fn current(&self) -> Option<&'a str> {
        self.morphemes.get(self.prefix_cursor).map(String::as_str)
    }

    /// Run `read` on the morpheme under the cursor, advancing past it when
    /// it returns `Some`.
    fn take<T>(&mut self, read: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        let value = self.current().and_then(read)?;
        self.prefix_cursor += 1;
        Some(value)
    }

    fn step(&mut self, state: State) -> State {
        match state {
            State::Start => {
                self.features.negative = self
                    .take(|m| NEGATION_PREFIXES.contains(&m).then_some(()))
                    .is_some();
                State::PostNegation
            }
            State::PostNegation => {
                if self.take(|m| (m == PAST_PREFIX).then_some(())).is_some() {
                    self.features.tense = Tense::Past;
                }
                State::PostTense
            }
            State::PostTense => {
                if self.take(|m| (m == OPTATIVE_PREFIX).then_some(())).is_some() {
                    self.features.optative = true;
                    self.features.person = Person::Second;
                } else {
                    let plural = self.features.plural;
                    self.features.person = self
                        .take(|m| subject_person(m, plural))
                        .unwrap_or(Person::Third);
                }
                State::PostSubject
            }
            State::PostSubject => {
                let first_person = self.features.person == Person::First;
                self.features.reflexive = self
                    .take(|m| ((first_person && m == "no") || m == "mo").then_some(()))
                    .is_some();
                State::PostReflexive
            }
            State::PostReflexive => {
                let object = self.take(object_agreement);
                self.features.object = object;
                self.features.impersonal = object.map(ObjectAgreement::is_impersonal);
                State::PostObject
            }
            State::PostObject => {
                self.features.direction = self.take(direction);
                State::PostDirection
            }
            State::PostDirection | State::Done => State::Done,
        }
    }

    fn run(mut self) -> VerbFeatures {
        let mut state = State::Start;
        while state != State::Done {
            state = self.step(state);
        }
        self.features
    }
}

fn is_plural(morphemes: &[String]) -> bool {
    let last = morphemes.last().map(String::as_str);
    if morphemes.first().is_some_and(|m| m == OPTATIVE_PREFIX) {
        last.is_some_and(|m| OPTATIVE_PLURAL_SUFFIXES.contains(&m))
    } else {
        last.is_some_and(|m| NUMBER_SUFFIXES.contains(&m))
    }
}

/// Decode the grammatical features of a verb from its segmentation.
///
/// Total over every `ParseResult`; a parse without verbal prefixes yields
/// an unmarked third-person verb. Tense is read from the past prefix only;
/// tense/aspect suffixes are left to a reader of the suffix cursor.
pub fn extract_verb_features(parse: &ParseResult) -> VerbFeatures {
    Extractor::new(parse.morphemes()).run()
}
