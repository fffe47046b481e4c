//! Shared value types for Nahuatl morphological analysis.
//!
//! The algorithms live in `nahuatl-morph`; this crate only holds the data
//! they produce: segmentations ([`ParseResult`]), part-of-speech outcomes
//! ([`Classification`]), decoded verb grammar ([`VerbFeatures`]) and the
//! per-word variant tying them together ([`AnalyzedWord`]).

pub mod character;
pub mod enums;
pub mod parse;
pub mod verb;
pub mod word;

pub use enums::{Classification, Direction, ObjectAgreement, Person, Tense};
pub use parse::{ParseResult, ParseResultError};
pub use verb::VerbFeatures;
pub use word::AnalyzedWord;
