//! Morphological analysis for Nahuatl.
//!
//! Words are segmented by peeling affixes off ordered tiers, classified as
//! verb or noun by a fixed cascade of rules, optionally split further into
//! compounds, and (for verbs) decoded into grammatical features. The
//! [`Morphology`] handle owns the compiled affix inventory and exposes all
//! of it.
//!
//! # Architecture
//!
//! - [`affix`] -- Tiers, the template matcher and the affix inventory
//! - [`segment`] -- Verb and noun segmentation, lemmatization
//! - [`classify`] -- Rule cascade deciding verb / noun / indeterminate
//! - [`compound`] -- Noun incorporation and verb chaining
//! - [`features`] -- Verb feature extraction
//! - [`orthography`] -- Spelling normalization
//! - [`lexicon`] -- Caller-supplied word lists
//! - [`tokenizer`] -- Whole-text pipeline and its cache
//!
//! # Example
//!
//! ```
//! use nahuatl_morph::{Lexicon, Morphology};
//!
//! let morphology = Morphology::new()?;
//! let parse = morphology.segment_noun("nokal");
//! assert_eq!(parse.lemma(), "kal");
//!
//! let lexicon = Lexicon::new().with_verbs(["kochi"]);
//! assert!(morphology.classify("nikochi", &lexicon).is_verb());
//! # Ok::<(), nahuatl_morph::MorphError>(())
//! ```

pub mod affix;
pub mod classify;
pub mod compound;
pub mod error;
pub mod features;
mod handle;
pub mod lexicon;
pub mod orthography;
pub mod segment;
pub mod tokenizer;

pub use classify::Rule;
pub use error::MorphError;
pub use handle::Morphology;
pub use lexicon::{LemmaSet, Lexicon};
pub use orthography::{Orthography, SubstitutionOrthography};
pub use tokenizer::{OrthographyChoice, TextAnalysis, Token, TokenizeConfig};

pub use nahuatl_core::{
    AnalyzedWord, Classification, Direction, ObjectAgreement, ParseResult, Person, Tense,
    VerbFeatures,
};
