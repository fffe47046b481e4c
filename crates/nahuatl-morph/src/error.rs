// Configuration-time errors
//
// Analysis itself never fails; everything here is raised while building the
// affix inventory or resolving a run's configuration.

/// Error type for inventory construction and configuration resolution.
#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    /// An affix pattern failed to compile.
    #[error("invalid pattern {pattern:?} in tier {tier}: {source}")]
    InvalidPattern {
        tier: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An orthography was requested by a name that is not built in.
    #[error("unknown orthography: {0}")]
    UnknownOrthography(String),
}
