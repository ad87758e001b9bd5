use alloc::string::String;
use core::fmt::{self, Display};

/// Reasons to reject a problem before search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A hypothesis has a connective without second operand, or vice versa.
    InvalidHypothesis(String),
    /// There is nothing to reason about.
    NoHypotheses,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHypothesis(why) => write!(f, "invalid hypothesis: {}", why),
            Self::NoHypotheses => write!(f, "no hypotheses given"),
        }
    }
}
