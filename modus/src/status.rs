//! Status lines reporting the outcome of a search.

use core::fmt::{self, Debug, Display};
pub use NoSuccessKind::*;
pub use SuccessKind::*;

pub struct Status<K>(pub K);

impl<K: Debug> Display for Status<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% status {:?}", self.0)
    }
}

pub struct Output<O>(pub O);

impl<O: Display> Display for Output<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% output start")?;
        writeln!(f, "{}", self.0)?;
        writeln!(f, "% output end")
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SuccessKind {
    Solved,
}

#[derive(Debug, PartialEq, Eq)]
pub enum NoSuccessKind {
    /// no two hypotheses can be combined anymore
    Stuck,
    /// the inference limit was reached
    ResourceOut,
    OsError,
    InputError,
    SyntaxError,
}
