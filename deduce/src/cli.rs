use clap::Parser;
use modus::search::Opt;
use std::fmt::Display;
use std::path::PathBuf;

/// Propositional inference engine
///
/// This combines the hypotheses of a problem pairwise with
/// modus ponens, modus tollens, and transitivity
/// until a single conclusion remains.
/// Disjunctions are read as implications, and
/// implications may be replaced by their contrapositives.
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
pub struct Cli {
    /// Maximal number of inferences
    #[arg(long)]
    lim: Option<usize>,

    /// Do not retry hypotheses with their contrapositives
    #[arg(long)]
    nocontra: bool,

    /// Print the conclusion in the JSON format of the problem file
    #[arg(long)]
    pub json: bool,

    /// Write output (such as the conclusion and error details) to given file
    #[arg(short)]
    pub output: Option<PathBuf>,

    /// Write search statistics in JSON format to given file
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Path of the JSON problem file
    ///
    /// If the file is not found and the environment variable "PROBLEMS" is set,
    /// the path is also looked up relative to "PROBLEMS".
    pub file: PathBuf,
}

impl Cli {
    pub fn opt(&self) -> Opt {
        Opt {
            lim: self.lim,
            contra: !self.nocontra,
        }
    }

    pub fn output(&self, out: impl Display) -> Result<(), std::io::Error> {
        use std::io::Write;
        match &self.output {
            Some(o) => std::fs::write(o, out.to_string()),
            None => write!(std::io::stdout(), "{}", modus::status::Output(out)),
        }
    }
}
