//! Propositional inference by pairwise application of classical rules.
//!
//! A problem is a set of hypotheses, each being either a standalone
//! proposition or two propositions joined by implication, conjunction or
//! disjunction. The [`Search`] combines hypotheses pairwise with
//! modus ponens, modus tollens and transitivity until
//! a single hypothesis remains or no rule applies anymore.
//!
//! ~~~
//! use modus::{search::Opt, solve, Hyp, Prop};
//! let (p, q) = (Prop::atom("p"), Prop::atom("q"));
//! let sol = solve(vec![Hyp::imp(p, q.clone()), Hyp::Prop(-q)], Opt::default()).unwrap();
//! assert!(sol.is_solved());
//! assert_eq!(sol.conclusion(), &Hyp::Prop(-Prop::atom("p")));
//! ~~~
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod hyp;
pub mod prop;
#[cfg(feature = "serde")]
pub mod raw;
pub mod rules;
pub mod search;
mod signed;
mod stats;
pub mod status;

pub use error::Error;
pub use hyp::{Hyp, SHyp};
pub use prop::{Form, Op, Prop, SProp};
pub use rules::Rule;
pub use search::{solve, Search, Solution, State};
pub use signed::Signed;
pub use stats::Stats;
