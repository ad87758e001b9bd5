use crate::search::Derivation;
use crate::Rule;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Search statistics.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// How often was the rule set applied to a pair of hypotheses?
    pub inferences: usize,
    pub modus_ponens: usize,
    pub modus_tollens: usize,
    pub transitivity: usize,
    /// How many derivations required a contrapositive?
    pub contrapositive: usize,
    /// How many derivations used only one conjunct of a conjunction?
    pub conjunct: usize,
}

impl Stats {
    /// Total number of derivations.
    pub fn derivations(&self) -> usize {
        self.modus_ponens + self.modus_tollens + self.transitivity
    }

    pub(crate) fn record<A>(&mut self, d: &Derivation<A>) {
        match d.rule {
            Rule::ModusPonens => self.modus_ponens += 1,
            Rule::ModusTollens => self.modus_tollens += 1,
            Rule::Transitivity => self.transitivity += 1,
        }
        self.contrapositive += usize::from(d.contrapositive);
        self.conjunct += usize::from(d.conjunct);
    }
}
