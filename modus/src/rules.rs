//! Inference rules and rewritings.
//!
//! Every rule inspects its arguments and returns
//! either a new hypothesis or `None` if it does not apply.
//! No rule modifies its arguments.

use crate::prop::Op;
use crate::Hyp;
use core::fmt::{self, Display};

/// Rule that combines two hypotheses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    ModusPonens,
    ModusTollens,
    Transitivity,
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ModusPonens => write!(f, "modus ponens"),
            Rule::ModusTollens => write!(f, "modus tollens"),
            Rule::Transitivity => write!(f, "transitivity"),
        }
    }
}

/// From `a` and `a ⇒ b`, conclude `b` (in any argument order).
pub fn modus_ponens<A: Clone + PartialEq>(h1: &Hyp<A>, h2: &Hyp<A>) -> Option<Hyp<A>> {
    let mp = |h1: &Hyp<A>, h2: &Hyp<A>| match (h1, h2.as_impl()) {
        (Hyp::Prop(p), Some((a, b))) if p == a => Some(Hyp::from(b.clone())),
        _ => None,
    };
    mp(h1, h2).or_else(|| mp(h2, h1))
}

/// From `a ⇒ b` and `¬ b`, conclude `¬ a` (in any argument order).
///
/// The standalone proposition must be negated.
/// It is compared with the consequent after negating both.
pub fn modus_tollens<A: Clone + PartialEq>(h1: &Hyp<A>, h2: &Hyp<A>) -> Option<Hyp<A>> {
    let mt = |h1: &Hyp<A>, h2: &Hyp<A>| match (h1.as_impl(), h2) {
        (Some((a, b)), Hyp::Prop(p)) if p.is_negated() && b.eq_mod_sign(p) => {
            Some(Hyp::from(-a.clone()))
        }
        _ => None,
    };
    mt(h1, h2).or_else(|| mt(h2, h1))
}

/// From `a ⇒ b` and `b ⇒ c`, conclude `a ⇒ c`.
///
/// This is not commutative.
pub fn transitivity<A: Clone + PartialEq>(h1: &Hyp<A>, h2: &Hyp<A>) -> Option<Hyp<A>> {
    match (h1.as_impl(), h2.as_impl()) {
        (Some((a, b1)), Some((b2, c))) if b1 == b2 => Some(Hyp::imp(a.clone(), c.clone())),
        _ => None,
    }
}

/// Rewrite `a ∨ b` to `¬ a ⇒ b`.
pub fn or_to_impl<A: Clone>(h: &Hyp<A>) -> Option<Hyp<A>> {
    match h {
        Hyp::Bin(a, Op::Disj, b) => Some(Hyp::imp(-a.clone(), b.clone())),
        _ => None,
    }
}

/// Rewrite `a ⇒ b` to `¬ b ⇒ ¬ a`.
pub fn contrapositive<A: Clone>(h: &Hyp<A>) -> Option<Hyp<A>> {
    h.as_impl().map(|(a, b)| Hyp::imp(-b.clone(), -a.clone()))
}

/// Combine two hypotheses with the first rule that applies.
///
/// Rules are tried in the order
/// modus ponens, modus tollens, transitivity, and
/// transitivity with swapped arguments.
pub fn infer<A: Clone + PartialEq>(h1: &Hyp<A>, h2: &Hyp<A>) -> Option<(Rule, Hyp<A>)> {
    let mp = || modus_ponens(h1, h2).map(|h| (Rule::ModusPonens, h));
    let mt = || modus_tollens(h1, h2).map(|h| (Rule::ModusTollens, h));
    let tr = || {
        let h = transitivity(h1, h2).or_else(|| transitivity(h2, h1));
        h.map(|h| (Rule::Transitivity, h))
    };
    mp().or_else(mt).or_else(tr)
}
