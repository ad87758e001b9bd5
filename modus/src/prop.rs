//! Atomic and compound propositions.

use crate::Signed;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary connective.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Op {
    /// implication
    #[cfg_attr(feature = "serde", serde(rename = "=>"))]
    Impl,
    /// conjunction
    #[cfg_attr(feature = "serde", serde(rename = "^"))]
    Conj,
    /// disjunction
    #[cfg_attr(feature = "serde", serde(rename = "V"))]
    Disj,
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Impl => write!(f, "⇒"),
            Op::Conj => write!(f, "∧"),
            Op::Disj => write!(f, "∨"),
        }
    }
}

/// Proposition without its sign.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Form<A> {
    Atom(A),
    /// two propositions joined by a connective
    Bin(Box<Prop<A>>, Op, Box<Prop<A>>),
}

/// Proposition, negated if its sign is negative.
///
/// Two propositions are the same iff they are structurally equal,
/// including the signs of all subpropositions.
pub type Prop<A> = Signed<Form<A>>;

pub type SProp = Prop<String>;

impl<A: Display> Display for Form<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Atom(a) => write!(f, "{}", a),
            Form::Bin(l, o, r) => write!(f, "({} {} {})", l, o, r),
        }
    }
}

impl<A> Prop<A> {
    pub fn atom(a: A) -> Self {
        Signed::from(Form::Atom(a))
    }

    pub fn bin(l: Self, o: Op, r: Self) -> Self {
        Signed::from(Form::Bin(Box::new(l), o, Box::new(r)))
    }

    pub fn imp(l: Self, r: Self) -> Self {
        Self::bin(l, Op::Impl, r)
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self.1, Form::Atom(_))
    }

    pub fn is_negated(&self) -> bool {
        self.is_sign_negative()
    }
}

impl<A: PartialEq> Prop<A> {
    /// Return true if both propositions are the same once both are negated.
    ///
    /// ~~~
    /// # use modus::Prop;
    /// let (p, q) = (Prop::atom("p"), Prop::atom("q"));
    /// assert!(p.eq_mod_sign(&-p.clone()));
    /// assert!(!p.eq_mod_sign(&q));
    /// ~~~
    pub fn eq_mod_sign(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<A> core::ops::BitAnd for Prop<A> {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::bin(self, Op::Conj, rhs)
    }
}

impl<A> core::ops::BitOr for Prop<A> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::bin(self, Op::Disj, rhs)
    }
}

#[test]
fn display() {
    use alloc::string::ToString;
    let (p, q) = (Prop::atom("p"), Prop::atom("q"));
    assert_eq!((-p.clone()).to_string(), "¬ p");
    assert_eq!(Prop::imp(p.clone(), -q.clone()).to_string(), "(p ⇒ ¬ q)");
    assert_eq!((-(p & q)).to_string(), "¬ (p ∧ q)");
}

#[test]
fn sameness() {
    let (p, q) = (Prop::atom("p"), Prop::atom("q"));
    let pq = Prop::imp(p.clone(), q.clone());
    assert!(p.is_atomic() && !pq.is_atomic());
    assert_ne!(p, -p.clone());
    assert_ne!(p, pq);
    assert_ne!(pq, -pq.clone());
    assert_ne!(pq, p.clone() | q.clone());
    assert_eq!(pq, Prop::imp(p, q));
}
