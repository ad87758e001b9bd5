use crate::prop::{Form, Op, Prop};
use crate::Signed;
use alloc::string::String;
use core::fmt::{self, Display};

/// Unit of inference.
///
/// A hypothesis is either a standalone proposition or
/// a relation between two propositions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hyp<A> {
    Prop(Prop<A>),
    Bin(Prop<A>, Op, Prop<A>),
}

pub type SHyp = Hyp<String>;

impl<A> Hyp<A> {
    pub fn imp(l: Prop<A>, r: Prop<A>) -> Self {
        Self::Bin(l, Op::Impl, r)
    }

    pub fn conj(l: Prop<A>, r: Prop<A>) -> Self {
        Self::Bin(l, Op::Conj, r)
    }

    pub fn disj(l: Prop<A>, r: Prop<A>) -> Self {
        Self::Bin(l, Op::Disj, r)
    }

    /// The connective of a binary hypothesis.
    pub fn op(&self) -> Option<Op> {
        match self {
            Self::Prop(_) => None,
            Self::Bin(_, o, _) => Some(*o),
        }
    }

    pub fn is_impl(&self) -> bool {
        self.op() == Some(Op::Impl)
    }

    /// Antecedent and consequent of an implication.
    pub fn as_impl(&self) -> Option<(&Prop<A>, &Prop<A>)> {
        match self {
            Self::Bin(l, Op::Impl, r) => Some((l, r)),
            _ => None,
        }
    }

    /// Both conjuncts of a conjunction.
    pub fn as_conj(&self) -> Option<(&Prop<A>, &Prop<A>)> {
        match self {
            Self::Bin(l, Op::Conj, r) => Some((l, r)),
            _ => None,
        }
    }
}

impl<A: PartialEq> Hyp<A> {
    /// Return true if the operands of both hypotheses are the same.
    ///
    /// The connective is not taken into account,
    /// but a standalone proposition never equals a binary hypothesis.
    pub fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Prop(p1), Self::Prop(p2)) => p1 == p2,
            (Self::Bin(l1, _, r1), Self::Bin(l2, _, r2)) => l1 == l2 && r1 == r2,
            _ => false,
        }
    }
}

/// Conclude a proposition.
///
/// A positive compound proposition yields a binary hypothesis,
/// such that it can take part in further inferences.
/// Any other proposition yields a standalone hypothesis.
/// Rules thus do not always conclude a standalone hypothesis:
/// `p ⇒ (q ⇒ r)` and `p` yield the implication `q ⇒ r`, not the proposition.
impl<A> From<Prop<A>> for Hyp<A> {
    fn from(p: Prop<A>) -> Self {
        match p {
            Signed(true, Form::Bin(l, o, r)) => Self::Bin(*l, o, *r),
            p => Self::Prop(p),
        }
    }
}

impl<A: Display> Display for Hyp<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prop(p) => write!(f, "{}", p),
            Self::Bin(l, o, r) => write!(f, "{} {} {}", l, o, r),
        }
    }
}

#[test]
fn same() {
    let (p, q) = (Prop::atom("p"), Prop::atom("q"));
    let pq = Hyp::imp(p.clone(), q.clone());
    assert!(pq.is_impl() && !Hyp::disj(p.clone(), q.clone()).is_impl());
    assert_eq!(Hyp::Prop(p.clone()).op(), None);
    assert!(pq.same(&pq));
    assert!(pq.same(&Hyp::conj(p.clone(), q.clone())));
    assert!(!pq.same(&Hyp::imp(q.clone(), p.clone())));
    assert!(!pq.same(&Hyp::Prop(Prop::imp(p.clone(), q))));
    assert!(!Hyp::Prop(p.clone()).same(&Hyp::Prop(-p)));
}

#[test]
fn promote() {
    let (p, q) = (Prop::atom("p"), Prop::atom("q"));
    let pq = Prop::imp(p.clone(), q.clone());
    assert_eq!(Hyp::from(pq.clone()), Hyp::imp(p.clone(), q));
    assert_eq!(Hyp::from(-pq.clone()), Hyp::Prop(-pq));
    assert_eq!(Hyp::from(-p.clone()), Hyp::Prop(-p));
}
