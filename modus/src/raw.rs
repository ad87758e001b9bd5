//! Hypotheses as objects with optional fields, used for JSON input and output.
//!
//! A proposition is either `{"value": "p"}` or
//! `{"operand1": .., "operator": "=>", "operand2": ..}`,
//! both with an optional `"no": true` for negation.
//! A hypothesis has the shape of a compound proposition
//! without negation, where operator and second operand may be omitted.
//!
//! ~~~
//! # use core::convert::TryFrom;
//! use modus::raw::RawHyp;
//! use modus::{Hyp, Prop, SHyp};
//! let json = r#"{"operand1": {"value": "p"}, "operator": "V", "operand2": {"value": "q", "no": true}}"#;
//! let raw: RawHyp = serde_json::from_str(json).unwrap();
//! let p = Prop::atom("p".to_string());
//! let q = Prop::atom("q".to_string());
//! assert_eq!(SHyp::try_from(raw), Ok(Hyp::disj(p, -q)));
//! ~~~

use crate::prop::{Form, Op, SProp};
use crate::{Error, Hyp, SHyp, Signed};
use alloc::boxed::Box;
use alloc::string::String;
use core::convert::TryFrom;
use serde::{Deserialize, Serialize};

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawAtom {
    pub value: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub no: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawBin {
    pub operand1: RawProp,
    pub operator: Op,
    pub operand2: RawProp,
    #[serde(default, skip_serializing_if = "is_false")]
    pub no: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawProp {
    Atom(RawAtom),
    Bin(Box<RawBin>),
}

/// Hypothesis; negation is only allowed on its operands.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawHyp {
    pub operand1: RawProp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Op>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand2: Option<RawProp>,
}

impl From<RawProp> for SProp {
    fn from(p: RawProp) -> Self {
        match p {
            RawProp::Atom(RawAtom { value, no }) => Signed(!no, Form::Atom(value)),
            RawProp::Bin(b) => {
                let RawBin {
                    operand1,
                    operator,
                    operand2,
                    no,
                } = *b;
                let (l, r) = (Self::from(operand1), Self::from(operand2));
                Signed(!no, Form::Bin(Box::new(l), operator, Box::new(r)))
            }
        }
    }
}

impl From<SProp> for RawProp {
    fn from(p: SProp) -> Self {
        let Signed(sign, form) = p;
        let no = !sign;
        match form {
            Form::Atom(value) => Self::Atom(RawAtom { value, no }),
            Form::Bin(l, operator, r) => Self::Bin(Box::new(RawBin {
                operand1: Self::from(*l),
                operator,
                operand2: Self::from(*r),
                no,
            })),
        }
    }
}

impl TryFrom<RawHyp> for SHyp {
    type Error = Error;
    fn try_from(h: RawHyp) -> Result<Self, Self::Error> {
        let l = SProp::from(h.operand1);
        match (h.operator, h.operand2) {
            (None, None) => Ok(Hyp::Prop(l)),
            (Some(o), Some(r)) => Ok(Hyp::Bin(l, o, SProp::from(r))),
            (Some(o), None) => Err(Error::InvalidHypothesis(alloc::format!(
                "operator {} without second operand after {}",
                o,
                l
            ))),
            (None, Some(r)) => Err(Error::InvalidHypothesis(alloc::format!(
                "second operand {} without operator after {}",
                SProp::from(r),
                l
            ))),
        }
    }
}

impl From<SHyp> for RawHyp {
    fn from(h: SHyp) -> Self {
        match h {
            Hyp::Prop(p) => Self {
                operand1: RawProp::from(p),
                operator: None,
                operand2: None,
            },
            Hyp::Bin(l, o, r) => Self {
                operand1: RawProp::from(l),
                operator: Some(o),
                operand2: Some(RawProp::from(r)),
            },
        }
    }
}

#[test]
fn malformed() {
    let atom = |s: &str| {
        RawProp::Atom(RawAtom {
            value: s.into(),
            no: false,
        })
    };
    let no_operand2 = RawHyp {
        operand1: atom("p"),
        operator: Some(Op::Impl),
        operand2: None,
    };
    let no_operator = RawHyp {
        operand1: atom("p"),
        operator: None,
        operand2: Some(atom("q")),
    };
    for h in [no_operand2, no_operator] {
        assert!(matches!(SHyp::try_from(h), Err(Error::InvalidHypothesis(_))));
    }
}

#[test]
fn unknown_fields() {
    // negation of a whole hypothesis cannot be expressed
    let negated = r#"{"operand1":{"value":"p"},"operator":"=>","operand2":{"value":"q"},"no":true}"#;
    // an atom has no connective
    let atom_op = r#"{"operand1":{"value":"p","operator":"=>"}}"#;
    // a compound has no value
    let bin_value =
        r#"{"operand1":{"operand1":{"value":"p"},"operator":"^","operand2":{"value":"q"},"value":"r"}}"#;
    for json in [negated, atom_op, bin_value] {
        assert!(serde_json::from_str::<RawHyp>(json).is_err(), "{}", json);
    }

    let ok = r#"{"operand1":{"operand1":{"value":"p"},"operator":"^","operand2":{"value":"q"},"no":true}}"#;
    let h = SHyp::try_from(serde_json::from_str::<RawHyp>(ok).unwrap());
    let (p, q) = (SProp::atom("p".into()), SProp::atom("q".into()));
    assert_eq!(h, Ok(Hyp::Prop(-(p & q))));
}
