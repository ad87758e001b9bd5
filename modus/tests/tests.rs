use core::convert::TryFrom;
use modus::raw::RawHyp;
use modus::rules::{self, Rule};
use modus::search::{Opt, State};
use modus::{solve, Hyp, Prop, SHyp, Search};

fn at(name: &str) -> Prop<&str> {
    Prop::atom(name)
}

fn load(json: &str) -> Vec<SHyp> {
    let raw: Vec<RawHyp> = serde_json::from_str(json).unwrap();
    raw.into_iter().map(|h| SHyp::try_from(h).unwrap()).collect()
}

fn sat(name: &str) -> Prop<String> {
    Prop::atom(name.to_string())
}

/// Hypotheses `p ⇒ r, r ⇒ s, t ∨ ¬ s, ¬ t ∨ u, ¬ u`.
fn exo2() -> Vec<Hyp<&'static str>> {
    Vec::from([
        Hyp::imp(at("p"), at("r")),
        Hyp::imp(at("r"), at("s")),
        Hyp::disj(at("t"), -at("s")),
        Hyp::disj(-at("t"), at("u")),
        Hyp::Prop(-at("u")),
    ])
}

#[test]
fn modus_ponens() {
    let hyps = vec![Hyp::Prop(at("p")), Hyp::imp(at("p"), at("q"))];
    let sol = solve(hyps, Opt::default()).unwrap();
    assert_eq!(sol.state(), State::Solved);
    assert_eq!(sol.conclusion(), &Hyp::Prop(at("q")));
    assert_eq!(sol.stats().modus_ponens, 1);
}

#[test]
fn modus_tollens() {
    let hyps = vec![Hyp::imp(at("p"), at("q")), Hyp::Prop(-at("q"))];
    let sol = solve(hyps, Opt::default()).unwrap();
    assert!(sol.is_solved());
    assert_eq!(sol.conclusion(), &Hyp::Prop(-at("p")));
    assert_eq!(sol.stats().modus_tollens, 1);
}

#[test]
fn no_affirming_consequent() {
    let hyps = vec![Hyp::imp(at("p"), at("q")), Hyp::Prop(at("q"))];
    let sol = solve(hyps, Opt::default()).unwrap();
    assert_eq!(sol.state(), State::Stuck);
    assert_eq!(sol.hyps().len(), 2);
}

#[test]
fn transitivity_chain() {
    let hyps = vec![
        Hyp::Prop(at("p")),
        Hyp::imp(at("p"), at("q")),
        Hyp::imp(at("q"), at("r")),
    ];
    let sol = solve(hyps, Opt::default()).unwrap();
    assert!(sol.is_solved());
    assert_eq!(sol.conclusion(), &Hyp::Prop(at("r")));
}

#[test]
fn disjunctive_syllogism() {
    let sol = solve(exo2(), Opt::default()).unwrap();
    assert!(sol.is_solved());
    assert_eq!(sol.conclusion(), &Hyp::Prop(-at("p")));
    assert_eq!(sol.stats().transitivity, 3);
    assert_eq!(sol.stats().modus_tollens, 1);
    assert_eq!(sol.stats().contrapositive, 2);
}

#[test]
fn contrapositive_fallback() {
    let hyps = vec![
        Hyp::imp(at("p"), at("r")),
        Hyp::imp(-at("p"), at("q")),
        Hyp::imp(at("q"), at("s")),
    ];
    let sol = solve(hyps.clone(), Opt::default()).unwrap();
    assert!(sol.is_solved());
    assert_eq!(sol.conclusion(), &Hyp::imp(-at("r"), at("s")));
    assert_eq!(sol.stats().contrapositive, 1);

    let opt = Opt {
        contra: false,
        ..Opt::default()
    };
    let sol = solve(hyps, opt).unwrap();
    assert_eq!(sol.state(), State::Stuck);
    let remaining = [Hyp::imp(-at("p"), at("s")), Hyp::imp(at("p"), at("r"))];
    assert_eq!(sol.hyps(), &remaining[..]);
}

#[test]
fn stuck() {
    let hyps = vec![Hyp::Prop(at("p")), Hyp::Prop(at("q")), Hyp::Prop(at("r"))];
    let mut search = Search::new(hyps.clone(), Opt::default()).unwrap();
    assert_eq!(search.step().unwrap_err(), State::Stuck);
    assert_eq!(search.hyps(), &hyps[..]);
    assert_eq!(search.conclusion(), &hyps[0]);
    assert_eq!(search.stats().derivations(), 0);
}

#[test]
fn identical_hypotheses_are_not_combined() {
    let hyps = vec![Hyp::Prop(at("p")), Hyp::Prop(at("p"))];
    let sol = solve(hyps, Opt::default()).unwrap();
    assert_eq!(sol.state(), State::Stuck);
    assert_eq!(sol.stats().inferences, 0);
}

#[test]
fn single_and_empty() {
    let h = Hyp::imp(at("p"), at("q"));
    let sol = solve(vec![h.clone()], Opt::default()).unwrap();
    assert!(sol.is_solved());
    assert_eq!(sol.conclusion(), &h);
    assert_eq!(sol.stats().inferences, 0);

    let none: Vec<Hyp<&str>> = Vec::new();
    assert_eq!(solve(none, Opt::default()).unwrap_err(), modus::Error::NoHypotheses);
}

#[test]
fn monotonic_shrink() {
    let mut search = Search::new(exo2(), Opt::default()).unwrap();
    loop {
        let len = search.hyps().len();
        match search.step() {
            Ok(d) => {
                assert_eq!(search.hyps().len() + 1, len);
                assert_eq!(search.hyps()[0], d.conclusion);
            }
            Err(state) => {
                assert_eq!(state, State::Solved);
                assert_eq!(search.hyps().len(), 1);
                break;
            }
        }
    }
}

#[test]
fn inference_limit() {
    let opt = Opt {
        lim: Some(1),
        ..Opt::default()
    };
    let mut search = Search::new(exo2(), opt).unwrap();
    assert_eq!(search.prove(), State::Exhausted);
    assert_eq!(search.hyps().len(), 4);
    assert_eq!(search.inferences(), 1);
}

#[test]
fn conjunct_split() {
    let hyps = vec![Hyp::conj(at("p"), at("q")), Hyp::imp(at("q"), at("r"))];
    let sol = solve(hyps, Opt::default()).unwrap();
    assert!(sol.is_solved());
    assert_eq!(sol.conclusion(), &Hyp::Prop(at("r")));
    assert_eq!(sol.stats().conjunct, 1);
}

#[test]
fn compound_conclusions() {
    // a positive compound consequent becomes an implication
    let hyps = vec![
        Hyp::Prop(at("p")),
        Hyp::imp(at("p"), Prop::imp(at("q"), at("r"))),
        Hyp::Prop(at("q")),
    ];
    let sol = solve(hyps, Opt::default()).unwrap();
    assert!(sol.is_solved());
    assert_eq!(sol.conclusion(), &Hyp::Prop(at("r")));

    // a negated compound antecedent stays a proposition
    let hyps = vec![Hyp::imp(at("p") & at("q"), at("r")), Hyp::Prop(-at("r"))];
    let sol = solve(hyps, Opt::default()).unwrap();
    assert!(sol.is_solved());
    assert_eq!(sol.conclusion(), &Hyp::Prop(-(at("p") & at("q"))));
}

#[test]
fn rule_priority() {
    let p = Hyp::Prop(at("p"));
    let pq = Hyp::imp(at("p"), at("q"));
    assert_eq!(rules::infer(&p, &pq), Some((Rule::ModusPonens, Hyp::Prop(at("q")))));
    assert_eq!(rules::infer(&pq, &p), Some((Rule::ModusPonens, Hyp::Prop(at("q")))));

    let qr = Hyp::imp(at("q"), at("r"));
    let pr = Hyp::imp(at("p"), at("r"));
    assert_eq!(rules::transitivity(&qr, &pq), None);
    assert_eq!(rules::infer(&qr, &pq), Some((Rule::Transitivity, pr)));
}

#[test]
fn rewritings() {
    let pq = Hyp::disj(at("p"), at("q"));
    assert_eq!(rules::or_to_impl(&pq), Some(Hyp::imp(-at("p"), at("q"))));
    assert_eq!(rules::contrapositive(&pq), None);
    assert_eq!(rules::or_to_impl(&Hyp::Prop(at("p"))), None);

    let imps = [
        Hyp::imp(at("p"), at("q")),
        Hyp::imp(-at("p"), at("q") | -at("r")),
        Hyp::imp(-(at("p") & at("q")), -at("r")),
    ];
    for h in imps.iter() {
        let c = rules::contrapositive(h).unwrap();
        assert_ne!(&c, h);
        assert_eq!(rules::contrapositive(&c).as_ref(), Some(h));
    }
}

#[test]
fn equality() {
    let props = [
        at("p"),
        -at("p"),
        at("q"),
        Prop::imp(at("p"), at("q")),
        -Prop::imp(at("p"), at("q")),
        at("p") & at("q"),
        at("p") | at("q"),
        at("p") | -at("q"),
    ];
    for p1 in props.iter() {
        assert_eq!(p1, &p1.clone());
        for p2 in props.iter() {
            assert_eq!(p1 == p2, p2 == p1);
            assert_eq!(p1.eq_mod_sign(p2), p2.eq_mod_sign(p1));
        }
    }
}

#[test]
fn problems() {
    let exo1 = load(include_str!("../../deduce/problems/exo1.json"));
    let exo2 = load(include_str!("../../deduce/problems/exo2.json"));
    let exo3 = load(include_str!("../../deduce/problems/exo3.json"));

    let expected = [
        (exo1, Hyp::Prop(sat("r"))),
        (exo2, Hyp::Prop(-sat("p"))),
        (exo3, Hyp::imp(-sat("r"), sat("s"))),
    ];
    for (hyps, conclusion) in expected {
        let sol = solve(hyps, Opt::default()).unwrap();
        assert!(sol.is_solved());
        assert_eq!(sol.conclusion(), &conclusion);
    }
}

#[test]
fn output() {
    let raw = RawHyp::from(Hyp::imp(sat("p"), -sat("q")));
    let json = serde_json::to_string(&raw).unwrap();
    assert_eq!(
        json,
        r#"{"operand1":{"value":"p"},"operator":"=>","operand2":{"value":"q","no":true}}"#
    );
    assert_eq!(load(&format!("[{}]", json)), vec![Hyp::imp(sat("p"), -sat("q"))]);
}
