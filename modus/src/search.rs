//! Pairwise combination of hypotheses until one remains.

use crate::status::{NoSuccessKind, SuccessKind};
use crate::{rules, Error, Hyp, Rule, Stats};
use alloc::vec::Vec;
use core::fmt::Display;
use log::{debug, info};

/// Search options.
#[derive(Clone, Debug)]
pub struct Opt {
    /// maximal number of inferences
    pub lim: Option<usize>,
    /// retry pairs with contrapositives when no rule applies directly
    pub contra: bool,
}

impl Default for Opt {
    fn default() -> Self {
        Self {
            lim: None,
            contra: true,
        }
    }
}

/// Final state of a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// a single hypothesis remains
    Solved,
    /// no two hypotheses can be combined
    Stuck,
    /// the inference limit was reached
    Exhausted,
}

impl State {
    pub fn status(self) -> Result<SuccessKind, NoSuccessKind> {
        match self {
            Self::Solved => Ok(SuccessKind::Solved),
            Self::Stuck => Err(NoSuccessKind::Stuck),
            Self::Exhausted => Err(NoSuccessKind::ResourceOut),
        }
    }
}

/// Combination of two hypotheses of the working set.
#[derive(Clone, Debug)]
pub struct Derivation<A> {
    pub rule: Rule,
    /// positions of the combined hypotheses in the working set
    pub premises: (usize, usize),
    pub conclusion: Hyp<A>,
    /// Was a premise replaced by its contrapositive?
    pub contrapositive: bool,
    /// Was a premise replaced by one of its conjuncts?
    pub conjunct: bool,
}

enum Scan<A> {
    Derived(Derivation<A>),
    Stuck,
    Exhausted,
}

/// The inference limit was reached.
struct Exhausted;

type Inference<A> = Result<Option<(Rule, Hyp<A>)>, Exhausted>;

pub struct Search<A> {
    hyps: Vec<Hyp<A>>,
    stats: Stats,
    opt: Opt,
}

impl<A> Search<A> {
    pub fn new(hyps: Vec<Hyp<A>>, opt: Opt) -> Result<Self, Error> {
        if hyps.is_empty() {
            return Err(Error::NoHypotheses);
        }
        let stats = Stats::default();
        Ok(Self { hyps, stats, opt })
    }

    /// Current working set.
    pub fn hyps(&self) -> &[Hyp<A>] {
        &self.hyps
    }

    /// First hypothesis of the working set.
    ///
    /// This is the conclusion if the search is solved.
    pub fn conclusion(&self) -> &Hyp<A> {
        // the working set never becomes empty
        &self.hyps[0]
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn inferences(&self) -> usize {
        self.stats.inferences
    }
}

impl<A: Clone + Display + PartialEq> Search<A> {
    pub fn prove(&mut self) -> State {
        loop {
            if let Err(state) = self.step() {
                return state;
            }
        }
    }

    /// Replace two hypotheses by a hypothesis derived from them.
    ///
    /// Return the final state if there is nothing left to derive.
    pub fn step(&mut self) -> Result<Derivation<A>, State> {
        if self.hyps.len() == 1 {
            info!("solved: {}", self.hyps[0]);
            return Err(State::Solved);
        }
        match self.scan() {
            Scan::Derived(d) => {
                self.apply(&d);
                Ok(d)
            }
            Scan::Stuck => {
                info!("stuck with {} hypotheses", self.hyps.len());
                Err(State::Stuck)
            }
            Scan::Exhausted => {
                info!("inference limit reached");
                Err(State::Exhausted)
            }
        }
    }

    /// Find the first pair of hypotheses that can be combined.
    fn scan(&mut self) -> Scan<A> {
        let (hyps, stats) = (&self.hyps, &mut self.stats);
        let (lim, contra) = (self.opt.lim, self.opt.contra);
        let mut infer = |h1: &Hyp<A>, h2: &Hyp<A>| -> Inference<A> {
            if lim.map_or(false, |lim| stats.inferences >= lim) {
                return Err(Exhausted);
            }
            stats.inferences += 1;
            Ok(rules::infer(h1, h2))
        };

        for (i, h1) in hyps.iter().enumerate() {
            let h1 = rules::or_to_impl(h1).unwrap_or_else(|| h1.clone());
            for (j, h2) in hyps.iter().enumerate() {
                let h2 = rules::or_to_impl(h2).unwrap_or_else(|| h2.clone());
                if h1.same(&h2) {
                    continue;
                }
                debug!("try {} / {}", h1, h2);
                for (p1, p2, conjunct) in candidates(&h1, &h2) {
                    match attempt(&p1, &p2, contra, &mut infer) {
                        Ok(None) => (),
                        Ok(Some((rule, conclusion, contrapositive))) => {
                            return Scan::Derived(Derivation {
                                rule,
                                premises: (i, j),
                                conclusion,
                                contrapositive,
                                conjunct,
                            })
                        }
                        Err(Exhausted) => return Scan::Exhausted,
                    }
                }
            }
        }
        Scan::Stuck
    }

    fn apply(&mut self, d: &Derivation<A>) {
        let (i, j) = d.premises;
        debug_assert_ne!(i, j);
        let len = self.hyps.len();
        let hi = self.hyps.remove(i.max(j));
        let lo = self.hyps.remove(i.min(j));
        info!("{}: {} and {} yield {}", d.rule, lo, hi, d.conclusion);
        self.hyps.insert(0, d.conclusion.clone());
        self.stats.record(d);
        debug_assert_eq!(self.hyps.len() + 1, len);
    }
}

/// Pairs to try for two hypotheses, marked whether they use a single conjunct.
///
/// Each conjunct of a conjunction is tried on its own
/// before the two hypotheses are tried as they are.
fn candidates<A: Clone>(h1: &Hyp<A>, h2: &Hyp<A>) -> Vec<(Hyp<A>, Hyp<A>, bool)> {
    let mut pairs = Vec::new();
    if let Some((l, r)) = h1.as_conj() {
        pairs.push((Hyp::Prop(l.clone()), h2.clone(), true));
        pairs.push((Hyp::Prop(r.clone()), h2.clone(), true));
    }
    if let Some((l, r)) = h2.as_conj() {
        pairs.push((h1.clone(), Hyp::Prop(l.clone()), true));
        pairs.push((h1.clone(), Hyp::Prop(r.clone()), true));
    }
    pairs.push((h1.clone(), h2.clone(), false));
    pairs
}

/// Combine two hypotheses, falling back to the contrapositive of either one.
///
/// The returned flag tells whether a contrapositive was used.
fn attempt<A, F>(
    h1: &Hyp<A>,
    h2: &Hyp<A>,
    contra: bool,
    infer: &mut F,
) -> Result<Option<(Rule, Hyp<A>, bool)>, Exhausted>
where
    A: Clone,
    F: FnMut(&Hyp<A>, &Hyp<A>) -> Inference<A>,
{
    if let Some((rule, h)) = infer(h1, h2)? {
        return Ok(Some((rule, h, false)));
    }
    if !contra {
        return Ok(None);
    }
    if let Some(c1) = rules::contrapositive(h1) {
        if let Some((rule, h)) = infer(&c1, h2)? {
            return Ok(Some((rule, h, true)));
        }
    }
    if let Some(c2) = rules::contrapositive(h2) {
        if let Some((rule, h)) = infer(h1, &c2)? {
            return Ok(Some((rule, h, true)));
        }
    }
    Ok(None)
}

/// Result of [`solve`].
#[derive(Clone, Debug)]
pub struct Solution<A> {
    state: State,
    // remaining working set, never empty
    hyps: Vec<Hyp<A>>,
    stats: Stats,
}

impl<A> Solution<A> {
    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state == State::Solved
    }

    /// Remaining working set.
    pub fn hyps(&self) -> &[Hyp<A>] {
        &self.hyps
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// The derived conclusion if solved, otherwise the first remaining hypothesis.
    pub fn conclusion(&self) -> &Hyp<A> {
        &self.hyps[0]
    }
}

/// Combine hypotheses until one remains or no rule applies.
pub fn solve<A>(hyps: Vec<Hyp<A>>, opt: Opt) -> Result<Solution<A>, Error>
where
    A: Clone + Display + PartialEq,
{
    let mut search = Search::new(hyps, opt)?;
    let state = search.prove();
    let Search { hyps, stats, .. } = search;
    Ok(Solution { state, hyps, stats })
}
