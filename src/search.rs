// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Brute-force search for the noun and verb that make a program produce a given value
//!
//! Every trial runs a fresh [Interpreter] on its own copy of the program, starting at address 0,
//! so trials share nothing and can be run in any order. Both [search] and [par_search] report the match that comes first in
//! row-major order (noun ascending, then verb ascending).

use rayon::prelude::*;
use std::error::Error;
use std::fmt::{self, Display};
use std::ops::Range;

use super::{Interpreter, Memory};

/// The value the Day 2 program must produce at address 0
pub const GRAVITY_ASSIST_TARGET: i64 = 19_690_720;

/// A seed pair, ordered lexicographically by noun then verb
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct NounVerb {
    /// written to address 1
    pub noun: i64,
    /// written to address 2
    pub verb: i64,
}

impl NounVerb {
    /// `100 * noun + verb`, or [`None`] if that overflows
    pub fn answer(&self) -> Option<i64> {
        self.noun.checked_mul(100)?.checked_add(self.verb)
    }
}

/// The pair's [answer](NounVerb::answer) does not fit in an `i64`
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct AnswerOverflow(pub NounVerb);

impl Display for AnswerOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let NounVerb { noun, verb } = self.0;
        write!(f, "100 * {noun} + {verb} overflows")
    }
}

impl Error for AnswerOverflow {}

/// What to search for, and where
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SearchSpace {
    /// the value address 0 must hold after halting
    pub target: i64,
    /// the values tried for both the noun and the verb
    pub range: Range<i64>,
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self {
            target: GRAVITY_ASSIST_TARGET,
            range: 0..100,
        }
    }
}

/// No pair in the [SearchSpace] produced the target
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SearchExhausted(pub SearchSpace);

impl Display for SearchExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SearchSpace { target, range } = &self.0;
        write!(
            f,
            "no noun and verb in {}..{} produce {target}",
            range.start, range.end
        )
    }
}

impl Error for SearchExhausted {}

/// Run one trial on a fresh interpreter over a copy of `program`, returning whether it halted with
/// `target` at address 0. Faults count as misses.
fn trial(program: &Memory, target: i64, candidate: NounVerb) -> bool {
    match Interpreter::new(program.clone()).run_with(candidate.noun, candidate.verb) {
        Ok(value) => {
            log::trace!("{candidate:?} halted with {value}");
            value == target
        }
        Err(e) => {
            log::trace!("{candidate:?} faulted: {e}");
            false
        }
    }
}

/// Every pair in `range × range`, in row-major order
fn candidates(range: Range<i64>) -> impl Iterator<Item = NounVerb> {
    range.clone().flat_map(move |noun| {
        range
            .clone()
            .map(move |verb| NounVerb { noun, verb })
    })
}

/// Find the first [NounVerb] in `space` for which `program` halts with `space.target` at address 0.
///
/// `program` is never modified. Trials that fault are skipped. Returns [`None`] if no pair matches.
pub fn search(program: &Memory, space: &SearchSpace) -> Option<NounVerb> {
    log::debug!("searching {space:?}");
    let found = candidates(space.range.clone()).find(|&nv| trial(program, space.target, nv));
    log::debug!("search finished with {found:?}");
    found
}

/// Same as [search], but with trials spread across the [rayon] thread pool.
///
/// The result is identical to [search]: when several pairs match, the lexicographically smallest
/// one is returned, regardless of which finishes first.
pub fn par_search(program: &Memory, space: &SearchSpace) -> Option<NounVerb> {
    log::debug!("searching {space:?} in parallel");
    let range = space.range.clone();
    let found = space
        .range
        .clone()
        .into_par_iter()
        .flat_map_iter(|noun| {
            range
                .clone()
                .map(move |verb| NounVerb { noun, verb })
        })
        .find_first(|&nv| trial(program, space.target, nv));
    log::debug!("search finished with {found:?}");
    found
}
