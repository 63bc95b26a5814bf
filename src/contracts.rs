//! Runtime contracts for the combinator laws.
//!
//! This module provides debug-mode assertions that verify the algebraic laws
//! the [`Outcome`] combinators promise. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the law sheet in [`crate::outcome`] exactly
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Every function here verifies a law the property tests also cover. The
//! contracts exist so a consumer embedding `Outcome` in a larger pipeline can
//! spot-check the laws against their own values during development.
//!
//! | Contract Function           | Law                                   |
//! |-----------------------------|---------------------------------------|
//! | `check_fmap_identity`       | functor identity                      |
//! | `check_fmap_composition`    | functor composition                   |
//! | `check_bind_left_identity`  | monad left identity                   |
//! | `check_bind_associativity`  | monad associativity                   |
//! | `check_err_absorbs`         | `Err` absorbs under `fmap`/`bind`     |

use std::fmt::Debug;

use crate::outcome::Outcome;

/// Check the functor identity law: mapping the identity function changes
/// nothing.
///
/// # Panics (debug builds only)
/// Panics if `outcome.fmap(|v| v) != outcome`.
#[inline]
pub fn check_fmap_identity<E, V>(outcome: &Outcome<E, V>)
where
    E: Clone + PartialEq + Debug,
    V: Clone + PartialEq + Debug,
{
    debug_assert_eq!(
        outcome.clone().fmap(|v| v),
        *outcome,
        "Contract violation: fmap identity - fmap(|v| v) changed the outcome"
    );
}

/// Check the functor composition law for a specific pair of functions:
/// mapping `f` then `g` equals mapping their composition.
///
/// # Panics (debug builds only)
/// Panics if `outcome.fmap(f).fmap(g) != outcome.fmap(|v| g(f(v)))`.
#[inline]
pub fn check_fmap_composition<E, V, W, X, F, G>(outcome: &Outcome<E, V>, f: F, g: G)
where
    E: Clone + PartialEq + Debug,
    V: Clone,
    X: PartialEq + Debug,
    F: Fn(V) -> W,
    G: Fn(W) -> X,
{
    let stepwise = outcome.clone().fmap(&f).fmap(&g);
    let composed = outcome.clone().fmap(|v| g(f(v)));
    debug_assert_eq!(
        stepwise, composed,
        "Contract violation: fmap composition - fmap(f).fmap(g) != fmap(g . f)"
    );
}

/// Check monad left identity for a specific value and continuation:
/// `Ok(v).bind(f)` equals `f(v)`.
///
/// # Panics (debug builds only)
/// Panics if binding `f` on a freshly wrapped `Ok` differs from calling `f`
/// directly.
#[inline]
pub fn check_bind_left_identity<E, V, W, F>(value: &V, f: F)
where
    E: PartialEq + Debug,
    V: Clone,
    W: PartialEq + Debug,
    F: Fn(V) -> Outcome<E, W>,
{
    let bound = Outcome::<E, V>::Ok(value.clone()).bind(&f);
    let direct = f(value.clone());
    debug_assert_eq!(
        bound, direct,
        "Contract violation: bind left identity - Ok(v).bind(f) != f(v)"
    );
}

/// Check monad associativity for a specific outcome and pair of
/// continuations.
///
/// # Panics (debug builds only)
/// Panics if `outcome.bind(f).bind(g) != outcome.bind(|v| f(v).bind(g))`.
#[inline]
pub fn check_bind_associativity<E, V, W, X, F, G>(outcome: &Outcome<E, V>, f: F, g: G)
where
    E: Clone + PartialEq + Debug,
    V: Clone,
    X: PartialEq + Debug,
    F: Fn(V) -> Outcome<E, W>,
    G: Fn(W) -> Outcome<E, X>,
{
    let left = outcome.clone().bind(&f).bind(&g);
    let right = outcome.clone().bind(|v| f(v).bind(&g));
    debug_assert_eq!(
        left, right,
        "Contract violation: bind associativity - grouping changed the outcome"
    );
}

/// Check that `Err` absorbs: `fmap` and `bind` on an `Err` carry the error
/// through unchanged.
///
/// # Panics (debug builds only)
/// Panics if either combinator alters the error or produces an `Ok`.
#[inline]
pub fn check_err_absorbs<E, V>(err: &E)
where
    E: Clone + PartialEq + Debug,
    V: PartialEq + Debug,
{
    let mapped: Outcome<E, V> = Outcome::<E, V>::Err(err.clone()).fmap(|v| v);
    debug_assert_eq!(
        mapped,
        Outcome::Err(err.clone()),
        "Contract violation: Err absorption - fmap altered an Err"
    );

    let bound: Outcome<E, V> = Outcome::<E, V>::Err(err.clone()).bind(Outcome::Ok);
    debug_assert_eq!(
        bound,
        Outcome::Err(err.clone()),
        "Contract violation: Err absorption - bind altered an Err"
    );
}
