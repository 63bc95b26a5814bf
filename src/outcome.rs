// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The success-or-failure sum type and its combinators.
//!
//! `Outcome<E, V>` carries exactly one of two payloads: a success value `V`
//! or a failure payload `E`. Every combinator consumes its receiver and
//! produces a fresh value, so an `Outcome` can never be observed mid-change.
//!
//! # Laws (the stuff that breaks if you ignore it)
//!
//! | Law                | Statement                                              |
//! |--------------------|--------------------------------------------------------|
//! | Functor identity   | `o.fmap(\|v\| v) == o`                                 |
//! | Functor composition| `o.fmap(f).fmap(g) == o.fmap(\|v\| g(f(v)))`           |
//! | Left identity      | `Ok(v).bind(f) == f(v)`                                |
//! | Associativity      | `o.bind(f).bind(g) == o.bind(\|v\| f(v).bind(g))`      |
//! | Err absorption     | `Err(e).fmap(f) == Err(e)`, `f` never invoked          |
//! | Ok absorption      | `Ok(v).map_err(f) == Ok(v)`, `f` never invoked         |
//!
//! Rather than trusting yourself to remember these, the checks in
//! [`crate::contracts`] assert them in debug builds.
//!
//! # Panics
//!
//! Every combinator is total. The only panicking calls are [`Outcome::into_ok`]
//! and [`Outcome::into_err`], each documented with its own `# Panics` section.

use std::any::Any;
use std::panic::panic_any;

use serde::{Deserialize, Serialize};

/// The outcome of an operation that may fail: success carrying `V`, or
/// failure carrying `E`.
///
/// The error type comes first so that `Outcome<io::Error, _>` aliases read
/// the same way the failure channel flows through [`Outcome::map_err`].
///
/// Serialization uses external tagging, so `Ok(5)` serializes as
/// `{"Ok": 5}` and `Err("boom")` as `{"Err": "boom"}`.
///
/// **Invariant**: exactly one payload exists, selected by the variant. The
/// compiler enforces exhaustive handling wherever an `Outcome` is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<E, V> {
    /// The operation succeeded; the payload is the produced value.
    Ok(V),
    /// The operation failed; the payload describes the failure. It is often,
    /// but not required to be, an error type.
    Err(E),
}

impl<E, V> Outcome<E, V> {
    /// Returns `true` iff this is an `Ok`.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` iff this is an `Err`. Defined as the negation of
    /// [`Outcome::is_ok`], not an independent check.
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The universal eliminator: exactly one callback runs, selected by the
    /// variant. Both callbacks must produce the same type `R`.
    ///
    /// This never panics on its own account; any side effects come from the
    /// supplied callbacks.
    #[inline]
    pub fn unbox<R, O, F>(self, ok_fn: O, err_fn: F) -> R
    where
        O: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Outcome::Ok(value) => ok_fn(value),
            Outcome::Err(err) => err_fn(err),
        }
    }

    /// Apply `f` to the success value, rewrapping the return as a new `Ok`.
    ///
    /// On `Err` this short-circuits: the error is carried into a fresh `Err`
    /// and `f` is never invoked. Satisfies the functor identity and
    /// composition laws (see module docs).
    #[inline]
    pub fn fmap<W, F>(self, f: F) -> Outcome<E, W>
    where
        F: FnOnce(V) -> W,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Apply `f` to the error payload, rewrapping as a new `Err`.
    ///
    /// On `Ok` this short-circuits: the value is carried into a fresh `Ok`
    /// and `f` is never invoked.
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> Outcome<F2, V>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(err) => Outcome::Err(f(err)),
        }
    }

    /// Sequence a dependent operation that itself produces an `Outcome`.
    ///
    /// On `Ok`, invokes `f` with the value and returns its result directly,
    /// with no rewrapping. On `Err`, short-circuits without invoking `f`.
    /// Satisfies left identity and associativity (see module docs).
    #[inline]
    pub fn bind<W, F>(self, f: F) -> Outcome<E, W>
    where
        F: FnOnce(V) -> Outcome<E, W>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Sequence a dependent operation that does not need the carried value.
    ///
    /// On `Ok`, invokes `f()` and returns its result; on `Err`,
    /// short-circuits without invoking `f`.
    #[inline]
    pub fn seq<W, F>(self, f: F) -> Outcome<E, W>
    where
        F: FnOnce() -> Outcome<E, W>,
    {
        self.bind(move |_| f())
    }

    /// Convenience alias for [`Outcome::bind`].
    ///
    /// `then` is the value-consuming form of chaining; use [`Outcome::seq`]
    /// when the next step does not need the carried value.
    #[inline]
    pub fn then<W, F>(self, f: F) -> Outcome<E, W>
    where
        F: FnOnce(V) -> Outcome<E, W>,
    {
        self.bind(f)
    }

    /// Converts to `Some(value)` for `Ok`, `None` for `Err`, discarding the
    /// error.
    #[inline]
    pub fn ok(self) -> Option<V> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Converts to `Some(err)` for `Err`, `None` for `Ok`, discarding the
    /// value.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(err) => Some(err),
        }
    }

    /// Borrow both channels: `&Outcome<E, V>` to `Outcome<&E, &V>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&E, &V> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Returns the success value, or `default` for `Err`.
    #[inline]
    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(err) => f(err),
        }
    }

    /// Returns the success value, reintroducing panic-based control flow when
    /// the caller's assumption is wrong.
    ///
    /// Use only where an unhandled `Err` indicates a programming-logic error.
    ///
    /// # Panics
    ///
    /// Panics on `Err`, with the wrapped error itself as the panic payload
    /// (via [`panic_any`]); a `catch_unwind` caller can downcast the payload
    /// back to `E`.
    #[inline]
    pub fn into_ok(self) -> V
    where
        E: Any + Send,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(err) => panic_any(err),
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics on `Ok` with a diagnostic message. The payload is never the
    /// success value; this is a distinct error stating the call site's
    /// assumption was violated.
    #[inline]
    pub fn into_err(self) -> E {
        match self {
            Outcome::Ok(_) => panic!("called `Outcome::into_err` on an `Ok` value"),
            Outcome::Err(err) => err,
        }
    }
}
