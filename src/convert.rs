//! Boundary adapters: nullable values, panicking calls, and std interop.
//!
//! Everything in this module converts some other failure convention into the
//! [`Outcome`] contract. [`catching`] is the one place where non-local
//! control flow (an unwinding panic) is caught and turned back into a value;
//! nothing here ever re-raises.

use std::any::Any;
use std::panic::{self, UnwindSafe};

use crate::outcome::Outcome;

/// What an unwinding panic carries: the payload `catch_unwind` hands back.
///
/// `panic!("{}", msg)` produces a `String` payload, `panic!("literal")` a
/// `&'static str`, and [`std::panic::panic_any`] whatever it was given.
/// Downcast to recover the concrete type.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

impl<E, V> Outcome<E, V> {
    /// Lift a nullable value: `Some(v)` becomes `Ok(v)`, `None` becomes
    /// `Err(err_if_none)`.
    ///
    /// This is a strict presence test, not a truthiness test: zero-like
    /// values survive, so `from_nullable(Some(0), e)` is `Ok(0)` and
    /// `from_nullable(Some(""), e)` is `Ok("")`. Only `None` maps to the
    /// error channel.
    #[inline]
    pub fn from_nullable(value: Option<V>, err_if_none: E) -> Self {
        match value {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Err(err_if_none),
        }
    }

    /// Convert from the standard library's `Result`.
    ///
    /// Note the flipped type parameter order: `Result<V, E>` puts the value
    /// first, `Outcome<E, V>` the error.
    #[inline]
    pub fn from_std(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(err) => Outcome::Err(err),
        }
    }

    /// Convert into the standard library's `Result`, e.g. to use `?` at the
    /// edge of code written against std conventions.
    #[inline]
    pub fn into_std(self) -> Result<V, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(err) => Err(err),
        }
    }

    /// Convert into the nullable channel, discarding the error. Alias surface
    /// for [`Outcome::ok`].
    #[inline]
    pub fn into_option(self) -> Option<V> {
        self.ok()
    }
}

impl<E, V> From<Result<V, E>> for Outcome<E, V> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        Outcome::from_std(result)
    }
}

impl<E, V> From<Outcome<E, V>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<E, V>) -> Self {
        outcome.into_std()
    }
}

/// Run `f` inside an unwind-catching frame: a returned value becomes `Ok`,
/// a panic is caught and its payload becomes `Err`.
///
/// This is the sole boundary where panic-based control flow is converted
/// into the `Outcome` contract; it never resumes the unwind. Aborting panics
/// (`panic = "abort"`) never reach the catch and cannot be converted.
pub fn catching<V, F>(f: F) -> Outcome<PanicPayload, V>
where
    F: FnOnce() -> V + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => Outcome::Err(payload),
    }
}
