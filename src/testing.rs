//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::cell::Cell;

/// Counts how many times a callback ran.
///
/// The short-circuiting contracts say "this callback is never invoked"; a
/// `Spy` turns that into an assertable number. Wrap the callback body in
/// [`Spy::record`] and check [`Spy::calls`] afterwards.
///
/// ```
/// use outcome::testing::Spy;
/// use outcome::Outcome;
///
/// let spy = Spy::new();
/// let out: Outcome<&str, i32> = Outcome::Err("boom").fmap(|v: i32| {
///     spy.record();
///     v + 1
/// });
/// assert!(out.is_err());
/// assert_eq!(spy.calls(), 0);
/// ```
#[derive(Debug, Default)]
pub struct Spy {
    calls: Cell<usize>,
}

impl Spy {
    /// Create a spy with zero recorded calls.
    pub fn new() -> Self {
        Spy::default()
    }

    /// Record one invocation.
    pub fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Number of invocations recorded so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Assert the callback never ran.
    #[track_caller]
    pub fn assert_never_called(&self) {
        assert_eq!(self.calls(), 0, "spied callback was invoked");
    }

    /// Assert the callback ran exactly once.
    #[track_caller]
    pub fn assert_called_once(&self) {
        assert_eq!(self.calls(), 1, "spied callback did not run exactly once");
    }
}
