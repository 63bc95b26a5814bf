// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Capability traits shared by containers that map and chain.
//!
//! Two contracts, each with laws the implementor signs up for:
//!
//! | Trait       | Required      | Provided          | Laws                          |
//! |-------------|---------------|-------------------|-------------------------------|
//! | [`Functor`] | `fmap`        |                   | identity, composition         |
//! | [`Chain`]   | `bind`        | `then`, `seq`     | left identity, associativity  |
//!
//! The generic associated type on each trait lets the payload type change
//! across a call while the container shape stays fixed, which is what keeps
//! `Outcome<E, V>::fmap` from being able to touch the error channel.
//!
//! `then` and `seq` are provided in terms of `bind`, so unrelated containers
//! share one definition instead of each copying it. [`Outcome`] and `Option`
//! both implement the full set; `Option` is the degenerate case where the
//! failure channel carries no payload.

use crate::outcome::Outcome;

/// A structure whose contents can be transformed by a function while the
/// structure itself is preserved.
///
/// Implementations must satisfy:
/// - identity: `x.fmap(|v| v)` is observationally equal to `x`
/// - composition: `x.fmap(f).fmap(g)` equals `x.fmap(|v| g(f(v)))`
pub trait Functor<V> {
    /// The same container shape holding a `W` instead of a `V`.
    type Mapped<W>;

    /// Apply `f` inside the structure.
    fn fmap<W, F>(self, f: F) -> Self::Mapped<W>
    where
        F: FnOnce(V) -> W;
}

/// A computation that can sequence a dependent step producing the same
/// container shape.
///
/// Implementations must satisfy:
/// - left identity: lifting `v` and binding `f` equals `f(v)`
/// - associativity: `m.bind(f).bind(g)` equals `m.bind(|v| f(v).bind(g))`
pub trait Chain<V>: Sized {
    /// The same container shape holding a `W` instead of a `V`.
    type Chained<W>;

    /// Sequence `f`, which consumes the carried value and produces the next
    /// container. Short-circuiting containers return their absorbing state
    /// without invoking `f`.
    fn bind<W, F>(self, f: F) -> Self::Chained<W>
    where
        F: FnOnce(V) -> Self::Chained<W>;

    /// Value-consuming chaining, derived from [`Chain::bind`] so every
    /// implementor shares one definition.
    fn then<W, F>(self, f: F) -> Self::Chained<W>
    where
        F: FnOnce(V) -> Self::Chained<W>,
    {
        self.bind(f)
    }

    /// Chain a step that does not need the carried value.
    fn seq<W, F>(self, f: F) -> Self::Chained<W>
    where
        F: FnOnce() -> Self::Chained<W>,
    {
        self.bind(move |_| f())
    }
}

impl<E, V> Functor<V> for Outcome<E, V> {
    type Mapped<W> = Outcome<E, W>;

    #[inline]
    fn fmap<W, F>(self, f: F) -> Outcome<E, W>
    where
        F: FnOnce(V) -> W,
    {
        Outcome::fmap(self, f)
    }
}

impl<E, V> Chain<V> for Outcome<E, V> {
    type Chained<W> = Outcome<E, W>;

    #[inline]
    fn bind<W, F>(self, f: F) -> Outcome<E, W>
    where
        F: FnOnce(V) -> Outcome<E, W>,
    {
        Outcome::bind(self, f)
    }
}

impl<V> Functor<V> for Option<V> {
    type Mapped<W> = Option<W>;

    #[inline]
    fn fmap<W, F>(self, f: F) -> Option<W>
    where
        F: FnOnce(V) -> W,
    {
        self.map(f)
    }
}

impl<V> Chain<V> for Option<V> {
    type Chained<W> = Option<W>;

    #[inline]
    fn bind<W, F>(self, f: F) -> Option<W>
    where
        F: FnOnce(V) -> Option<W>,
    {
        self.and_then(f)
    }
}
