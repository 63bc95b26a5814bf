//! A lawful success-or-failure sum type with short-circuiting combinators.
//!
//! This crate provides [`Outcome<E, V>`]: either a success carrying a value
//! or a failure carrying an error payload, composed through pure combinators
//! instead of raised-and-caught exceptions. A failure, once constructed,
//! flows unchanged through any number of [`Outcome::fmap`] / [`Outcome::bind`]
//! / [`Outcome::seq`] / [`Outcome::then`] calls until something eliminates it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  outcome.rs  │────▶│   chain.rs   │     │  convert.rs   │
//! │ (Outcome,    │     │ (Functor,    │     │ (from_nullable,│
//! │  combinators)│     │  Chain)      │     │  catching, std)│
//! └──────────────┘     └──────────────┘     └───────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      contracts.rs                        │
//! │   (debug-mode assertions for the functor/monad laws)     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module map
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | `outcome`   | The sum type, combinators, unwrapping     |
//! | `chain`     | `Functor` / `Chain` capability traits     |
//! | `convert`   | Nullable, panic, and std `Result` adapters|
//! | `contracts` | Debug-build law checks                    |
//! | `testing`   | Canonical test helpers (`Spy`)            |
//!
//! # Usage
//!
//! ```
//! use outcome::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<String, u16> {
//!     Outcome::from_std(raw.parse::<u16>()).map_err(|e| e.to_string())
//! }
//!
//! let port = parse_port("8080")
//!     .fmap(|p| p + 1)
//!     .bind(|p| {
//!         if p >= 1024 {
//!             Outcome::Ok(p)
//!         } else {
//!             Outcome::Err("reserved port".to_string())
//!         }
//!     });
//! assert_eq!(port, Outcome::Ok(8081));
//! ```
//!
//! # Panic policy
//!
//! Every combinator is total. Only [`Outcome::into_ok`] and
//! [`Outcome::into_err`] panic, and only when the caller's assumption about
//! the variant is wrong; [`catching`] is the one place a panic is converted
//! back into a value.

// Module declarations
mod chain;
pub mod contracts;
mod convert;
mod outcome;
pub mod testing;

// Re-exports for public API
pub use chain::{Chain, Functor};
pub use convert::{catching, PanicPayload};
pub use outcome::Outcome;
