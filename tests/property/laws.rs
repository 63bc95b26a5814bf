//! The algebraic laws, quantified over random outcomes and the shared
//! function tables.
//!
//! Each law is asserted twice: directly, and through the debug-mode
//! checkers in `outcome::contracts`, so the contracts themselves stay
//! honest.

use super::common::{continuation_strategy, outcome_strategy, value_fn_strategy};
use outcome::{contracts, Outcome};
use proptest::prelude::*;

proptest! {
    /// Property: mapping the identity function is a no-op on either variant.
    #[test]
    fn prop_fmap_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().fmap(|v| v), outcome.clone());
        contracts::check_fmap_identity(&outcome);
    }

    /// Property: fmap(f) then fmap(g) equals fmap(g ∘ f).
    #[test]
    fn prop_fmap_composition(
        outcome in outcome_strategy(),
        f in value_fn_strategy(),
        g in value_fn_strategy(),
    ) {
        let stepwise = outcome.clone().fmap(f).fmap(g);
        let composed = outcome.clone().fmap(move |v| g(f(v)));
        prop_assert_eq!(stepwise, composed);
        contracts::check_fmap_composition(&outcome, f, g);
    }

    /// Property: monad left identity, `Ok(v).bind(f) == f(v)`, including
    /// continuations that themselves fail.
    #[test]
    fn prop_bind_left_identity(v in any::<i32>(), f in continuation_strategy()) {
        prop_assert_eq!(Outcome::<String, i32>::Ok(v).bind(f), f(v));
        contracts::check_bind_left_identity(&v, f);
    }

    /// Property: monad associativity, regrouping binds never changes the
    /// result.
    #[test]
    fn prop_bind_associativity(
        outcome in outcome_strategy(),
        f in continuation_strategy(),
        g in continuation_strategy(),
    ) {
        let left = outcome.clone().bind(f).bind(g);
        let right = outcome.clone().bind(move |v| f(v).bind(g));
        prop_assert_eq!(left, right);
        contracts::check_bind_associativity(&outcome, f, g);
    }

    /// Property: `then` and `bind` are the same operation.
    #[test]
    fn prop_then_equals_bind(outcome in outcome_strategy(), f in continuation_strategy()) {
        prop_assert_eq!(outcome.clone().then(f), outcome.bind(f));
    }

    /// Property: `unbox` agrees with the variant, and `is_ok`/`is_err`
    /// partition every outcome.
    #[test]
    fn prop_unbox_agrees_with_predicates(outcome in outcome_strategy()) {
        prop_assert_ne!(outcome.is_ok(), outcome.is_err());

        let was_ok = outcome.is_ok();
        let saw_ok = outcome.unbox(|_| true, |_| false);
        prop_assert_eq!(was_ok, saw_ok);
    }

    /// Property: `map_err` on the error channel composes just like `fmap`
    /// on the value channel.
    #[test]
    fn prop_map_err_composition(outcome in outcome_strategy()) {
        let stepwise = outcome.clone().map_err(|e| e.len()).map_err(|n| n + 1);
        let composed = outcome.map_err(|e| e.len() + 1);
        prop_assert_eq!(stepwise, composed);
    }

    /// Property: round-tripping through std `Result` is lossless.
    #[test]
    fn prop_std_round_trip(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone(), Outcome::from_std(outcome.into_std()));
    }

    /// Property: `from_nullable` inverts `ok()` whenever the error payload
    /// is fixed.
    #[test]
    fn prop_from_nullable_inverts_ok(v in proptest::option::of(any::<i32>())) {
        let lifted: Outcome<String, i32> = Outcome::from_nullable(v, "absent".to_string());
        prop_assert_eq!(lifted.ok(), v);
    }
}
