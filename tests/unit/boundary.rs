//! Boundary adapters: nullable lifting, panic catching, std interop, and
//! the serialized tag shape.

use outcome::{catching, Outcome};
use std::panic::panic_any;

#[test]
fn from_nullable_lifts_some() {
    let out: Outcome<&str, i32> = Outcome::from_nullable(Some(12), "missing");
    assert_eq!(out, Outcome::Ok(12));
}

#[test]
fn from_nullable_lifts_none_to_the_given_error() {
    let out: Outcome<&str, i32> = Outcome::from_nullable(None, "missing");
    assert_eq!(out, Outcome::Err("missing"));
}

#[test]
fn catching_wraps_a_returned_value() {
    let out = catching(|| 5);
    assert_eq!(out.ok(), Some(5));
}

#[test]
fn catching_converts_a_panic_into_err() {
    let out: Outcome<_, i32> = catching(|| panic_any("x".to_string()));

    let payload = out.into_err();
    let original = payload.downcast::<String>().expect("panic payload");
    assert_eq!(*original, "x");
}

#[test]
fn catching_round_trips_with_into_ok() {
    // into_ok panics with the error payload; catching recovers it.
    let err: Outcome<String, i32> = Outcome::Err("lost".to_string());
    let recovered: Outcome<_, i32> = catching(move || err.into_ok());

    let payload = recovered.into_err();
    assert_eq!(*payload.downcast::<String>().unwrap(), "lost".to_string());
}

#[test]
fn catching_never_reraises() {
    // The call below must return normally even though the closure panics.
    let out: Outcome<_, ()> = catching(|| panic!("contained"));
    assert!(out.is_err());
}

#[test]
fn std_result_converts_both_ways() {
    let out: Outcome<String, i32> = Ok(3).into();
    assert_eq!(out, Outcome::Ok(3));

    let back: Result<i32, String> = Outcome::<String, i32>::Err("e".to_string()).into();
    assert_eq!(back, Err("e".to_string()));
}

#[test]
fn serialized_form_uses_ok_and_err_tags() {
    let ok: Outcome<String, i32> = Outcome::Ok(5);
    assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"Ok":5}"#);

    let err: Outcome<String, i32> = Outcome::Err("x".to_string());
    assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"Err":"x"}"#);
}
