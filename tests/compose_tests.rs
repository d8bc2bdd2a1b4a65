//! Unit tests for function composition utilities.
//!
//! Tests for identity, compose!/pipe! macros and their runtime-length variants.

#![cfg(feature = "compose")]

use lazy_seq::compose::{Endomorphism, compose_all, identity, pipe_all};
use lazy_seq::{compose, pipe};
use std::cell::RefCell;

// =============================================================================
// identity function tests
// =============================================================================

#[test]
fn test_identity_returns_same_integer() {
    assert_eq!(identity(42), 42);
    assert_eq!(identity(-100), -100);
}

#[test]
fn test_identity_preserves_ownership() {
    let owned = String::from("owned string");
    let result = identity(owned);
    assert_eq!(result, "owned string");
}

// =============================================================================
// compose! macro tests
// =============================================================================

#[test]
fn test_compose_two_functions() {
    fn add_one(x: i32) -> i32 {
        x + 1
    }
    fn double(x: i32) -> i32 {
        x * 2
    }

    // compose!(f, g)(x) = f(g(x)) = add_one(double(5)) = 11
    assert_eq!(compose!(add_one, double)(5), 11);
}

#[test]
fn test_compose_empty_is_identity() {
    assert_eq!(compose!()(5), 5);
    assert_eq!(compose!()("text"), "text");
}

#[test]
fn test_compose_single_is_function() {
    let negate = |x: i32| -x;
    assert_eq!(compose!(negate)(5), -5);
}

#[test]
fn test_compose_type_conversion() {
    fn to_string(x: i32) -> String {
        x.to_string()
    }
    fn get_length(s: String) -> usize {
        s.len()
    }

    let composed = compose!(get_length, to_string);
    assert_eq!(composed(12345), 5);
}

#[test]
fn test_compose_applies_each_function_once_right_to_left() {
    let calls = RefCell::new(Vec::new());
    let log = &calls;
    let record = move |name: &'static str| {
        move |x: i32| {
            log.borrow_mut().push(name);
            x
        }
    };

    let composed = compose!(record("f"), record("g"), record("h"));
    let _ = composed(0);

    assert_eq!(*calls.borrow(), vec!["h", "g", "f"]);
}

#[test]
fn test_compose_with_trailing_comma() {
    let add_one = |x: i32| x + 1;
    let double = |x: i32| x * 2;
    assert_eq!(compose!(add_one, double,)(5), 11);
}

// =============================================================================
// pipe! macro tests
// =============================================================================

#[test]
fn test_pipe_two_functions() {
    fn add_one(x: i32) -> i32 {
        x + 1
    }
    fn double(x: i32) -> i32 {
        x * 2
    }

    // pipe!(f, g)(x) = g(f(x)) = double(add_one(5)) = 12
    assert_eq!(pipe!(add_one, double)(5), 12);
}

#[test]
fn test_pipe_empty_is_identity() {
    assert_eq!(pipe!()(5), 5);
}

#[test]
fn test_pipe_applies_each_function_once_left_to_right() {
    let calls = RefCell::new(Vec::new());
    let log = &calls;
    let record = move |name: &'static str| {
        move |x: i32| {
            log.borrow_mut().push(name);
            x
        }
    };

    let piped = pipe!(record("f"), record("g"), record("h"));
    let _ = piped(0);
    let _ = piped(0);

    assert_eq!(*calls.borrow(), vec!["f", "g", "h", "f", "g", "h"]);
}

#[test]
fn test_pipe_reusable_function() {
    let square_then_increment = pipe!(|x: i64| x * x, |x: i64| x + 1);

    assert_eq!(square_then_increment(3), 10);
    assert_eq!(square_then_increment(-4), 17);
}

// =============================================================================
// runtime-length composition tests
// =============================================================================

fn steps() -> Vec<Endomorphism<'static, String>> {
    let mut steps: Vec<Endomorphism<'static, String>> = Vec::new();
    steps.push(Box::new(|text| text + "a"));
    steps.push(Box::new(|text| text + "b"));
    steps.push(Box::new(|text| text + "c"));
    steps
}

#[test]
fn test_compose_all_applies_last_first() {
    assert_eq!(compose_all(steps())(String::new()), "cba");
}

#[test]
fn test_pipe_all_applies_first_first() {
    assert_eq!(pipe_all(steps())(String::new()), "abc");
}

#[test]
fn test_empty_runtime_composition_is_identity() {
    let empty: Vec<Endomorphism<'static, String>> = Vec::new();
    assert_eq!(compose_all(empty)(String::from("x")), "x");
}
