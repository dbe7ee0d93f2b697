//! Debug-only validation of geometric invariants.
//!
//! These checks are compiled out entirely in release builds; [`approx`]'s
//! assertion macros don't have a `debug_assert!`-gated form, so the only way
//! to skip them outside of debug builds is an early return.

use crate::core::types::{Number, Point2, Point3, Vector2, Vector3};
use approx::*;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-6;
pub const RELATIVE: Number = 1e-3;

#[inline(always)]
#[track_caller]
pub fn number(val: Number) {
    debug_assert_only!();
    assert!(!val.is_nan(), "should not be nan; val: {val}");
    assert!(!val.is_infinite(), "should not be inf; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn vector2(v: Vector2) {
    debug_assert_only!();
    number(v.x);
    number(v.y);
}

#[inline(always)]
#[track_caller]
pub fn vector3(v: Vector3) {
    debug_assert_only!();
    number(v.x);
    number(v.y);
    number(v.z);
}

#[inline(always)]
#[track_caller]
pub fn point3(p: Point3) {
    debug_assert_only!();
    vector3(p);
}

#[inline(always)]
#[track_caller]
pub fn normal2(v: Vector2) {
    debug_assert_only!();
    vector2(v);
    assert!(v.is_normalized(), "should be normalised; vec: {v:?}, len: {}", v.length());
}

#[inline(always)]
#[track_caller]
pub fn normal3(v: Vector3) {
    debug_assert_only!();
    vector3(v);
    assert!(v.is_normalized(), "should be normalised; vec: {v:?}, len: {}", v.length());
}

#[inline(always)]
#[track_caller]
pub fn uv(uv: Point2) {
    debug_assert_only!();
    vector2(uv);
    assert!(
        uv.cmpge(Point2::ZERO).all() && uv.cmple(Point2::ONE).all(),
        "uv coordinates should be in 0..=1; uv: {uv:?}"
    );
}

#[inline(always)]
#[track_caller]
pub fn relative_eq_number(a: Number, b: Number) {
    debug_assert_only!();
    assert_relative_eq!(a, b, epsilon = EPSILON, max_relative = RELATIVE);
}
