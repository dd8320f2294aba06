//! Pluggable time value (§3 "Time value", §6 `time_profile`).
//!
//! The source threads a bundle of four function pointers (compare, add,
//! copy, release) through the event loop so it can run over integer ticks,
//! wall-clock-like reals, or an entirely custom notion of time. Per the
//! Design Notes (§9) this is the one boundary in the system where that
//! bundle style is actually load-bearing — everywhere else (address,
//! host) a single trait method suffices, but *which* time type the loop
//! uses is a genuine per-instantiation policy choice. This crate keeps it
//! as a capability trait (`TimeValue`) and makes `EventLoop<T>` generic
//! over it, so `Integer`/`Real`/`Custom` become three ordinary types
//! rather than a runtime enum dispatch — "copy" and "release" disappear,
//! since `Clone`/`Drop` already do that job for an owned Rust value.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::sync::Arc;

/// A time value the event loop can compare and accumulate delays into.
///
/// `compare` must be a total order; `accumulate` mutates `self` to
/// `self + delta` (the spec's "add" operation, §3).
pub trait TimeValue: Clone + Debug {
    fn compare(&self, other: &Self) -> Ordering;
    fn accumulate(&mut self, delta: &Self);
}

/// Built-in unsigned-integer time profile (ticks, slots, cycles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnsignedTime(pub u64);

impl TimeValue for UnsignedTime {
    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    fn accumulate(&mut self, delta: &Self) {
        self.0 = self.0.saturating_add(delta.0);
    }
}

/// Built-in real-valued time profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealTime(pub f64);

impl TimeValue for RealTime {
    fn compare(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    fn accumulate(&mut self, delta: &Self) {
        self.0 += delta.0;
    }
}

/// Custom time profile: wraps a user value with user-supplied
/// compare/accumulate closures (§6, `time_profile = Custom`). All four of
/// the spec's time operations are required there; `copy`/`release` are
/// covered by `Clone`/`Drop` on `T`, so only these two remain.
#[derive(Clone)]
pub struct CustomTime<T> {
    pub value: T,
    compare_fn: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
    accumulate_fn: Arc<dyn Fn(&mut T, &T) + Send + Sync>,
}

impl<T: Debug> Debug for CustomTime<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomTime").field("value", &self.value).finish()
    }
}

impl<T: Clone + Debug> CustomTime<T> {
    pub fn new(
        value: T,
        compare_fn: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
        accumulate_fn: impl Fn(&mut T, &T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            value,
            compare_fn: Arc::new(compare_fn),
            accumulate_fn: Arc::new(accumulate_fn),
        }
    }
}

impl<T: Clone + Debug> TimeValue for CustomTime<T> {
    fn compare(&self, other: &Self) -> Ordering {
        (self.compare_fn)(&self.value, &other.value)
    }

    fn accumulate(&mut self, delta: &Self) {
        (self.accumulate_fn)(&mut self.value, &delta.value);
    }
}
