//! Stand-ins used when the `profiling` feature is off.
//!
//! Signatures mirror `logger.rs` loosely: event arguments are generic so the
//! `EventType` enum does not need to exist in this build.

use std::time::Duration;

#[inline(always)]
pub fn init() {}

#[inline(always)]
pub fn shutdown() {}

#[inline(always)]
pub fn log_event<T>(_event: T) {}

#[inline(always)]
pub fn log_timed(_name: &str, _duration: Duration) {}
