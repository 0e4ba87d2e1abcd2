//! Invocation-rate combinators for call sites that hit the backend.
//!
//! [`Debounce`] cancels and reschedules: only the last call in a quiet
//! window runs. [`Throttle`] drops while busy: the first call runs at once
//! and later calls are discarded until the cooldown ends. The two are easy
//! to confuse and are kept as separate types.

mod debounce;
mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;
