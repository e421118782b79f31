//! HTTP middleware chain.
//!
//! Composition order is fixed and load-bearing, outermost first:
//!
//! 1. [`recover`] - converts panics anywhere below into a 500
//! 2. [`cors`] - origin headers apply even to requests rejected later
//! 3. [`rate_limit`] - throttles before any credential work is done
//! 4. [`auth`] - resolves the identity the per-route [`guards`] read
//!
//! [`crate::routes::app_router`] wires the chain in this order; the guards
//! compose further inside on individual routes.

pub mod auth;
pub mod cors;
pub mod guards;
pub mod rate_limit;
pub mod recover;
pub mod tracing;
