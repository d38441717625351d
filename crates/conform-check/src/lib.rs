//! Conformance checking engine for conform.
//!
//! Compares every case's variant against the happy path and ranks the
//! resulting deviations:
//! - MISSING: a reference activity the case never performed
//! - DID: an activity the case performed that the reference does not contain
//!
//! The pipeline is [`diff`] → [`classify`] → [`aggregate`] → [`rank`], driven
//! end to end by [`engine::ConformanceEngine`].

pub mod aggregate;
pub mod classify;
pub mod diff;
pub mod engine;
pub mod rank;
pub mod types;
