//! Forced-choice DISC assessment scoring.
//!
//! The [`assessment`] module holds the question banks, the scoring engine and the descriptive
//! layer. [`config`], [`error`] and [`telemetry`] carry the service plumbing shared with the
//! API binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
