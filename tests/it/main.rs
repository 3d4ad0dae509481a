//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep linking cheap.
//!
//! Structure:
//! - helpers: Model builder, input event constructors and a manual clock
//! - unit: Single-component tests against the public API
//! - integration: Input-to-model workflows through the gesture fold and session

mod helpers;
mod integration;
mod unit;
