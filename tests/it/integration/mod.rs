//! Integration tests for inkboard.
//!
//! These tests drive raw input through the gesture fold, the reducer and
//! the default adapter, and check the resulting models end-to-end.

mod session_tests;
mod sketch_workflow_tests;
