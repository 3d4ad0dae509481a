//! Unit tests for inkboard.

mod culling_tests;
mod geometry_tests;
mod gesture_tests;
mod settings_tests;
mod settings_watcher_tests;
