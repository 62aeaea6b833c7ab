//! Test utilities for orchestrator tests.
//!
//! This module provides a scripted driver and a recording observer.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{Call, MockDriver, RecordingObserver};
