//! Logging utilities
//!
//! This module provides standardized logging functions for the analysis
//! pipelines.

use std::time::Duration;

/// Log a pipeline start with consistent format
pub fn log_pipeline_start(operation: &str, record_count: usize) {
    log::info!("{operation}: processing {record_count} records");
}

/// Log a pipeline completion with consistent format
pub fn log_pipeline_complete(operation: &str, items: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!("{operation}: produced {items} items in {duration:?}");
    } else {
        log::info!("{operation}: produced {items} items");
    }
}
