//! Logging facilities for Horizon Carousel.
//!
//! This module provides:
//! - Target and span names used with the `tracing` crate
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Horizon Carousel uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_carousel=debug")
//!         .init();
//! }
//! ```

/// Span names used throughout Horizon Carousel for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Filter pass span.
    pub const FILTER: &str = "horizon_carousel::filter";
    /// State cascade span.
    pub const CASCADE: &str = "horizon_carousel::cascade";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_carousel_core::signal";
    /// Performance spans target.
    pub const PERF: &str = "horizon_carousel::perf";
    /// Tree membership and state target.
    pub const TREE: &str = "horizon_carousel::tree";
    /// Filter and sort target.
    pub const FILTER: &str = "horizon_carousel::filter";
}

/// A guard that keeps a tracing span entered until it is dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
