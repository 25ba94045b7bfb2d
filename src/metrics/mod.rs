//! Basic metrics instrumentation for a console session.
//!
//! Counts handled commands, handler errors and unrecognised commands so a
//! summary can be logged when the session ends.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for one session.
#[derive(Debug, Default)]
pub struct SessionMetrics {
    /// Total number of non-blank lines dispatched
    commands_total: AtomicU64,

    /// Number of commands whose handler returned an error
    errors_total: AtomicU64,

    /// Number of lines with an unrecognised command name
    unknown_commands_total: AtomicU64,

    /// Number of blank lines
    empty_lines_total: AtomicU64,
}

impl SessionMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dispatched command.
    pub fn record_command(&self, command: &str) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(command = %command, "Command recorded");
    }

    /// Record a handler error.
    pub fn record_error(&self, kind: &str) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(kind = %kind, "Command error recorded");
    }

    pub fn record_unknown_command(&self) {
        self.unknown_commands_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_empty_line(&self) {
        self.empty_lines_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of current metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            commands_total: self.commands_total.load(Ordering::Relaxed),
            errors_total: self.errors_total.load(Ordering::Relaxed),
            unknown_commands_total: self.unknown_commands_total.load(Ordering::Relaxed),
            empty_lines_total: self.empty_lines_total.load(Ordering::Relaxed),
        }
    }

    /// Log the current summary at info level.
    pub fn log_summary(&self) {
        let summary = self.summary();
        tracing::info!(
            commands_total = summary.commands_total,
            errors_total = summary.errors_total,
            unknown_commands_total = summary.unknown_commands_total,
            empty_lines_total = summary.empty_lines_total,
            error_rate = summary.error_rate(),
            "Session metrics"
        );
    }
}

/// Snapshot of session metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSummary {
    pub commands_total: u64,
    pub errors_total: u64,
    pub unknown_commands_total: u64,
    pub empty_lines_total: u64,
}

impl MetricsSummary {
    /// Share of dispatched commands that returned an error (0.0 to 1.0).
    pub fn error_rate(&self) -> f64 {
        if self.commands_total == 0 {
            0.0
        } else {
            self.errors_total as f64 / self.commands_total as f64
        }
    }
}
