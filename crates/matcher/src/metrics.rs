// Metrics hooks for the `matcher` crate.
//
// Callers install a global `ReportMetrics` implementation via
// [`set_report_metrics`]; `TitleMatcher` then reports latency and result
// sizes for every similarity report and duplicate check. This keeps
// instrumentation decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for report and check operations.
pub trait ReportMetrics: Send + Sync {
    /// Record one similarity report run.
    ///
    /// `corpus_len` is the number of items compared, `group_count` the number
    /// of anchors that ended up with at least one neighbor.
    fn record_report(&self, corpus_len: usize, group_count: usize, latency: Duration);

    /// Record one exact duplicate check and whether it found a collision.
    fn record_duplicate_check(&self, found: bool, latency: Duration);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn ReportMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn ReportMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn ReportMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global report metrics recorder.
///
/// Typically called once during host startup.
pub fn set_report_metrics(recorder: Option<Arc<dyn ReportMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
