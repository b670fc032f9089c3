// File: crates/radar-core/src/shared.rs
// Summary: Single-instance auto-scan: one simulator and marker buffer shared by every chart
//          that opts in, bound to at most one chart at a time.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use crate::chart::ChartId;
use crate::config::ScanSettings;
use crate::marker::Marker;
use crate::scan::{AutoScan, ScanBounds, ScanState};

struct SharedState {
    scan: AutoScan,
    bound: Option<ChartId>,
}

/// Handle to the shared simulator. Clones refer to the same simulator.
///
/// Enabling scan on a chart rebinds the simulator to it; the previously bound chart keeps its
/// flag but its scan source reads empty from then on.
#[derive(Clone)]
pub struct SharedScan {
    inner: Rc<RefCell<SharedState>>,
}

impl SharedScan {
    pub fn new(settings: ScanSettings) -> Self {
        Self { inner: Rc::new(RefCell::new(SharedState { scan: AutoScan::new(settings), bound: None })) }
    }

    pub fn bound(&self) -> Option<ChartId> {
        self.inner.borrow().bound
    }

    pub fn is_bound_to(&self, chart: ChartId) -> bool {
        self.bound() == Some(chart)
    }

    pub fn state(&self) -> ScanState {
        self.inner.borrow().scan.state()
    }

    /// Bind the simulator to `chart` and make sure it is running.
    /// Returns the chart that lost its binding, if any.
    pub fn bind(&self, chart: ChartId, now: Instant) -> Option<ChartId> {
        let mut inner = self.inner.borrow_mut();
        let previous = inner.bound.replace(chart);
        inner.scan.start(now);
        match previous {
            Some(prev) if prev != chart => {
                log::warn!("shared auto-scan rebound from chart {prev} to chart {chart}");
                Some(prev)
            }
            _ => None,
        }
    }

    /// Stop and clear the simulator if `chart` holds the binding. A chart that was already
    /// displaced cannot stop the scan of the chart that replaced it.
    pub fn release(&self, chart: ChartId) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.bound != Some(chart) {
            log::debug!("chart {chart} released shared auto-scan it no longer holds");
            return false;
        }
        inner.bound = None;
        inner.scan.stop();
        true
    }

    /// Advance the simulator on behalf of `chart`; only the bound chart drives ticks.
    pub fn advance(&self, chart: ChartId, now: Instant, bounds: ScanBounds) -> usize {
        let mut inner = self.inner.borrow_mut();
        if inner.bound != Some(chart) {
            return 0;
        }
        inner.scan.advance(now, bounds)
    }

    pub fn next_due(&self, chart: ChartId) -> Option<Instant> {
        let inner = self.inner.borrow();
        if inner.bound != Some(chart) {
            return None;
        }
        inner.scan.next_due()
    }

    /// Snapshot of the scan markers as seen by `chart`: empty unless it holds the binding.
    pub fn markers_for(&self, chart: ChartId) -> Vec<Marker> {
        let inner = self.inner.borrow();
        if inner.bound != Some(chart) {
            return Vec::new();
        }
        inner.scan.markers().cloned().collect()
    }
}
