// File: crates/radar-core/src/scan.rs
// Summary: Auto-scan simulator: a polled fixed-period ticker that spawns random markers into a
//          capped FIFO buffer.
// Notes:
// - Everything runs on the caller's thread. The host polls `advance(now)` from its event
//   loop; no tick can fire after `stop()` returns because the ticker holds no deadline.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ScanSettings;
use crate::marker::{ClampMode, Marker};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Fixed-period deadline tracker.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self { interval: interval.max(MIN_INTERVAL), next_due: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the ticker; the first tick is due one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Count the ticks due at `now`, firing at most `max_burst` of them.
    ///
    /// When more than `max_burst` deadlines have passed (the host stalled), the surplus is
    /// dropped and the schedule realigns to one interval after `now`.
    pub fn poll(&mut self, now: Instant, max_burst: usize) -> usize {
        let Some(mut due) = self.next_due else { return 0 };
        let max_burst = max_burst.max(1);
        let mut fired = 0;
        while due <= now {
            fired += 1;
            due += self.interval;
            if fired == max_burst && due <= now {
                due = now + self.interval;
                break;
            }
        }
        self.next_due = Some(due);
        fired
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Running,
}

/// Geometry the simulator needs from the chart at tick time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanBounds {
    /// Side of the square random positions are drawn from.
    pub fill_width: f64,
    /// Clamp radius applied to every spawned marker; non-positive disables clamping.
    pub radius: f64,
    pub clamp_mode: ClampMode,
}

pub struct AutoScan {
    settings: ScanSettings,
    state: ScanState,
    ticker: Ticker,
    markers: VecDeque<Marker>,
    rng: StdRng,
    spawned: u64,
}

impl AutoScan {
    pub fn new(settings: ScanSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let capacity = settings.capacity.max(1);
        Self {
            ticker: Ticker::new(settings.interval()),
            markers: VecDeque::with_capacity(capacity + 1),
            settings,
            state: ScanState::Idle,
            rng,
            spawned: 0,
        }
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ScanState::Running
    }

    pub fn capacity(&self) -> usize {
        self.settings.capacity.max(1)
    }

    /// Total markers spawned since construction.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.ticker.next_due()
    }

    /// `Idle -> Running`. Returns false when already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.ticker.start(now);
        self.state = ScanState::Running;
        log::debug!("auto-scan started, interval {:?}", self.ticker.interval());
        true
    }

    /// `Running -> Idle`: stop the ticker and drop all scan markers. Idempotent.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.ticker.stop();
        self.markers.clear();
        self.state = ScanState::Idle;
        log::debug!("auto-scan stopped after {} markers", self.spawned);
        true
    }

    /// Fire every tick due at `now`; returns how many fired.
    pub fn advance(&mut self, now: Instant, bounds: ScanBounds) -> usize {
        if !self.is_running() {
            return 0;
        }
        let due = self.ticker.poll(now, self.capacity());
        for _ in 0..due {
            self.tick(bounds);
        }
        due
    }

    /// Spawn one marker, evicting the oldest once the population exceeds capacity.
    ///
    /// Positions are drawn uniformly from `[0, fill_width)` on both axes, then clamped.
    /// Does nothing while idle.
    pub fn tick(&mut self, bounds: ScanBounds) -> Option<Marker> {
        if !self.is_running() {
            return None;
        }
        let extent = bounds.fill_width;
        let (left, top) = if extent.is_finite() && extent > 0.0 {
            (self.rng.gen_range(0.0..extent), self.rng.gen_range(0.0..extent))
        } else {
            (0.0, 0.0)
        };
        let side = self.settings.marker_size;
        let mut marker = Marker::new(left, top, side, side).with_color(self.settings.marker_color);
        marker.clamp_to(bounds.radius, bounds.clamp_mode);

        self.markers.push_back(marker.clone());
        while self.markers.len() > self.capacity() {
            self.markers.pop_front();
        }
        self.spawned += 1;
        log::trace!("scan tick {}: marker at ({:.1}, {:.1})", self.spawned, marker.left, marker.top);
        Some(marker)
    }

    /// Live markers, oldest first.
    pub fn markers(&self) -> impl ExactSizeIterator<Item = &Marker> + '_ {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: ScanBounds = ScanBounds { fill_width: 200.0, radius: 100.0, clamp_mode: ClampMode::TopLeft };

    fn seeded() -> AutoScan {
        AutoScan::new(ScanSettings::default().with_seed(7))
    }

    #[test]
    fn ticker_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut t = Ticker::new(Duration::from_millis(1000));
        assert_eq!(t.poll(t0, 5), 0, "idle ticker never fires");
        t.start(t0);
        assert_eq!(t.poll(t0 + Duration::from_millis(999), 5), 0);
        assert_eq!(t.poll(t0 + Duration::from_millis(1000), 5), 1);
        assert_eq!(t.poll(t0 + Duration::from_millis(3500), 5), 2);
        assert_eq!(t.next_due(), Some(t0 + Duration::from_millis(4000)));
    }

    #[test]
    fn ticker_drops_surplus_after_a_stall() {
        let t0 = Instant::now();
        let mut t = Ticker::new(Duration::from_millis(100));
        t.start(t0);
        let late = t0 + Duration::from_secs(60);
        assert_eq!(t.poll(late, 5), 5);
        assert_eq!(t.next_due(), Some(late + Duration::from_millis(100)));
    }

    #[test]
    fn stopped_ticker_never_fires_again() {
        let t0 = Instant::now();
        let mut t = Ticker::new(Duration::from_millis(10));
        t.start(t0);
        t.stop();
        assert_eq!(t.poll(t0 + Duration::from_secs(1), 5), 0);
    }

    #[test]
    fn tick_while_idle_is_ignored() {
        let mut scan = seeded();
        assert!(scan.tick(BOUNDS).is_none());
        assert_eq!(scan.advance(Instant::now() + Duration::from_secs(10), BOUNDS), 0);
        assert!(scan.is_empty());
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut scan = seeded();
        let t0 = Instant::now();
        assert!(scan.start(t0));
        assert!(!scan.start(t0));
        scan.tick(BOUNDS);
        assert!(scan.stop());
        assert!(scan.is_empty());
        assert!(!scan.stop());
        assert_eq!(scan.state(), ScanState::Idle);
    }

    #[test]
    fn spawned_markers_use_scan_settings() {
        let mut scan = seeded();
        scan.start(Instant::now());
        let m = scan.tick(BOUNDS).unwrap();
        assert_eq!((m.width, m.height), (10.0, 10.0));
        assert_eq!(m.color, ScanSettings::default().marker_color);
    }

    #[test]
    fn zero_fill_width_spawns_at_origin() {
        let mut scan = seeded();
        scan.start(Instant::now());
        let m = scan
            .tick(ScanBounds { fill_width: 0.0, radius: 0.0, clamp_mode: ClampMode::TopLeft })
            .unwrap();
        assert_eq!((m.left, m.top), (0.0, 0.0));
    }
}
