//! Scan lifecycle orchestration
//!
//! One cycle is: radio up, one-shot scan, report, radio down. The loop
//! repeats forever with a fixed pause between cycles, until the stop
//! hook fires. No data survives from one cycle to the next; the record
//! buffer lives and dies inside the cycle.

use core::array;
use core::sync::atomic::{AtomicBool, AtomicU16, AtomicU32, Ordering};

use embassy_time::{Duration, Timer};

use crate::driver::{DriverError, ScanDriver, ScanRequest};
use crate::record::AccessPointRecord;
use crate::report::{ReportSink, Reporter};

/// Timing and scan parameters for the orchestrator.
#[derive(Debug, Clone, Copy)]
pub struct OrchestratorConfig {
    /// Pause between scan cycles.
    pub interval: Duration,
    /// Parameters passed to the driver on every cycle.
    pub request: ScanRequest,
}

/// Shared control and observation state for the scan loop
///
/// Uses atomics for lock-free access from outside the loop. The stop
/// hook exists so the loop can be wound down deliberately; firmware
/// normally never fires it.
pub struct ScanControl {
    stop: AtomicBool,
    cycles: AtomicU32,
    last_total: AtomicU16,
}

impl ScanControl {
    pub const fn new() -> Self {
        Self {
            stop: AtomicBool::new(false),
            cycles: AtomicU32::new(0),
            last_total: AtomicU16::new(0),
        }
    }

    /// Ask the loop to exit after the current cycle.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Completed scan cycles since boot.
    pub fn cycles(&self) -> u32 {
        self.cycles.load(Ordering::Relaxed)
    }

    /// Access points reported by the most recent cycle.
    pub fn last_total(&self) -> u16 {
        self.last_total.load(Ordering::Relaxed)
    }

    fn record_cycle(&self, total: u16) {
        self.cycles.fetch_add(1, Ordering::Relaxed);
        self.last_total.store(total, Ordering::Relaxed);
    }
}

impl Default for ScanControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the scan lifecycle against a [`ScanDriver`]
///
/// `N` is the per-cycle record buffer capacity.
pub struct ScanOrchestrator<D: ScanDriver, const N: usize> {
    driver: D,
    reporter: Reporter,
    config: OrchestratorConfig,
}

impl<D: ScanDriver, const N: usize> ScanOrchestrator<D, N> {
    pub fn new(driver: D, reporter: Reporter, config: OrchestratorConfig) -> Self {
        Self {
            driver,
            reporter,
            config,
        }
    }

    /// One full scan cycle: radio up, scan, report, radio down.
    ///
    /// Returns the true discovered count. Resources acquired in a cycle
    /// are released in the same cycle; errors propagate to the caller,
    /// which owns the recovery policy.
    pub async fn run_cycle<S: ReportSink>(&mut self, sink: &mut S) -> Result<u16, DriverError> {
        self.driver.power_on().await?;

        let mut records: [AccessPointRecord; N] =
            array::from_fn(|_| AccessPointRecord::default());
        let outcome = self.driver.scan(&self.config.request, &mut records).await?;

        self.reporter
            .report(sink, &records[..outcome.stored.min(N)], outcome.total);

        self.driver.power_off().await?;
        Ok(outcome.total)
    }

    /// Scan repeatedly until `control` requests a stop.
    ///
    /// Under normal firmware operation this never returns; `Ok(())`
    /// is reachable only through the stop hook.
    pub async fn run<S: ReportSink>(
        &mut self,
        sink: &mut S,
        control: &ScanControl,
    ) -> Result<(), DriverError> {
        loop {
            let total = self.run_cycle(sink).await?;
            control.record_cycle(total);

            if control.stop_requested() {
                return Ok(());
            }
            Timer::after(self.config.interval).await;
            if control.stop_requested() {
                return Ok(());
            }
        }
    }
}
