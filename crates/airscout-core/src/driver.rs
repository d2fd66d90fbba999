//! Hardware-facing scan driver port
//!
//! Abstracts the vendor radio stack behind a trait so the orchestrator
//! can run against real hardware or a host-side test double. Every
//! external call reports its outcome as a typed result; the caller owns
//! the policy for what happens on failure.

use core::fmt;

use crate::record::AccessPointRecord;

/// Parameters for a single scan request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanRequest {
    /// Also request networks that withhold their SSID.
    pub include_hidden: bool,
}

/// Result of a completed scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Records written into the caller's buffer; never exceeds its length.
    pub stored: usize,
    /// True discovered count, which may exceed `stored`.
    pub total: u16,
}

/// External radio call that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverOp {
    Init,
    SetMode,
    Start,
    Scan,
    FetchRecords,
    Stop,
}

impl DriverOp {
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "wifi_init",
            Self::SetMode => "wifi_set_mode",
            Self::Start => "wifi_start",
            Self::Scan => "wifi_scan_start",
            Self::FetchRecords => "wifi_scan_get_records",
            Self::Stop => "wifi_stop",
        }
    }
}

impl fmt::Display for DriverOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unexpected failure from the vendor radio stack.
///
/// There is exactly one error class; the diagnostic names the failing
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverError {
    pub op: DriverOp,
}

impl DriverError {
    pub const fn new(op: DriverOp) -> Self {
        Self { op }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wifi driver call failed: {}", self.op)
    }
}

/// Abstract scan driver trait
///
/// The orchestrator brings the radio up and back down on every cycle;
/// implementations must tolerate repeated `power_on`/`power_off` pairs.
#[allow(async_fn_in_trait)]
pub trait ScanDriver {
    /// Bring the radio up in station mode.
    async fn power_on(&mut self) -> Result<(), DriverError>;

    /// Run one blocking scan, filling `out` from the front.
    ///
    /// Does not return until results are ready.
    async fn scan(
        &mut self,
        request: &ScanRequest,
        out: &mut [AccessPointRecord],
    ) -> Result<ScanOutcome, DriverError>;

    /// Stop scanning and shut the radio down.
    async fn power_off(&mut self) -> Result<(), DriverError>;
}
