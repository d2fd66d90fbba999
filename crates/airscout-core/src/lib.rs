#![no_std]

//! Periodic Wi-Fi access-point survey core.
//!
//! Architecture layers:
//! - `record` - access-point data model and vendor code decoding
//! - `report` - human-readable rendering of scan results
//! - `driver` - hardware-facing scan port ([`ScanDriver`] trait)
//! - `orchestrator` - the scan lifecycle loop
//!
//! The orchestrator is generic over [`ScanDriver`], allowing different
//! hardware backends (and host-side test doubles). Nothing in this crate
//! touches hardware or performs I/O; output goes through [`ReportSink`].

pub mod driver;
pub mod orchestrator;
pub mod record;
pub mod report;

// Driver port exports
pub use driver::{DriverError, DriverOp, ScanDriver, ScanOutcome, ScanRequest};

// Orchestrator exports
pub use orchestrator::{OrchestratorConfig, ScanControl, ScanOrchestrator};

// Record exports
pub use record::{
    AccessPointRecord, AuthMode, Bssid, CipherSuite, MAX_SSID_LEN, PhyMode, Ssid,
};

// Reporter exports
pub use report::{HIDDEN_SSID_PLACEHOLDER, Reporter, ReportSink};
