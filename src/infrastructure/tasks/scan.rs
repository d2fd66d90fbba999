use core::fmt;

use airscout_core::{
    OrchestratorConfig, Reporter, ReportSink, ScanControl, ScanOrchestrator, ScanRequest,
};
use embassy_time::Duration;
use esp_println::println;

use crate::config;
use crate::infrastructure::drivers::EspScanDriver;

/// Routes report lines to the serial console.
struct PrintlnSink;

impl ReportSink for PrintlnSink {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        println!("scan: {args}");
    }
}

/// Background task driving the periodic scan loop.
///
/// Any driver failure is unrecoverable here; the panic message names
/// the failing external call.
#[embassy_executor::task]
pub async fn scan_task(driver: EspScanDriver, control: &'static ScanControl) {
    let loop_config = OrchestratorConfig {
        interval: Duration::from_secs(config::SCAN.interval_secs),
        request: ScanRequest {
            include_hidden: config::SCAN.include_hidden,
        },
    };
    let reporter = Reporter::new(config::SCAN.display_limit);
    let mut orchestrator: ScanOrchestrator<EspScanDriver, { config::SCAN_LIST_SIZE }> =
        ScanOrchestrator::new(driver, reporter, loop_config);

    let mut sink = PrintlnSink;
    match orchestrator.run(&mut sink, control).await {
        Ok(()) => println!("scan: loop stopped"),
        Err(e) => panic!("scan: fatal: {e}"),
    }
}
