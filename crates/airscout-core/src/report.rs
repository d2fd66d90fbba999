//! Human-readable rendering of scan results
//!
//! The reporter is pure with respect to its inputs; its only side effect
//! is the lines it pushes into a [`ReportSink`].

use core::fmt;

use crate::record::{AccessPointRecord, AuthMode};

/// Placeholder rendered for access points that withhold their SSID.
pub const HIDDEN_SSID_PLACEHOLDER: &str = "HIDDEN_SSID";

/// Line-oriented output sink for the reporter.
///
/// Implement this to route report lines to the platform logger.
pub trait ReportSink {
    fn line(&mut self, args: fmt::Arguments<'_>);
}

/// Renders discovered access points, one block per entry.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    display_limit: usize,
}

impl Reporter {
    pub const fn new(display_limit: usize) -> Self {
        Self { display_limit }
    }

    /// Emit a summary line followed by at most
    /// `min(display_limit, records.len(), total)` record blocks.
    ///
    /// `total` is the driver-reported count of discovered networks and
    /// may exceed the number of buffered records. The driver layer
    /// clamps to the buffer size already; re-clamp regardless.
    pub fn report<S: ReportSink>(
        &self,
        sink: &mut S,
        records: &[AccessPointRecord],
        total: u16,
    ) {
        sink.line(format_args!("found {total} access point(s)"));

        let shown = self
            .display_limit
            .min(records.len())
            .min(usize::from(total));
        for (index, record) in records[..shown].iter().enumerate() {
            Self::record_block(sink, index, record);
        }
    }

    fn record_block<S: ReportSink>(sink: &mut S, index: usize, record: &AccessPointRecord) {
        let ssid = if record.is_hidden() {
            HIDDEN_SSID_PLACEHOLDER
        } else {
            record.ssid.as_str()
        };

        sink.line(format_args!("entry no.{index}:"));
        sink.line(format_args!("  SSID             {ssid}"));
        sink.line(format_args!("  BSSID            {}", record.bssid));
        sink.line(format_args!("  RSSI             {}", record.rssi));
        sink.line(format_args!("  Channel          {}", record.channel));
        sink.line(format_args!("  Phy              {}", record.phy_mode.label()));
        sink.line(format_args!("  Authmode         {}", record.auth_mode.label()));
        // WEP networks carry no meaningful cipher-suite fields.
        if record.auth_mode != AuthMode::Wep {
            sink.line(format_args!(
                "  Pairwise cipher  {}",
                record.pairwise_cipher.label()
            ));
            sink.line(format_args!(
                "  Group cipher     {}",
                record.group_cipher.label()
            ));
        }
        sink.line(format_args!("end of entry"));
    }
}
