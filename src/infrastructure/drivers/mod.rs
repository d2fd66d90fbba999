mod wifi;

pub use wifi::{EspScanDriver, init_wifi};
