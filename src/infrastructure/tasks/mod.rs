mod scan;

pub use scan::scan_task;
