pub mod ladder_scanner;

pub use ladder_scanner::{LadderScannerWorker, ScannerHandle, ScannerSettings};
