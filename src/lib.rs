pub mod config;
pub mod error;
pub mod http_client;
pub mod output;
pub mod probe;
pub mod scan;
pub mod target;
pub mod wordlist;

// re-export the engine surface used in tests
pub use crate::scan::{run_scan, ResultSink, ScanReport, ScanResult};
