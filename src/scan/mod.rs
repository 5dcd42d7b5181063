use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod pool;
pub mod tally;

pub use pool::{run_scan, ScanReport};
pub use tally::StatusTally;

/// One successfully probed path, ready to render. Failed probes never
/// produce one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub path: String,
    pub status: u16,
}

/// Consumer side of the result stream.
///
/// The engine hands every emitted result to `render` as it arrives and the
/// caller invokes `render_summary` once the scan is over. Formatting and
/// styling live entirely behind this trait; the engine itself never touches
/// a terminal.
pub trait ResultSink: Send + Sync {
    fn render(&self, result: &ScanResult);
    fn render_summary(&self, tally: &HashMap<u16, u64>);
}
