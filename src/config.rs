use std::path::PathBuf;

/// Scan parameters, fixed once the CLI is parsed. Nothing mutates this
/// after startup, so it is shared by plain clone.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Raw target exactly as given on the command line.
    pub target: String,
    /// Wordlist file, one candidate path per line.
    pub wordlist: PathBuf,
    /// Number of concurrent probe workers.
    pub workers: usize,
    /// Only render status-200 hits; skip banner, elapsed time and summary.
    pub quiet: bool,
}
