use std::path::PathBuf;
use thiserror::Error;

/// Fatal setup errors. Every variant is raised before the first probe goes
/// out; nothing here can interrupt a running scan.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The target has no scheme, no port, and no dotted host, so there is
    /// no safe way to turn it into a base URL.
    #[error("invalid target '{0}': no scheme, port, or dotted host detected")]
    InvalidTarget(String),

    /// The wordlist could not be opened or failed mid-read.
    #[error("failed to read wordlist '{}'", path.display())]
    Wordlist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
