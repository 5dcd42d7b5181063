use std::path::PathBuf;

use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Concurrent hidden-path scanner for HTTP servers", long_about = None)]
pub struct Cli {
    /// Path to the wordlist file (one candidate path per line)
    #[arg(short = 'd', long)]
    pub wordlist: PathBuf,

    /// Target to scan: a full URL, a host.name, or a host:port pair
    #[arg(short = 't', long)]
    pub target: String,

    /// Number of concurrent workers
    #[arg(short = 'w', long, default_value_t = 1)]
    pub workers: usize,

    /// Quiet mode: only print paths that answered 200
    #[arg(short = 'q', long, default_value_t = false)]
    pub quiet: bool,

    /// Also write every rendered result as JSON lines to FILE
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
