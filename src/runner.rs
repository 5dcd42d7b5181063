use std::sync::Arc;
use std::time::Instant;

use crate::cli::Cli;
use dirhunter::config::ScanConfig;
use dirhunter::output::{spawn_jsonl_recorder, ColorSink};
use dirhunter::scan::{run_scan, ResultSink};
use dirhunter::{http_client, target, wordlist};

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Configure logging based on global flags.
    // Keep external crates (reqwest/hyper) quieter than our own level so a
    // debug run doesn't flood the terminal with connection chatter.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!("dirhunter={crate_level},reqwest=info,hyper=info,h2=info");
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .init();

    let config = ScanConfig {
        target: cli.target,
        wordlist: cli.wordlist,
        workers: cli.workers.max(1),
        quiet: cli.quiet,
    };

    // Both checks are precondition gates: nothing is probed until the
    // target normalizes and the whole wordlist has loaded.
    let base_url = target::format_target(&config.target)?;
    let candidates = wordlist::load(&config.wordlist)?;

    tracing::info!(
        target = %base_url,
        wordlist = %config.wordlist.display(),
        workers = config.workers,
        candidates = candidates.len(),
        "Starting scan"
    );

    if !config.quiet {
        println!("=== Starting scan ===");
        println!("Target  : {base_url}");
        println!("Wordlist: {}", config.wordlist.display());
        println!("Workers : {}", config.workers);
        println!("{}", "-".repeat(25));
    }

    let client = http_client::build_client(config.workers)?;
    let sink: Arc<dyn ResultSink> = Arc::new(ColorSink);

    let mut recorder = None;
    let record_tx = match cli.output {
        Some(path) => {
            let (tx, rx) = tokio::sync::mpsc::channel(1024);
            recorder = Some(spawn_jsonl_recorder(path, rx));
            Some(tx)
        }
        None => None,
    };

    let scan_start = Instant::now();
    let report = run_scan(
        client,
        base_url,
        candidates,
        config.workers,
        config.quiet,
        Arc::clone(&sink),
        record_tx,
    )
    .await;
    let elapsed = scan_start.elapsed();

    // The engine dropped its record sender when the consumer finished, so
    // the recorder is already draining; wait for the final flush.
    if let Some(handle) = recorder {
        let _ = handle.await;
    }

    tracing::info!(
        attempted = report.attempted,
        completed = report.completed,
        failed = report.failed,
        "Scan finished"
    );

    if !config.quiet {
        println!("\n--- Scan finished in {elapsed:.2?} ---");
        println!("\n--- Response summary ---");
        sink.render_summary(&report.tally);
    }

    Ok(())
}
