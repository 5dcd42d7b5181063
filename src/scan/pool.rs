use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use reqwest::Client;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

use crate::probe::http_probe;
use crate::scan::{ResultSink, ScanResult, StatusTally};

/// Final counters for one finished scan.
#[derive(Debug)]
pub struct ScanReport {
    /// Candidates handed to the pool.
    pub attempted: usize,
    /// Probes that came back with a status code.
    pub completed: usize,
    /// Probes dropped on a network-level failure.
    pub failed: usize,
    /// Status code counts, one increment per completed probe.
    pub tally: HashMap<u16, u64>,
}

/// Run the scan pipeline to completion: feed `candidates` to a fixed pool
/// of `workers` probe workers, stream results to `sink`, and return the
/// final counters.
///
/// Workers pull from a shared intake queue until it is closed and drained;
/// closing the queue is the only termination signal. Results reach the sink
/// in whatever order the probes finish, but a result is never emitted
/// before its tally increment has landed, and the returned tally reflects
/// every completed probe. With `quiet` set, only status-200 results are
/// emitted (the tally still counts everything). Each result is also
/// forwarded to `record` when one is given.
pub async fn run_scan(
    client: Client,
    base_url: String,
    candidates: Vec<String>,
    workers: usize,
    quiet: bool,
    sink: Arc<dyn ResultSink>,
    record: Option<mpsc::Sender<ScanResult>>,
) -> ScanReport {
    let workers = workers.max(1);

    let (intake_tx, intake_rx) = mpsc::channel::<String>(1024);
    let (results_tx, mut results_rx) = mpsc::channel::<ScanResult>(1024);
    let intake_rx = Arc::new(Mutex::new(intake_rx));

    let tally = Arc::new(StatusTally::new());
    let completed = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));

    tracing::debug!(workers, "starting worker pool");

    let mut pool = JoinSet::new();
    for _ in 0..workers {
        let intake_rx = Arc::clone(&intake_rx);
        let results_tx = results_tx.clone();
        let tally = Arc::clone(&tally);
        let completed = Arc::clone(&completed);
        let failed = Arc::clone(&failed);
        let client = client.clone();
        let base_url = base_url.clone();

        pool.spawn(async move {
            loop {
                let candidate = {
                    let mut intake = intake_rx.lock().await;
                    intake.recv().await
                };
                let Some(candidate) = candidate else { break };

                match http_probe::probe(&client, &base_url, &candidate).await {
                    Ok(status) => {
                        completed.fetch_add(1, Ordering::Relaxed);
                        tally.increment(status);
                        if !quiet || status == 200 {
                            let _ = results_tx.send(ScanResult { path: candidate, status }).await;
                        }
                    }
                    Err(error) => {
                        failed.fetch_add(1, Ordering::Relaxed);
                        tracing::debug!(path = %candidate, %error, "probe failed, skipping");
                    }
                }
            }
        });
    }
    // Workers hold the only remaining result senders; when the last worker
    // exits, the consumer sees the channel close.
    drop(results_tx);

    let consumer = tokio::spawn(async move {
        while let Some(result) = results_rx.recv().await {
            sink.render(&result);
            if let Some(tx) = &record {
                let _ = tx.send(result).await;
            }
        }
    });

    let mut attempted = 0usize;
    for candidate in candidates {
        // Fails only if every worker is already gone.
        if intake_tx.send(candidate).await.is_err() {
            break;
        }
        attempted += 1;
    }
    drop(intake_tx);

    while pool.join_next().await.is_some() {}
    let _ = consumer.await;

    ScanReport {
        attempted,
        completed: completed.load(Ordering::Relaxed),
        failed: failed.load(Ordering::Relaxed),
        tally: tally.snapshot(),
    }
}
