use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

use crate::scan::ScanResult;

/// Spawn a background task that writes received results as JSON lines to
/// `path`, truncating any previous run. The task ends once every sender is
/// dropped and the channel drains; await the handle to know the file is
/// flushed.
pub fn spawn_jsonl_recorder(path: PathBuf, mut rx: mpsc::Receiver<ScanResult>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match File::create(&path).await {
            Ok(mut f) => {
                while let Some(result) = rx.recv().await {
                    match serde_json::to_vec(&result) {
                        Ok(mut line) => {
                            // serde_json::to_vec doesn't include the newline
                            line.push(b'\n');
                            if let Err(e) = f.write_all(&line).await {
                                tracing::error!(error = %e, "failed to write result line");
                            }
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "failed to serialize ScanResult");
                        }
                    }
                }
                // flush on close
                if let Err(e) = f.flush().await {
                    tracing::error!(error = %e, "failed to flush results file");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, path = %path.display(), "failed to open results file");
            }
        }
    })
}
