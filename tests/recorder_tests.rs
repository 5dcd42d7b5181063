use std::collections::HashMap;
use std::sync::Arc;

use tempfile::tempdir;
use tokio::sync::mpsc;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dirhunter::http_client;
use dirhunter::output::spawn_jsonl_recorder;
use dirhunter::{run_scan, ResultSink, ScanResult};

#[tokio::test]
async fn recorder_writes_one_line_per_result() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.jsonl");

    let (tx, rx) = mpsc::channel(16);
    let handle = spawn_jsonl_recorder(path.clone(), rx);

    for (p, status) in [("admin", 200u16), ("backup", 403), ("old", 404)] {
        tx.send(ScanResult { path: p.to_string(), status }).await.unwrap();
    }
    drop(tx);
    handle.await.unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<ScanResult> = data
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].path, "admin");
    assert_eq!(lines[0].status, 200);
    assert_eq!(lines[2].status, 404);
}

struct NullSink;

impl ResultSink for NullSink {
    fn render(&self, _result: &ScanResult) {}
    fn render_summary(&self, _tally: &HashMap<u16, u64>) {}
}

#[tokio::test]
async fn quiet_scan_records_only_rendered_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/found-"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/nope-"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("quiet.jsonl");
    let (tx, rx) = mpsc::channel(16);
    let handle = spawn_jsonl_recorder(path.clone(), rx);

    let mut list: Vec<String> = (0..4).map(|i| format!("found-{i}")).collect();
    list.extend((0..3).map(|i| format!("nope-{i}")));

    let client = http_client::build_client(2).unwrap();
    let report = run_scan(client, server.uri(), list, 2, true, Arc::new(NullSink), Some(tx)).await;
    handle.await.unwrap();

    assert_eq!(report.completed, 7);

    let data = std::fs::read_to_string(&path).unwrap();
    let recorded: Vec<ScanResult> = data
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(recorded.len(), 4);
    assert!(recorded.iter().all(|r| r.status == 200));
}
