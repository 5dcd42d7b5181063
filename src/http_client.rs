use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Build the HTTP client shared by every worker.
///
/// reqwest clients clone by handle, so one client serves the whole pool and
/// the connection pool is sized to it. No request timeout is set: a scan
/// runs its wordlist to completion, and redirects follow the client default.
pub fn build_client(pool_size: usize) -> reqwest::Result<Client> {
    ClientBuilder::new()
        // Connection pooling - one target host, reuse aggressively
        .pool_max_idle_per_host(pool_size.max(1))
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .tcp_nodelay(true)
        .use_rustls_tls()
        .user_agent("dirhunter/0.1")
        .build()
}
