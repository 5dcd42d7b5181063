use reqwest::Client;

/// Join a base URL and a candidate path with exactly one `/` between them.
pub fn join_url(base_url: &str, candidate: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        candidate.trim_start_matches('/')
    )
}

/// Issue one GET for `candidate` under `base_url` and return the status code.
///
/// The body is drained before returning so the connection goes back to the
/// pool. No retries, no per-request timeout. A network-level failure comes
/// back as an error the caller classifies however it wants; this layer
/// doesn't.
pub async fn probe(client: &Client, base_url: &str, candidate: &str) -> anyhow::Result<u16> {
    let url = join_url(base_url, candidate);
    let response = client.get(&url).send().await?;
    let status = response.status().as_u16();
    let _ = response.bytes().await;
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_never_doubles_or_drops_the_slash() {
        assert_eq!(join_url("http://h/", "/admin"), "http://h/admin");
        assert_eq!(join_url("http://h", "admin"), "http://h/admin");
        assert_eq!(join_url("http://h/", "admin"), "http://h/admin");
        assert_eq!(join_url("http://h", "/admin"), "http://h/admin");
    }

    #[test]
    fn join_keeps_inner_path_segments() {
        assert_eq!(join_url("http://h:8080", ".git/config"), "http://h:8080/.git/config");
    }
}
