use crate::error::ConfigError;

/// Normalize a raw target into the base URL the prober will use.
///
/// Anything already carrying an `http://` or `https://` scheme is accepted
/// as-is. A bare value gets an `http://` prefix when it looks like a
/// host:port pair (contains `:`) or a dotted hostname (contains `.`).
/// Everything else is rejected; this runs once, before any probing starts.
pub fn format_target(raw: &str) -> Result<String, ConfigError> {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Ok(raw.to_string());
    }
    if raw.contains(':') || raw.contains('.') {
        return Ok(format!("http://{raw}"));
    }
    Err(ConfigError::InvalidTarget(raw.to_string()))
}
