//! Backend Endpoints
//!
//! Origins are fixed at build time; override with TASKLY_API_URL /
//! TASKLY_WS_URL when building against a deployed backend.

/// REST API origin, no trailing slash
pub fn api_base() -> &'static str {
    option_env!("TASKLY_API_URL").unwrap_or("http://localhost:5000")
}

/// Live-update channel endpoint
pub fn socket_url() -> &'static str {
    option_env!("TASKLY_WS_URL").unwrap_or("ws://localhost:5000/ws")
}

/// Channel endpoint with the bearer credential in the handshake query
pub fn socket_endpoint(token: Option<&str>) -> String {
    match token {
        Some(token) => format!("{}?token={}", socket_url(), token),
        None => socket_url().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_endpoint_with_token() {
        let url = socket_endpoint(Some("abc123"));
        assert!(url.ends_with("?token=abc123"));
    }

    #[test]
    fn test_socket_endpoint_without_token() {
        assert_eq!(socket_endpoint(None), socket_url());
    }
}
