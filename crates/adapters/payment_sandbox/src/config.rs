//! Sandbox provider configuration.

/// Configuration for the sandbox payment provider.
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Origin the hosted checkout pages are reachable on.
    pub public_url: String,
    /// Minutes an unpaid session stays open.
    pub session_ttl_minutes: u32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            public_url: "http://localhost:8080".to_string(),
            session_ttl_minutes: 30,
        }
    }
}

impl SandboxConfig {
    /// URL of the hosted checkout page for `session_id`.
    #[must_use]
    pub fn checkout_url(&self, session_id: &str) -> String {
        format!(
            "{}/sandbox/checkout/{session_id}",
            self.public_url.trim_end_matches('/')
        )
    }
}
