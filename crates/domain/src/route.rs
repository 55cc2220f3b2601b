//! Client routes served by the dashboard.

/// Query parameter carrying the payment session after a provider redirect.
pub const SESSION_ID_PARAM: &str = "session_id";

/// Pages of the client application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Service list (`/`).
    Services,
    /// Landing page after a completed checkout (`/payment-success`).
    PaymentSuccess,
    /// Landing page after an abandoned checkout (`/payment-cancel`).
    PaymentCancel,
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Services, Self::PaymentSuccess, Self::PaymentCancel];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Services => "/",
            Self::PaymentSuccess => "/payment-success",
            Self::PaymentCancel => "/payment-cancel",
        }
    }

    /// Resolve a request path; the query string and a trailing slash are
    /// ignored. Unknown paths yield `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

/// Extract a non-blank `session_id` from a raw query string (with or
/// without the leading `?`).
#[must_use]
pub fn session_id_from_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == SESSION_ID_PARAM)
        .map(|(_, value)| percent_decode(value))
        .filter(|value| !value.trim().is_empty())
}

/// Decode `+` and `%XX` escapes; malformed escapes are kept verbatim.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            other => out.push(other),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_known_paths() {
        assert_eq!(Route::from_path("/"), Some(Route::Services));
        assert_eq!(
            Route::from_path("/payment-success"),
            Some(Route::PaymentSuccess)
        );
        assert_eq!(
            Route::from_path("/payment-cancel/"),
            Some(Route::PaymentCancel)
        );
    }

    #[test]
    fn should_ignore_query_when_resolving() {
        assert_eq!(
            Route::from_path("/payment-success?session_id=abc123"),
            Some(Route::PaymentSuccess)
        );
    }

    #[test]
    fn should_return_none_for_unknown_path() {
        assert_eq!(Route::from_path("/admin"), None);
        assert_eq!(Route::from_path("/payment-success/extra"), None);
    }

    #[test]
    fn should_extract_session_id_from_query() {
        assert_eq!(
            session_id_from_query("?session_id=abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            session_id_from_query("utm=x&session_id=cs_test_9"),
            Some("cs_test_9".to_string())
        );
    }

    #[test]
    fn should_return_none_when_session_id_missing_or_blank() {
        assert_eq!(session_id_from_query(""), None);
        assert_eq!(session_id_from_query("?other=1"), None);
        assert_eq!(session_id_from_query("?session_id="), None);
        assert_eq!(session_id_from_query("?session_id"), None);
    }

    #[test]
    fn should_percent_decode_session_id() {
        assert_eq!(
            session_id_from_query("session_id=a%2Fb+c"),
            Some("a/b c".to_string())
        );
    }

    #[test]
    fn should_keep_malformed_escape_verbatim() {
        assert_eq!(
            session_id_from_query("session_id=abc%2"),
            Some("abc%2".to_string())
        );
    }
}
