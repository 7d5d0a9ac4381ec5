//! # Share Command
//!
//! Hands the session summary to the host platform's generic "send text"
//! facility.
//!
//! ## Share Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  User taps the share icon                                       │
//! │                    │                                            │
//! │                    ▼                                            │
//! │  invoke('share_sales_summary')                                  │
//! │                    │                                            │
//! │                    ▼                                            │
//! │  build "12 desserts sold for $85.00"                            │
//! │                    │                                            │
//! │                    ▼                                            │
//! │  open mailto: URL via tauri-plugin-opener                       │
//! │       │                          │                              │
//! │       ▼ handler found            ▼ no handler                   │
//! │  compose window opens      Err { SHARE_UNAVAILABLE }            │
//! │                            frontend shows transient toast       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `mailto:` URL is the desktop equivalent of a share intent: the OS
//! resolves whatever the user's default "send text" handler is. A missing
//! handler is the only expected failure and is never fatal.

use tauri::State;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Shares the current sold-count and revenue via the host OS.
///
/// ## Errors
/// `SHARE_UNAVAILABLE` when the OS reports no handler for the URL. The
/// frontend surfaces this as a transient notice; there is no retry.
#[tauri::command]
pub fn share_sales_summary(
    session: State<'_, SessionState>,
    config: State<'_, ConfigState>,
) -> Result<(), ApiError> {
    let message = session.with_session(|s| s.share_message());
    debug!(%message, "share_sales_summary command");

    let url = mailto_url(&config.share_subject, &message);

    tauri_plugin_opener::open_url(&url, None::<&str>).map_err(|e| {
        warn!(error = %e, "no share handler available");
        ApiError::share_unavailable()
    })
}

/// Builds a `mailto:` URL with percent-encoded subject and body.
fn mailto_url(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        percent_encode(subject),
        percent_encode(body)
    )
}

/// Percent-encodes a string for use in a mailto query component.
///
/// Everything outside the unreserved set (RFC 3986) is encoded, which is
/// stricter than required but always valid.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encode_passthrough() {
        assert_eq!(percent_encode("CrumbBakery123"), "CrumbBakery123");
    }

    #[test]
    fn test_percent_encode_specials() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("$5.00"), "%245.00");
        assert_eq!(percent_encode("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn test_mailto_url_shape() {
        let url = mailto_url("Crumb Bakery sales", "2 desserts sold for $10.00");
        assert_eq!(
            url,
            "mailto:?subject=Crumb%20Bakery%20sales&body=2%20desserts%20sold%20for%20%2410.00"
        );
    }
}
