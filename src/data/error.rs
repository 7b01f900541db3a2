use std::{error::Error, fmt};

/// Classified synchronization failures, surfaced to the dashboard as a single
/// banner message. Stale market data is never discarded on any of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Missing or placeholder API credential. Fatal to syncing only; the
    /// dashboard stays usable on seed data.
    Configuration(String),
    /// HTTP 429.
    RateLimited,
    /// HTTP 403.
    Unauthorized,
    /// Any other non-2xx provider response.
    Provider { status: u16 },
    /// Network or payload-decode failure.
    Transport(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Configuration(msg) => write!(f, "{}", msg),
            SyncError::RateLimited => write!(
                f,
                "429: API rate limit reached. Please wait a moment before syncing again."
            ),
            SyncError::Unauthorized => write!(
                f,
                "403 Forbidden: ensure your provider subscription is active."
            ),
            SyncError::Provider { status } => write!(f, "API error: {}", status),
            SyncError::Transport(msg) => write!(f, "Sync failed: {}. Check connection.", msg),
        }
    }
}

impl Error for SyncError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_message_tells_the_user_to_wait() {
        let msg = SyncError::RateLimited.to_string();
        assert!(msg.contains("429"));
        assert!(msg.to_lowercase().contains("wait"));
    }

    #[test]
    fn provider_errors_carry_the_status_code() {
        assert_eq!(
            SyncError::Provider { status: 502 }.to_string(),
            "API error: 502"
        );
    }
}
