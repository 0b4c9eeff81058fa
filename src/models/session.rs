// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Garmin session credentials handed to and back from clients.
//!
//! The relay keeps no session state. After a password login the client
//! receives an exported token and presents it on every later request.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OAuth credentials for one Garmin Connect account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    /// Serialize to an opaque URL-safe string.
    pub fn export(&self) -> String {
        // Serializing a struct of strings and a timestamp cannot fail.
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Parse a string produced by [`SessionToken::export`].
    pub fn import(encoded: &str) -> Result<Self, SessionTokenError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(encoded.trim())
            .map_err(|_| SessionTokenError::Malformed)?;
        serde_json::from_slice(&bytes).map_err(|_| SessionTokenError::Malformed)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionTokenError {
    #[error("Session token is malformed")]
    Malformed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token() -> SessionToken {
        SessionToken {
            access_token: "access".to_string(),
            refresh_token: Some("refresh".to_string()),
            expires_at: DateTime::from_timestamp(1_900_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_export_import_round_trip() {
        let original = token();
        let imported = SessionToken::import(&original.export()).unwrap();
        assert_eq!(imported, original);
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert_eq!(
            SessionToken::import("not a token!"),
            Err(SessionTokenError::Malformed)
        );
        let not_json = URL_SAFE_NO_PAD.encode(b"hello");
        assert_eq!(
            SessionToken::import(&not_json),
            Err(SessionTokenError::Malformed)
        );
    }

    #[test]
    fn test_is_expired() {
        let t = token();
        assert!(!t.is_expired(t.expires_at - Duration::seconds(1)));
        assert!(t.is_expired(t.expires_at));
    }
}
