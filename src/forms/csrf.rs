//! Stateless CSRF tokens for the item form.
//!
//! A token is `<issued-at>.<signature>` where the signature is the
//! URL-safe base64 of `SHA-256(secret ":" issued-at)`. Tokens need no
//! server-side storage and expire after the configured time limit.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_TIME_LIMIT_SECS: u64 = 3600;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfError {
    #[error("The CSRF token is missing.")]
    Missing,

    #[error("The CSRF token is invalid.")]
    Invalid,

    #[error("The CSRF token has expired.")]
    Expired,
}

#[derive(Clone)]
pub struct CsrfGuard {
    secret: String,
    time_limit_secs: u64,
    enabled: bool,
}

// Keep the secret out of debug output.
impl fmt::Debug for CsrfGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsrfGuard")
            .field("time_limit_secs", &self.time_limit_secs)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl CsrfGuard {
    pub fn new(secret: impl Into<String>, time_limit_secs: u64, enabled: bool) -> Self {
        Self {
            secret: secret.into(),
            time_limit_secs,
            enabled,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Issue a token valid from now.
    pub fn issue(&self) -> String {
        self.issue_at(Utc::now().timestamp())
    }

    pub fn issue_at(&self, issued_at: i64) -> String {
        format!("{}.{}", issued_at, self.sign(issued_at))
    }

    pub fn verify(&self, token: &str) -> Result<(), CsrfError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    pub fn verify_at(&self, token: &str, now: i64) -> Result<(), CsrfError> {
        if !self.enabled {
            return Ok(());
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(CsrfError::Missing);
        }

        let (ts, sig) = token.split_once('.').ok_or(CsrfError::Invalid)?;
        let issued_at: i64 = ts.parse().map_err(|_| CsrfError::Invalid)?;

        if !constant_time_eq(sig.as_bytes(), self.sign(issued_at).as_bytes()) {
            return Err(CsrfError::Invalid);
        }

        let age = now.saturating_sub(issued_at);
        if age < 0 {
            return Err(CsrfError::Invalid);
        }
        if age as u64 > self.time_limit_secs {
            return Err(CsrfError::Expired);
        }

        Ok(())
    }

    fn sign(&self, issued_at: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(b":");
        hasher.update(issued_at.to_string().as_bytes());
        let digest = hasher.finalize();
        URL_SAFE_NO_PAD.encode(digest.as_slice())
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> CsrfGuard {
        CsrfGuard::new("s3cret", DEFAULT_TIME_LIMIT_SECS, true)
    }

    #[test]
    fn fresh_token_verifies() {
        let g = guard();
        let token = g.issue_at(1_000);
        assert_eq!(g.verify_at(&token, 1_010), Ok(()));
    }

    #[test]
    fn token_from_other_secret_is_invalid() {
        let token = CsrfGuard::new("other", 3600, true).issue_at(1_000);
        assert_eq!(guard().verify_at(&token, 1_000), Err(CsrfError::Invalid));
    }

    #[test]
    fn tampered_timestamp_is_invalid() {
        let g = guard();
        let token = g.issue_at(1_000);
        let sig = token.split_once('.').unwrap().1;
        let forged = format!("5000.{}", sig);
        assert_eq!(g.verify_at(&forged, 5_000), Err(CsrfError::Invalid));
    }

    #[test]
    fn old_token_expires() {
        let g = guard();
        let token = g.issue_at(1_000);
        assert_eq!(g.verify_at(&token, 1_000 + 3_601), Err(CsrfError::Expired));
    }

    #[test]
    fn blank_token_is_missing() {
        assert_eq!(guard().verify_at("  ", 0), Err(CsrfError::Missing));
        assert_eq!(guard().verify_at("garbage", 0), Err(CsrfError::Invalid));
    }

    #[test]
    fn error_messages_match_form_wording() {
        assert_eq!(CsrfError::Missing.to_string(), "The CSRF token is missing.");
        assert_eq!(CsrfError::Invalid.to_string(), "The CSRF token is invalid.");
        assert_eq!(CsrfError::Expired.to_string(), "The CSRF token has expired.");
    }

    #[test]
    fn disabled_guard_accepts_anything() {
        let g = CsrfGuard::new("s3cret", 3600, false);
        assert_eq!(g.verify_at("", 0), Ok(()));
    }
}
