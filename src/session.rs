//! Mock login state.
//!
//! A session is either absent or one complete record; it never expires on
//! its own. The checks here only shape-check input. This is not a
//! credential system.

use regex::Regex;
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::blob::BlobStore;
use crate::error::{Error, Result};
use crate::models::{now_millis, Session};

pub const SESSION_KEY: &str = "smartcity-session";

/// Placeholder stored in place of a real credential.
pub const DEMO_TOKEN: &str = "demo-token";

pub const MIN_PASSWORD_LEN: usize = 6;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn validate_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

pub struct SessionStore<'a> {
    blobs: &'a dyn BlobStore,
    login_delay: Duration,
}

impl<'a> SessionStore<'a> {
    pub fn new(blobs: &'a dyn BlobStore) -> Self {
        SessionStore {
            blobs,
            login_delay: Duration::ZERO,
        }
    }

    /// Simulated round-trip latency applied to every login attempt.
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.blobs.read(SESSION_KEY)?.is_some())
    }

    /// The stored session, if one exists and parses.
    pub fn current(&self) -> Result<Option<Session>> {
        let Some(raw) = self.blobs.read(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(error = %e, "ignoring malformed session data");
                Ok(None)
            }
        }
    }

    pub fn login(&self, email: &str, password: &str) -> Result<Session> {
        if !self.login_delay.is_zero() {
            debug!(delay_ms = self.login_delay.as_millis() as u64, "simulating login latency");
            thread::sleep(self.login_delay);
        }

        if !validate_email(email) {
            return Err(Error::validation("email", "expected an address like name@example.com"));
        }
        if !validate_password(password) {
            return Err(Error::validation(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }

        let session = Session {
            email: email.to_string(),
            token: DEMO_TOKEN.to_string(),
            logged_at: now_millis(),
        };
        let json = serde_json::to_string(&session)?;
        self.blobs.write(SESSION_KEY, &json)?;
        info!(email = %session.email, "logged in");
        Ok(session)
    }

    pub fn logout(&self) -> Result<()> {
        self.blobs.remove(SESSION_KEY)?;
        info!("logged out");
        Ok(())
    }
}
