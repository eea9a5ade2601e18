//! Server configuration from the environment.

use std::env;

use actix_web::cookie::Key;
use tracing::warn;

/// Runtime configuration for the HTTP server.
#[derive(Clone)]
pub struct ServerConfig {
    /// Session cookie signing/encryption key.
    pub key: Key,
    /// Whether the session cookie carries the `Secure` flag.
    pub cookie_secure: bool,
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    pub bind_addr: String,
}

impl ServerConfig {
    /// Build configuration from environment variables.
    ///
    /// - `SESSION_KEY_FILE`: path to the session key material (default
    ///   `/var/run/secrets/session_key`). When unreadable, debug builds and
    ///   `SESSION_ALLOW_EPHEMERAL=1` fall back to a temporary key; release
    ///   builds fail.
    /// - `SESSION_COOKIE_SECURE`: any value other than `0` keeps the
    ///   `Secure` flag (default on).
    /// - `BIND_ADDR`: listen address (default `0.0.0.0:8080`).
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the key file is required but cannot
    /// be read.
    pub fn from_env() -> std::io::Result<Self> {
        let key_path =
            env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
        let key = match std::fs::read(&key_path) {
            Ok(bytes) => Key::derive_from(&bytes),
            Err(e) => {
                let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
                if cfg!(debug_assertions) || allow_dev {
                    warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                    Key::generate()
                } else {
                    return Err(std::io::Error::other(format!(
                        "failed to read session key at {key_path}: {e}"
                    )));
                }
            }
        };

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| v != "0")
            .unwrap_or(true);

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());

        Ok(Self {
            key,
            cookie_secure,
            bind_addr,
        })
    }
}
