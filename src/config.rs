//! Runtime configuration, extracted from the process environment over
//! built-in defaults. Every value has a workable default so the server can
//! come up with nothing configured, which is also why the fallback signing
//! secret must be treated as public.

use std::path::PathBuf;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Fallback session-signing secret. Anyone can derive the cookie key from
/// this value, so deployments must override `SECRET_KEY`.
pub const DEFAULT_SECRET_KEY: &str = "change-this-secret";

/// Hard cap on request bodies, sized for the gallery upload form.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database URL, e.g. `sqlite:site.db`.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Session-signing secret; the cookie key is derived from it.
    pub secret_key: String,
    /// Directory served under `/static`; uploads land in its `uploads/`
    /// subdirectory.
    pub static_dir: PathBuf,
    /// Drop the cookie `Secure` attribute for plain-HTTP deployments.
    pub insecure_cookie: bool,
    /// Default log filter when `RUST_LOG` is unset.
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:site.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            static_dir: PathBuf::from("static"),
            insecure_cookie: false,
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Layer environment variables (bare uppercased field names, loaded
    /// after `dotenvy`) over the defaults.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&[
                "database_url",
                "listen_addr",
                "secret_key",
                "static_dir",
                "insecure_cookie",
                "loglevel",
            ]))
            .extract()
    }

    /// Destination directory for uploaded gallery images.
    pub fn upload_dir(&self) -> PathBuf {
        self.static_dir.join("uploads")
    }

    /// True when the deployment is still running on the public fallback
    /// secret.
    pub fn secret_is_default(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}
