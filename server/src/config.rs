//! Server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::ServerError;

/// Overrides on top of the Leptos configuration. Unset fields keep whatever
/// cargo-leptos exported (`LEPTOS_SITE_ADDR`, `LEPTOS_SITE_ROOT`) or the
/// workspace metadata declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    /// Overrides the Leptos `site-root` (directory holding `pkg/`).
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, replaces the IP of the Leptos `site-addr`
    /// - `PORT`: replaces the port of the Leptos `site-addr`
    /// - `SITE_ROOT`: compiled asset root, default from Leptos config
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_var(&lookup, "HOST")?;
        let port = parse_var(&lookup, "PORT")?;
        let site_root = lookup("SITE_ROOT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self { host, port, site_root })
    }

    /// Listening address: `site_addr` with any `HOST`/`PORT` override applied.
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or_else(|| site_addr.ip()),
            self.port.unwrap_or_else(|| site_addr.port()),
        )
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ServerError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ServerError::Config { var: key, message: format!("{raw:?}: {e}") }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
