//! Server configuration, read once at startup.

use std::fmt::Display;
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Per-request timeout.
    pub request_timeout_secs: u64,
    /// Platform-wide switch for the room-booking module. Turning it off
    /// closes the booking overview (403) while the linkable-item pickers
    /// stay open to event managers.
    pub room_booking_enabled: bool,
    /// Access-token settings.
    pub jwt: JwtConfig,
}

/// Environment variable with a fallback.
pub(crate) fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Environment variable parsed into `T`, with a fallback. Panics on a
/// malformed value so misconfiguration fails at startup, not mid-request.
pub(crate) fn env_parse<T>(name: &str, default: &str) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let raw = env_or(name, default);
    raw.parse()
        .unwrap_or_else(|err| panic!("invalid {name} '{raw}': {err}"))
}

impl ServerConfig {
    /// Read the configuration from the environment.
    ///
    /// | Variable                         | Default                 |
    /// |----------------------------------|-------------------------|
    /// | `HOST`                           | `0.0.0.0`               |
    /// | `PORT`                           | `3000`                  |
    /// | `CORS_ORIGINS` (comma-separated) | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`           | `30`                    |
    /// | `ROOM_BOOKING_ENABLED`           | `true`                  |
    ///
    /// The `JWT_*` variables are read by [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse("PORT", "3000"),
            cors_origins,
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", "30"),
            room_booking_enabled: env_parse("ROOM_BOOKING_ENABLED", "true"),
            jwt: JwtConfig::from_env(),
        }
    }
}
