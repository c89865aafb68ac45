//! Process configuration, read from the environment.

use serde::Deserialize;

/// Startup settings.
///
/// The single knob is the `PORT` environment variable, the TCP port the
/// listener binds to. It has no default: the process refuses to start
/// without it.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Listening port, from `PORT`.
    pub port: u16,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// This function will return an error if `PORT` is missing or is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
