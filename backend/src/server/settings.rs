//! Service configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Port the server listens on when none is configured.
pub const DEFAULT_PORT: u16 = 3000;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Configuration values for the HTTP server and its database connection.
///
/// Loaded from the layered CLI / environment / file sources OrthoConfig
/// provides, under the `TRACKER` prefix (`TRACKER_DATABASE_URL`,
/// `TRACKER_PORT`, `TRACKER_BIND_ADDR`).
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRACKER")]
pub struct ServerSettings {
    /// PostgreSQL connection string. The only required setting.
    pub database_url: Option<String>,
    /// Listening port override.
    pub port: Option<u16>,
    /// Bind address override.
    pub bind_addr: Option<String>,
}

impl ServerSettings {
    /// Load settings from the process arguments and environment.
    pub fn from_env_and_args() -> Result<Self, std::sync::Arc<ortho_config::OrthoError>> {
        Self::load_from_iter(std::env::args_os())
    }

    /// The configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// The configured port, falling back to [`DEFAULT_PORT`].
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// The configured bind address, falling back to all interfaces.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("exercise-tracker")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env([
            ("TRACKER_DATABASE_URL", None::<String>),
            ("TRACKER_PORT", None::<String>),
            ("TRACKER_BIND_ADDR", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.bind_addr(), "0.0.0.0");
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "TRACKER_DATABASE_URL",
                Some("postgres://localhost/tracker".to_owned()),
            ),
            ("TRACKER_PORT", Some("8125".to_owned())),
            ("TRACKER_BIND_ADDR", Some("127.0.0.1".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/tracker")
        );
        assert_eq!(settings.port(), 8125);
        assert_eq!(settings.bind_addr(), "127.0.0.1");
    }
}
