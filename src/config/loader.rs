//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::roster::MEMBER_COUNT_LIMIT;

use super::types::{EngineConfig, ServerConfig, ServerFile, SessionConfig, SessionFile};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── session.yaml   # Session defaults (initial and maximum roster size)
/// └── server.yaml    # HTTP server settings
/// ```
///
/// # Example
///
/// ```no_run
/// use split_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Listening on {}", loader.server().bind_address);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - The maximum member count exceeds [`MEMBER_COUNT_LIMIT`]
    /// - The default member count exceeds the maximum member count
    ///
    /// # Example
    ///
    /// ```no_run
    /// use split_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), split_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let session_path = path.join("session.yaml");
        let session = Self::load_yaml::<SessionFile>(&session_path)?.session;
        Self::validate_session(&session, &session_path)?;

        let server_path = path.join("server.yaml");
        let server = Self::load_yaml::<ServerFile>(&server_path)?.server;

        info!(
            path = %path.display(),
            default_member_count = session.default_member_count,
            max_member_count = session.max_member_count,
            bind_address = %server.bind_address,
            "Configuration loaded"
        );

        Ok(Self {
            config: EngineConfig::new(session, server),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_session(session: &SessionConfig, path: &Path) -> EngineResult<()> {
        if session.max_member_count > MEMBER_COUNT_LIMIT {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "max_member_count ({}) exceeds the roster limit ({})",
                    session.max_member_count, MEMBER_COUNT_LIMIT
                ),
            });
        }
        if session.default_member_count > session.max_member_count {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "default_member_count ({}) exceeds max_member_count ({})",
                    session.default_member_count, session.max_member_count
                ),
            });
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the session defaults.
    pub fn session(&self) -> &SessionConfig {
        self.config.session()
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }
}
