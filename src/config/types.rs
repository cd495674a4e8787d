//! Configuration types for the split engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::roster::DEFAULT_MEMBER_COUNT;

fn default_member_count() -> usize {
    DEFAULT_MEMBER_COUNT
}

fn default_max_member_count() -> usize {
    100
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

/// Session defaults from `session.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Number of empty members a new session starts with.
    #[serde(default = "default_member_count")]
    pub default_member_count: usize,
    /// Largest roster the HTTP boundary will accept in a resize request.
    #[serde(default = "default_max_member_count")]
    pub max_member_count: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_member_count: default_member_count(),
            max_member_count: default_max_member_count(),
        }
    }
}

/// `session.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionFile {
    /// The session section.
    pub session: SessionConfig,
}

/// HTTP server settings from `server.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address the server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// `server.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerFile {
    /// The server section.
    pub server: ServerConfig,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    session: SessionConfig,
    server: ServerConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(session: SessionConfig, server: ServerConfig) -> Self {
        Self { session, server }
    }

    /// Returns the session defaults.
    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }
}
