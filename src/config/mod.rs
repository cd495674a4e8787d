//! Configuration loading and management for the split engine.
//!
//! This module loads session defaults and server settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use split_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("New sessions start with {} members", config.session().default_member_count);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, ServerConfig, SessionConfig};
