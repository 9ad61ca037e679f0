pub mod config;
pub mod error;
pub mod output;
pub mod token;

pub use config::{resolve_port, resolve_token, validate_port, ToolServerConfig};
pub use error::ConfigError;
