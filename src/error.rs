use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port format: {0:?} (expected digits only)")]
    InvalidPortFormat(String),
    /// Digits-only but larger than a `u16`. `validate_port` alone still accepts
    /// such values, so resolving a config is stricter than `--check-port`.
    #[error("port out of range: {0} (must fit in 0..=65535)")]
    PortOutOfRange(String),
    #[error("token is not valid UTF-8")]
    NonUnicodeToken,
    #[error("entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),
}
