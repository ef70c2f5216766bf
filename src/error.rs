use thiserror::Error;

/// A trigger unit could not be built from its configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{requested} triggers requested, at most {max} are supported")]
    TooManyTriggers { requested: usize, max: usize },
    #[error("a trigger bank needs at least one trigger")]
    NoTriggers,
}

/// An address does not name a trigger CSR
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsrError {
    #[error("{0:#05x} is not a trigger CSR")]
    UnknownAddress(u16),
}

/// A pipeline signal carries an encoding this unit does not implement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("access size code {0:#b} is reserved")]
    InvalidSize(u8),
}
