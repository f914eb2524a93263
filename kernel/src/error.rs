use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    /// Payload could not be decoded or was rejected by validation.
    InvalidInput,
    /// Path identifier is not a positive integer.
    InvalidIdentifier,
    /// Listing filter used an unknown key or an out-of-range value.
    InvalidFilter,
    NotFound,
    /// Book name collided with an existing one.
    Conflict,
    StoreUnavailable,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidInput => write!(f, "invalid input"),
            KernelError::InvalidIdentifier => write!(f, "invalid id"),
            KernelError::InvalidFilter => write!(f, "invalid filter condition"),
            KernelError::NotFound => write!(f, "book not found"),
            KernelError::Conflict => write!(f, "book name is not unique"),
            KernelError::StoreUnavailable => write!(f, "store unavailable"),
            KernelError::Internal => write!(f, "internal error"),
        }
    }
}

impl Context for KernelError {}
