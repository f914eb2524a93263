use std::env::VarError;
use std::str::FromStr;

use error_stack::{Report, ResultExt};

use kernel::KernelError;

/// Reads `key` from the process environment or `.env`.
pub fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("failed to read {key}"))
}

pub fn optional_env(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(error) => Err(Report::new(error)
            .change_context(KernelError::Internal)
            .attach_printable(format!("failed to read {key}"))),
    }
}

/// Parses `key` when present, falling back to `default` otherwise.
pub fn parsed_env<T>(key: &str, default: T) -> error_stack::Result<T, KernelError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key)? {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("{key} has an invalid value {value:?}")),
    }
}
