use driver::env::{optional_env, parsed_env};
use error_stack::Report;
use kernel::KernelError;

static BOOK_STORE: &str = "BOOK_STORE";
static SERVER_PORT: &str = "SERVER_PORT";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl StoreKind {
    fn parse(value: Option<&str>) -> error_stack::Result<Self, KernelError> {
        match value {
            None | Some("postgres") => Ok(StoreKind::Postgres),
            Some("memory") => Ok(StoreKind::Memory),
            Some(other) => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("unknown {BOOK_STORE} {other:?}"))),
        }
    }
}

#[derive(Debug)]
pub struct ServerConfig {
    pub store: StoreKind,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let store = StoreKind::parse(optional_env(BOOK_STORE)?.as_deref())?;
        let port = parsed_env(SERVER_PORT, 8080u16)?;
        Ok(Self { store, port })
    }
}
