use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::Book;
use kernel::KernelError;

pub use self::book::*;

mod book;

/// Process-local book store. Each transaction holds the table exclusively.
/// The first write takes a snapshot that is restored unless committed, so
/// read-only transactions never copy the table.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    table: Arc<Mutex<BookTable>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default)]
pub(in crate::database) struct BookTable {
    pub(in crate::database) rows: BTreeMap<i64, Book>,
    pub(in crate::database) last_id: i64,
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryConnection;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let table = Arc::clone(&self.table).lock_owned().await;
        Ok(InMemoryConnection {
            table,
            snapshot: None,
        })
    }
}

pub struct InMemoryConnection {
    table: OwnedMutexGuard<BookTable>,
    snapshot: Option<BookTable>,
}

impl InMemoryConnection {
    pub(in crate::database) fn table(&self) -> &BookTable {
        &self.table
    }

    pub(in crate::database) fn table_mut(&mut self) -> &mut BookTable {
        if self.snapshot.is_none() {
            self.snapshot = Some(BookTable::clone(&self.table));
        }
        &mut self.table
    }

    fn restore(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            *self.table = snapshot;
        }
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryConnection {
    async fn commit(mut self) -> error_stack::Result<(), KernelError> {
        self.snapshot = None;
        Ok(())
    }

    async fn roll_back(mut self) -> error_stack::Result<(), KernelError> {
        self.restore();
        Ok(())
    }
}

impl Drop for InMemoryConnection {
    fn drop(&mut self) {
        self.restore();
    }
}
