use error_stack::Report;

use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookDraft, BookFilter, BookId, BookName};
use kernel::KernelError;

use crate::database::memory::{BookTable, InMemoryConnection, InMemoryDatabase};

pub struct InMemoryBookRepository;

impl DependOnBookQuery for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookModifier for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    type Transaction = InMemoryConnection;

    async fn find_all(
        &self,
        con: &mut InMemoryConnection,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let books = con
            .table()
            .rows
            .values()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect();
        Ok(books)
    }

    async fn find_by_id(
        &self,
        con: &mut InMemoryConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.table().rows.get(&i64::from(*id)).cloned())
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    type Transaction = InMemoryConnection;

    async fn create(
        &self,
        con: &mut InMemoryConnection,
        book: &BookDraft,
    ) -> error_stack::Result<BookId, KernelError> {
        let table = con.table_mut();
        ensure_unique_name(table, book.name(), None)?;
        table.last_id += 1;
        let id = BookId::new(table.last_id);
        table
            .rows
            .insert(table.last_id, Book::from_draft(id, book.clone()));
        tracing::debug!(id = table.last_id, "book inserted");
        Ok(id)
    }

    async fn update(
        &self,
        con: &mut InMemoryConnection,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        let table = con.table_mut();
        let id = i64::from(*book.id());
        if !table.rows.contains_key(&id) {
            return Err(not_found(id));
        }
        ensure_unique_name(table, book.name(), Some(id))?;
        table.rows.insert(id, book.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryConnection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        let id = i64::from(*book_id);
        match con.table_mut().rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }
}

fn ensure_unique_name(
    table: &BookTable,
    name: &BookName,
    except: Option<i64>,
) -> error_stack::Result<(), KernelError> {
    let taken = table
        .rows
        .iter()
        .any(|(id, book)| Some(*id) != except && book.name() == name);
    if taken {
        return Err(Report::new(KernelError::Conflict)
            .attach_printable(format!("{name:?} is already used")));
    }
    Ok(())
}

fn not_found(id: i64) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("no book with id {id}"))
}
