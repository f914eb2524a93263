use error_stack::Report;
use sqlx::PgConnection;

use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    Book, BookAmount, BookDraft, BookFilter, BookGenre, BookId, BookName, BookPrice,
};
use kernel::KernelError;

use crate::database::postgres::{PostgresConnection, PostgresDatabase};
use crate::error::ConvertError;

pub struct PostgresBookRepository;

impl DependOnBookQuery for PostgresDatabase {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier for PostgresDatabase {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con, filter).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        book: &BookDraft,
    ) -> error_stack::Result<BookId, KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::update(con, book).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, book_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    name: String,
    price: f64,
    genre: i32,
    amount: i64,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookName::new(value.name),
            BookPrice::new(value.price),
            BookGenre::new(value.genre),
            BookAmount::new(value.amount),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_all(
        con: &mut PgConnection,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let genre = filter.genre().map(|genre| genre.id());
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, name, price, genre, amount
            FROM books
            WHERE amount <> 0 AND ($1::INTEGER IS NULL OR genre = $1)
            ORDER BY id
            "#,
        )
        .bind(genre)
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, name, price, genre, amount
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        let found = row.map(Book::from);
        Ok(found)
    }

    async fn create(
        con: &mut PgConnection,
        book: &BookDraft,
    ) -> error_stack::Result<BookId, KernelError> {
        let id = sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            INSERT INTO books (name, price, genre, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(book.name().as_ref())
        .bind(book.price().as_ref())
        .bind(book.genre().as_ref())
        .bind(book.amount().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        tracing::debug!(id, "book inserted");
        Ok(BookId::new(id))
    }

    async fn update(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE books
            SET name = $2, price = $3, genre = $4, amount = $5
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.name().as_ref())
        .bind(book.price().as_ref())
        .bind(book.genre().as_ref())
        .bind(book.amount().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("no book with id {}", i64::from(*book.id()))));
        }
        Ok(())
    }

    async fn delete(con: &mut PgConnection, book_id: &BookId) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("no book with id {}", i64::from(*book_id))));
        }
        Ok(())
    }
}
