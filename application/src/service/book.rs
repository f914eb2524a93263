use error_stack::Report;

use kernel::interface::database::{
    DatabaseConnection, DependOnDatabaseConnection, Transaction,
};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::Book;
use kernel::KernelError;

use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};

#[async_trait::async_trait]
pub trait GetBooksService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let books = self
            .book_query()
            .find_all(&mut connection, &dto.filter)
            .await?;
        connection.commit().await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetBooksService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let book = self.book_query().find_by_id(&mut connection, &dto.id).await?;
        connection.commit().await?;
        book.map(BookDto::from).ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("no book with id {}", i64::from(dto.id)))
        })
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<i64, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let id = self
            .book_modifier()
            .create(&mut connection, &dto.draft)
            .await?;
        connection.commit().await?;
        Ok(id.into())
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let book = Book::from_draft(dto.id, dto.draft);
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;
        Ok(BookDto::from(book))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;
        self.book_modifier()
            .delete(&mut connection, &dto.id)
            .await?;
        connection.commit().await?;
        Ok(())
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}

#[cfg(test)]
mod test {
    use driver::database::InMemoryDatabase;
    use kernel::prelude::entity::{
        BookAmount, BookDraft, BookFilter, BookGenre, BookId, BookName, BookPrice, Genre,
    };
    use kernel::KernelError;

    use crate::service::{
        CreateBookService, DeleteBookService, GetBookService, GetBooksService,
        UpdateBookService,
    };
    use crate::transfer::{
        BookDto, CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
    };

    fn draft(name: &str, genre: i32, amount: i64) -> BookDraft {
        BookDraft::new(
            BookName::new(name),
            BookPrice::new(45.99),
            BookGenre::new(genre),
            BookAmount::new(amount),
        )
    }

    async fn create(db: &InMemoryDatabase, draft: BookDraft) -> i64 {
        db.create_book(CreateBookDto { draft }).await.unwrap()
    }

    #[tokio::test]
    async fn created_book_reads_back() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let id = create(&db, draft("Book1", 1, 0)).await;
        assert!(id > 0);

        let found = db.get_book(GetBookDto { id: BookId::new(id) }).await?;
        assert_eq!(
            found,
            BookDto {
                id,
                name: "Book1".to_string(),
                price: 45.99,
                genre: 1,
                amount: 0,
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let db = InMemoryDatabase::new();
        create(&db, draft("Book1", 1, 0)).await;
        let err = db
            .create_book(CreateBookDto {
                draft: draft("Book1", 2, 5),
            })
            .await
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::Conflict);
    }

    #[tokio::test]
    async fn missing_book_is_not_found() {
        let db = InMemoryDatabase::new();
        let err = db
            .get_book(GetBookDto {
                id: BookId::new(999999),
            })
            .await
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::NotFound);
    }

    #[tokio::test]
    async fn deleted_book_is_gone() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let id = BookId::new(create(&db, draft("Book1", 1, 3)).await);

        db.delete_book(DeleteBookDto { id }).await?;
        let err = db.get_book(GetBookDto { id }).await.unwrap_err();
        assert_eq!(*err.current_context(), KernelError::NotFound);

        let err = db.delete_book(DeleteBookDto { id }).await.unwrap_err();
        assert_eq!(*err.current_context(), KernelError::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn update_is_idempotent() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let id = BookId::new(create(&db, draft("Book1", 1, 3)).await);

        let first = db
            .update_book(UpdateBookDto {
                id,
                draft: draft("Book2", 3, 9),
            })
            .await?;
        let once = db.get_book(GetBookDto { id }).await?;
        let second = db
            .update_book(UpdateBookDto {
                id,
                draft: draft("Book2", 3, 9),
            })
            .await?;
        let twice = db.get_book(GetBookDto { id }).await?;

        assert_eq!(first, second);
        assert_eq!(once, twice);
        assert_eq!(twice.name, "Book2");
        assert_eq!(twice.id, i64::from(id));
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_book_is_not_found() {
        let db = InMemoryDatabase::new();
        let err = db
            .update_book(UpdateBookDto {
                id: BookId::new(7),
                draft: draft("Book1", 1, 1),
            })
            .await
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::NotFound);
    }

    #[tokio::test]
    async fn update_to_taken_name_conflicts() {
        let db = InMemoryDatabase::new();
        create(&db, draft("Book1", 1, 1)).await;
        let id = BookId::new(create(&db, draft("Book2", 1, 1)).await);
        let err = db
            .update_book(UpdateBookDto {
                id,
                draft: draft("Book1", 1, 1),
            })
            .await
            .unwrap_err();
        assert_eq!(*err.current_context(), KernelError::Conflict);
    }

    #[tokio::test]
    async fn listing_hides_sold_out_and_filters_genre() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        assert!(db.get_books(GetAllBookDto::default()).await?.is_empty());

        create(&db, draft("sold out", 2, 0)).await;
        create(&db, draft("adventure", 1, 4)).await;
        create(&db, draft("classic", 2, 1)).await;
        create(&db, draft("fantasy", 3, 2)).await;

        let all = db.get_books(GetAllBookDto::default()).await?;
        let names = all.iter().map(|book| book.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["adventure", "classic", "fantasy"]);

        let classics = db
            .get_books(GetAllBookDto {
                filter: BookFilter::new(Some(Genre::Classics)),
            })
            .await?;
        assert_eq!(classics.len(), 1);
        assert!(classics.iter().all(|book| book.genre == 2 && book.amount != 0));
        Ok(())
    }
}
