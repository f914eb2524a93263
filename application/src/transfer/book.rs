use kernel::prelude::entity::{Book, BookDraft, BookFilter, BookId, DestructBook};

#[derive(Debug, Clone, PartialEq)]
pub struct BookDto {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub genre: i32,
    pub amount: i64,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            name,
            price,
            genre,
            amount,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            genre: genre.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct GetAllBookDto {
    pub filter: BookFilter,
}

#[derive(Debug)]
pub struct GetBookDto {
    pub id: BookId,
}

#[derive(Debug)]
pub struct CreateBookDto {
    pub draft: BookDraft,
}

#[derive(Debug)]
pub struct UpdateBookDto {
    pub id: BookId,
    pub draft: BookDraft,
}

#[derive(Debug)]
pub struct DeleteBookDto {
    pub id: BookId,
}
