use crate::controller::TryIntake;
use application::transfer::{
    CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use error_stack::Report;
use kernel::prelude::entity::{
    BookAmount, BookDraft, BookFilter, BookGenre, BookId, BookName, BookPrice, Genre,
};
use kernel::KernelError;
use serde::Deserialize;

const GENRE_KEY: &str = "genre";

// Absent fields decode to zero values and are rejected by validation instead.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookRequest {
    name: String,
    price: f64,
    genre: i32,
    amount: i64,
}

impl BookRequest {
    pub fn decode(
        payload: Result<Json<BookRequest>, JsonRejection>,
    ) -> error_stack::Result<Self, KernelError> {
        payload.map(|Json(request)| request).map_err(|rejection| {
            Report::new(KernelError::InvalidInput).attach_printable(rejection.body_text())
        })
    }
}

#[derive(Debug)]
pub struct CreateBookRequest {
    book: BookRequest,
}

impl CreateBookRequest {
    pub fn new(book: BookRequest) -> Self {
        Self { book }
    }
}

#[derive(Debug)]
pub struct UpdateBookRequest {
    id: String,
    book: BookRequest,
}

impl UpdateBookRequest {
    pub fn new(id: String, book: BookRequest) -> Self {
        Self { id, book }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

/// Raw query pairs, in request order, repeated keys kept.
#[derive(Debug)]
pub struct GetAllBookRequest {
    pairs: Vec<(String, String)>,
}

impl GetAllBookRequest {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    pub fn decode(
        query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    ) -> error_stack::Result<Self, KernelError> {
        query.map(|Query(pairs)| Self::new(pairs)).map_err(|rejection| {
            Report::new(KernelError::InvalidFilter).attach_printable(rejection.body_text())
        })
    }
}

pub struct BookTransformer;

impl BookTransformer {
    fn id(raw: &str) -> error_stack::Result<BookId, KernelError> {
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(BookId::new(id)),
            _ => Err(Report::new(KernelError::InvalidIdentifier)
                .attach_printable(format!("{raw:?} is not a book id"))),
        }
    }

    fn genre(raw: &str) -> error_stack::Result<Genre, KernelError> {
        raw.parse::<i32>()
            .ok()
            .and_then(|genre| Genre::try_from(genre).ok())
            .ok_or_else(|| {
                Report::new(KernelError::InvalidFilter)
                    .attach_printable(format!("{raw:?} is not a genre"))
            })
    }

    fn draft(book: BookRequest) -> error_stack::Result<BookDraft, KernelError> {
        let draft = BookDraft::new(
            BookName::new(book.name),
            BookPrice::new(book.price),
            BookGenre::new(book.genre),
            BookAmount::new(book.amount),
        );
        draft.validate()?;
        Ok(draft)
    }
}

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateBookDto {
            draft: Self::draft(input.book)?,
        })
    }
}

impl TryIntake<UpdateBookRequest> for BookTransformer {
    type To = UpdateBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: UpdateBookRequest) -> Result<Self::To, Self::Error> {
        Ok(UpdateBookDto {
            id: Self::id(&input.id)?,
            draft: Self::draft(input.book)?,
        })
    }
}

impl TryIntake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: DeleteBookRequest) -> Result<Self::To, Self::Error> {
        Ok(DeleteBookDto {
            id: Self::id(&input.id)?,
        })
    }
}

impl TryIntake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: GetBookRequest) -> Result<Self::To, Self::Error> {
        Ok(GetBookDto {
            id: Self::id(&input.id)?,
        })
    }
}

impl TryIntake<GetAllBookRequest> for BookTransformer {
    type To = GetAllBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: GetAllBookRequest) -> Result<Self::To, Self::Error> {
        let genre = match input.pairs.as_slice() {
            [] => None,
            [(key, value)] if key == GENRE_KEY => Some(Self::genre(value)?),
            pairs => {
                return Err(Report::new(KernelError::InvalidFilter)
                    .attach_printable(format!("unsupported filter {pairs:?}")));
            }
        };
        Ok(GetAllBookDto {
            filter: BookFilter::new(genre),
        })
    }
}
