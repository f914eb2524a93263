use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::{AppModule, BookApplication};
use crate::request::{
    BookRequest, BookTransformer, CreateBookRequest, DeleteBookRequest, GetAllBookRequest,
    GetBookRequest, UpdateBookRequest,
};
use crate::response::{BookPresenter, BookResponse, CreatedBookResponse, StatusResponse};
use application::service::{
    CreateBookService, DeleteBookService, GetBookService, GetBooksService, UpdateBookService,
};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl<D: BookApplication> BookRouter for Router<AppModule<D>> {
    fn route_book(self) -> Self {
        self.route("/books", get(get_books::<D>).post(create_book::<D>))
            .route(
                "/books/:id",
                get(get_book::<D>)
                    .put(update_book::<D>)
                    .delete(delete_book::<D>),
            )
    }
}

async fn get_books<D: BookApplication>(
    State(module): State<AppModule<D>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<BookResponse>>, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .try_intake(GetAllBookRequest::decode(query)?)?
        .handle(|dto| async move { module.database().get_books(dto).await })
        .await
        .map_err(ErrorStatus::from)
}

async fn get_book<D: BookApplication>(
    State(module): State<AppModule<D>>,
    Path(id): Path<String>,
) -> Result<BookResponse, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .try_intake(GetBookRequest::new(id))?
        .handle(|dto| async move { module.database().get_book(dto).await })
        .await
        .map_err(ErrorStatus::from)
}

async fn create_book<D: BookApplication>(
    State(module): State<AppModule<D>>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<CreatedBookResponse, ErrorStatus> {
    let book = BookRequest::decode(payload)?;
    Controller::new(BookTransformer, BookPresenter)
        .try_intake(CreateBookRequest::new(book))?
        .handle(|dto| async move { module.database().create_book(dto).await })
        .await
        .map_err(ErrorStatus::from)
}

async fn update_book<D: BookApplication>(
    State(module): State<AppModule<D>>,
    Path(id): Path<String>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<BookResponse, ErrorStatus> {
    let book = BookRequest::decode(payload)?;
    Controller::new(BookTransformer, BookPresenter)
        .try_intake(UpdateBookRequest::new(id, book))?
        .handle(|dto| async move { module.database().update_book(dto).await })
        .await
        .map_err(ErrorStatus::from)
}

async fn delete_book<D: BookApplication>(
    State(module): State<AppModule<D>>,
    Path(id): Path<String>,
) -> Result<StatusResponse, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .try_intake(DeleteBookRequest::new(id))?
        .handle(|dto| async move { module.database().delete_book(dto).await })
        .await
        .map_err(ErrorStatus::from)
}
