use crate::controller::Exhaust;
use application::transfer::BookDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatedBookResponse {
    id: i64,
}

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: i64,
    name: String,
    price: f64,
    genre: i32,
    amount: i64,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        let BookDto {
            id,
            name,
            price,
            genre,
            amount,
        } = value;
        Self {
            id,
            name,
            price,
            genre,
            amount,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: &'static str,
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<()> for BookPresenter {
    type To = StatusResponse;
    fn emit(&self, _: ()) -> Self::To {
        StatusResponse { status: "ok" }
    }
}

impl Exhaust<i64> for BookPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: i64) -> Self::To {
        CreatedBookResponse { id: input }
    }
}

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse::from(input)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(BookResponse::from)
            .collect::<Vec<_>>();

        Json::from(result)
    }
}
