use crate::controller::Exhaust;
use application::transfer::GenreDto;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GenreResponse {
    id: i32,
    name: &'static str,
}

pub struct GenrePresenter;

impl Exhaust<Vec<GenreDto>> for GenrePresenter {
    type To = Json<Vec<GenreResponse>>;
    fn emit(&self, input: Vec<GenreDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(|GenreDto { id, name }| GenreResponse { id, name })
            .collect::<Vec<_>>();
        Json::from(result)
    }
}
