use crate::controller::Controller;
use crate::handler::AppModule;
use crate::response::{GenrePresenter, GenreResponse};
use application::transfer::genres;
use axum::routing::get;
use axum::{Json, Router};
use std::convert::Infallible;

pub trait GenreRouter {
    fn route_genre(self) -> Self;
}

impl<D: Send + Sync + 'static> GenreRouter for Router<AppModule<D>> {
    fn route_genre(self) -> Self {
        self.route("/genres", get(get_genres))
    }
}

async fn get_genres() -> Result<Json<Vec<GenreResponse>>, Infallible> {
    Controller::new((), GenrePresenter)
        .bypass(|| async { Ok::<_, Infallible>(genres()) })
        .await
}
