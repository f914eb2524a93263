mod book;
mod genre;

pub use self::{book::*, genre::*};

use crate::handler::{AppModule, BookApplication};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router<D: BookApplication>(module: AppModule<D>) -> Router {
    Router::<AppModule<D>>::new()
        .route_book()
        .route_genre()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new())
        .with_state(module)
}

#[cfg(test)]
mod test {
    use super::router;
    use crate::handler::AppModule;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use driver::database::InMemoryDatabase;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppModule::new(InMemoryDatabase::new()))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(app: &Router, body: &str) -> (StatusCode, Value) {
        send(app, Method::POST, "/books", Some(body)).await
    }

    #[tokio::test]
    async fn create_then_conflict() {
        let app = app();
        let book = r#"{"name": "Book1", "price": 0, "genre": 1, "amount": 0}"#;

        let (status, body) = create(&app, book).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1}));

        let (status, body) = create(&app, book).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({"error": "book name is not unique"}));
    }

    #[tokio::test]
    async fn invalid_payloads_never_reach_the_store() {
        let app = app();
        let payloads = [
            r#"{"name": "hello", "price": 67.88, "genre": 6, "amount": 7}"#,
            r#"{"price": 67.88, "genre": 1, "amount": 5}"#,
            r#"{"name": "hello", "price": 67.88, "amount": 5}"#,
            r#"{"name": "hello", "price": -1, "genre": 1, "amount": 5}"#,
            r#"{"name": "hello", "price": 1, "genre": "1", "amount": 5}"#,
            r#"{"name": "hello""#,
        ];
        for payload in payloads {
            let (status, body) = create(&app, payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
            assert_eq!(body, json!({"error": "invalid input"}));
        }

        let (status, body) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn amount_has_no_upper_bound() {
        let app = app();
        let (status, body) = create(
            &app,
            r#"{"name": "warehouse", "price": 1, "genre": 1, "amount": 3000000000}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1}));

        let (status, body) = send(&app, Method::GET, "/books/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amount"], json!(3_000_000_000_i64));
    }

    #[tokio::test]
    async fn get_by_id() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/books/999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "book not found"}));

        let (status, body) = send(&app, Method::GET, "/books/knekndijf", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "invalid id"}));

        create(&app, r#"{"name": "sold out", "price": 5.5, "genre": 2, "amount": 0}"#).await;
        let (status, body) = send(&app, Method::GET, "/books/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": 1, "name": "sold out", "price": 5.5, "genre": 2, "amount": 0})
        );
    }

    #[tokio::test]
    async fn list_with_filter() {
        let app = app();
        create(&app, r#"{"name": "a", "price": 1, "genre": 1, "amount": 1}"#).await;
        create(&app, r#"{"name": "b", "price": 1, "genre": 2, "amount": 1}"#).await;
        create(&app, r#"{"name": "c", "price": 1, "genre": 2, "amount": 0}"#).await;

        let (status, body) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(status, StatusCode::OK);
        let names = body
            .as_array()
            .unwrap()
            .iter()
            .map(|book| book["name"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b"]);

        let (status, body) = send(&app, Method::GET, "/books?genre=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"id": 2, "name": "b", "price": 1.0, "genre": 2, "amount": 1}])
        );

        for uri in ["/books?foo=7", "/books?genre=0", "/books?genre=2&genre=3"] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body, json!({"error": "invalid filter condition"}));
        }
    }

    #[tokio::test]
    async fn update_and_delete() {
        let app = app();
        create(&app, r#"{"name": "a", "price": 1, "genre": 1, "amount": 1}"#).await;
        let update = r#"{"id": 42, "name": "renamed", "price": 2.5, "genre": 3, "amount": 4}"#;

        let (status, body) = send(&app, Method::PUT, "/books/1", Some(update)).await;
        assert_eq!(status, StatusCode::OK);
        let expected = json!({"id": 1, "name": "renamed", "price": 2.5, "genre": 3, "amount": 4});
        assert_eq!(body, expected);
        let (_, body) = send(&app, Method::GET, "/books/1", None).await;
        assert_eq!(body, expected);

        let (status, _) = send(&app, Method::PUT, "/books/2", Some(update)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let invalid = r#"{"name": "", "price": 2.5, "genre": 3, "amount": 4}"#;
        let (status, _) = send(&app, Method::PUT, "/books/1", Some(invalid)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(&app, Method::PUT, "/books/x", Some(update)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, Method::DELETE, "/books/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
        let (status, _) = send(&app, Method::DELETE, "/books/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::GET, "/books/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn lists_genres() {
        let (status, body) = send(&app(), Method::GET, "/genres", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": 1, "name": "Adventure"},
                {"id": 2, "name": "Classics"},
                {"id": 3, "name": "Fantasy"}
            ])
        );
    }
}
