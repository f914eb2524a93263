use application::service::{
    CreateBookService, DeleteBookService, GetBookService, GetBooksService, UpdateBookService,
};
use std::ops::Deref;
use std::sync::Arc;

/// Every book operation the routes need from a backend.
pub trait BookApplication:
    GetBooksService + GetBookService + CreateBookService + UpdateBookService + DeleteBookService
{
}

impl<T> BookApplication for T where
    T: GetBooksService + GetBookService + CreateBookService + UpdateBookService + DeleteBookService
{
}

pub struct AppModule<D>(Arc<Handler<D>>);

impl<D> AppModule<D> {
    pub fn new(database: D) -> Self {
        Self(Arc::new(Handler::new(database)))
    }
}

impl<D> Clone for AppModule<D> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<D> Deref for AppModule<D> {
    type Target = Handler<D>;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler<D> {
    database: D,
}

impl<D> Handler<D> {
    pub fn new(database: D) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &D {
        &self.database
    }
}
