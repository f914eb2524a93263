use vodca::References;

use crate::entity::{Book, Genre};

/// Listing restriction. Sold out books are never listed, whatever the filter.
#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct BookFilter {
    genre: Option<Genre>,
}

impl BookFilter {
    pub fn new(genre: Option<Genre>) -> Self {
        Self { genre }
    }

    pub fn matches(&self, book: &Book) -> bool {
        if book.amount().is_sold_out() {
            return false;
        }
        match self.genre {
            None => true,
            Some(genre) => i32::from(*book.genre()) == genre.id(),
        }
    }
}
