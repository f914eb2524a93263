mod amount;
mod draft;
mod filter;
mod genre;
mod id;
mod name;
mod price;

pub use self::{amount::*, draft::*, filter::*, genre::*, id::*, name::*, price::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    name: BookName,
    price: BookPrice,
    genre: BookGenre,
    amount: BookAmount,
}

impl Book {
    pub fn new(
        id: BookId,
        name: BookName,
        price: BookPrice,
        genre: BookGenre,
        amount: BookAmount,
    ) -> Self {
        Self {
            id,
            name,
            price,
            genre,
            amount,
        }
    }

    /// Persisted form of `draft` under the store-assigned `id`.
    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        let DestructBookDraft {
            name,
            price,
            genre,
            amount,
        } = draft.into_destruct();
        Self::new(id, name, price, genre, amount)
    }
}
