use destructure::Destructure;
use error_stack::Report;
use vodca::References;

use crate::entity::{BookAmount, BookGenre, BookName, BookPrice, Genre};
use crate::KernelError;

const NAME_MAX_LENGTH: usize = 99;

/// Book contents as submitted by a client, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct BookDraft {
    name: BookName,
    price: BookPrice,
    genre: BookGenre,
    amount: BookAmount,
}

impl BookDraft {
    pub fn new(name: BookName, price: BookPrice, genre: BookGenre, amount: BookAmount) -> Self {
        Self {
            name,
            price,
            genre,
            amount,
        }
    }

    /// Accepts the draft iff the name has 1..=99 characters, price and amount
    /// are non-negative and genre names a known [`Genre`].
    pub fn validate(&self) -> error_stack::Result<(), KernelError> {
        let name: &String = self.name.as_ref();
        let length = name.chars().count();
        if length == 0 || length > NAME_MAX_LENGTH {
            return Err(Report::new(KernelError::InvalidInput).attach_printable(format!(
                "name must have 1 to {NAME_MAX_LENGTH} characters, got {length}"
            )));
        }
        let price = f64::from(self.price);
        if price.is_nan() || price < 0.0 {
            return Err(Report::new(KernelError::InvalidInput)
                .attach_printable(format!("price must not be negative, got {price}")));
        }
        let genre = i32::from(self.genre);
        if Genre::try_from(genre).is_err() {
            return Err(Report::new(KernelError::InvalidInput)
                .attach_printable(format!("unknown genre {genre}")));
        }
        let amount = i64::from(self.amount);
        if amount < 0 {
            return Err(Report::new(KernelError::InvalidInput)
                .attach_printable(format!("amount must not be negative, got {amount}")));
        }
        Ok(())
    }
}
