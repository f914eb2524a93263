use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookAmount(i64);

impl BookAmount {
    pub fn new(amount: impl Into<i64>) -> Self {
        Self(amount.into())
    }

    pub fn is_sold_out(&self) -> bool {
        self.0 == 0
    }
}
