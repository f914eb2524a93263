use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Raw genre column. Only values naming a [`Genre`](crate::entity::Genre) pass validation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookGenre(i32);

impl BookGenre {
    pub fn new(genre: impl Into<i32>) -> Self {
        Self(genre.into())
    }
}
