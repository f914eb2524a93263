use kernel::prelude::entity::Genre;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GenreDto {
    pub id: i32,
    pub name: &'static str,
}

impl From<Genre> for GenreDto {
    fn from(value: Genre) -> Self {
        Self {
            id: value.id(),
            name: value.name(),
        }
    }
}

pub fn genres() -> Vec<GenreDto> {
    Genre::ALL.into_iter().map(GenreDto::from).collect()
}
