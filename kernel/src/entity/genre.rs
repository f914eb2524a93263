/// Closed set of genres a book may belong to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Genre {
    Adventure,
    Classics,
    Fantasy,
}

impl Genre {
    pub const ALL: [Genre; 3] = [Genre::Adventure, Genre::Classics, Genre::Fantasy];

    pub fn id(&self) -> i32 {
        match self {
            Genre::Adventure => 1,
            Genre::Classics => 2,
            Genre::Fantasy => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Genre::Adventure => "Adventure",
            Genre::Classics => "Classics",
            Genre::Fantasy => "Fantasy",
        }
    }
}

impl TryFrom<i32> for Genre {
    type Error = i32;
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.id() == value)
            .ok_or(value)
    }
}

#[cfg(test)]
mod test {
    use super::Genre;

    #[test]
    fn only_known_ids_convert() {
        assert_eq!(Genre::try_from(1), Ok(Genre::Adventure));
        assert_eq!(Genre::try_from(2), Ok(Genre::Classics));
        assert_eq!(Genre::try_from(3), Ok(Genre::Fantasy));
        assert_eq!(Genre::try_from(0), Err(0));
        assert_eq!(Genre::try_from(4), Err(4));
        assert_eq!(Genre::try_from(-1), Err(-1));
    }

    #[test]
    fn id_round_trips() {
        for genre in Genre::ALL {
            assert_eq!(Genre::try_from(genre.id()), Ok(genre));
        }
    }
}
