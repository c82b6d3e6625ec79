//! Fixed genre-to-titles suggestions shown while adding a book.
//!
//! Lookup is an exact, case-sensitive match on the genre string. Anything not
//! in the table gets [`NO_RECOMMENDATIONS`].

pub const NO_RECOMMENDATIONS: &str = "No recommendations available.";

const NONE_FOUND: &[&str] = &[NO_RECOMMENDATIONS];

const TABLE: &[(&str, &[&str])] = &[
    (
        "Fiction",
        &["The Great Gatsby", "1984", "To Kill a Mockingbird"],
    ),
    (
        "Non-Fiction",
        &["Sapiens", "Educated", "The Wright Brothers"],
    ),
    (
        "Fantasy",
        &["Harry Potter", "The Hobbit", "The Name of the Wind"],
    ),
    (
        "Mystery",
        &[
            "Gone Girl",
            "Sherlock Holmes",
            "The Girl with the Dragon Tattoo",
        ],
    ),
    (
        "Science Fiction",
        &["Dune", "Ender's Game", "The Martian"],
    ),
];

/// Suggested titles for `genre`, or the single-element sentinel list.
pub fn recommend(genre: &str) -> &'static [&'static str] {
    TABLE
        .iter()
        .find(|(known, _)| *known == genre)
        .map(|(_, titles)| *titles)
        .unwrap_or(NONE_FOUND)
}

/// Genres the table knows about, in table order.
pub fn known_genres() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(genre, _)| *genre)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mystery_has_three_suggestions() {
        assert_eq!(
            recommend("Mystery"),
            [
                "Gone Girl",
                "Sherlock Holmes",
                "The Girl with the Dragon Tattoo"
            ]
        );
    }

    #[test]
    fn unknown_genre_gets_sentinel() {
        assert_eq!(recommend("Horror"), [NO_RECOMMENDATIONS]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(recommend("fantasy"), [NO_RECOMMENDATIONS]);
        assert_eq!(recommend("Fantasy").len(), 3);
    }

    #[test]
    fn every_known_genre_resolves() {
        for genre in known_genres() {
            assert_ne!(recommend(genre), [NO_RECOMMENDATIONS]);
        }
    }
}
