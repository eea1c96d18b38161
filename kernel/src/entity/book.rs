mod id;
mod isbn;
mod summary;
mod title;

pub use self::{id::*, isbn::*, summary::*, title::*};
use crate::entity::{AuthorId, Genre, LanguageId};
use destructure::Destructure;
use vodca::References;

const DISPLAYED_GENRES: usize = 3;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    summary: BookSummary,
    isbn: Isbn,
    author_id: AuthorId,
    language_id: Option<LanguageId>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        summary: BookSummary,
        isbn: Isbn,
        author_id: AuthorId,
        language_id: Option<LanguageId>,
    ) -> Self {
        Self {
            id,
            title,
            summary,
            isbn,
            author_id,
            language_id,
        }
    }
}

/// Names of the first three genres joined by ", ".
pub fn display_genre(genres: &[Genre]) -> String {
    genres
        .iter()
        .take(DISPLAYED_GENRES)
        .map(|genre| genre.name().as_ref().as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use crate::entity::{display_genre, Genre, GenreId, GenreName};

    fn genre(name: &str) -> Genre {
        Genre::new(GenreId::new(Uuid::new_v4()), GenreName::new(name))
    }

    #[test]
    fn display_genre_takes_at_most_three() {
        let genres = ["Fantasy", "Young Adult", "Drama", "Crime"].map(genre);
        assert_eq!(display_genre(&genres), "Fantasy, Young Adult, Drama");
        assert_eq!(display_genre(&genres[..1]), "Fantasy");
        assert_eq!(display_genre(&[]), "");
    }
}
