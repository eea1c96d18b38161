mod id;
mod lifespan;
mod name;

pub use self::{id::*, lifespan::*, name::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Author {
    id: AuthorId,
    first_name: FirstName,
    last_name: LastName,
    lifespan: Lifespan,
}

impl Author {
    pub fn new(id: AuthorId, first_name: FirstName, last_name: LastName, lifespan: Lifespan) -> Self {
        Self {
            id,
            first_name,
            last_name,
            lifespan,
        }
    }

    /// "Last, First" as shown in listings.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name.as_ref(), self.first_name.as_ref())
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use crate::entity::{Author, AuthorId, FirstName, LastName, Lifespan};

    #[test]
    fn display_name_is_last_then_first() {
        let author = Author::new(
            AuthorId::new(Uuid::new_v4()),
            FirstName::new("George"),
            LastName::new("Orwell"),
            Lifespan::unknown(),
        );
        assert_eq!(author.display_name(), "Orwell, George");
    }
}
