use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    CanMarkReturned,
    AddAuthor,
    ChangeAuthor,
    DeleteAuthor,
    AddBook,
    #[serde(rename = "add_bookinstance")]
    AddBookInstance,
    AddGenre,
    AddLanguage,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::CanMarkReturned => "can_mark_returned",
            Capability::AddAuthor => "add_author",
            Capability::ChangeAuthor => "change_author",
            Capability::DeleteAuthor => "delete_author",
            Capability::AddBook => "add_book",
            Capability::AddBookInstance => "add_bookinstance",
            Capability::AddGenre => "add_genre",
            Capability::AddLanguage => "add_language",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = Report<KernelError>;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "can_mark_returned" => Ok(Capability::CanMarkReturned),
            "add_author" => Ok(Capability::AddAuthor),
            "change_author" => Ok(Capability::ChangeAuthor),
            "delete_author" => Ok(Capability::DeleteAuthor),
            "add_book" => Ok(Capability::AddBook),
            "add_bookinstance" => Ok(Capability::AddBookInstance),
            "add_genre" => Ok(Capability::AddGenre),
            "add_language" => Ok(Capability::AddLanguage),
            other => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Unknown capability: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Capabilities(BTreeSet<Capability>);

impl Capabilities {
    /// Builds the set from stored names, skipping names this build does not know.
    pub fn from_names<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        Self(
            names
                .into_iter()
                .filter_map(|name| name.as_ref().parse::<Capability>().ok())
                .collect(),
        )
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|capability| capability.to_string()).collect()
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<T: IntoIterator<Item = Capability>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{Capabilities, Capability};

    #[test]
    fn unknown_names_are_skipped() {
        let capabilities = Capabilities::from_names(["can_mark_returned", "fly", "delete_author"]);
        assert!(capabilities.contains(Capability::CanMarkReturned));
        assert!(capabilities.contains(Capability::DeleteAuthor));
        assert!(!capabilities.contains(Capability::AddBook));
        assert_eq!(
            capabilities.names(),
            vec!["can_mark_returned".to_string(), "delete_author".to_string()]
        );
    }
}
