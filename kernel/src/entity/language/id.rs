use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct LanguageId(Uuid);

impl LanguageId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
