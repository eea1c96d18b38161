use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct BookInstanceId(Uuid);

impl BookInstanceId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
