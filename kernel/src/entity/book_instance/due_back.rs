use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct DueBack(Date);

impl DueBack {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
