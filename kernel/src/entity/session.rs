use serde::{Deserialize, Serialize};
use time::{Date, Duration};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

/// Sessions not seen for this long are dropped along with their counter.
pub const SESSION_LIFETIME: Duration = Duration::days(14);

/// Sessions last seen before this day have expired as of `today`.
pub fn session_expiry(today: Date) -> Date {
    today.saturating_sub(SESSION_LIFETIME)
}

/// Identifies one browser session; the visit counter lives as long as the session.
#[derive(
    Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

#[derive(
    Debug, Clone, Copy, Default, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct VisitCount(i64);

impl VisitCount {
    pub fn new(count: impl Into<i64>) -> Self {
        Self(count.into())
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}
