use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use time::Date;
use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{
    Author, AuthorId, Book, BookId, BookInstance, BookInstanceId, Genre, GenreId, Language,
    LanguageId, SelectLimit, SelectOffset, SessionId, User, UserId, VisitCount,
};
use kernel::KernelError;

pub use self::{
    author::*, book::*, book_instance::*, genre::*, language::*, session::*, user::*,
};

mod author;
mod book;
mod book_instance;
mod genre;
mod language;
mod session;
mod user;

/// Process-local catalog storage. Transactions are serialized behind one lock.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    store: Arc<Mutex<Store>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    genres: BTreeMap<GenreId, Genre>,
    languages: BTreeMap<LanguageId, Language>,
    authors: BTreeMap<AuthorId, Author>,
    books: BTreeMap<BookId, Book>,
    book_genres: BTreeSet<(BookId, GenreId)>,
    instances: BTreeMap<BookInstanceId, BookInstance>,
    users: BTreeMap<UserId, User>,
    sessions: BTreeMap<SessionId, (VisitCount, Date)>,
}

fn window<T>(
    items: impl IntoIterator<Item = T>,
    limit: &SelectLimit,
    offset: &SelectOffset,
) -> Vec<T> {
    let offset = usize::try_from(*offset.as_ref()).unwrap_or(0);
    let limit = usize::try_from(*limit.as_ref()).unwrap_or(0);
    items.into_iter().skip(offset).take(limit).collect()
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let guard = self.store.clone().lock_owned().await;
        let backup = Some(guard.clone());
        Ok(InMemoryTransaction { guard, backup })
    }
}

/// Holds the store lock until committed or rolled back. Dropping without commit rolls back.
pub struct InMemoryTransaction {
    guard: OwnedMutexGuard<Store>,
    backup: Option<Store>,
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(mut self) -> error_stack::Result<(), KernelError> {
        self.backup = None;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        if let Some(backup) = self.backup.take() {
            *self.guard = backup;
        }
    }
}

impl Deref for InMemoryTransaction {
    type Target = Store;
    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

impl DerefMut for InMemoryTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard
    }
}
