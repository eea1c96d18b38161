use std::ops::Deref;
use std::sync::Arc;

use driver::clock::SystemClock;
use driver::database::{
    PostgresAuthorRepository, PostgresBookInstanceRepository, PostgresBookRepository,
    PostgresDatabase, PostgresGenreRepository, PostgresLanguageRepository,
    PostgresSessionRepository, PostgresUserRepository,
};
use kernel::interface::clock::DependOnClock;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{
    DependOnAuthorQuery, DependOnBookInstanceQuery, DependOnBookQuery, DependOnGenreQuery,
    DependOnLanguageQuery, DependOnUserQuery,
};
use kernel::interface::update::{
    DependOnAuthorModifier, DependOnBookInstanceModifier, DependOnBookModifier,
    DependOnGenreModifier, DependOnLanguageModifier, DependOnSessionModifier,
};
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    pgpool: PostgresDatabase,
    clock: SystemClock,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;
        pgpool.migrate().await?;

        Ok(Self {
            pgpool,
            clock: SystemClock,
        })
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.pgpool
    }
}

impl DependOnClock for Handler {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl DependOnGenreQuery for Handler {
    type GenreQuery = PostgresGenreRepository;
    fn genre_query(&self) -> &Self::GenreQuery {
        &PostgresGenreRepository
    }
}

impl DependOnGenreModifier for Handler {
    type GenreModifier = PostgresGenreRepository;
    fn genre_modifier(&self) -> &Self::GenreModifier {
        &PostgresGenreRepository
    }
}

impl DependOnLanguageQuery for Handler {
    type LanguageQuery = PostgresLanguageRepository;
    fn language_query(&self) -> &Self::LanguageQuery {
        &PostgresLanguageRepository
    }
}

impl DependOnLanguageModifier for Handler {
    type LanguageModifier = PostgresLanguageRepository;
    fn language_modifier(&self) -> &Self::LanguageModifier {
        &PostgresLanguageRepository
    }
}

impl DependOnAuthorQuery for Handler {
    type AuthorQuery = PostgresAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &PostgresAuthorRepository
    }
}

impl DependOnAuthorModifier for Handler {
    type AuthorModifier = PostgresAuthorRepository;
    fn author_modifier(&self) -> &Self::AuthorModifier {
        &PostgresAuthorRepository
    }
}

impl DependOnBookQuery for Handler {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier for Handler {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

impl DependOnBookInstanceQuery for Handler {
    type BookInstanceQuery = PostgresBookInstanceRepository;
    fn book_instance_query(&self) -> &Self::BookInstanceQuery {
        &PostgresBookInstanceRepository
    }
}

impl DependOnBookInstanceModifier for Handler {
    type BookInstanceModifier = PostgresBookInstanceRepository;
    fn book_instance_modifier(&self) -> &Self::BookInstanceModifier {
        &PostgresBookInstanceRepository
    }
}

impl DependOnUserQuery for Handler {
    type UserQuery = PostgresUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &PostgresUserRepository
    }
}

impl DependOnSessionModifier for Handler {
    type SessionModifier = PostgresSessionRepository;
    fn session_modifier(&self) -> &Self::SessionModifier {
        &PostgresSessionRepository
    }
}
