use error_stack::Report;

use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::prelude::entity::{User, UserId};
use kernel::KernelError;

use crate::transfer::AuthenticateDto;

#[async_trait::async_trait]
pub trait AuthenticateService: 'static + Sync + Send + DependOnUserQuery {
    /// Resolves a presented identity to a known user. Unknown identities are unauthenticated.
    async fn authenticate(&self, dto: AuthenticateDto) -> error_stack::Result<User, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let id = UserId::new(dto.id);
        self.user_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Unauthenticated)
                    .attach_printable(format!("Unknown user {}", dto.id))
            })
    }
}

impl<T> AuthenticateService for T where T: DependOnUserQuery {}
