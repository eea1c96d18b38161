use uuid::Uuid;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::event::{Applier, InventoryEvent};
use kernel::interface::query::{
    BookInstanceQuery, BookQuery, DependOnBookInstanceQuery, DependOnBookQuery,
    DependOnUserQuery, UserQuery,
};
use kernel::interface::update::{BookInstanceModifier, DependOnBookInstanceModifier};
use kernel::prelude::entity::{
    BookId, BookInstance, BookInstanceId, Capability, DueDateWindow, Imprint, User, UserId,
};
use kernel::KernelError;

use crate::service::not_found;
use crate::transfer::{
    BookInstanceDto, CheckoutDto, CreateBookInstanceDto, GetBookInstanceDto, ProposeRenewalDto,
    RenewBookInstanceDto, RenewalProposalDto, ReserveDto, TransitionDto,
};

#[async_trait::async_trait]
pub trait GetBookInstanceService:
    'static + Sync + Send + DependOnBookInstanceQuery + DependOnClock
{
    async fn get_book_instance(
        &self,
        dto: GetBookInstanceDto,
    ) -> error_stack::Result<BookInstanceDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let instance = self
            .book_instance_query()
            .find_by_id(&mut connection, &BookInstanceId::new(dto.id))
            .await?
            .ok_or_else(|| not_found("book instance", dto.id))?;
        Ok(BookInstanceDto::new(instance, self.clock().today()))
    }
}

impl<T> GetBookInstanceService for T where T: DependOnBookInstanceQuery + DependOnClock {}

#[async_trait::async_trait]
pub trait CreateBookInstanceService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookInstanceModifier + DependOnClock
{
    async fn create_book_instance(
        &self,
        dto: CreateBookInstanceDto,
    ) -> error_stack::Result<BookInstanceDto, KernelError> {
        dto.actor.require(Capability::AddBookInstance)?;
        let book_id = BookId::new(dto.book_id);
        let instance = BookInstance::intake(
            BookInstanceId::new(Uuid::new_v4()),
            book_id.clone(),
            Imprint::parse(dto.imprint)?,
            dto.status.unwrap_or_default(),
        );

        let mut connection = self.database_connection().transact().await?;
        if self
            .book_query()
            .find_by_id(&mut connection, &book_id)
            .await?
            .is_none()
        {
            return Err(not_found("book", dto.book_id));
        }
        self.book_instance_modifier()
            .create(&mut connection, &instance)
            .await?;
        connection.commit().await?;

        Ok(BookInstanceDto::new(instance, self.clock().today()))
    }
}

impl<T> CreateBookInstanceService for T where
    T: DependOnBookQuery + DependOnBookInstanceModifier + DependOnClock
{
}

#[async_trait::async_trait]
pub trait RenewBookInstanceService:
    'static
    + Sync
    + Send
    + DependOnBookInstanceQuery
    + DependOnBookInstanceModifier
    + DependOnClock
{
    /// Opens the renewal form with the latest allowed date filled in.
    async fn propose_renewal(
        &self,
        dto: ProposeRenewalDto,
    ) -> error_stack::Result<RenewalProposalDto, KernelError> {
        dto.actor.require(Capability::CanMarkReturned)?;
        let mut connection = self.database_connection().transact().await?;
        let instance = self
            .book_instance_query()
            .find_by_id(&mut connection, &BookInstanceId::new(dto.id))
            .await?
            .ok_or_else(|| not_found("book instance", dto.id))?;
        let today = self.clock().today();
        let proposed = DueDateWindow::renewal(today).proposed();
        Ok(RenewalProposalDto {
            instance: BookInstanceDto::new(instance, today),
            proposed_due_back: proposed.into(),
        })
    }

    /// Moves the due date of one copy. The status is left as it was.
    #[tracing::instrument(skip_all, fields(instance = %dto.id))]
    async fn renew(
        &self,
        dto: RenewBookInstanceDto,
    ) -> error_stack::Result<BookInstanceDto, KernelError> {
        dto.actor.require(Capability::CanMarkReturned)?;
        let mut connection = self.database_connection().transact().await?;
        let mut instance = self
            .book_instance_query()
            .find_by_id(&mut connection, &BookInstanceId::new(dto.id))
            .await?
            .ok_or_else(|| not_found("book instance", dto.id))?;

        let today = self.clock().today();
        let due_back = DueDateWindow::renewal(today)
            .check(dto.due_back)
            .map_err(|report| {
                tracing::warn!("Rejected renewal of {} to {}", dto.id, dto.due_back);
                report
            })?;
        instance.apply(InventoryEvent::Renewed { due_back })?;
        self.book_instance_modifier()
            .update(&mut connection, &instance)
            .await?;
        connection.commit().await?;

        Ok(BookInstanceDto::new(instance, today))
    }
}

impl<T> RenewBookInstanceService for T where
    T: DependOnBookInstanceQuery + DependOnBookInstanceModifier + DependOnClock
{
}

#[async_trait::async_trait]
pub trait InventoryService:
    'static
    + Sync
    + Send
    + DependOnBookInstanceQuery
    + DependOnBookInstanceModifier
    + DependOnUserQuery
    + DependOnClock
{
    async fn checkout(&self, dto: CheckoutDto) -> error_stack::Result<BookInstanceDto, KernelError> {
        dto.actor.require(Capability::CanMarkReturned)?;
        let due_back =
            DueDateWindow::loan(self.clock().today()).check_or_propose(dto.due_back)?;
        let borrower = self.find_borrower(dto.borrower).await?;
        let event = InventoryEvent::CheckedOut { borrower, due_back };
        self.apply_inventory_event(&dto.actor, dto.id, event).await
    }

    async fn mark_returned(
        &self,
        dto: TransitionDto,
    ) -> error_stack::Result<BookInstanceDto, KernelError> {
        self.apply_inventory_event(&dto.actor, dto.id, InventoryEvent::Returned)
            .await
    }

    async fn reserve(&self, dto: ReserveDto) -> error_stack::Result<BookInstanceDto, KernelError> {
        dto.actor.require(Capability::CanMarkReturned)?;
        let hold_until =
            DueDateWindow::hold(self.clock().today()).check_or_propose(dto.hold_until)?;
        let borrower = self.find_borrower(dto.borrower).await?;
        let event = InventoryEvent::Reserved {
            borrower,
            hold_until,
        };
        self.apply_inventory_event(&dto.actor, dto.id, event).await
    }

    async fn release(&self, dto: TransitionDto) -> error_stack::Result<BookInstanceDto, KernelError> {
        self.apply_inventory_event(&dto.actor, dto.id, InventoryEvent::Released)
            .await
    }

    async fn send_to_maintenance(
        &self,
        dto: TransitionDto,
    ) -> error_stack::Result<BookInstanceDto, KernelError> {
        self.apply_inventory_event(&dto.actor, dto.id, InventoryEvent::SentToMaintenance)
            .await
    }

    async fn find_borrower(&self, id: Uuid) -> error_stack::Result<UserId, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let user = self
            .user_query()
            .find_by_id(&mut connection, &UserId::new(id))
            .await?
            .ok_or_else(|| not_found("user", id))?;
        Ok(user.id().clone())
    }

    /// Loads one copy, folds `event` into it and stores the result. Refused events change nothing.
    #[tracing::instrument(skip_all, fields(instance = %id, event = event.name()))]
    async fn apply_inventory_event(
        &self,
        actor: &User,
        id: Uuid,
        event: InventoryEvent,
    ) -> error_stack::Result<BookInstanceDto, KernelError> {
        actor.require(Capability::CanMarkReturned)?;
        let mut connection = self.database_connection().transact().await?;
        let mut instance = self
            .book_instance_query()
            .find_by_id(&mut connection, &BookInstanceId::new(id))
            .await?
            .ok_or_else(|| not_found("book instance", id))?;
        let name = event.name();
        instance.apply(event)?;
        self.book_instance_modifier()
            .update(&mut connection, &instance)
            .await?;
        connection.commit().await?;

        tracing::info!("Book instance {} {}", id, name);
        Ok(BookInstanceDto::new(instance, self.clock().today()))
    }
}

impl<T> InventoryService for T where
    T: DependOnBookInstanceQuery
        + DependOnBookInstanceModifier
        + DependOnUserQuery
        + DependOnClock
{
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use time::Duration;

    use kernel::prelude::entity::{Capability, LoanStatus};
    use kernel::{KernelError, KernelReportExt};

    use crate::service::{InventoryService, RenewBookInstanceService};
    use crate::test::TestModule;
    use crate::transfer::{
        CheckoutDto, ProposeRenewalDto, RenewBookInstanceDto, ReserveDto, TransitionDto,
    };

    #[tokio::test]
    async fn renew_accepts_every_date_in_window() -> error_stack::Result<(), KernelError> {
        let today = date!(2024 - 01 - 01);
        let module = TestModule::new(today);
        let librarian = module.librarian().await?;
        let reader = module.user("reader", []).await?;
        let author = module.author("Orwell").await?;
        let book = module.book(&author, "0451524934").await?;
        let instance = module
            .instance(&book, LoanStatus::OnLoan, Some(today), Some(&reader))
            .await?;

        for days in 0..=28 {
            let due_back = today + Duration::days(days);
            let renewed = module
                .renew(RenewBookInstanceDto {
                    actor: librarian.clone(),
                    id: *instance.id().as_ref(),
                    due_back,
                })
                .await?;
            assert_eq!(renewed.due_back, Some(due_back));
            assert_eq!(renewed.status, LoanStatus::OnLoan);
            let stored = module.stored_instance(&instance).await?.unwrap();
            assert_eq!(stored.due_back().as_ref().map(|d| *d.as_ref()), Some(due_back));
        }
        Ok(())
    }

    #[tokio::test]
    async fn renew_rejects_dates_outside_window() -> error_stack::Result<(), KernelError> {
        let today = date!(2024 - 01 - 01);
        let module = TestModule::new(today);
        let librarian = module.librarian().await?;
        let reader = module.user("reader", []).await?;
        let author = module.author("Orwell").await?;
        let book = module.book(&author, "0451524934").await?;
        let instance = module
            .instance(&book, LoanStatus::OnLoan, Some(today), Some(&reader))
            .await?;

        let cases = [
            (date!(2023 - 12 - 31), "Invalid date - renewal in past"),
            (date!(2024 - 01 - 30), "Invalid date - renewal more than 4 weeks ahead"),
            (date!(2024 - 03 - 01), "Invalid date - renewal more than 4 weeks ahead"),
        ];
        for (due_back, message) in cases {
            let error = module
                .renew(RenewBookInstanceDto {
                    actor: librarian.clone(),
                    id: *instance.id().as_ref(),
                    due_back,
                })
                .await
                .unwrap_err();
            assert_eq!(*error.current_context(), KernelError::Validation);
            assert_eq!(error.field_errors()[0].message(), message);
            let stored = module.stored_instance(&instance).await?.unwrap();
            assert_eq!(stored, instance);
        }
        Ok(())
    }

    #[tokio::test]
    async fn renew_without_capability_is_denied() -> error_stack::Result<(), KernelError> {
        let today = date!(2024 - 01 - 01);
        let module = TestModule::new(today);
        let reader = module.user("reader", [Capability::AddBook]).await?;
        let author = module.author("Orwell").await?;
        let book = module.book(&author, "0451524934").await?;
        let instance = module
            .instance(&book, LoanStatus::OnLoan, Some(today), Some(&reader))
            .await?;

        for due_back in [date!(2024 - 01 - 15), date!(2023 - 01 - 01)] {
            let error = module
                .renew(RenewBookInstanceDto {
                    actor: reader.clone(),
                    id: *instance.id().as_ref(),
                    due_back,
                })
                .await
                .unwrap_err();
            assert_eq!(*error.current_context(), KernelError::PermissionDenied);
        }
        assert_eq!(module.stored_instance(&instance).await?, Some(instance));
        Ok(())
    }

    #[tokio::test]
    async fn renew_missing_instance_is_not_found() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(date!(2024 - 01 - 01));
        let librarian = module.librarian().await?;
        let error = module
            .renew(RenewBookInstanceDto {
                actor: librarian,
                id: uuid::Uuid::new_v4(),
                due_back: date!(2024 - 01 - 15),
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn proposal_defaults_to_four_weeks() -> error_stack::Result<(), KernelError> {
        let today = date!(2024 - 01 - 01);
        let module = TestModule::new(today);
        let librarian = module.librarian().await?;
        let author = module.author("Orwell").await?;
        let book = module.book(&author, "0451524934").await?;
        let instance = module
            .instance(&book, LoanStatus::OnLoan, Some(today), Some(&librarian))
            .await?;
        let proposal = module
            .propose_renewal(ProposeRenewalDto {
                actor: librarian,
                id: *instance.id().as_ref(),
            })
            .await?;
        assert_eq!(proposal.proposed_due_back, date!(2024 - 01 - 29));
        assert_eq!(proposal.instance.id, *instance.id().as_ref());
        Ok(())
    }

    #[tokio::test]
    async fn checkout_and_return_cycle() -> error_stack::Result<(), KernelError> {
        let today = date!(2024 - 01 - 01);
        let module = TestModule::new(today);
        let librarian = module.librarian().await?;
        let reader = module.user("reader", []).await?;
        let author = module.author("Orwell").await?;
        let book = module.book(&author, "0451524934").await?;
        let instance = module
            .instance(&book, LoanStatus::Available, None, None)
            .await?;
        let id = *instance.id().as_ref();

        let loaned = module
            .checkout(CheckoutDto {
                actor: librarian.clone(),
                id,
                borrower: *reader.id().as_ref(),
                due_back: None,
            })
            .await?;
        assert_eq!(loaned.status, LoanStatus::OnLoan);
        assert_eq!(loaned.due_back, Some(date!(2024 - 01 - 29)));
        assert_eq!(loaned.borrower, Some(*reader.id().as_ref()));

        let again = module
            .checkout(CheckoutDto {
                actor: librarian.clone(),
                id,
                borrower: *reader.id().as_ref(),
                due_back: None,
            })
            .await
            .unwrap_err();
        assert_eq!(*again.current_context(), KernelError::InvalidState);

        let returned = module
            .mark_returned(TransitionDto {
                actor: librarian.clone(),
                id,
            })
            .await?;
        assert_eq!(returned.status, LoanStatus::Available);
        assert_eq!(returned.due_back, None);
        assert_eq!(returned.borrower, None);
        Ok(())
    }

    #[tokio::test]
    async fn reservation_is_picked_up_by_its_holder_only() -> error_stack::Result<(), KernelError>
    {
        let today = date!(2024 - 01 - 01);
        let module = TestModule::new(today);
        let librarian = module.librarian().await?;
        let holder = module.user("holder", []).await?;
        let other = module.user("other", []).await?;
        let author = module.author("Orwell").await?;
        let book = module.book(&author, "0451524934").await?;
        let instance = module
            .instance(&book, LoanStatus::Available, None, None)
            .await?;
        let id = *instance.id().as_ref();

        let reserved = module
            .reserve(ReserveDto {
                actor: librarian.clone(),
                id,
                borrower: *holder.id().as_ref(),
                hold_until: None,
            })
            .await?;
        assert_eq!(reserved.status, LoanStatus::Reserved);
        assert_eq!(reserved.due_back, Some(date!(2024 - 01 - 08)));

        let error = module
            .checkout(CheckoutDto {
                actor: librarian.clone(),
                id,
                borrower: *other.id().as_ref(),
                due_back: None,
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::InvalidState);

        let loaned = module
            .checkout(CheckoutDto {
                actor: librarian.clone(),
                id,
                borrower: *holder.id().as_ref(),
                due_back: Some(date!(2024 - 01 - 10)),
            })
            .await?;
        assert_eq!(loaned.status, LoanStatus::OnLoan);
        assert_eq!(loaned.due_back, Some(date!(2024 - 01 - 10)));

        let maintained = module
            .send_to_maintenance(TransitionDto {
                actor: librarian.clone(),
                id,
            })
            .await?;
        assert_eq!(maintained.status, LoanStatus::Maintenance);
        assert_eq!(maintained.borrower, None);

        let released = module
            .release(TransitionDto {
                actor: librarian,
                id,
            })
            .await?;
        assert_eq!(released.status, LoanStatus::Available);
        Ok(())
    }

    #[tokio::test]
    async fn checkout_needs_known_borrower_and_capability() -> error_stack::Result<(), KernelError>
    {
        let module = TestModule::new(date!(2024 - 01 - 01));
        let librarian = module.librarian().await?;
        let reader = module.user("reader", []).await?;
        let author = module.author("Orwell").await?;
        let book = module.book(&author, "0451524934").await?;
        let instance = module
            .instance(&book, LoanStatus::Available, None, None)
            .await?;

        let error = module
            .checkout(CheckoutDto {
                actor: librarian,
                id: *instance.id().as_ref(),
                borrower: uuid::Uuid::new_v4(),
                due_back: None,
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::NotFound);

        let error = module
            .checkout(CheckoutDto {
                actor: reader.clone(),
                id: *instance.id().as_ref(),
                borrower: *reader.id().as_ref(),
                due_back: None,
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::PermissionDenied);
        assert_eq!(module.stored_instance(&instance).await?, Some(instance));
        Ok(())
    }
}
