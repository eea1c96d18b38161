use std::collections::HashMap;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{
    BookInstanceQuery, BookQuery, DependOnBookInstanceQuery, DependOnBookQuery,
};
use kernel::prelude::entity::{BookId, BookInstance, Capability, Page};
use kernel::KernelError;

use crate::service::{not_found, OUTSTANDING_LOAN_PAGE_SIZE, USER_LOAN_PAGE_SIZE};
use crate::transfer::{
    BookInstanceDto, GetLoansForUserDto, GetOutstandingLoansDto, LoanDto, PageDto,
};

#[async_trait::async_trait]
pub trait GetLoansService:
    'static + Sync + Send + DependOnBookInstanceQuery + DependOnBookQuery + DependOnClock
{
    /// Copies the actor has borrowed, soonest due first.
    async fn list_loans_for_user(
        &self,
        dto: GetLoansForUserDto,
    ) -> error_stack::Result<PageDto<LoanDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let borrower = dto.actor.id();
        let count = self
            .book_instance_query()
            .count_on_loan_to(&mut connection, borrower)
            .await?;
        let window = dto.page.resolve(count, USER_LOAN_PAGE_SIZE)?;
        let loans = self
            .book_instance_query()
            .find_on_loan_to(&mut connection, borrower, &window.limit(), &window.offset())
            .await?;
        let page = window.fill(loans);
        self.with_titles(&mut connection, page).await
    }

    /// Every copy currently on loan. Librarians only.
    async fn list_outstanding_loans(
        &self,
        dto: GetOutstandingLoansDto,
    ) -> error_stack::Result<PageDto<LoanDto>, KernelError> {
        dto.actor.require(Capability::CanMarkReturned)?;
        let mut connection = self.database_connection().transact().await?;
        let count = self
            .book_instance_query()
            .count_outstanding_loans(&mut connection)
            .await?;
        let window = dto.page.resolve(count, OUTSTANDING_LOAN_PAGE_SIZE)?;
        let loans = self
            .book_instance_query()
            .find_outstanding_loans(&mut connection, &window.limit(), &window.offset())
            .await?;
        let page = window.fill(loans);
        self.with_titles(&mut connection, page).await
    }

    async fn with_titles(
        &self,
        connection: &mut <Self::DatabaseConnection as DatabaseConnection>::Transaction,
        page: Page<BookInstance>,
    ) -> error_stack::Result<PageDto<LoanDto>, KernelError> {
        let mut titles: HashMap<BookId, String> = HashMap::new();
        for instance in page.items() {
            if titles.contains_key(instance.book_id()) {
                continue;
            }
            let book = self
                .book_query()
                .find_by_id(connection, instance.book_id())
                .await?
                .ok_or_else(|| not_found("book", instance.book_id().as_ref()))?;
            titles.insert(book.id().clone(), book.title().as_ref().clone());
        }
        let today = self.clock().today();
        let page = page.map(|instance| LoanDto {
            title: titles[instance.book_id()].clone(),
            instance: BookInstanceDto::new(instance, today),
        });
        Ok(PageDto::from(page))
    }
}

impl<T> GetLoansService for T where
    T: DependOnBookInstanceQuery + DependOnBookQuery + DependOnClock
{
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use time::Duration;

    use driver::clock::FixedClock;
    use driver::database::{InMemoryDatabase, InMemoryTransaction};
    use kernel::interface::clock::DependOnClock;
    use kernel::interface::database::DependOnDatabaseConnection;
    use kernel::interface::query::{BookQuery, DependOnBookInstanceQuery, DependOnBookQuery};
    use kernel::prelude::entity::{
        AuthorId, Book, BookId, LoanStatus, PageNumber, SelectLimit, SelectOffset,
    };
    use kernel::KernelError;

    use crate::service::GetLoansService;
    use crate::test::TestModule;
    use crate::transfer::{GetLoansForUserDto, GetOutstandingLoansDto};

    /// Shares the test store but resolves no book by id.
    struct BooklessModule(TestModule);

    struct NoBooks;

    #[async_trait::async_trait]
    impl BookQuery for NoBooks {
        type Transaction = InMemoryTransaction;

        async fn find_by_id(
            &self,
            _: &mut InMemoryTransaction,
            _: &BookId,
        ) -> error_stack::Result<Option<Book>, KernelError> {
            Ok(None)
        }

        async fn find_all(
            &self,
            _: &mut InMemoryTransaction,
            _: &SelectLimit,
            _: &SelectOffset,
        ) -> error_stack::Result<Vec<Book>, KernelError> {
            Ok(Vec::new())
        }

        async fn find_by_author(
            &self,
            _: &mut InMemoryTransaction,
            _: &AuthorId,
        ) -> error_stack::Result<Vec<Book>, KernelError> {
            Ok(Vec::new())
        }

        async fn count(&self, _: &mut InMemoryTransaction) -> error_stack::Result<i64, KernelError> {
            Ok(0)
        }
    }

    impl DependOnDatabaseConnection for BooklessModule {
        type DatabaseConnection = InMemoryDatabase;
        fn database_connection(&self) -> &Self::DatabaseConnection {
            self.0.database_connection()
        }
    }

    impl DependOnClock for BooklessModule {
        type Clock = FixedClock;
        fn clock(&self) -> &Self::Clock {
            self.0.clock()
        }
    }

    impl DependOnBookInstanceQuery for BooklessModule {
        type BookInstanceQuery = <TestModule as DependOnBookInstanceQuery>::BookInstanceQuery;
        fn book_instance_query(&self) -> &Self::BookInstanceQuery {
            self.0.book_instance_query()
        }
    }

    impl DependOnBookQuery for BooklessModule {
        type BookQuery = NoBooks;
        fn book_query(&self) -> &Self::BookQuery {
            &NoBooks
        }
    }

    #[tokio::test]
    async fn user_sees_only_own_loans_soonest_first() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(date!(2024 - 01 - 10));
        let reader = module.user("reader", []).await?;
        let other = module.user("other", []).await?;
        let author = module.author("Pratchett").await?;
        let book = module.book(&author, "0552166596").await?;

        let late = module
            .instance(&book, LoanStatus::OnLoan, Some(date!(2024 - 02 - 01)), Some(&reader))
            .await?;
        let overdue = module
            .instance(&book, LoanStatus::OnLoan, Some(date!(2024 - 01 - 05)), Some(&reader))
            .await?;
        module
            .instance(&book, LoanStatus::OnLoan, Some(date!(2024 - 01 - 01)), Some(&other))
            .await?;
        module
            .instance(&book, LoanStatus::Reserved, Some(date!(2024 - 01 - 02)), Some(&reader))
            .await?;

        let page = module
            .list_loans_for_user(GetLoansForUserDto {
                actor: reader,
                page: PageNumber::default(),
            })
            .await?;
        let ids = page
            .items
            .iter()
            .map(|loan| loan.instance.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![*overdue.id().as_ref(), *late.id().as_ref()]);
        assert!(page.items[0].instance.is_overdue);
        assert!(!page.items[1].instance.is_overdue);
        assert_eq!(page.items[0].title, "Book 0552166596");
        assert_eq!(page.count, 2);
        assert_eq!(page.num_pages, 1);
        Ok(())
    }

    #[tokio::test]
    async fn outstanding_loans_need_capability_and_page_by_two(
    ) -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(date!(2024 - 01 - 10));
        let librarian = module.librarian().await?;
        let reader = module.user("reader", []).await?;
        let author = module.author("Pratchett").await?;
        let book = module.book(&author, "0552166596").await?;
        for days in 1..=5 {
            let due = date!(2024 - 01 - 10) + Duration::days(days);
            module
                .instance(&book, LoanStatus::OnLoan, Some(due), Some(&reader))
                .await?;
        }

        let error = module
            .list_outstanding_loans(GetOutstandingLoansDto {
                actor: reader,
                page: PageNumber::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::PermissionDenied);

        let last = module
            .list_outstanding_loans(GetOutstandingLoansDto {
                actor: librarian.clone(),
                page: PageNumber::Last,
            })
            .await?;
        assert_eq!(last.number, 3);
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].instance.due_back, Some(date!(2024 - 01 - 15)));
        assert!(!last.has_next);
        assert!(last.has_previous);

        let error = module
            .list_outstanding_loans(GetOutstandingLoansDto {
                actor: librarian,
                page: PageNumber::Exact(4),
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn ownerless_copies_are_not_outstanding() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(date!(2024 - 01 - 10));
        let librarian = module.librarian().await?;
        let author = module.author("Pratchett").await?;
        let book = module.book(&author, "0552166596").await?;
        module
            .instance(&book, LoanStatus::OnLoan, Some(date!(2024 - 01 - 20)), None)
            .await?;

        let page = module
            .list_outstanding_loans(GetOutstandingLoansDto {
                actor: librarian,
                page: PageNumber::default(),
            })
            .await?;
        assert_eq!(page.count, 0);
        assert!(page.items.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn loan_without_resolvable_book_is_not_found() -> error_stack::Result<(), KernelError> {
        let store = TestModule::new(date!(2024 - 01 - 10));
        let reader = store.user("reader", []).await?;
        let author = store.author("Pratchett").await?;
        let book = store.book(&author, "0552166596").await?;
        store
            .instance(&book, LoanStatus::OnLoan, Some(date!(2024 - 01 - 20)), Some(&reader))
            .await?;

        let module = BooklessModule(store);
        let error = module
            .list_loans_for_user(GetLoansForUserDto {
                actor: reader,
                page: PageNumber::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::NotFound);
        Ok(())
    }
}
