use error_stack::Report;

use kernel::interface::query::BookInstanceQuery;
use kernel::interface::update::BookInstanceModifier;
use kernel::prelude::entity::{
    BookId, BookInstance, BookInstanceId, LoanStatus, SelectLimit, SelectOffset, UserId,
};
use kernel::KernelError;

use crate::database::memory::{window, InMemoryTransaction, Store};

pub struct InMemoryBookInstanceRepository;

impl Store {
    /// Loans matching `borrower` (anyone's when `None`, ownerless rows excluded), soonest due
    /// first, undated last.
    fn loans(&self, borrower: Option<&UserId>) -> Vec<BookInstance> {
        let mut loans = self
            .instances
            .values()
            .filter(|instance| *instance.status() == LoanStatus::OnLoan)
            .filter(|instance| match borrower {
                Some(borrower) => instance.borrower().as_ref() == Some(borrower),
                None => instance.borrower().is_some(),
            })
            .cloned()
            .collect::<Vec<_>>();
        loans.sort_by(|a, b| {
            (a.due_back().is_none(), a.due_back(), a.id())
                .cmp(&(b.due_back().is_none(), b.due_back(), b.id()))
        });
        loans
    }
}

#[async_trait::async_trait]
impl BookInstanceQuery for InMemoryBookInstanceRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookInstanceId,
    ) -> error_stack::Result<Option<BookInstance>, KernelError> {
        Ok(con.instances.get(id).cloned())
    }

    async fn find_by_book(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        Ok(con
            .instances
            .values()
            .filter(|instance| instance.book_id() == book_id)
            .cloned()
            .collect())
    }

    async fn count(&self, con: &mut InMemoryTransaction) -> error_stack::Result<i64, KernelError> {
        Ok(con.instances.len() as i64)
    }

    async fn count_by_status(
        &self,
        con: &mut InMemoryTransaction,
        status: &LoanStatus,
    ) -> error_stack::Result<i64, KernelError> {
        Ok(con
            .instances
            .values()
            .filter(|instance| instance.status() == status)
            .count() as i64)
    }

    async fn count_on_loan_to(
        &self,
        con: &mut InMemoryTransaction,
        borrower: &UserId,
    ) -> error_stack::Result<i64, KernelError> {
        Ok(con.loans(Some(borrower)).len() as i64)
    }

    async fn find_on_loan_to(
        &self,
        con: &mut InMemoryTransaction,
        borrower: &UserId,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        Ok(window(con.loans(Some(borrower)), limit, offset))
    }

    async fn count_outstanding_loans(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<i64, KernelError> {
        Ok(con.loans(None).len() as i64)
    }

    async fn find_outstanding_loans(
        &self,
        con: &mut InMemoryTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        Ok(window(con.loans(None), limit, offset))
    }
}

#[async_trait::async_trait]
impl BookInstanceModifier for InMemoryBookInstanceRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError> {
        if con.instances.contains_key(instance.id()) {
            return Err(Report::new(KernelError::ConstraintViolation).attach_printable(format!(
                "Book instance {} already exists",
                instance.id().as_ref()
            )));
        }
        if !con.books.contains_key(instance.book_id()) {
            return Err(Report::new(KernelError::ConstraintViolation).attach_printable(format!(
                "No book with id {}",
                instance.book_id().as_ref()
            )));
        }
        con.instances.insert(instance.id().clone(), instance.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError> {
        if let Some(borrower) = instance.borrower() {
            if !con.users.contains_key(borrower) {
                return Err(Report::new(KernelError::ConstraintViolation)
                    .attach_printable(format!("No user with id {}", borrower.as_ref())));
            }
        }
        match con.instances.get_mut(instance.id()) {
            Some(stored) => {
                *stored = instance.clone();
                Ok(())
            }
            None => Err(Report::new(KernelError::NotFound).attach_printable(format!(
                "No book instance with id {}",
                instance.id().as_ref()
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookInstanceQuery;
    use kernel::interface::update::{
        AuthorModifier, BookInstanceModifier, BookModifier, UserModifier,
    };
    use kernel::prelude::entity::{
        Author, AuthorId, Book, BookId, BookInstance, BookInstanceId, BookSummary, BookTitle,
        Capabilities, DueBack, FirstName, Imprint, Isbn, LastName, Lifespan, LoanStatus,
        SelectLimit, SelectOffset, User, UserId, UserName,
    };
    use kernel::KernelError;

    use crate::database::memory::{
        InMemoryAuthorRepository, InMemoryBookInstanceRepository, InMemoryBookRepository,
        InMemoryDatabase, InMemoryUserRepository,
    };

    #[tokio::test]
    async fn loans_sort_by_due_date_then_id() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        let author_id = AuthorId::new(Uuid::new_v4());
        InMemoryAuthorRepository
            .create(
                &mut con,
                &Author::new(
                    author_id.clone(),
                    FirstName::new("Isaac"),
                    LastName::new("Asimov"),
                    Lifespan::unknown(),
                ),
            )
            .await?;
        let book_id = BookId::new(Uuid::new_v4());
        InMemoryBookRepository
            .create(
                &mut con,
                &Book::new(
                    book_id.clone(),
                    BookTitle::new("Foundation"),
                    BookSummary::new(""),
                    Isbn::new("9780553293357"),
                    author_id,
                    None,
                ),
            )
            .await?;
        let reader = UserId::new(Uuid::new_v4());
        InMemoryUserRepository
            .create(
                &mut con,
                &User::new(reader.clone(), UserName::new("reader"), Capabilities::default()),
            )
            .await?;

        let loan = |due: Option<DueBack>| {
            BookInstance::new(
                BookInstanceId::new(Uuid::new_v4()),
                book_id.clone(),
                Imprint::new("Gnome Press"),
                due,
                Some(reader.clone()),
                LoanStatus::OnLoan,
            )
        };
        let undated = loan(None);
        let late = loan(Some(DueBack::new(date!(2024 - 03 - 01))));
        let early = loan(Some(DueBack::new(date!(2024 - 01 - 01))));
        let shelved = BookInstance::intake(
            BookInstanceId::new(Uuid::new_v4()),
            book_id.clone(),
            Imprint::new("Gnome Press"),
            LoanStatus::Available,
        );
        for instance in [&undated, &late, &early, &shelved] {
            InMemoryBookInstanceRepository.create(&mut con, instance).await?;
        }

        let all = InMemoryBookInstanceRepository
            .find_on_loan_to(&mut con, &reader, &SelectLimit::new(10), &SelectOffset::new(0))
            .await?;
        assert_eq!(all, vec![early.clone(), late.clone(), undated]);

        let second_page = InMemoryBookInstanceRepository
            .find_outstanding_loans(&mut con, &SelectLimit::new(2), &SelectOffset::new(2))
            .await?;
        assert_eq!(second_page.len(), 1);
        assert_eq!(
            InMemoryBookInstanceRepository
                .count_by_status(&mut con, &LoanStatus::Available)
                .await?,
            1
        );
        Ok(())
    }
}
