use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::BookInstanceQuery;
use kernel::interface::update::BookInstanceModifier;
use kernel::prelude::entity::{
    BookId, BookInstance, BookInstanceId, DueBack, Imprint, LoanStatus, SelectLimit,
    SelectOffset, UserId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookInstanceRepository;

#[async_trait::async_trait]
impl BookInstanceQuery for PostgresBookInstanceRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookInstanceId,
    ) -> error_stack::Result<Option<BookInstance>, KernelError> {
        PgBookInstanceInternal::find_by_id(con, id).await
    }

    async fn find_by_book(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        PgBookInstanceInternal::find_by_book(con, book_id).await
    }

    async fn count(&self, con: &mut PostgresTransaction) -> error_stack::Result<i64, KernelError> {
        PgBookInstanceInternal::count(con).await
    }

    async fn count_by_status(
        &self,
        con: &mut PostgresTransaction,
        status: &LoanStatus,
    ) -> error_stack::Result<i64, KernelError> {
        PgBookInstanceInternal::count_by_status(con, status).await
    }

    async fn count_on_loan_to(
        &self,
        con: &mut PostgresTransaction,
        borrower: &UserId,
    ) -> error_stack::Result<i64, KernelError> {
        PgBookInstanceInternal::count_on_loan_to(con, borrower).await
    }

    async fn find_on_loan_to(
        &self,
        con: &mut PostgresTransaction,
        borrower: &UserId,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        PgBookInstanceInternal::find_on_loan_to(con, borrower, limit, offset).await
    }

    async fn count_outstanding_loans(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<i64, KernelError> {
        PgBookInstanceInternal::count_outstanding_loans(con).await
    }

    async fn find_outstanding_loans(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        PgBookInstanceInternal::find_outstanding_loans(con, limit, offset).await
    }
}

#[async_trait::async_trait]
impl BookInstanceModifier for PostgresBookInstanceRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInstanceInternal::create(con, instance).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInstanceInternal::update(con, instance).await
    }
}

#[derive(sqlx::FromRow)]
struct BookInstanceRow {
    id: Uuid,
    book_id: Uuid,
    imprint: String,
    due_back: Option<Date>,
    borrower_id: Option<Uuid>,
    status: String,
}

impl TryFrom<BookInstanceRow> for BookInstance {
    type Error = error_stack::Report<KernelError>;
    fn try_from(value: BookInstanceRow) -> Result<Self, Self::Error> {
        Ok(BookInstance::new(
            BookInstanceId::new(value.id),
            BookId::new(value.book_id),
            Imprint::new(value.imprint),
            value.due_back.map(DueBack::new),
            value.borrower_id.map(UserId::new),
            LoanStatus::from_code(&value.status)?,
        ))
    }
}

pub(in crate::database) struct PgBookInstanceInternal;

impl PgBookInstanceInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookInstanceId,
    ) -> error_stack::Result<Option<BookInstance>, KernelError> {
        let row = sqlx::query_as::<_, BookInstanceRow>(
            // language=postgresql
            r#"
            SELECT id, book_id, imprint, due_back, borrower_id, status
            FROM book_instances
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(BookInstance::try_from).transpose()
    }

    async fn find_by_book(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        let rows = sqlx::query_as::<_, BookInstanceRow>(
            // language=postgresql
            r#"
            SELECT id, book_id, imprint, due_back, borrower_id, status
            FROM book_instances
            WHERE book_id = $1
            ORDER BY id
            "#,
        )
        .bind(book_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(BookInstance::try_from).collect()
    }

    async fn count(con: &mut PgConnection) -> error_stack::Result<i64, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM book_instances")
            .fetch_one(con)
            .await
            .convert_error()
    }

    async fn count_by_status(
        con: &mut PgConnection,
        status: &LoanStatus,
    ) -> error_stack::Result<i64, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM book_instances WHERE status = $1")
            .bind(status.code())
            .fetch_one(con)
            .await
            .convert_error()
    }

    async fn count_outstanding_loans(con: &mut PgConnection) -> error_stack::Result<i64, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM book_instances
            WHERE status = $1 AND borrower_id IS NOT NULL
            "#,
        )
        .bind(LoanStatus::OnLoan.code())
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn count_on_loan_to(
        con: &mut PgConnection,
        borrower: &UserId,
    ) -> error_stack::Result<i64, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM book_instances
            WHERE borrower_id = $1 AND status = $2
            "#,
        )
        .bind(borrower.as_ref())
        .bind(LoanStatus::OnLoan.code())
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn find_on_loan_to(
        con: &mut PgConnection,
        borrower: &UserId,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        let rows = sqlx::query_as::<_, BookInstanceRow>(
            // language=postgresql
            r#"
            SELECT id, book_id, imprint, due_back, borrower_id, status
            FROM book_instances
            WHERE borrower_id = $1 AND status = $2
            ORDER BY due_back NULLS LAST, id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(borrower.as_ref())
        .bind(LoanStatus::OnLoan.code())
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(BookInstance::try_from).collect()
    }

    async fn find_outstanding_loans(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError> {
        let rows = sqlx::query_as::<_, BookInstanceRow>(
            // language=postgresql
            r#"
            SELECT id, book_id, imprint, due_back, borrower_id, status
            FROM book_instances
            WHERE status = $1 AND borrower_id IS NOT NULL
            ORDER BY due_back NULLS LAST, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(LoanStatus::OnLoan.code())
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(BookInstance::try_from).collect()
    }

    async fn create(
        con: &mut PgConnection,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError> {
        let due_back: Option<Date> = instance.due_back().as_ref().map(|due| *due.as_ref());
        let borrower: Option<Uuid> = instance.borrower().as_ref().map(|user| *user.as_ref());
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, due_back, borrower_id, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(instance.id().as_ref())
        .bind(instance.book_id().as_ref())
        .bind(instance.imprint().as_ref())
        .bind(due_back)
        .bind(borrower)
        .bind(instance.status().code())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError> {
        let due_back: Option<Date> = instance.due_back().as_ref().map(|due| *due.as_ref());
        let borrower: Option<Uuid> = instance.borrower().as_ref().map(|user| *user.as_ref());
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE book_instances
            SET due_back = $2, borrower_id = $3, status = $4
            WHERE id = $1
            "#,
        )
        .bind(instance.id().as_ref())
        .bind(due_back)
        .bind(borrower)
        .bind(instance.status().code())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(error_stack::Report::new(KernelError::NotFound)
                .attach_printable(format!("No book instance with id {}", instance.id().as_ref())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
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

    use crate::database::postgres::{
        PostgresAuthorRepository, PostgresBookInstanceRepository, PostgresBookRepository,
        PostgresDatabase, PostgresUserRepository,
    };

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn loans_are_ordered_by_due_date() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let author = Author::new(
            AuthorId::new(Uuid::new_v4()),
            FirstName::new("Frank"),
            LastName::new("Herbert"),
            Lifespan::unknown(),
        );
        PostgresAuthorRepository.create(&mut con, &author).await?;
        let book_id = BookId::new(Uuid::new_v4());
        let isbn = Uuid::new_v4().simple().to_string()[..13].to_string();
        let book = Book::new(
            book_id.clone(),
            BookTitle::new("Dune"),
            BookSummary::new("Spice"),
            Isbn::new(isbn),
            author.id().clone(),
            None,
        );
        PostgresBookRepository.create(&mut con, &book).await?;
        let borrower = User::new(
            UserId::new(Uuid::new_v4()),
            UserName::new(format!("reader-{}", Uuid::new_v4())),
            Capabilities::default(),
        );
        PostgresUserRepository.create(&mut con, &borrower).await?;

        let later = BookInstance::new(
            BookInstanceId::new(Uuid::new_v4()),
            book_id.clone(),
            Imprint::new("Chilton"),
            Some(DueBack::new(date!(2024 - 02 - 01))),
            Some(borrower.id().clone()),
            LoanStatus::OnLoan,
        );
        let sooner = later.clone().reconstruct(|instance| {
            instance.id = BookInstanceId::new(Uuid::new_v4());
            instance.due_back = Some(DueBack::new(date!(2024 - 01 - 15)));
        });
        PostgresBookInstanceRepository.create(&mut con, &later).await?;
        PostgresBookInstanceRepository.create(&mut con, &sooner).await?;

        let loans = PostgresBookInstanceRepository
            .find_on_loan_to(
                &mut con,
                borrower.id(),
                &SelectLimit::new(10),
                &SelectOffset::new(0),
            )
            .await?;
        assert_eq!(loans, vec![sooner, later]);
        assert_eq!(
            PostgresBookInstanceRepository
                .count_on_loan_to(&mut con, borrower.id())
                .await?,
            2
        );
        con.roll_back().await?;
        Ok(())
    }
}
