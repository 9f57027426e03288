use std::future::Future;
use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{
    DbConn, DbErr, EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
    RuntimeErr,
};

use blog_core::error::RepoError;
use blog_core::ports::BaseRepository;

const DEFAULT_STATEMENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    statement_timeout: Duration,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            statement_timeout: DEFAULT_STATEMENT_TIMEOUT,
            _entity: PhantomData,
        }
    }

    pub fn with_statement_timeout(mut self, timeout: Duration) -> Self {
        self.statement_timeout = timeout;
        self
    }

    /// Give back the underlying connection.
    pub fn into_connection(self) -> DbConn {
        self.db
    }

    /// Run one statement under the statement timeout and classify its error.
    pub(crate) async fn run<F, R>(&self, statement: F) -> Result<R, RepoError>
    where
        F: Future<Output = Result<R, DbErr>>,
    {
        match tokio::time::timeout(self.statement_timeout, statement).await {
            Ok(result) => result.map_err(map_db_err),
            Err(_) => {
                tracing::warn!(timeout = ?self.statement_timeout, "Statement timed out");
                Err(RepoError::Timeout(self.statement_timeout))
            }
        }
    }
}

/// SQLSTATE class 23: integrity constraint violation.
const INTEGRITY_CONSTRAINT_CLASS: &str = "23";

/// SQLSTATE reported by the database server, if the error came from it.
pub(crate) fn sqlstate(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(e)) | DbErr::Exec(RuntimeErr::SqlxError(e)) => e
            .as_database_error()
            .and_then(|db| db.code())
            .map(|code| code.into_owned()),
        _ => None,
    }
}

/// Map a SeaORM error onto the repository error taxonomy.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => {
            let constraint = other.sql_err().is_some()
                || sqlstate(&other)
                    .is_some_and(|code| code.starts_with(INTEGRITY_CONSTRAINT_CLASS));

            if constraint {
                RepoError::Constraint(other.to_string())
            } else {
                RepoError::Query(other.to_string())
            }
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: Sync + Send,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Send + Sync + 'static,
{
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        let rows = self.run(query.all(&self.db)).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = self.run(E::find_by_id(id).one(&self.db)).await?;

        Ok(result.map(Into::into))
    }

    async fn delete(&self, id: ID) -> Result<u64, RepoError> {
        let result = self.run(E::delete_by_id(id).exec(&self.db)).await?;

        Ok(result.rows_affected)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.run(self.db.ping()).await
    }
}
