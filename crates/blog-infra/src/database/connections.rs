use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, Schema};

use blog_core::error::RepoError;

use super::entity::blog_post;
use super::postgres_base::map_db_err;
use super::postgres_repo::PostgresBlogPostRepository;

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    /// Upper bound for one statement round trip.
    pub statement_timeout: Duration,
    /// Issue `CREATE TABLE IF NOT EXISTS` for `blog_posts` at startup.
    pub create_schema: bool,
}

/// Pooled connection to the blog database.
///
/// The repository built from the pool takes it over; every statement checks a
/// connection out for its own duration and returns it on drop.
pub struct DatabasePool {
    conn: DbConn,
    statement_timeout: Duration,
}

impl DatabasePool {
    /// Open the pool described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Initializing database connection pool...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await.map_err(map_db_err)?;
        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Database connected"
        );

        Ok(Self::from_connection(conn, config.statement_timeout))
    }

    /// Wrap an existing connection, e.g. a mock one.
    pub fn from_connection(conn: DbConn, statement_timeout: Duration) -> Self {
        Self {
            conn,
            statement_timeout,
        }
    }

    /// Create the `blog_posts` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), RepoError> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut stmt = schema.create_table_from_entity(blog_post::Entity);
        stmt.if_not_exists();

        self.conn
            .execute(backend.build(&stmt))
            .await
            .map_err(map_db_err)?;
        tracing::info!("Table blog_posts ready");
        Ok(())
    }

    /// Hand the pool over to the blog post repository.
    pub fn blog_posts(self) -> PostgresBlogPostRepository {
        PostgresBlogPostRepository::new(self.conn).with_statement_timeout(self.statement_timeout)
    }

    pub fn into_connection(self) -> DbConn {
        self.conn
    }
}
