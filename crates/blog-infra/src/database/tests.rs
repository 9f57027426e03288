#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::{DateTime, FixedOffset, Utc};
    use sea_orm::{
        ConnAcquireErr, DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr,
        Transaction,
    };

    use crate::database::connections::DatabasePool;
    use crate::database::entity::blog_post;
    use crate::database::postgres_base::{map_db_err, sqlstate};
    use crate::database::postgres_repo::PostgresBlogPostRepository;
    use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
    use blog_core::error::RepoError;
    use blog_core::ports::{BaseRepository, BlogPostRepository};

    fn row(id: i32, title: &str, content: &str, at: DateTime<FixedOffset>) -> blog_post::Model {
        blog_post::Model {
            id,
            title: title.to_owned(),
            content: content.to_owned(),
            creation_date: at,
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let now = Utc::now().fixed_offset();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, "Hello", "World", now)]])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let result: Option<BlogPost> = repo.find_by_id(1).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert_eq!(post.creation_date, now);
    }

    #[tokio::test]
    async fn test_find_missing_post_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<blog_post::Model>::new()])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let result: Option<BlogPost> = repo.find_by_id(999).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_all_posts() {
        let now = Utc::now().fixed_offset();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![row(1, "Hello", "World", now), row(2, "Second", "Post", now)],
                vec![],
            ])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let posts: Vec<BlogPost> = repo.find_all().await.unwrap();
        let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let empty: Vec<BlogPost> = repo.find_all().await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_insert_returns_generated_id() {
        let draft = NewBlogPost::new("Hello".into(), "World".into()).unwrap();
        let stored_at = draft.creation_date.fixed_offset();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, "Hello", "World", stored_at)]])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let post = repo.insert(draft.clone()).await.unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.title, draft.title);
        assert_eq!(post.creation_date, draft.creation_date);
    }

    #[tokio::test]
    async fn test_update_binds_values_as_parameters() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);
        let changes = BlogPostChanges::new("New".into(), "x'); DROP TABLE blog_posts; --".into())
            .unwrap();

        let affected = repo.update(1, changes).await.unwrap();
        assert_eq!(affected, 1);

        assert_eq!(
            repo.into_connection().into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"UPDATE "blog_posts" SET "title" = $1, "content" = $2 WHERE "blog_posts"."id" = $3"#,
                [
                    "New".into(),
                    "x'); DROP TABLE blog_posts; --".into(),
                    1i32.into(),
                ],
            )]
        );
    }

    #[tokio::test]
    async fn test_update_missing_post_affects_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);
        let changes = BlogPostChanges::new("New".into(), "New2".into()).unwrap();

        assert_eq!(repo.update(999, changes).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let first: u64 = BaseRepository::<BlogPost, i32>::delete(&repo, 1).await.unwrap();
        let second: u64 = BaseRepository::<BlogPost, i32>::delete(&repo, 1).await.unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 0);
    }

    #[tokio::test]
    async fn test_query_failure_is_surfaced() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation \"blog_posts\" does not exist".into())])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let result: Result<Vec<BlogPost>, RepoError> = repo.find_all().await;
        assert!(matches!(result, Err(RepoError::Query(_))));
    }

    #[test]
    fn test_error_classification() {
        let conn = map_db_err(DbErr::Conn(RuntimeErr::Internal("connection refused".into())));
        assert!(matches!(conn, RepoError::Connection(_)));

        let acquire = map_db_err(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));
        assert!(matches!(acquire, RepoError::Connection(_)));

        // Only the server's SQLSTATE marks a constraint violation, not the wording.
        let worded =
            DbErr::Custom("null value in column \"title\" violates not-null constraint".into());
        assert_eq!(sqlstate(&worded), None);
        assert!(matches!(map_db_err(worded), RepoError::Query(_)));

        let other = map_db_err(DbErr::Query(RuntimeErr::Internal("syntax error".into())));
        assert!(matches!(other, RepoError::Query(_)));
    }

    #[tokio::test]
    async fn test_statement_timeout_expires() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo =
            PostgresBlogPostRepository::new(db).with_statement_timeout(Duration::from_millis(20));

        let result = repo.run(std::future::pending::<Result<(), DbErr>>()).await;

        assert!(matches!(
            result,
            Err(RepoError::Timeout(after)) if after == Duration::from_millis(20)
        ));
    }

    #[tokio::test]
    async fn test_statement_within_timeout_passes_through() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo =
            PostgresBlogPostRepository::new(db).with_statement_timeout(Duration::from_secs(5));

        let result = repo.run(async { Ok::<_, DbErr>(7) }).await;
        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn test_ping_reaches_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PostgresBlogPostRepository::new(db);

        BaseRepository::<BlogPost, i32>::ping(&repo).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_schema_creates_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let pool = DatabasePool::from_connection(db, Duration::from_secs(5));
        pool.ensure_schema().await.unwrap();

        let log = format!("{:?}", pool.into_connection().into_transaction_log());
        assert!(log.contains("CREATE TABLE IF NOT EXISTS"));
        assert!(log.contains("blog_posts"));
    }

    #[tokio::test]
    async fn test_pool_builds_repository() {
        let now = Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(3, "Pooled", "Post", now)]])
            .into_connection();

        let pool = DatabasePool::from_connection(db, Duration::from_secs(5));
        let repo = pool.blog_posts();

        let post: Option<BlogPost> = repo.find_by_id(3).await.unwrap();
        assert_eq!(post.map(|p| p.title), Some("Pooled".to_string()));
    }
}
