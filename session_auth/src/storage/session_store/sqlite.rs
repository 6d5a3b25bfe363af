use sqlx::{Pool, Sqlite};

use crate::storage::errors::StorageError;
use crate::storage::types::StoredSession;
use crate::storage::validate_sqlite_table_schema;

use super::config::DB_TABLE_SESSIONS;

pub(super) async fn create_session_table_sqlite(pool: &Pool<Sqlite>) -> Result<(), StorageError> {
    let table_name = DB_TABLE_SESSIONS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            session_id TEXT PRIMARY KEY NOT NULL,
            principal_id TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn validate_session_table_sqlite(pool: &Pool<Sqlite>) -> Result<(), StorageError> {
    let expected_columns = [
        ("session_id", "TEXT"),
        ("principal_id", "TEXT"),
        ("created_at", "TIMESTAMP"),
    ];

    validate_sqlite_table_schema(
        pool,
        DB_TABLE_SESSIONS.as_str(),
        &expected_columns,
        StorageError::Storage,
    )
    .await
}

pub(super) async fn insert_session_sqlite(
    pool: &Pool<Sqlite>,
    session: &StoredSession,
) -> Result<bool, StorageError> {
    let table_name = DB_TABLE_SESSIONS.as_str();

    let result = sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (session_id, principal_id, created_at)
        VALUES (?, ?, ?)
        ON CONFLICT (session_id) DO NOTHING
        "#
    ))
    .bind(&session.session_id)
    .bind(&session.principal_id)
    .bind(session.created_at)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub(super) async fn get_session_sqlite(
    pool: &Pool<Sqlite>,
    session_id: &str,
) -> Result<Option<StoredSession>, StorageError> {
    let table_name = DB_TABLE_SESSIONS.as_str();

    let session = sqlx::query_as::<_, StoredSession>(&format!(
        r#"
        SELECT session_id, principal_id, created_at FROM {table_name} WHERE session_id = ?
        "#
    ))
    .bind(session_id)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

pub(super) async fn delete_session_sqlite(
    pool: &Pool<Sqlite>,
    session_id: &str,
) -> Result<bool, StorageError> {
    let table_name = DB_TABLE_SESSIONS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE session_id = ?
        "#
    ))
    .bind(session_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
