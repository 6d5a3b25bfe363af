use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::storage::validate_postgres_table_schema;
use crate::userdb::{
    errors::UserError,
    types::{User, UserSearchField, UserUpdate},
};

use super::config::DB_TABLE_USERS;

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id TEXT PRIMARY KEY NOT NULL,
            email TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL,
            first_name TEXT,
            last_name TEXT,
            reset_token TEXT,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn validate_user_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let users_table = DB_TABLE_USERS.as_str();

    let expected_columns = [
        ("id", "text"),
        ("email", "text"),
        ("hashed_password", "text"),
        ("first_name", "text"),
        ("last_name", "text"),
        ("reset_token", "text"),
        ("created_at", "timestamp with time zone"),
        ("updated_at", "timestamp with time zone"),
    ];

    validate_postgres_table_schema(pool, users_table, &expected_columns, UserError::Storage).await
}

/// Insert `user` unless its email is taken. Returns false on conflict.
pub(super) async fn insert_user_postgres(pool: &Pool<Postgres>, user: &User) -> Result<bool, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        INSERT INTO {table_name}
            (id, email, hashed_password, first_name, last_name, reset_token, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (email) DO NOTHING
        "#
    ))
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.hashed_password)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.reset_token)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub(super) async fn get_user_by_field_postgres(
    pool: &Pool<Postgres>,
    field: &UserSearchField,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let (column, value) = match field {
        UserSearchField::Id(id) => ("id", id),
        UserSearchField::Email(email) => ("email", email),
    };

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE {column} = $1
        "#
    ))
    .bind(value)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

/// Apply `update` to the user `id`. Returns false when no such user exists.
pub(super) async fn update_user_postgres(
    pool: &Pool<Postgres>,
    id: &str,
    update: &UserUpdate,
) -> Result<bool, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        UPDATE {table_name} SET
            first_name = COALESCE($1, first_name),
            last_name = COALESCE($2, last_name),
            hashed_password = COALESCE($3, hashed_password),
            reset_token = COALESCE($4, reset_token),
            updated_at = $5
        WHERE id = $6
        "#
    ))
    .bind(&update.first_name)
    .bind(&update.last_name)
    .bind(&update.hashed_password)
    .bind(&update.reset_token)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub(super) async fn delete_user_postgres(pool: &Pool<Postgres>, id: &str) -> Result<bool, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
