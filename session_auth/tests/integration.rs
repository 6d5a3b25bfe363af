/// Integration tests for the session-auth library
///
/// These tests drive complete flows through the public API only, over in-memory
/// and SQLite-backed stores.
use chrono::{Duration, Utc};
use std::sync::Arc;

use session_auth::{
    AuthService, CoordinationError, InMemorySessionStore, SessionConfig, SessionError,
    SessionManager, SessionStore, SqlSessionStore, StoredSession, UserSearchField, UserStore,
    UserUpdate, connect_data_store, filter_datum, gen_random_string, require_auth, verify_password,
};

const TEST_COST: u32 = 4;

async fn sqlite_auth_service(
    config: SessionConfig,
) -> Result<AuthService, Box<dyn std::error::Error>> {
    // Sessions and users share one in-memory database
    let data_store = connect_data_store("sqlite::memory:")?;

    let session_store = SqlSessionStore::new(data_store.clone());
    session_store.init().await?;
    let users = UserStore::new(data_store);
    users.init().await?;

    let sessions = SessionManager::new(config, Arc::new(session_store));
    Ok(AuthService::new(sessions, users).with_password_cost(TEST_COST))
}

/// Flow: register → login → current user → logout → session gone
#[tokio::test]
async fn test_register_login_logout_flow() -> Result<(), Box<dyn std::error::Error>> {
    let auth = sqlite_auth_service(SessionConfig::from_seconds(3600)).await?;

    let user = auth.register_user("bob@hbtn.io", "H0lberton").await?;
    assert!(verify_password(&user.hashed_password, "H0lberton"));

    let (logged_in, session_id) = auth.login("bob@hbtn.io", "H0lberton").await?;
    assert_eq!(logged_in.id, user.id);

    let current = auth.current_user(session_id.as_str()).await?;
    assert_eq!(current.email, "bob@hbtn.io");

    auth.logout(session_id.as_str()).await?;
    assert!(matches!(
        auth.current_user(session_id.as_str()).await,
        Err(CoordinationError::Session(SessionError::NotFound))
    ));
    assert!(matches!(
        auth.logout(session_id.as_str()).await,
        Err(CoordinationError::Session(SessionError::NotFound))
    ));
    Ok(())
}

/// Flow: two logins for one user yield independent sessions
#[tokio::test]
async fn test_parallel_sessions_are_independent() -> Result<(), Box<dyn std::error::Error>> {
    let auth = sqlite_auth_service(SessionConfig::new()).await?;
    auth.register_user("alice@example.com", "pw").await?;

    let (_, first) = auth.login("alice@example.com", "pw").await?;
    let (_, second) = auth.login("alice@example.com", "pw").await?;
    assert_ne!(first, second);

    auth.logout(first.as_str()).await?;
    assert!(auth.current_user(first.as_str()).await.is_err());
    assert_eq!(
        auth.current_user(second.as_str()).await?.email,
        "alice@example.com"
    );
    Ok(())
}

/// Flow: password reset through the principal store invalidates the old password
#[tokio::test]
async fn test_password_update_changes_login() -> Result<(), Box<dyn std::error::Error>> {
    let auth = sqlite_auth_service(SessionConfig::new()).await?;
    let user = auth.register_user("carol@example.com", "old-password").await?;

    let new_hash = session_auth::hash_password_with_cost("new-password", TEST_COST)?;
    auth.users()
        .update_user(
            &user.id,
            UserUpdate {
                hashed_password: Some(new_hash),
                reset_token: Some("used-token".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(!auth.valid_login("carol@example.com", "old-password").await?);
    assert!(auth.valid_login("carol@example.com", "new-password").await?);

    let stored = auth
        .users()
        .find_user_by(UserSearchField::Email("carol@example.com".to_string()))
        .await?
        .ok_or("user should exist")?;
    assert_eq!(stored.reset_token.as_deref(), Some("used-token"));
    Ok(())
}

/// Flow: Basic credentials resolve the same user as the password login
#[tokio::test]
async fn test_basic_authorization_flow() -> Result<(), Box<dyn std::error::Error>> {
    let auth = sqlite_auth_service(SessionConfig::new()).await?;
    auth.register_user("bob@hbtn.io", "H0lberton").await?;

    // "bob@hbtn.io:H0lberton"
    let user = auth
        .current_user_from_basic("Basic Ym9iQGhidG4uaW86SDBsYmVydG9u")
        .await?;
    assert_eq!(user.email, "bob@hbtn.io");

    assert!(matches!(
        auth.current_user_from_basic("Bearer token").await,
        Err(CoordinationError::Unauthorized)
    ));
    Ok(())
}

/// The two session backends agree on the full lifecycle, expiry included
#[tokio::test]
async fn test_backends_share_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let sql = SqlSessionStore::new(connect_data_store("sqlite::memory:")?);
    sql.init().await?;
    let stores: Vec<Arc<dyn SessionStore>> =
        vec![Arc::new(InMemorySessionStore::new()), Arc::new(sql)];

    for store in stores {
        let manager_store = store.clone();
        let manager = SessionManager::new(SessionConfig::from_seconds(60), store);

        let id = manager.create_session("alice@example.com").await?;
        assert_eq!(
            manager.resolve_session(id.as_str()).await?,
            "alice@example.com"
        );
        manager.destroy_session(id.as_str()).await?;
        assert!(matches!(
            manager.resolve_session(id.as_str()).await,
            Err(SessionError::NotFound)
        ));
        assert!(matches!(
            manager.destroy_session(id.as_str()).await,
            Err(SessionError::NotFound)
        ));

        // An entry older than the expiry is NotFound and removed when read
        let stale = gen_random_string(16)?;
        manager_store
            .put_if_absent(StoredSession {
                session_id: stale.clone(),
                principal_id: "bob@example.com".to_string(),
                created_at: Utc::now() - Duration::seconds(61),
            })
            .await?;
        assert!(matches!(
            manager.resolve_session(stale.as_str()).await,
            Err(SessionError::NotFound)
        ));
        assert!(manager_store.get(&stale).await?.is_none());
    }
    Ok(())
}

#[test]
fn test_request_guard_helpers() {
    let excluded = ["/api/v1/status/", "/api/v1/stat*"];
    assert!(!require_auth(Some("/api/v1/status"), &excluded));
    assert!(!require_auth(Some("/api/v1/stats"), &excluded));
    assert!(require_auth(Some("/api/v1/users"), &excluded));

    let line = filter_datum(
        &["password", "date_of_birth"],
        "xxx",
        "name=egg;email=eggmin@eggsample.com;password=eggcellent;date_of_birth=12/12/1986;",
        ";",
    );
    assert_eq!(
        line,
        "name=egg;email=eggmin@eggsample.com;password=xxx;date_of_birth=xxx;"
    );
}
