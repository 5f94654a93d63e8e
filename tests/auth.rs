use sqlx::sqlite::SqlitePoolOptions;

use admincenter::auth::{self, DynUserStore};
use admincenter::db::{SqlxPool, SQLITE_MIGRATOR};
use admincenter::error::AuthError;

async fn store() -> (DynUserStore, SqlxPool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    SQLITE_MIGRATOR.run(&pool).await.unwrap();
    let pool = SqlxPool::Sqlite(pool);
    (auth::open(&pool), pool)
}

#[tokio::test]
async fn add_and_verify_user() {
    let (users, _pool) = store().await;
    users.add_user("alice", "hunter2").await.unwrap();
    assert!(users.verify_user("alice", "hunter2").await.unwrap());
    assert!(!users.verify_user("alice", "wrong").await.unwrap());
}

#[tokio::test]
async fn unknown_user_verifies_false() {
    let (users, _pool) = store().await;
    assert!(!users.verify_user("nobody", "anything").await.unwrap());
}

#[tokio::test]
async fn duplicate_user_rejected() {
    let (users, _pool) = store().await;
    users.add_user("alice", "hunter2").await.unwrap();
    let err = users.add_user("alice", "other").await.unwrap_err();
    assert!(matches!(err, AuthError::UserExists(name) if name == "alice"));
}

#[tokio::test]
async fn seeded_admin_cannot_be_readded() {
    let (users, _pool) = store().await;
    let err = users.add_user("admin", "anything").await.unwrap_err();
    assert!(matches!(err, AuthError::UserExists(_)));
}

#[tokio::test]
async fn update_password() {
    let (users, _pool) = store().await;
    users.add_user("alice", "hunter2").await.unwrap();
    users.update_password("alice", "correct horse").await.unwrap();
    assert!(!users.verify_user("alice", "hunter2").await.unwrap());
    assert!(users.verify_user("alice", "correct horse").await.unwrap());
}

#[tokio::test]
async fn update_password_of_missing_user_fails() {
    let (users, _pool) = store().await;
    let err = users.update_password("nobody", "pw").await.unwrap_err();
    assert!(matches!(err, AuthError::UserNotFound(name) if name == "nobody"));
}

#[tokio::test]
async fn add_and_remove_user() {
    let (users, _pool) = store().await;
    users.add_user("alice", "hunter2").await.unwrap();
    users.remove_user("alice").await.unwrap();
    assert!(!users.verify_user("alice", "hunter2").await.unwrap());

    let err = users.remove_user("alice").await.unwrap_err();
    assert!(matches!(err, AuthError::UserNotFound(_)));
}

#[tokio::test]
async fn seeded_admin_is_listed() {
    let (users, _pool) = store().await;
    let admin = users.get_user("admin").await.unwrap().expect("seed row");
    assert_eq!(admin.id, 1);

    users.add_user("alice", "hunter2").await.unwrap();
    let all = users.list_users().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].username, "admin");
    assert_eq!(all[1].username, "alice");
    assert!(all[1].id > 1);
}

#[tokio::test]
async fn stored_password_is_a_hash() {
    let (users, pool) = store().await;
    users.add_user("alice", "hunter2").await.unwrap();

    let SqlxPool::Sqlite(pool) = pool else {
        panic!("expected a sqlite pool");
    };
    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE username = 'alice'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(stored.starts_with("$argon2id$"));
    assert_ne!(stored, "hunter2");
}
