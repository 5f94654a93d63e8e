use sqlx::sqlite::SqlitePoolOptions;
use tower_sessions::cookie::time::{Duration, OffsetDateTime};
use tower_sessions::session::{Id, Record};
use tower_sessions::{ExpiredDeletion, SessionStore};

use admincenter::db::SqlxPool;
use admincenter::session::SqlxSessionStore;

async fn store() -> SqlxSessionStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let store = SqlxSessionStore::new(&SqlxPool::Sqlite(pool));
    store.migrate().await.unwrap();
    store
}

fn record(expiry_date: OffsetDateTime) -> Record {
    Record {
        id: Id::default(),
        data: Default::default(),
        expiry_date,
    }
}

#[tokio::test]
async fn create_load_delete_round_trip() {
    let store = store().await;

    let mut record = record(OffsetDateTime::now_utc() + Duration::minutes(20));
    record
        .data
        .insert("counter".to_string(), serde_json::json!(3));
    store.create(&mut record).await.unwrap();

    let loaded = store
        .load(&record.id)
        .await
        .unwrap()
        .expect("record should load");
    assert_eq!(loaded.id, record.id);
    assert_eq!(loaded.data, record.data);

    store.delete(&record.id).await.unwrap();
    assert!(store.load(&record.id).await.unwrap().is_none());
}

#[tokio::test]
async fn save_updates_existing_record() {
    let store = store().await;

    let mut record = record(OffsetDateTime::now_utc() + Duration::minutes(20));
    store.create(&mut record).await.unwrap();

    record
        .data
        .insert("counter".to_string(), serde_json::json!(7));
    store.save(&record).await.unwrap();

    let loaded = store
        .load(&record.id)
        .await
        .unwrap()
        .expect("record should load");
    assert_eq!(loaded.data.get("counter"), Some(&serde_json::json!(7)));
}

#[tokio::test]
async fn expired_records_are_not_loaded() {
    let store = store().await;

    let mut record = record(OffsetDateTime::now_utc() - Duration::minutes(1));
    store.create(&mut record).await.unwrap();

    assert!(store.load(&record.id).await.unwrap().is_none());
    store.delete_expired().await.unwrap();
    assert!(store.load(&record.id).await.unwrap().is_none());
}
