use data_access::StudentStore;
use sqlx::SqlitePool;

// Fresh in-memory database per test; it dies with the pool on every exit path.
pub async fn store() -> StudentStore {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("unable to connect to test db");

    sqlx::migrate!("../migrations")
        .run(&pool)
        .await
        .expect("unable to run migrations");

    StudentStore::new(pool)
}
