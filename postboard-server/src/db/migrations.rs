//! Schema bootstrap for the posts table

use sqlx::SqlitePool;

/// Create the posts table if it does not exist.
///
/// `AUTOINCREMENT` keeps ids from being reused after deletes. The CHECK
/// constraints mirror the validation limits in `models::post`.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running posts migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            post_id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL
                CHECK (length(trim(title)) > 0 AND length(title) <= 100),
            content TEXT NOT NULL
                CHECK (length(trim(content)) > 0 AND length(content) <= 100000)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("posts migrations complete");
    Ok(())
}
