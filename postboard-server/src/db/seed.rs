//! Sample data for an empty store

use sqlx::SqlitePool;

use super::repos::{DbError, PostRepo};
use crate::models::Post;

/// Number of sample posts inserted by [`seed_sample_posts`].
pub const SAMPLE_POST_COUNT: usize = 6;

/// Insert "Post N title" / "Post N content" for N in 1..=6.
///
/// Does nothing if the store already holds posts. Returns how many posts
/// were inserted.
pub async fn seed_sample_posts(pool: &SqlitePool) -> Result<usize, DbError> {
    let repo = PostRepo::new(pool);

    let existing = repo.count().await?;
    if existing > 0 {
        tracing::info!(existing, "store not empty, skipping sample posts");
        return Ok(0);
    }

    for n in 1..=SAMPLE_POST_COUNT {
        repo.create(&Post::new(
            format!("Post {n} title"),
            format!("Post {n} content"),
        ))
        .await?;
    }

    tracing::info!(count = SAMPLE_POST_COUNT, "seeded sample posts");
    Ok(SAMPLE_POST_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrations};

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();

        assert_eq!(seed_sample_posts(&pool).await.unwrap(), SAMPLE_POST_COUNT);
        assert_eq!(seed_sample_posts(&pool).await.unwrap(), 0);

        let posts = PostRepo::new(&pool).list().await.unwrap();
        assert_eq!(posts.len(), SAMPLE_POST_COUNT);
        assert_eq!(posts[0].title, "Post 1 title");
        assert_eq!(posts[5].content, "Post 6 content");
    }
}
