use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use super::model::*;
use super::repo::*;

// Each repository gets its own shared-cache in-memory database so that
// every pool connection sees the same table while separate instances
// stay isolated.
static DB_SEQ: AtomicU64 = AtomicU64::new(0);

fn memory_url() -> String {
    let n = DB_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("sqlite:file:filmbox{}?mode=memory&cache=shared", n)
}

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Opens an in-memory database and seeds the catalog. The seed must
    /// complete before the repository is handed to the router; a failure
    /// here aborts startup.
    pub async fn new() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(&memory_url())?.shared_cache(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            // The database lives only as long as a connection holds it open.
            .min_connections(1)
            .connect_with(options)
            .await?;

        let repo = Self { pool };
        repo.init_schema().await?;

        info!("In-memory movie catalog seeded");

        Ok(repo)
    }

    async fn init_schema(&self) -> DbResult<()> {
        let schema = include_str!("schema.sql");
        sqlx::raw_sql(schema).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl MovieRepo for SqliteRepository {
    async fn find_by_title(&self, fragment: &str) -> DbResult<Vec<MovieRow>> {
        let rows = sqlx::query_as::<_, MovieRow>(
            "SELECT Title, video_url, cover_img_url, rating FROM movies WHERE Title LIKE ?",
        )
        .bind(format!("%{}%", fragment))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_box_office(&self) -> DbResult<Vec<MovieRow>> {
        let rows = sqlx::query_as::<_, MovieRow>(
            "SELECT Title, video_url, cover_img_url, rating FROM movies WHERE isboxoffice = 1",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_recent(&self) -> DbResult<Vec<MovieRow>> {
        let rows = sqlx::query_as::<_, MovieRow>(
            "SELECT Title, video_url, cover_img_url, rating FROM movies WHERE isrecent = 1",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_counts() {
        let repo = SqliteRepository::new().await.unwrap();

        assert_eq!(repo.find_by_title("").await.unwrap().len(), 8);
        assert_eq!(repo.find_box_office().await.unwrap().len(), 6);
        assert_eq!(repo.find_recent().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_title_match_is_case_insensitive() {
        let repo = SqliteRepository::new().await.unwrap();

        let rows = repo.find_by_title("incep").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Inception");
        assert_eq!(rows[0].rating, Some(8.8));
    }

    #[tokio::test]
    async fn test_exact_title_matches_one_row() {
        let repo = SqliteRepository::new().await.unwrap();

        for row in repo.find_by_title("").await.unwrap() {
            let hits = repo.find_by_title(&row.title).await.unwrap();
            assert_eq!(hits.len(), 1, "title {:?}", row.title);
            assert_eq!(hits[0].title, row.title);
        }
    }

    #[tokio::test]
    async fn test_substring_matches_multiple_rows() {
        let repo = SqliteRepository::new().await.unwrap();

        let rows = repo.find_by_title("greenlight").await.unwrap();
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert!(row.title.to_lowercase().contains("greenlight"));
        }
    }

    #[tokio::test]
    async fn test_no_match_returns_empty() {
        let repo = SqliteRepository::new().await.unwrap();

        let rows = repo.find_by_title("Solaris").await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_null_rating_survives_projection() {
        let repo = SqliteRepository::new().await.unwrap();

        let rows = repo.find_by_title("Dusk").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "From Dusk till Dawn");
        assert_eq!(rows[0].rating, None);
    }

    #[tokio::test]
    async fn test_flag_queries_project_same_fields() {
        let repo = SqliteRepository::new().await.unwrap();

        let recent = repo.find_recent().await.unwrap();
        let titles: Vec<&str> = recent.iter().map(|r| r.title.as_str()).collect();
        assert!(titles.contains(&"Inception"));
        assert!(titles.contains(&"The Greenlight"));
        assert!(titles.contains(&"The Gentlemen"));
    }
}
