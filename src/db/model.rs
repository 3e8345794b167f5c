use serde::{Deserialize, Serialize};

/// Projection returned by every catalog query: title plus the
/// presentation fields. The flag columns never leave the store.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MovieRow {
    #[sqlx(rename = "Title")]
    pub title: String,
    pub video_url: String,
    pub cover_img_url: String,
    pub rating: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;
