use axum::{
    extract::{Host, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::types::*;
use crate::db::{DbError, MovieRepo, MovieRow};
use crate::server::AppState;

/// Store failures surface as 500 with the underlying message in the body.
#[derive(Debug)]
pub struct ApiError(DbError);

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: self.0.to_string() }),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct FilterParams {
    /// Movie name fragment to filter by.
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "catalog",
    responses(
        (status = 200, description = "API information", body = ApiInfo),
    )
)]
pub async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo::default())
}

#[utoipa::path(
    get,
    path = "/filter-movie",
    tag = "catalog",
    params(FilterParams),
    responses(
        (status = 200, description = "Matching movies", body = [MovieEntry]),
        (status = 404, description = "Movie not found", body = NotFoundBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn filter_movie(
    State(state): State<AppState>,
    Host(host): Host,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let rows = state.db.find_by_title(&params.name).await?;

    if rows.is_empty() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(NotFoundBody { message: "Movie not found".to_string() }),
        )
            .into_response());
    }

    let base = base_url(state.config.scheme(), &host);
    Ok(Json(absolutize(rows, &base)).into_response())
}

#[utoipa::path(
    get,
    path = "/box-office-movies",
    tag = "catalog",
    responses(
        (status = 200, description = "Movies flagged as box office", body = [MovieEntry]),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn box_office_movies(
    State(state): State<AppState>,
    Host(host): Host,
) -> Result<Json<Vec<MovieEntry>>, ApiError> {
    let rows = state.db.find_box_office().await?;
    let base = base_url(state.config.scheme(), &host);
    Ok(Json(absolutize(rows, &base)))
}

#[utoipa::path(
    get,
    path = "/recent-movies",
    tag = "catalog",
    responses(
        (status = 200, description = "Movies flagged as recent", body = [MovieEntry]),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn recent_movies(
    State(state): State<AppState>,
    Host(host): Host,
) -> Result<Json<Vec<MovieEntry>>, ApiError> {
    let rows = state.db.find_recent().await?;
    let base = base_url(state.config.scheme(), &host);
    Ok(Json(absolutize(rows, &base)))
}

fn base_url(scheme: &str, host: &str) -> String {
    format!("{}://{}", scheme, host)
}

/// Rewrites `cover_img_url` to an absolute URL under the requesting host.
/// The prefix is applied even to values that are already absolute;
/// callers depend on the resulting shape, double prefix included.
fn absolutize(rows: Vec<MovieRow>, base: &str) -> Vec<MovieEntry> {
    rows.into_iter()
        .map(|row| MovieEntry {
            title: row.title,
            video_url: row.video_url,
            cover_img_url: format!("{}{}", base, row.cover_img_url),
            rating: row.rating,
        })
        .collect()
}
