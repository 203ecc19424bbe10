//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::movie::{CreateMovie, Movie, UpdateMovie};
use marquee_core::types::MovieId;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let store = state.store_read()?;
    Ok(Json(store.list().to_vec()))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    let store = state.store_read()?;
    let movie = store.get(id)?;
    Ok(Json(movie.clone()))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let mut store = state.store_write()?;
    let movie = store.create(input);
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /movies/{id}
///
/// Full replacement. Shares the overlay semantics of [`patch`]; sending a
/// complete payload is the caller's contract.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    let mut store = state.store_write()?;
    let movie = store.update(id, input)?;
    Ok(Json(movie))
}

/// PATCH /movies/{id}
///
/// Partial merge: fields present in the payload replace the stored values,
/// absent fields are kept, the id never changes.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    let mut store = state.store_write()?;
    let movie = store.update(id, input)?;
    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<StatusCode> {
    let mut store = state.store_write()?;
    store.delete(id)?;
    Ok(StatusCode::OK)
}
