//! Handlers for the `/restaurants` resource.
//!
//! All writes go through [`RestaurantEditModel`], which is validated before
//! any repository call; a validation failure returns field-level errors and
//! persists nothing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use odetofood_core::error::CoreError;
use odetofood_core::types::DbId;
use odetofood_db::models::restaurant::{Restaurant, RestaurantEditModel};
use odetofood_db::repositories::RestaurantRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/restaurants
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<RestaurantEditModel>,
) -> AppResult<(StatusCode, Json<Restaurant>)> {
    input.validate()?;
    let restaurant = RestaurantRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// GET /api/v1/restaurants
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = RestaurantRepo::list_all(&state.pool).await?;
    Ok(Json(restaurants))
}

/// GET /api/v1/restaurants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = RestaurantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "restaurant",
            id,
        })?;
    Ok(Json(restaurant))
}

/// PUT /api/v1/restaurants/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RestaurantEditModel>,
) -> AppResult<Json<Restaurant>> {
    input.validate()?;
    let restaurant = RestaurantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "restaurant",
            id,
        })?;
    Ok(Json(restaurant))
}

/// DELETE /api/v1/restaurants/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = RestaurantRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound {
            entity: "restaurant",
            id,
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT)
}
