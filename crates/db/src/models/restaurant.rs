//! Restaurant row model, edit DTO, and the cuisine classification.

use odetofood_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Closed set of cuisine origins, stored as a SMALLINT code.
///
/// The wire format is the snake_case variant name; both directions decode
/// strictly, so an unknown code in the store or an unknown name from a
/// client is an error rather than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum CuisineOrigin {
    Unspecified = 0,
    Mexican = 1,
    Italian = 2,
    Indian = 3,
    Japanese = 4,
}

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `restaurants` table.
///
/// `name` mirrors the column's nullability. Application writes always pass
/// through the validated [`RestaurantEditModel`], so rows created by this
/// service carry a non-null name of at most 100 characters.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Restaurant {
    pub id: DbId,
    pub name: Option<String>,
    pub cuisine: CuisineOrigin,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Validated edit surface for creating or updating a restaurant.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RestaurantEditModel {
    /// The max length must stay in lockstep with the column bound set by
    /// migration `0002_restaurant_name_length`.
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    pub cuisine: CuisineOrigin,
}
