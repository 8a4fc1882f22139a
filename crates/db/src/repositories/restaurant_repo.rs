//! Repository for the `restaurants` table.
//!
//! Callers validate input via [`RestaurantEditModel`] before reaching this
//! layer; the repository itself only moves rows.

use sqlx::PgPool;

use odetofood_core::types::DbId;

use crate::models::restaurant::{Restaurant, RestaurantEditModel};

/// Column list for `restaurants` queries.
const RESTAURANT_COLUMNS: &str = "id, name, cuisine, created_at, updated_at";

/// Provides CRUD operations for restaurants.
pub struct RestaurantRepo;

impl RestaurantRepo {
    /// Insert a new restaurant and return the created row.
    pub async fn create(
        pool: &PgPool,
        input: &RestaurantEditModel,
    ) -> Result<Restaurant, sqlx::Error> {
        let query = format!(
            "INSERT INTO restaurants (name, cuisine) \
             VALUES ($1, $2) \
             RETURNING {RESTAURANT_COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(&input.name)
            .bind(input.cuisine)
            .fetch_one(pool)
            .await
    }

    /// Find a restaurant by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE id = $1");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all restaurants, ordered by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {RESTAURANT_COLUMNS} FROM restaurants ORDER BY name, id");
        sqlx::query_as::<_, Restaurant>(&query).fetch_all(pool).await
    }

    /// Update a restaurant's name and cuisine.
    ///
    /// Returns `None` if no restaurant with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &RestaurantEditModel,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!(
            "UPDATE restaurants SET \
                 name = $2, \
                 cuisine = $3, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {RESTAURANT_COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.cuisine)
            .fetch_optional(pool)
            .await
    }

    /// Delete a restaurant. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
