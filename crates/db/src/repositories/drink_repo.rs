//! Repository for the `drinks` table.

use fsnd_core::recipe::Ingredient;
use fsnd_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::drink::{CreateDrink, Drink, UpdateDrink};

/// Column list for `drinks` queries.
const COLUMNS: &str = "id, title, recipe, created_at, updated_at";

/// Title of the drink inserted by [`DrinkRepo::reset`].
pub const DEMO_DRINK_TITLE: &str = "water";

/// Provides CRUD operations for drinks.
pub struct DrinkRepo;

impl DrinkRepo {
    /// Insert a new drink, returning the created row.
    ///
    /// Fails with a unique violation (`uq_drinks_title`) if the title exists.
    pub async fn create(pool: &PgPool, input: &CreateDrink) -> Result<Drink, sqlx::Error> {
        let query = format!(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(&input.title)
            .bind(Json(&input.recipe))
            .fetch_one(pool)
            .await
    }

    /// Find a drink by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks WHERE id = $1");
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every drink ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks ORDER BY id");
        sqlx::query_as::<_, Drink>(&query).fetch_all(pool).await
    }

    /// Update the provided fields of a drink.
    ///
    /// Returns `None` if no drink with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDrink,
    ) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!(
            "UPDATE drinks SET \
                 title = COALESCE($2, title), \
                 recipe = COALESCE($3, recipe), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.recipe.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a drink. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove every drink and insert a single demo drink.
    ///
    /// Runs in one transaction so a failed insert leaves the table untouched.
    pub async fn reset(pool: &PgPool) -> Result<Drink, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM drinks").execute(&mut *tx).await?;

        let recipe = vec![Ingredient {
            name: DEMO_DRINK_TITLE.to_string(),
            color: "blue".to_string(),
            parts: 1,
        }];
        let query = format!(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let drink = sqlx::query_as::<_, Drink>(&query)
            .bind(DEMO_DRINK_TITLE)
            .bind(Json(&recipe))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(drink_id = drink.id, "Drinks table reset with demo drink");
        Ok(drink)
    }
}
