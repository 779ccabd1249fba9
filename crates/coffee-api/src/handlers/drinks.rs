//! Handlers for the drink menu.

use axum::extract::State;
use axum::response::IntoResponse;
use fsnd_core::error::CoreError;
use fsnd_core::recipe::{validate_recipe, validate_title, RecipeInput};
use fsnd_core::types::DbId;
use fsnd_db::models::drink::{CreateDrink, Drink, DrinkLong, DrinkShort, UpdateDrink};
use fsnd_db::repositories::DrinkRepo;
use fsnd_http::envelope::Success;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::permissions::{
    DeleteDrinks, GetDrinksDetail, PatchDrinks, PostDrinks, RequirePermission,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Body of `POST /drinks` and `PATCH /drinks/{id}`.
///
/// Both fields are required on create. On update, absent fields keep their
/// stored value.
#[derive(Debug, Deserialize)]
pub struct DrinkRequest {
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}

#[derive(Debug, Serialize)]
pub struct DrinkMenu<T: Serialize> {
    pub drinks: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct DrinkDeleted {
    pub delete: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /drinks
///
/// Public menu: colors and proportions only.
pub async fn list_drinks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let drinks = DrinkRepo::list(&state.pool).await?;
    Ok(Success::new(DrinkMenu::<DrinkShort> {
        drinks: drinks.iter().map(Drink::short).collect(),
    }))
}

/// GET /drinks-detail
pub async fn list_drinks_detail(
    _auth: RequirePermission<GetDrinksDetail>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let drinks = DrinkRepo::list(&state.pool).await?;
    Ok(Success::new(DrinkMenu::<DrinkLong> {
        drinks: drinks.iter().map(Drink::long).collect(),
    }))
}

/// POST /drinks
pub async fn create_drink(
    auth: RequirePermission<PostDrinks>,
    State(state): State<AppState>,
    AppJson(input): AppJson<DrinkRequest>,
) -> AppResult<impl IntoResponse> {
    let title = input
        .title
        .ok_or_else(|| CoreError::Validation("Drink title is required".into()))?;
    let recipe = input
        .recipe
        .ok_or_else(|| CoreError::Validation("Drink recipe is required".into()))?
        .into_ingredients();

    validate_title(&title)?;
    validate_recipe(&recipe)?;

    let drink = DrinkRepo::create(&state.pool, &CreateDrink { title, recipe }).await?;

    tracing::info!(drink_id = drink.id, sub = ?auth.claims.sub, "Drink created");

    Ok(Success::new(DrinkMenu {
        drinks: vec![drink.long()],
    }))
}

/// PATCH /drinks/{id}
pub async fn update_drink(
    auth: RequirePermission<PatchDrinks>,
    State(state): State<AppState>,
    AppPath(drink_id): AppPath<DbId>,
    AppJson(input): AppJson<DrinkRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_exists(&state, drink_id).await?;

    let update = UpdateDrink {
        title: input.title,
        recipe: input.recipe.map(RecipeInput::into_ingredients),
    };
    if let Some(title) = &update.title {
        validate_title(title)?;
    }
    if let Some(recipe) = &update.recipe {
        validate_recipe(recipe)?;
    }

    let drink = DrinkRepo::update(&state.pool, drink_id, &update)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Drink",
            id: drink_id,
        })?;

    tracing::info!(drink_id, sub = ?auth.claims.sub, "Drink updated");

    Ok(Success::new(DrinkMenu {
        drinks: vec![drink.long()],
    }))
}

/// DELETE /drinks/{id}
pub async fn delete_drink(
    auth: RequirePermission<DeleteDrinks>,
    State(state): State<AppState>,
    AppPath(drink_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_exists(&state, drink_id).await?;

    if !DrinkRepo::delete(&state.pool, drink_id).await? {
        return Err(CoreError::NotFound {
            entity: "Drink",
            id: drink_id,
        }
        .into());
    }

    tracing::info!(drink_id, sub = ?auth.claims.sub, "Drink deleted");

    Ok(Success::new(DrinkDeleted { delete: drink_id }))
}

async fn ensure_exists(state: &AppState, drink_id: DbId) -> AppResult<()> {
    DrinkRepo::find_by_id(&state.pool, drink_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Drink",
            id: drink_id,
        })?;
    Ok(())
}
