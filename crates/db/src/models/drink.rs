//! Coffee-shop drink models, DTOs and the two presentation views.

use fsnd_core::recipe::{Ingredient, IngredientShort};
use fsnd_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `drinks` table. `recipe` is stored as JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: DbId,
    pub title: String,
    pub recipe: Json<Vec<Ingredient>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public representation: ingredient colors and proportions only.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkShort {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<IngredientShort>,
}

/// Full representation including ingredient names.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkLong {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    pub fn short(&self) -> DrinkShort {
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.iter().map(IngredientShort::from).collect(),
        }
    }

    pub fn long(&self) -> DrinkLong {
        DrinkLong {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.0.clone(),
        }
    }
}

/// Validated input for inserting a drink.
#[derive(Debug, Clone)]
pub struct CreateDrink {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Validated partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateDrink {
    pub title: Option<String>,
    pub recipe: Option<Vec<Ingredient>>,
}
