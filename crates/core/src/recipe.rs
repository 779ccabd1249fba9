//! Drink recipes: ingredient types, request normalization and validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum length of a drink title (characters).
pub const MAX_TITLE_LENGTH: usize = 80;

/// One ingredient of a drink in its full ("long") form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: i32,
}

/// The ingredient as shown to anonymous clients: no name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientShort {
    pub color: String,
    pub parts: i32,
}

impl From<&Ingredient> for IngredientShort {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            color: ingredient.color.clone(),
            parts: ingredient.parts,
        }
    }
}

/// A recipe as sent by clients: either a list of ingredients or one bare
/// ingredient object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    /// Normalize to the stored list form.
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(list) => list,
            RecipeInput::One(single) => vec![single],
        }
    }
}

/// Validate a drink title: non-blank and at most [`MAX_TITLE_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Drink title must not be empty".into()));
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Drink title exceeds maximum length of {MAX_TITLE_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate a recipe: at least one ingredient, each with a name, a color and
/// a positive number of parts.
pub fn validate_recipe(ingredients: &[Ingredient]) -> Result<(), CoreError> {
    if ingredients.is_empty() {
        return Err(CoreError::Validation(
            "Recipe must contain at least one ingredient".into(),
        ));
    }
    for (index, ingredient) in ingredients.iter().enumerate() {
        if ingredient.name.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Ingredient {index} has an empty name"
            )));
        }
        if ingredient.color.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Ingredient {index} has an empty color"
            )));
        }
        if ingredient.parts < 1 {
            return Err(CoreError::Validation(format!(
                "Ingredient {index} must have at least 1 part (got {})",
                ingredient.parts
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn espresso() -> Ingredient {
        Ingredient {
            name: "Espresso Shots".into(),
            color: "black".into(),
            parts: 1,
        }
    }

    #[test]
    fn recipe_list_deserializes() {
        let input: RecipeInput = serde_json::from_str(
            r#"[{"name":"Espresso Shots","color":"black","parts":1},
                {"name":"Water","color":"blue","parts":2}]"#,
        )
        .unwrap();
        assert_eq!(input.into_ingredients().len(), 2);
    }

    #[test]
    fn single_ingredient_object_is_wrapped() {
        let input: RecipeInput =
            serde_json::from_str(r#"{"name":"Espresso Shots","color":"black","parts":1}"#)
                .unwrap();
        assert_eq!(input.into_ingredients(), vec![espresso()]);
    }

    #[test]
    fn short_form_drops_the_name() {
        let short = IngredientShort::from(&espresso());
        let json = serde_json::to_value(&short).unwrap();
        assert_eq!(json, serde_json::json!({ "color": "black", "parts": 1 }));
    }

    #[test]
    fn valid_recipe_passes() {
        assert!(validate_recipe(&[espresso()]).is_ok());
    }

    #[test]
    fn empty_recipe_is_rejected() {
        assert_matches!(validate_recipe(&[]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn zero_parts_are_rejected() {
        let mut bad = espresso();
        bad.parts = 0;
        assert_matches!(validate_recipe(&[bad]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn blank_ingredient_name_is_rejected() {
        let mut bad = espresso();
        bad.name = "  ".into();
        assert_matches!(validate_recipe(&[bad]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn title_rules() {
        assert!(validate_title("Latte").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH)).is_ok());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }
}
