//! Cocktail recipe types returned by the bar endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a base spirit.
pub type BaseID = i64;

/// Identifier of a recipe.
pub type RecipeID = i64;

/// A base spirit (ingredient category) used to filter recipes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Base {
    pub id: BaseID,
    pub name: String,
    pub description: Option<String>,
}

/// A recipe as listed by `/bar/recipes` and returned by `/bar/recipes/:id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: RecipeID,
    pub name: String,
    pub description: Option<String>,
    /// Alcohol by volume, in percent.
    pub abv: Option<f64>,
    pub is_alcoholic: Option<bool>,
    pub glass_type: Option<String>,
    pub garnish: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    /// Preparation time in minutes.
    pub prep_time: Option<i64>,
    pub base_id: Option<BaseID>,
    /// The joined base record, when the API includes it.
    #[serde(rename = "Base")]
    pub base: Option<Base>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Recipe {
    pub fn base_name(&self) -> &str {
        self.base
            .as_ref()
            .map(|base| base.name.as_str())
            .unwrap_or("Unknown base")
    }

    pub fn abv_label(&self) -> String {
        match self.abv {
            Some(abv) => format!("{}% ABV", abv),
            None => "N/A".to_string(),
        }
    }

    pub fn alcohol_label(&self) -> &'static str {
        if self.is_alcoholic == Some(true) {
            "Alcoholic"
        } else {
            "Non-alcohol"
        }
    }
}
