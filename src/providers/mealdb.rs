// ABOUTME: TheMealDB directory integration and data fetching
// ABOUTME: Handles endpoint construction, wire DTO decoding, and conversion to shared models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

//! `TheMealDB` provider.
//!
//! Wraps the public `TheMealDB` JSON API (`filter.php`, `search.php`,
//! `lookup.php`, `random.php`, `list.php`). The wire format packs
//! ingredients into twenty numbered `strIngredientN`/`strMeasureN` slots;
//! conversion collects the populated slots in order and drops the blanks.
//! An empty result set arrives as JSON `null` in the `meals` field and
//! decodes to an empty list, never an error.

use crate::constants::env_config;
use crate::errors::{ProviderError, ProviderResult};
use crate::models::{Ingredient, Recipe};
use crate::providers::core::{ProviderConfig, RecipeProvider};
use crate::utils::http_client::shared_client;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, info};
use url::Url;

/// Provider name used in configuration and logs
pub const PROVIDER_NAME: &str = "mealdb";

/// Number of ingredient/measure slots in the wire format
const INGREDIENT_SLOTS: usize = 20;

/// Recipe directory provider backed by `TheMealDB` JSON API
pub struct MealDbProvider {
    client: Client,
    config: ProviderConfig,
}

impl Default for MealDbProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MealDbProvider {
    /// Create a provider against the configured base `URL`
    ///
    /// The base defaults to the public v1 API and can be overridden with
    /// `LADLE_MEALDB_BASE_URL`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ProviderConfig {
            name: PROVIDER_NAME.to_owned(),
            base_url: env_config::mealdb_base_url(),
        })
    }

    /// Create a provider with an explicit configuration
    #[must_use]
    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            client: shared_client().clone(),
            config,
        }
    }

    /// Create a provider with an explicit configuration and HTTP client
    ///
    /// Used by tests that need tighter timeouts than the shared client.
    #[must_use]
    pub fn with_client(config: ProviderConfig, client: Client) -> Self {
        Self { client, config }
    }

    /// Build a full endpoint `URL` with query parameters
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> ProviderResult<Url> {
        let mut url = Url::parse(&format!("{}/{path}", self.config.base_url)).map_err(|e| {
            ProviderError::InvalidConfig {
                detail: format!("base URL {:?}: {e}", self.config.base_url),
            }
        })?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    /// Issue a GET and decode the standard `meals` envelope
    async fn fetch_meals(&self, url: Url) -> ProviderResult<Vec<MealDbMeal>> {
        debug!(provider = PROVIDER_NAME, url = %url, "directory request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: PROVIDER_NAME,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::ApiStatus {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
            });
        }

        let envelope: MealsEnvelope =
            response.json().await.map_err(|e| ProviderError::Decode {
                provider: PROVIDER_NAME,
                detail: e.to_string(),
            })?;

        // A miss is `{"meals": null}`, not an error
        Ok(envelope.meals.unwrap_or_default())
    }
}

#[async_trait]
impl RecipeProvider for MealDbProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn search_by_ingredient(&self, term: &str) -> ProviderResult<Vec<Recipe>> {
        let url = self.endpoint("filter.php", &[("i", term)])?;
        let meals = self.fetch_meals(url).await?;
        info!(
            provider = PROVIDER_NAME,
            term = %term,
            count = meals.len(),
            "ingredient search"
        );
        Ok(meals.into_iter().map(Recipe::from).collect())
    }

    async fn search_by_name(&self, term: &str) -> ProviderResult<Vec<Recipe>> {
        let url = self.endpoint("search.php", &[("s", term)])?;
        let meals = self.fetch_meals(url).await?;
        info!(
            provider = PROVIDER_NAME,
            term = %term,
            count = meals.len(),
            "name search"
        );
        Ok(meals.into_iter().map(Recipe::from).collect())
    }

    async fn get_recipe(&self, id: &str) -> ProviderResult<Option<Recipe>> {
        let url = self.endpoint("lookup.php", &[("i", id)])?;
        let meals = self.fetch_meals(url).await?;
        Ok(meals.into_iter().next().map(Recipe::from))
    }

    async fn random_recipe(&self) -> ProviderResult<Option<Recipe>> {
        let url = self.endpoint("random.php", &[])?;
        let meals = self.fetch_meals(url).await?;
        Ok(meals.into_iter().next().map(Recipe::from))
    }

    async fn list_categories(&self) -> ProviderResult<Vec<String>> {
        let url = self.endpoint("list.php", &[("c", "list")])?;
        debug!(provider = PROVIDER_NAME, url = %url, "category listing");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: PROVIDER_NAME,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::ApiStatus {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
            });
        }

        let envelope: CategoriesEnvelope =
            response.json().await.map_err(|e| ProviderError::Decode {
                provider: PROVIDER_NAME,
                detail: e.to_string(),
            })?;

        Ok(envelope
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.category)
            .collect())
    }
}

/// Standard response envelope: `meals` is `null` on a miss
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    meals: Option<Vec<MealDbMeal>>,
}

/// Category listing envelope (`list.php?c=list`)
#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    meals: Option<Vec<CategoryRow>>,
}

#[derive(Debug, Deserialize)]
struct CategoryRow {
    #[serde(rename = "strCategory")]
    category: String,
}

/// Wire shape of a meal record
///
/// Thin filter results carry only id/name/thumbnail; detail and name-search
/// results also carry the category/area/instruction fields plus the twenty
/// numbered ingredient slots, which land in `extra`.
#[derive(Debug, Deserialize)]
struct MealDbMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: String,
    #[serde(rename = "strCategory")]
    category: Option<String>,
    #[serde(rename = "strArea")]
    area: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(rename = "strYoutube")]
    youtube: Option<String>,
    /// Remaining fields, including `strIngredientN`/`strMeasureN`
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl MealDbMeal {
    /// Collect the populated ingredient slots in positional order
    fn ingredients(&self) -> Vec<Ingredient> {
        let mut out = Vec::new();
        for slot in 1..=INGREDIENT_SLOTS {
            let name = self
                .extra
                .get(&format!("strIngredient{slot}"))
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            let measure = self
                .extra
                .get(&format!("strMeasure{slot}"))
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .unwrap_or_default();
            out.push(Ingredient::new(name, measure));
        }
        out
    }

    /// Normalize an optional wire field: empty or whitespace becomes `None`
    fn clean(value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        })
    }
}

impl From<MealDbMeal> for Recipe {
    fn from(meal: MealDbMeal) -> Self {
        let ingredients = meal.ingredients();
        Self {
            id: meal.id,
            name: meal.name,
            thumbnail_url: meal.thumbnail,
            category: MealDbMeal::clean(meal.category),
            area: MealDbMeal::clean(meal.area),
            instructions: MealDbMeal::clean(meal.instructions),
            video_url: MealDbMeal::clean(meal.youtube),
            ingredients,
        }
    }
}
