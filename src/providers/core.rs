// ABOUTME: Core provider trait and configuration for recipe directory access
// ABOUTME: Defines the four directory operations the rest of the crate depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

//! # Recipe Provider Abstraction
//!
//! [`RecipeProvider`] is the seam between the client core and whatever
//! directory service backs it. All providers return the shared
//! [`Recipe`](crate::models::Recipe) model and the shared
//! [`ProviderResult`] error type; provider-specific wire formats stay
//! private to each implementation.

use crate::errors::ProviderResult;
use crate::models::Recipe;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Provider configuration: identity and endpoint base
///
/// Loaded from the environment by default (see
/// [`constants::env_config`](crate::constants::env_config)) or supplied
/// directly for tests against a stub server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name (e.g. "mealdb")
    pub name: String,
    /// Base `URL` for directory API calls, without a trailing slash
    pub base_url: String,
}

/// Core recipe directory trait
///
/// Implementors must be `Send + Sync` so a provider can be shared across
/// async tasks. Every operation returns either a (possibly empty) list or
/// an optional record; "nothing matched" is a success, not an error.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get provider name (e.g. "mealdb")
    fn provider_name(&self) -> &'static str;

    /// Get provider configuration
    fn config(&self) -> &ProviderConfig;

    /// Search recipes that use the given ingredient
    ///
    /// Returns thin records (id, name, thumbnail); call
    /// [`get_recipe`](Self::get_recipe) for the full record.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status,
    /// or an undecodable response body.
    async fn search_by_ingredient(&self, term: &str) -> ProviderResult<Vec<Recipe>>;

    /// Search recipes whose name matches the given term
    ///
    /// Unlike ingredient search, name search returns full records.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status,
    /// or an undecodable response body.
    async fn search_by_name(&self, term: &str) -> ProviderResult<Vec<Recipe>>;

    /// Fetch the full record for a recipe id
    ///
    /// Returns `Ok(None)` when the directory has no recipe with that id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status,
    /// or an undecodable response body.
    async fn get_recipe(&self, id: &str) -> ProviderResult<Option<Recipe>>;

    /// Fetch a random full recipe record
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status,
    /// or an undecodable response body.
    async fn random_recipe(&self) -> ProviderResult<Option<Recipe>>;

    /// List the category labels the directory knows about
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status,
    /// or an undecodable response body.
    async fn list_categories(&self) -> ProviderResult<Vec<String>>;
}
