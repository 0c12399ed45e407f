// ABOUTME: Main library entry point for the Ladle recipe discovery client
// ABOUTME: Exposes the directory client, favorites store, search pipeline, and portion scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

#![deny(unsafe_code)]

//! # Ladle
//!
//! Client-side core for a recipe discovery application: search a public
//! recipe directory by ingredient, save favorites durably, and inspect
//! detailed recipes with ingredient quantities rescaled to a chosen serving
//! count. The surrounding UI is out of scope; this crate carries the state
//! management and algorithmic pieces only.
//!
//! ## Architecture
//!
//! - **Providers**: the `RecipeProvider` seam over external recipe
//!   directories, with a `TheMealDB` implementation
//! - **Models**: shared `Recipe`/`Ingredient` representation
//! - **Favorites**: persisted, deduplicated set of saved recipes
//! - **Search**: two-stage query/fallback pipeline with client-side filters
//! - **Portions**: free-text quantity parsing and serving-count scaling
//! - **Config**: environment-driven client configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use ladle::providers::mealdb::MealDbProvider;
//! use ladle::search::SearchService;
//! use ladle::models::SearchFilters;
//!
//! # async fn example() -> ladle::errors::AppResult<()> {
//! let service = SearchService::new(MealDbProvider::new());
//! let results = service.search("chicken", &SearchFilters::default()).await;
//! for recipe in &results {
//!     println!("{} ({})", recipe.name, recipe.id);
//! }
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration management
pub mod config;

/// Application constants organized by domain
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Durable, deduplicated favorites store
pub mod favorites;

/// Logging configuration and structured logging setup
pub mod logging;

/// Shared data models (`Recipe`, `Ingredient`, `SearchFilters`)
pub mod models;

/// Quantity parsing, formatting, and serving-count scaling
pub mod portions;

/// Recipe directory provider abstraction and implementations
pub mod providers;

/// Search orchestration over a recipe directory provider
pub mod search;

/// Shared utilities (HTTP client pooling)
pub mod utils;
