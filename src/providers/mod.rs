// ABOUTME: Recipe directory provider integrations for external recipe APIs
// ABOUTME: Unifies directory access behind the RecipeProvider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

//! Recipe directory providers.
//!
//! The crate consumes external recipe directories only through the
//! [`RecipeProvider`] trait, so the search pipeline and UI layers stay
//! provider-agnostic. `TheMealDB` is the shipped implementation.

/// Core provider trait and configuration
pub mod core;

/// TheMealDB JSON API provider implementation
pub mod mealdb;

pub use self::core::{ProviderConfig, RecipeProvider};
pub use self::mealdb::MealDbProvider;
