// ABOUTME: Core data models for recipe discovery
// ABOUTME: Recipe, Ingredient, and SearchFilters definitions shared across the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

//! # Data Models
//!
//! Directory-agnostic representations of recipes. Providers convert their
//! wire formats into these shapes, so the rest of the crate never sees
//! provider-specific field names.

use serde::{Deserialize, Serialize};

/// A single ingredient line within a recipe
///
/// The `measure` is free text as the directory supplied it ("1/2 cup",
/// "200 g", or empty). Ingredients have no identity of their own; their
/// position within the parent recipe's list is the only handle the
/// checklist and scaling code use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name as free text
    pub name: String,
    /// Quantity and unit as free text, possibly empty
    #[serde(default)]
    pub measure: String,
}

impl Ingredient {
    /// Create an ingredient from name and measure text
    #[must_use]
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measure: measure.into(),
        }
    }
}

/// A recipe record from a directory provider
///
/// Immutable once fetched. List endpoints return thin records (id, name,
/// thumbnail); detail fetches fill in category, instructions, and the
/// ingredient list.
///
/// # Examples
///
/// ```rust
/// use ladle::models::{Ingredient, Recipe};
///
/// let recipe = Recipe {
///     id: "52940".into(),
///     name: "Brown Stew Chicken".into(),
///     thumbnail_url: "https://www.themealdb.com/images/media/meals/sypxpx1515365095.jpg".into(),
///     category: Some("Chicken".into()),
///     area: Some("Jamaican".into()),
///     instructions: None,
///     video_url: None,
///     ingredients: vec![Ingredient::new("Chicken", "1 whole")],
/// };
/// assert!(recipe.has_details());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Opaque, stable, unique identifier assigned by the directory
    pub id: String,
    /// Display name of the dish
    pub name: String,
    /// `URL` of the thumbnail image
    pub thumbnail_url: String,
    /// Category label (e.g. "Seafood"), when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cuisine/region label (e.g. "Jamaican"), when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Multi-paragraph preparation instructions, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// `URL` of an accompanying video, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Ordered ingredient list; empty for thin list-endpoint records
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// True when this record carries detail fields beyond the thin listing
    ///
    /// List endpoints return only id/name/thumbnail; anything with
    /// ingredients or category attached came from a detail or name search.
    #[must_use]
    pub fn has_details(&self) -> bool {
        !self.ingredients.is_empty() || self.category.is_some()
    }
}

/// Optional refinements applied to search results client-side
///
/// Only `category` is guaranteed to affect results (exact, case-sensitive
/// match). `area` is best-effort. `cook_time` and `diet` are accepted for
/// forward compatibility and currently have no effect, since the directory
/// does not expose that data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Category filter; retained recipes match exactly and case-sensitively
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cuisine/region filter; case-insensitive substring match, best-effort
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Cook-time ceiling; accepted without effect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    /// Diet tag; accepted without effect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
}

impl SearchFilters {
    /// True when no filter field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.area.is_none()
            && self.cook_time.is_none()
            && self.diet.is_none()
    }
}
