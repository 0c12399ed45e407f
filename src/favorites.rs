// ABOUTME: Durable favorites store with whole-blob JSON persistence
// ABOUTME: Insertion-ordered, deduplicated recipe set rewritten on every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

//! # Favorites Store
//!
//! A persisted set of saved recipes, independent of any search session.
//! The whole set is serialized to one JSON blob on every mutation; at the
//! expected set sizes (tens of recipes) that is simpler and safer than
//! incremental updates. Load failures are soft: favorites are
//! non-critical, so a corrupt blob resets to an empty store instead of
//! failing the session. Write failures do surface, since silently losing
//! a favorite is worse than reporting an error.
//!
//! The on-disk format is versioned (`{"version": 1, "entries": [...]}`).
//! A legacy top-level array of recipes is still accepted on load and gets
//! rewritten in the versioned format on the next mutation.

use crate::constants::{defaults, env_config, schema};
use crate::errors::{AppError, AppResult};
use crate::models::Recipe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A saved recipe plus the moment it was saved
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FavoriteEntry {
    /// The full recipe record as fetched when it was saved
    recipe: Recipe,
    /// When the recipe was favorited
    saved_at: DateTime<Utc>,
}

/// Versioned on-disk representation of the favorites set
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesBlob {
    version: u32,
    entries: Vec<FavoriteEntry>,
}

/// Durable, deduplicated, insertion-ordered set of saved recipes
///
/// Constructed explicitly with a path (no global state); every mutating
/// operation persists the full set synchronously before returning.
/// [`toggle`](Self::toggle) is the entry point the rest of the system is
/// expected to use, so add/remove semantics cannot diverge between views.
pub struct FavoritesStore {
    path: PathBuf,
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    /// Open the store at the given path, reading any persisted set
    ///
    /// A missing file is an empty store. A malformed or unreadable blob
    /// fails soft: the fault is logged and the store starts empty.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path);
        info!(
            path = %path.display(),
            count = entries.len(),
            "favorites store loaded"
        );
        Self { path, entries }
    }

    /// Open the store at the default platform location
    ///
    /// Uses `LADLE_FAVORITES_PATH` when set, otherwise
    /// `<data dir>/ladle/favorites.json`.
    ///
    /// # Errors
    ///
    /// Returns a config error if no platform data directory can be
    /// resolved and no explicit path is configured.
    pub fn open_default() -> AppResult<Self> {
        Ok(Self::load(Self::default_path()?))
    }

    /// Resolve the default favorites path
    ///
    /// # Errors
    ///
    /// Returns a config error if the platform data directory is unknown.
    pub fn default_path() -> AppResult<PathBuf> {
        if let Some(explicit) = env_config::favorites_path() {
            return Ok(PathBuf::from(explicit));
        }
        dirs::data_dir()
            .map(|dir| dir.join(defaults::APP_DIR).join(defaults::FAVORITES_FILE))
            .ok_or_else(|| {
                AppError::config("no platform data directory; set LADLE_FAVORITES_PATH")
            })
    }

    /// Save a recipe; no-op if its id is already present
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the updated set fails.
    pub fn add(&mut self, recipe: Recipe) -> AppResult<()> {
        if self.is_favorite(&recipe.id) {
            debug!(id = %recipe.id, "already a favorite");
            return Ok(());
        }
        debug!(id = %recipe.id, name = %recipe.name, "favorite added");
        self.entries.push(FavoriteEntry {
            recipe,
            saved_at: Utc::now(),
        });
        self.persist()
    }

    /// Remove a recipe by id; no-op if absent
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the updated set fails.
    pub fn remove(&mut self, id: &str) -> AppResult<()> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.recipe.id != id);
        if self.entries.len() == before {
            return Ok(());
        }
        debug!(id = %id, "favorite removed");
        self.persist()
    }

    /// Remove the recipe if saved, otherwise save it
    ///
    /// Returns `true` when the recipe is a favorite after the call.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the updated set fails.
    pub fn toggle(&mut self, recipe: Recipe) -> AppResult<bool> {
        if self.is_favorite(&recipe.id) {
            self.remove(&recipe.id)?;
            Ok(false)
        } else {
            self.add(recipe)?;
            Ok(true)
        }
    }

    /// True when a recipe with this id is saved
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.recipe.id == id)
    }

    /// Saved recipes in insertion order
    pub fn list(&self) -> impl Iterator<Item = &Recipe> {
        self.entries.iter().map(|entry| &entry.recipe)
    }

    /// Number of saved recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is saved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path the store persists to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the full blob at the store path
    fn persist(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let blob = FavoritesBlob {
            version: schema::FAVORITES_VERSION,
            entries: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&blob)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Read and decode the persisted set, soft-failing to empty
    fn read_entries(path: &Path) -> Vec<FavoriteEntry> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "favorites unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<FavoritesBlob>(&raw) {
            Ok(blob) if blob.version <= schema::FAVORITES_VERSION => blob.entries,
            Ok(blob) => {
                warn!(
                    path = %path.display(),
                    version = blob.version,
                    "favorites blob from a newer schema, starting empty"
                );
                Vec::new()
            }
            // Legacy format: bare array of recipes, no version tag
            Err(_) => match serde_json::from_str::<Vec<Recipe>>(&raw) {
                Ok(recipes) => {
                    info!(
                        path = %path.display(),
                        count = recipes.len(),
                        "migrating unversioned favorites blob"
                    );
                    let saved_at = Utc::now();
                    recipes
                        .into_iter()
                        .map(|recipe| FavoriteEntry { recipe, saved_at })
                        .collect()
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "favorites blob malformed, starting empty"
                    );
                    Vec::new()
                }
            },
        }
    }
}
