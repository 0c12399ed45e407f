// ABOUTME: Search orchestration over a recipe directory provider
// ABOUTME: Two-stage ingredient/name fallback, client-side filters, stale-result guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

//! # Search Orchestrator
//!
//! Turns a user query plus optional filters into a recipe list:
//!
//! 1. Search by ingredient; a non-empty result wins.
//! 2. Otherwise fall back to name search — the query is treated
//!    ambiguously as either an ingredient or a dish name.
//! 3. Retain only recipes whose category exactly equals the `category`
//!    filter (case-sensitive by design, not a fuzzy match).
//! 4. Apply the best-effort `area` filter; other refinement fields are
//!    accepted without effect.
//!
//! Directory faults never escape this layer: a failed search surfaces as
//! an empty list plus a logged fault, so callers treat "no results" and
//! "search failed" the same way here. [`last_search_failed`] exposes the
//! distinction for callers that want to render it.
//!
//! Overlapping searches are not cancelled. Instead every call takes a
//! monotonically increasing sequence number and a completion publishes
//! its results only while it is still the newest issued request, so a
//! slow early search can never overwrite a faster later one.
//!
//! [`last_search_failed`]: SearchService::last_search_failed

use crate::errors::ProviderError;
use crate::models::{Recipe, SearchFilters};
use crate::providers::RecipeProvider;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Published search state behind the sequence guard
#[derive(Debug, Default)]
struct Published {
    results: Vec<Recipe>,
    failed: bool,
    seq: u64,
}

/// Search pipeline over a [`RecipeProvider`]
///
/// Owns the provider and the latest published result list. All methods
/// take `&self`; the service is safe to share across tasks.
pub struct SearchService<P> {
    provider: P,
    issued: AtomicU64,
    published: Mutex<Published>,
}

impl<P: RecipeProvider> SearchService<P> {
    /// Create a service over the given provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            issued: AtomicU64::new(0),
            published: Mutex::new(Published::default()),
        }
    }

    /// Run a search and return the latest published result list
    ///
    /// The returned list reflects the newest issued search at the time
    /// this call completes: if a later search was issued while this one
    /// was in flight, this call's own results are discarded and the
    /// published list is returned instead.
    ///
    /// An empty list means either "nothing matched" or "the directory
    /// call failed"; see [`last_search_failed`](Self::last_search_failed).
    pub async fn search(&self, query: &str, filters: &SearchFilters) -> Vec<Recipe> {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let (results, failed) = match self.run_query(query).await {
            Ok(results) => (Self::apply_filters(results, filters), false),
            Err(e) => {
                warn!(query = %query, error = %e, "search failed");
                (Vec::new(), true)
            }
        };

        let mut published = self.lock_published();
        if seq == self.issued.load(Ordering::SeqCst) {
            published.results = results;
            published.failed = failed;
            published.seq = seq;
        } else {
            debug!(
                query = %query,
                seq,
                latest = self.issued.load(Ordering::SeqCst),
                "stale search completion discarded"
            );
        }
        published.results.clone()
    }

    /// Latest published result list
    #[must_use]
    pub fn latest_results(&self) -> Vec<Recipe> {
        self.lock_published().results.clone()
    }

    /// True when the latest published search ended in a directory fault
    /// rather than a legitimate empty result
    #[must_use]
    pub fn last_search_failed(&self) -> bool {
        self.lock_published().failed
    }

    /// Fetch the full record for a recipe id
    ///
    /// Directory faults surface as `None` plus a logged fault, matching
    /// the search boundary behavior.
    pub async fn fetch_recipe(&self, id: &str) -> Option<Recipe> {
        match self.provider.get_recipe(id).await {
            Ok(recipe) => recipe,
            Err(e) => {
                warn!(id = %id, error = %e, "recipe fetch failed");
                None
            }
        }
    }

    /// Fetch a random full recipe record, or `None` on a fault
    pub async fn random_recipe(&self) -> Option<Recipe> {
        match self.provider.random_recipe().await {
            Ok(recipe) => recipe,
            Err(e) => {
                warn!(error = %e, "random recipe fetch failed");
                None
            }
        }
    }

    /// List directory categories, or an empty list on a fault
    pub async fn categories(&self) -> Vec<String> {
        match self.provider.list_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!(error = %e, "category listing failed");
                Vec::new()
            }
        }
    }

    /// The provider this service orchestrates
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Two-stage query: ingredient search, then name-search fallback
    async fn run_query(&self, query: &str) -> Result<Vec<Recipe>, ProviderError> {
        let by_ingredient = self.provider.search_by_ingredient(query).await?;
        if !by_ingredient.is_empty() {
            return Ok(by_ingredient);
        }
        debug!(query = %query, "no ingredient matches, falling back to name search");
        self.provider.search_by_name(query).await
    }

    /// Client-side refinement of a directory result list
    fn apply_filters(mut results: Vec<Recipe>, filters: &SearchFilters) -> Vec<Recipe> {
        if let Some(category) = &filters.category {
            results.retain(|r| r.category.as_deref() == Some(category.as_str()));
        }
        if let Some(area) = &filters.area {
            let needle = area.to_lowercase();
            results.retain(|r| {
                r.area
                    .as_deref()
                    .is_some_and(|a| a.to_lowercase().contains(&needle))
            });
        }
        // cook_time and diet are accepted but the directory exposes no
        // matching data; they pass through without effect
        results
    }

    fn lock_published(&self) -> MutexGuard<'_, Published> {
        self.published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
