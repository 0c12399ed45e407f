// ABOUTME: Test suite for the search orchestration pipeline
// ABOUTME: Covers fallback, filters, fault-to-empty boundary, and the stale-result guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use ladle::errors::{ProviderError, ProviderResult};
use ladle::models::{Recipe, SearchFilters};
use ladle::providers::{ProviderConfig, RecipeProvider};
use ladle::search::SearchService;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn recipe(id: &str, name: &str, category: &str, area: &str) -> Recipe {
    Recipe {
        id: id.into(),
        name: name.into(),
        thumbnail_url: format!("https://example.test/{id}.jpg"),
        category: Some(category.into()),
        area: Some(area.into()),
        instructions: None,
        video_url: None,
        ingredients: Vec::new(),
    }
}

/// Scripted in-memory directory: each ingredient-search call consumes the
/// next step; name search and detail fetch are fixed per instance.
struct MockDirectory {
    config: ProviderConfig,
    /// One entry per expected ingredient-search call: (delay, outcome)
    ingredient_steps: Vec<(Duration, ProviderResult<Vec<Recipe>>)>,
    ingredient_calls: AtomicUsize,
    name_results: Vec<Recipe>,
    name_calls: AtomicUsize,
    detail: Option<Recipe>,
    categories: Vec<String>,
}

impl MockDirectory {
    fn new(ingredient_steps: Vec<(Duration, ProviderResult<Vec<Recipe>>)>) -> Self {
        Self {
            config: ProviderConfig {
                name: "mock".into(),
                base_url: "http://directory.test".into(),
            },
            ingredient_steps,
            ingredient_calls: AtomicUsize::new(0),
            name_results: Vec::new(),
            name_calls: AtomicUsize::new(0),
            detail: None,
            categories: Vec::new(),
        }
    }

    fn with_name_results(mut self, results: Vec<Recipe>) -> Self {
        self.name_results = results;
        self
    }
}

#[async_trait]
impl RecipeProvider for MockDirectory {
    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn search_by_ingredient(&self, _term: &str) -> ProviderResult<Vec<Recipe>> {
        let call = self.ingredient_calls.fetch_add(1, Ordering::SeqCst);
        let (delay, outcome) = self
            .ingredient_steps
            .get(call)
            .expect("unexpected ingredient search call");
        tokio::time::sleep(*delay).await;
        match outcome {
            Ok(results) => Ok(results.clone()),
            Err(_) => Err(ProviderError::ApiStatus {
                provider: "mock",
                status: 503,
            }),
        }
    }

    async fn search_by_name(&self, _term: &str) -> ProviderResult<Vec<Recipe>> {
        self.name_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.name_results.clone())
    }

    async fn get_recipe(&self, id: &str) -> ProviderResult<Option<Recipe>> {
        Ok(self.detail.clone().filter(|r| r.id == id))
    }

    async fn random_recipe(&self) -> ProviderResult<Option<Recipe>> {
        Ok(self.detail.clone())
    }

    async fn list_categories(&self) -> ProviderResult<Vec<String>> {
        Ok(self.categories.clone())
    }
}

fn instant(outcome: ProviderResult<Vec<Recipe>>) -> (Duration, ProviderResult<Vec<Recipe>>) {
    (Duration::ZERO, outcome)
}

fn fault() -> ProviderResult<Vec<Recipe>> {
    Err(ProviderError::ApiStatus {
        provider: "mock",
        status: 503,
    })
}

// ============================================================================
// Two-Stage Pipeline Tests
// ============================================================================

#[tokio::test]
async fn test_ingredient_hit_skips_name_search() {
    let hit = recipe("1", "Brown Stew Chicken", "Chicken", "Jamaican");
    let mock = MockDirectory::new(vec![instant(Ok(vec![hit.clone()]))])
        .with_name_results(vec![recipe("9", "Decoy", "Beef", "British")]);
    let service = SearchService::new(mock);

    let results = service.search("chicken", &SearchFilters::default()).await;
    assert_eq!(results, vec![hit]);
    assert_eq!(service.provider().name_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_ingredient_miss_falls_back_to_name_search() {
    let by_name = recipe("2", "Chicken Parmentier", "Chicken", "French");
    let mock =
        MockDirectory::new(vec![instant(Ok(Vec::new()))]).with_name_results(vec![by_name.clone()]);
    let service = SearchService::new(mock);

    let results = service.search("chicken", &SearchFilters::default()).await;
    assert_eq!(results, vec![by_name]);
    assert_eq!(service.provider().name_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_total_miss_is_empty_not_error() {
    let mock = MockDirectory::new(vec![instant(Ok(Vec::new()))]);
    let service = SearchService::new(mock);

    let results = service
        .search("zzz_nonexistent", &SearchFilters::default())
        .await;
    assert!(results.is_empty());
    assert!(!service.last_search_failed());
}

// ============================================================================
// Filter Tests
// ============================================================================

#[tokio::test]
async fn test_category_filter_is_exact_and_case_sensitive() {
    let keep = recipe("1", "Stew", "Chicken", "Jamaican");
    let wrong_case = recipe("2", "Curry", "chicken", "Indian");
    let other = recipe("3", "Pie", "Beef", "British");
    let mock = MockDirectory::new(vec![instant(Ok(vec![
        keep.clone(),
        wrong_case,
        other,
    ]))]);
    let service = SearchService::new(mock);

    let filters = SearchFilters {
        category: Some("Chicken".into()),
        ..SearchFilters::default()
    };
    let results = service.search("chicken", &filters).await;
    assert_eq!(results, vec![keep]);
}

#[tokio::test]
async fn test_area_filter_is_case_insensitive_substring() {
    let keep = recipe("1", "Stew", "Chicken", "Jamaican");
    let other = recipe("2", "Curry", "Chicken", "Indian");
    let mock = MockDirectory::new(vec![instant(Ok(vec![keep.clone(), other]))]);
    let service = SearchService::new(mock);

    let filters = SearchFilters {
        area: Some("jamai".into()),
        ..SearchFilters::default()
    };
    let results = service.search("chicken", &filters).await;
    assert_eq!(results, vec![keep]);
}

#[tokio::test]
async fn test_unsupported_filters_are_accepted_without_effect() {
    let all = vec![
        recipe("1", "Stew", "Chicken", "Jamaican"),
        recipe("2", "Curry", "Chicken", "Indian"),
    ];
    let mock = MockDirectory::new(vec![instant(Ok(all.clone()))]);
    let service = SearchService::new(mock);

    let filters = SearchFilters {
        cook_time: Some("30".into()),
        diet: Some("vegan".into()),
        ..SearchFilters::default()
    };
    let results = service.search("chicken", &filters).await;
    assert_eq!(results, all);
}

// ============================================================================
// Fault Boundary Tests
// ============================================================================

#[tokio::test]
async fn test_directory_fault_surfaces_as_empty_list() {
    let mock = MockDirectory::new(vec![instant(fault())]);
    let service = SearchService::new(mock);

    let results = service.search("chicken", &SearchFilters::default()).await;
    assert!(results.is_empty());
    assert!(service.last_search_failed());

    // A later successful search clears the failure flag
    let service = SearchService::new(MockDirectory::new(vec![
        instant(fault()),
        instant(Ok(vec![recipe("1", "Stew", "Chicken", "Jamaican")])),
    ]));
    service.search("chicken", &SearchFilters::default()).await;
    assert!(service.last_search_failed());
    let results = service.search("chicken", &SearchFilters::default()).await;
    assert_eq!(results.len(), 1);
    assert!(!service.last_search_failed());
}

#[tokio::test]
async fn test_detail_fetch_absent_is_none() {
    let mock = MockDirectory::new(Vec::new());
    let service = SearchService::new(mock);

    assert!(service.fetch_recipe("missing").await.is_none());
}

// ============================================================================
// Stale-Result Guard Tests
// ============================================================================

#[tokio::test]
async fn test_slow_early_search_cannot_overwrite_fast_later_one() {
    let slow = recipe("1", "Slow Stew", "Chicken", "Jamaican");
    let fast = recipe("2", "Fast Curry", "Chicken", "Indian");
    let mock = MockDirectory::new(vec![
        (Duration::from_millis(200), Ok(vec![slow])),
        (Duration::from_millis(10), Ok(vec![fast.clone()])),
    ]);
    let service = std::sync::Arc::new(SearchService::new(mock));

    let first = {
        let service = service.clone();
        tokio::spawn(async move { service.search("chicken", &SearchFilters::default()).await })
    };
    // Let the first search get issued before the second supersedes it
    tokio::time::sleep(Duration::from_millis(50)).await;
    let second = service.search("chicken stew", &SearchFilters::default()).await;
    assert_eq!(second, vec![fast.clone()]);

    // The slow completion is discarded; its caller sees the newest list
    let first = first.await.unwrap();
    assert_eq!(first, vec![fast.clone()]);
    assert_eq!(service.latest_results(), vec![fast]);
}

#[tokio::test]
async fn test_recipe_switch_resets_scaling_even_when_fetch_fails() {
    use ladle::portions::ScalingState;

    let mock = MockDirectory::new(Vec::new());
    let service = SearchService::new(mock);
    let mut scaling = ScalingState::new();

    scaling.set_active_recipe("52940");
    scaling.update_servings(6);
    scaling.toggle_ingredient(0);

    // The transition happens on identity change, before any fetch
    scaling.set_active_recipe("53012");
    let fetched = service.fetch_recipe("53012").await;

    assert!(fetched.is_none());
    assert_eq!(scaling.current_servings(), scaling.default_servings());
    assert_eq!(scaling.checked_count(), 0);
}

// ============================================================================
// Passthrough Tests
// ============================================================================

#[tokio::test]
async fn test_categories_passthrough() {
    let mut mock = MockDirectory::new(Vec::new());
    mock.categories = vec!["Beef".into(), "Chicken".into(), "Dessert".into()];
    let service = SearchService::new(mock);

    assert_eq!(service.categories().await.len(), 3);
}

#[tokio::test]
async fn test_detail_fetch_returns_record() {
    let detail = recipe("42", "Full Record", "Chicken", "Jamaican");
    let mut mock = MockDirectory::new(Vec::new());
    mock.detail = Some(detail.clone());
    let service = SearchService::new(mock);

    assert_eq!(service.fetch_recipe("42").await, Some(detail.clone()));
    assert_eq!(service.random_recipe().await, Some(detail));
}
