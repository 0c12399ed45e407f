// ABOUTME: Quantity parsing, scaling, and display formatting for ingredient measures
// ABOUTME: ScalingState tracks per-recipe serving count and the ingredient checklist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ladle Contributors

//! # Portion Scaling
//!
//! Ingredient measures arrive as free text ("1/2 cup", "200 g", "Dash").
//! Scaling finds the first numeric token, rescales it by the serving
//! ratio, and substitutes the formatted result back into the text. A
//! measure with no numeric token is non-scalable and passes through
//! unchanged. This is a display convenience, not an exact rational
//! arithmetic system; formatting rounds to common culinary fractions or
//! one decimal digit.
//!
//! [`ScalingState`] holds the per-recipe serving count and checklist.
//! Switching the active recipe resets both — that reset is an invariant of
//! the state machine, not a convenience.

use crate::constants::{quantity, servings};
use regex::Regex;
use std::collections::BTreeSet;
use std::ops::Range;
use std::sync::OnceLock;
use tracing::debug;

/// Matcher for the first numeric token: a simple fraction `A/B` or a
/// decimal/integer. Fraction wins when both could match at a position.
#[allow(clippy::expect_used)] // Safe: static literal pattern, covered by tests
fn quantity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:(\d+)\s*/\s*(\d+))|(?:\d+(?:\.\d+)?)").expect("valid quantity pattern")
    })
}

/// Locate and evaluate the first numeric token in a measure string
///
/// Returns the byte range of the token and its numeric value. A fraction
/// with a zero denominator is a parse fault and yields `None` (the caller
/// treats the measure as non-scalable; infinity is never propagated).
fn find_quantity(measure: &str) -> Option<(Range<usize>, f64)> {
    let caps = quantity_re().captures(measure)?;
    let whole = caps.get(0)?;
    let value = match (caps.get(1), caps.get(2)) {
        (Some(numer), Some(denom)) => {
            let numer: f64 = numer.as_str().parse().ok()?;
            let denom: f64 = denom.as_str().parse().ok()?;
            if denom == 0.0 {
                return None;
            }
            numer / denom
        }
        _ => whole.as_str().parse().ok()?,
    };
    Some((whole.range(), value))
}

/// Parse the first numeric token of a measure string
///
/// `"1/2"` parses to `0.5`, `"200"` to `200.0`. Returns `None` when the
/// measure carries no numeric token (not scalable) or the token is
/// malformed (e.g. a zero denominator).
#[must_use]
pub fn parse_quantity(measure: &str) -> Option<f64> {
    find_quantity(measure).map(|(_, value)| value)
}

/// Format a scaled quantity for display
///
/// Integers render bare. A fractional part within 0.01 of a common
/// culinary fraction renders as its glyph (½, ¼, ¾, ⅓), prefixed by the
/// integer part when nonzero. Anything else renders with one decimal
/// digit, trimming a trailing `.0`.
#[must_use]
pub fn format_quantity(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < f64::EPSILON * value.abs().max(1.0) {
        return format!("{}", rounded as i64);
    }

    let whole = value.trunc() as i64;
    let fract = value - value.trunc();
    for &(target, glyph) in quantity::FRACTION_GLYPHS {
        if (fract - target).abs() <= quantity::FRACTION_TOLERANCE {
            return if whole == 0 {
                glyph.to_owned()
            } else {
                format!("{whole} {glyph}")
            };
        }
    }

    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_owned(),
        None => text,
    }
}

/// Rescale a measure string from one serving count to another
///
/// Identity when `current == default` (explicit short-circuit so the
/// common case never picks up floating-point drift). Non-scalable
/// measures pass through unchanged.
#[must_use]
pub fn scale_measure(measure: &str, default_servings: u32, current_servings: u32) -> String {
    if current_servings == default_servings || default_servings == 0 {
        return measure.to_owned();
    }
    let Some((span, value)) = find_quantity(measure) else {
        return measure.to_owned();
    };
    let scaled = value / f64::from(default_servings) * f64::from(current_servings);
    let mut out = String::with_capacity(measure.len());
    out.push_str(&measure[..span.start]);
    out.push_str(&format_quantity(scaled));
    out.push_str(&measure[span.end..]);
    out
}

/// Per-recipe serving count and ingredient checklist
///
/// One instance backs whichever recipe detail is currently displayed.
/// The state machine transition is [`set_active_recipe`]: a change of
/// recipe identity resets the serving count to the baseline and clears
/// the checklist, even when the fetch that follows fails.
///
/// [`set_active_recipe`]: Self::set_active_recipe
#[derive(Debug, Clone)]
pub struct ScalingState {
    default_servings: u32,
    current_servings: u32,
    active_recipe: Option<String>,
    checked: BTreeSet<usize>,
}

impl Default for ScalingState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalingState {
    /// Create state at the standard baseline of 4 servings
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_servings(servings::DEFAULT_SERVINGS)
    }

    /// Create state with an explicit baseline serving count
    #[must_use]
    pub fn with_default_servings(default_servings: u32) -> Self {
        let default_servings =
            default_servings.clamp(servings::MIN_SERVINGS, servings::MAX_SERVINGS);
        Self {
            default_servings,
            current_servings: default_servings,
            active_recipe: None,
            checked: BTreeSet::new(),
        }
    }

    /// Switch the displayed recipe
    ///
    /// A change of identity resets `current_servings` to the baseline and
    /// clears the checklist synchronously. Re-setting the same id is a
    /// no-op, so callers can invoke this unconditionally before fetching.
    pub fn set_active_recipe(&mut self, id: &str) {
        if self.active_recipe.as_deref() == Some(id) {
            return;
        }
        debug!(recipe = %id, "active recipe changed, scaling state reset");
        self.active_recipe = Some(id.to_owned());
        self.current_servings = self.default_servings;
        self.checked.clear();
    }

    /// Adjust the serving count by a signed delta
    ///
    /// The adjustment applies only while the result stays within the
    /// allowed range; out-of-range requests are rejected silently (the
    /// UI control disables itself at the boundary). Returns the serving
    /// count after the call.
    pub fn update_servings(&mut self, delta: i32) -> u32 {
        let next = i64::from(self.current_servings) + i64::from(delta);
        if (i64::from(servings::MIN_SERVINGS)..=i64::from(servings::MAX_SERVINGS)).contains(&next)
        {
            self.current_servings = next as u32;
        }
        self.current_servings
    }

    /// Flip the checked state of the ingredient at `index`
    pub fn toggle_ingredient(&mut self, index: usize) {
        if !self.checked.remove(&index) {
            self.checked.insert(index);
        }
    }

    /// True when the ingredient at `index` is checked off
    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    /// Number of checked-off ingredients
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Current serving count
    #[must_use]
    pub const fn current_servings(&self) -> u32 {
        self.current_servings
    }

    /// Baseline serving count
    #[must_use]
    pub const fn default_servings(&self) -> u32 {
        self.default_servings
    }

    /// Identity of the recipe this state is tracking, if any
    #[must_use]
    pub fn active_recipe(&self) -> Option<&str> {
        self.active_recipe.as_deref()
    }

    /// Scale a measure string to the current serving count
    #[must_use]
    pub fn scale(&self, measure: &str) -> String {
        scale_measure(measure, self.default_servings, self.current_servings)
    }
}
