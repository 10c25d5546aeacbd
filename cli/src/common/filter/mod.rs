//! # ArcRS Name Filters (`common::filter`)
//!
//! File: cli/src/common/filter/mod.rs
//! Repository: https://github.com/arcrs/arcrs
//!
//! ## Overview
//!
//! This module turns lists of regular-expression pattern strings into a single
//! predicate over file names, used to drop entries from an archive operation.
//! Two polarities are supported:
//!
//! - **Exclude**: a name is excluded if *any* pattern matches it.
//! - **Include**: a name is excluded if *none* of the patterns match it
//!   (i.e. keep only names matching at least one pattern).
//!
//! ## Architecture
//!
//! `NameFilter` compiles every pattern up front; a single invalid pattern
//! fails the whole construction with `ArcrsError::Pattern` naming the
//! offending pattern; no partial filter is ever returned. Once built, the
//! filter is pure and order-independent: asking about the same name twice
//! always yields the same answer, and it holds no file handles or other
//! resources, so one filter can be reused across an entire archive operation.
//!
//! Filters match the entry's *file name* (the base name), not its full
//! relative path: excluding a directory's name does not implicitly exclude
//! the files beneath it.
//!
//! ## Examples
//!
//! ```rust
//! use crate::common::filter::NameFilter;
//!
//! let filter = NameFilter::exclude(&[r"\.log$".to_string()])?;
//! assert!(filter.is_excluded("debug.log"));
//! assert!(!filter.is_excluded("notes.txt"));
//! ```
//!
//! **Caller beware:** `NameFilter::include(&[])` excludes *every* name, since
//! no name can match a pattern in an empty list. Callers wanting "include
//! all" must not pass an empty include list.
//!
use crate::core::error::{ArcrsError, Result};
use regex::Regex;

/// Whether matching a pattern keeps a name in or throws it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterMode {
    /// Exclude names matching any pattern.
    Exclude,
    /// Exclude names matching none of the patterns.
    Include,
}

/// # Name Filter (`NameFilter`)
///
/// A compiled, reusable predicate deciding whether a file name is excluded
/// from an operation. Construct with [`NameFilter::exclude`] or
/// [`NameFilter::include`]; query with [`NameFilter::is_excluded`].
#[derive(Debug)]
pub struct NameFilter {
    regexes: Vec<Regex>,
    mode: FilterMode,
}

impl NameFilter {
    /// # Build Exclusion Filter (`exclude`)
    ///
    /// Compiles `patterns` into a filter that excludes a name when **any**
    /// pattern matches it (logical OR, short-circuiting at the first match).
    /// An empty pattern list excludes nothing.
    ///
    /// ## Errors
    ///
    /// Returns `ArcrsError::Pattern` for the first pattern that fails to
    /// compile; no partial filter is returned.
    pub fn exclude(patterns: &[String]) -> Result<Self> {
        Ok(Self {
            regexes: compile_patterns(patterns)?,
            mode: FilterMode::Exclude,
        })
    }

    /// # Build Inclusion Filter (`include`)
    ///
    /// Compiles `patterns` into a filter that excludes a name when **none**
    /// of the patterns match it, keeping only names matching at least one
    /// pattern.
    ///
    /// An empty pattern list therefore excludes *everything*. This mirrors
    /// the exclusion asymmetry of the matching rule and is deliberate; guard
    /// against passing an empty list when "include all" is intended.
    ///
    /// ## Errors
    ///
    /// Returns `ArcrsError::Pattern` for the first pattern that fails to
    /// compile; no partial filter is returned.
    pub fn include(patterns: &[String]) -> Result<Self> {
        Ok(Self {
            regexes: compile_patterns(patterns)?,
            mode: FilterMode::Include,
        })
    }

    /// Reports whether `name` should be excluded from the operation.
    ///
    /// Pure: the same name always yields the same answer for a given filter.
    pub fn is_excluded(&self, name: &str) -> bool {
        let matched = self.regexes.iter().any(|re| re.is_match(name));
        match self.mode {
            FilterMode::Exclude => matched,
            FilterMode::Include => !matched,
        }
    }
}

/// Compiles every pattern, failing on the first invalid one.
fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| {
                ArcrsError::Pattern {
                    pattern: pattern.clone(),
                    source,
                }
                .into()
            })
        })
        .collect()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exclude_matches_any_pattern() {
        let filter = NameFilter::exclude(&patterns(&[r"\.log$", r"^tmp"])).unwrap();
        assert!(filter.is_excluded("debug.log"));
        assert!(filter.is_excluded("tmp_scratch"));
        assert!(!filter.is_excluded("notes.txt"));
        // Repeated queries are stable.
        assert!(filter.is_excluded("debug.log"));
    }

    #[test]
    fn test_exclude_empty_list_excludes_nothing() {
        let filter = NameFilter::exclude(&[]).unwrap();
        assert!(!filter.is_excluded("anything.at.all"));
        assert!(!filter.is_excluded(""));
    }

    #[test]
    fn test_include_keeps_only_matches() {
        let filter = NameFilter::include(&patterns(&[r"\.txt$"])).unwrap();
        assert!(!filter.is_excluded("a.txt"));
        assert!(filter.is_excluded("b.bin"));
    }

    #[test]
    fn test_include_empty_list_excludes_everything() {
        // Deliberate caller-beware boundary: no name matches an empty list.
        let filter = NameFilter::include(&[]).unwrap();
        assert!(filter.is_excluded("a.txt"));
        assert!(filter.is_excluded(""));
    }

    #[test]
    fn test_invalid_pattern_fails_construction() {
        let bad = patterns(&[r"\.txt$", "[unclosed"]);
        for result in [NameFilter::exclude(&bad), NameFilter::include(&bad)] {
            let err = result.unwrap_err();
            let pattern_err = err
                .downcast_ref::<ArcrsError>()
                .expect("expected an ArcrsError");
            match pattern_err {
                ArcrsError::Pattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
                other => panic!("expected Pattern error, got {other:?}"),
            }
        }
    }
}
