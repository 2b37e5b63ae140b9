// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compiled patterns keyed by their source text.
///
/// Entries are only ever added. Two threads racing on the same key may both
/// compile the pattern, the map keeps exactly one of the equivalent values.
#[derive(Debug)]
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
                regex::Regex::new(pattern).map(Arc::new)
            })?;
            Ok(entry.value().clone())
        }
    }

    /// Returns the pattern wrapped so that it can only match a whole input.
    pub fn get_full_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        self.get_regex(&fast_cat::concat_str!("^(?:", pattern, ")$"))
    }

    /// Returns the pattern wrapped so that it can only match from the input start.
    pub fn get_prefix_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        self.get_regex(&fast_cat::concat_str!("^(?:", pattern, ")"))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::RegexCache;

    #[test]
    fn same_pattern_is_compiled_once() {
        let cache = RegexCache::new();
        let first = cache.get_regex(r"\d{3}").unwrap();
        let second = cache.get_regex(r"\d{3}").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(1, cache.len());
    }

    #[test]
    fn invalid_pattern_is_not_stored() {
        let cache = RegexCache::with_capacity(4);
        assert!(cache.get_regex(r"(\d").is_err());
        assert_eq!(0, cache.len());
    }

    #[test]
    fn anchored_variants() {
        let cache = RegexCache::new();
        let full = cache.get_full_regex(r"\d{3}|\d{4}").unwrap();
        assert!(full.is_match("1234"));
        assert!(!full.is_match("12345"));

        let prefix = cache.get_prefix_regex("44|7").unwrap();
        assert!(prefix.is_match("4420"));
        assert!(!prefix.is_match("1447"));
    }

    #[test]
    fn concurrent_inserts_keep_one_entry() {
        let cache = Arc::new(RegexCache::new());
        let handles = (0..8)
            .map(|_| {
                let cache = cache.clone();
                thread::spawn(move || cache.get_regex(r"^(?:[2-9]\d{9})$").is_ok())
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(1, cache.len());
    }
}
