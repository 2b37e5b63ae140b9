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

use log::error;
use super::regex_util::RegexFullMatch;

use crate::{interfaces, phonelib::territory::PatternPair, regexp_cache::{InvalidRegexError, RegexCache}};

pub struct RegexBasedMatcher {
    cache: Arc<RegexCache>,
}

impl RegexBasedMatcher {
    pub fn new(cache: Arc<RegexCache>) -> Self {
        Self { cache }
    }

    fn match_number(
        &self, phone_number: &str,
        number_pattern: &str,
    ) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_full_regex(number_pattern)?;
        // anchored, but the span is still checked against the input length
        Ok(regexp.full_match(phone_number))
    }

    fn match_or_log(&self, number: &str, pattern: &str) -> bool {
        // We don't want to consider non-empty input matching an empty pattern.
        if pattern.is_empty() {
            return false;
        }
        match self.match_number(number, pattern) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                false
            }
        }
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_possible_number(&self, number: &str, pair: &PatternPair) -> bool {
        self.match_or_log(number, pair.possible_pattern())
    }

    fn match_valid_number(&self, number: &str, pair: &PatternPair) -> bool {
        self.match_or_log(number, pair.valid_pattern())
    }
}
