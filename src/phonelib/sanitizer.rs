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

use regex::Regex;

use crate::{macros::owned_from_cow_or, regexp_cache::RegexCache};

use super::{
    config::PhonelibConfig,
    errors::ConfigError,
    helper_constants::{DOUBLE_ZERO, PLUS_SIGN},
    helper_types::SanitizedNumber,
    phone_regexps_and_mappings::REGEXPS_AND_MAPPINGS,
};

/// Turns raw input into a digit string and an extension. The configured
/// patterns are compiled once, so sanitizing itself never fails.
#[derive(Debug)]
pub(crate) struct Sanitizer {
    extension_splitter: Arc<Regex>,
    strip_pattern: Arc<Regex>,
    vanity_conversion: bool,
}

impl Sanitizer {
    pub fn new(config: &PhonelibConfig, cache: &RegexCache) -> Result<Self, ConfigError> {
        let separators = config
            .extension_separate_symbols
            .to_pattern()
            .ok_or(ConfigError::EmptyExtensionSeparators)?;
        let extension_splitter = cache.get_regex(&separators).map_err(|source| {
            ConfigError::InvalidRegex {
                setting: "extension_separate_symbols",
                source,
            }
        })?;
        let (setting, strip_pattern) = if config.strict_check {
            ("strict_sanitize_regex", &config.strict_sanitize_regex)
        } else {
            ("sanitize_regex", &config.sanitize_regex)
        };
        let strip_pattern = cache
            .get_regex(strip_pattern)
            .map_err(|source| ConfigError::InvalidRegex { setting, source })?;

        Ok(Self {
            extension_splitter,
            strip_pattern,
            vanity_conversion: config.vanity_conversion,
        })
    }

    pub fn sanitize(&self, raw: &str) -> SanitizedNumber {
        let mut parts = self.extension_splitter.split(raw);
        let number = parts.next().unwrap_or_default();
        let extension = parts
            .flat_map(|part| part.chars())
            .filter(|c| c.is_ascii_digit())
            .collect::<String>();

        let marker = number.trim_start();
        let starts_with_plus = marker.starts_with(PLUS_SIGN);
        let starts_with_double_zero = marker.starts_with(DOUBLE_ZERO);

        let converted = if self.vanity_conversion {
            REGEXPS_AND_MAPPINGS.convert_vanity(number)
        } else {
            number.to_owned()
        };
        let normalized: String = dec_from_char::normalize_decimals(&converted).into();
        let digits = owned_from_cow_or!(self.strip_pattern.replace_all(&normalized, ""), normalized);

        SanitizedNumber {
            digits,
            extension,
            starts_with_plus,
            starts_with_double_zero,
        }
    }
}
