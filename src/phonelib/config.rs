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

use super::helper_constants::{
    DEFAULT_EXTENSION_SEPARATE_TOKENS, DEFAULT_EXTENSION_SEPARATOR, DEFAULT_SANITIZE_REGEX,
    DEFAULT_STRICT_SANITIZE_REGEX,
};

/// How the extension is told apart from the number in raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionSeparators {
    /// Every character of the string separates.
    Chars(String),
    /// Every token separates. Tokens are matched literally and are case
    /// sensitive.
    Tokens(Vec<String>),
}

impl ExtensionSeparators {
    /// Alternation matching any separator, `None` when there is none.
    pub(crate) fn to_pattern(&self) -> Option<String> {
        let alternatives = match self {
            Self::Chars(chars) => chars
                .chars()
                .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
                .collect::<Vec<_>>(),
            Self::Tokens(tokens) => tokens
                .iter()
                .filter(|token| !token.is_empty())
                .map(|token| regex::escape(token))
                .collect::<Vec<_>>(),
        };
        if alternatives.is_empty() {
            None
        } else {
            Some(alternatives.join("|"))
        }
    }
}

impl Default for ExtensionSeparators {
    fn default() -> Self {
        Self::Tokens(
            DEFAULT_EXTENSION_SEPARATE_TOKENS
                .iter()
                .map(|token| token.to_string())
                .collect(),
        )
    }
}

/// Engine settings. Validated once when a [`super::Phonelib`] is built from
/// them; never re-read per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonelibConfig {
    /// Territory assumed for numbers given without a hint and without an
    /// international marker.
    pub default_country: Option<String>,
    /// Strip only separators, so that stray letters invalidate the number.
    pub strict_check: bool,
    /// Convert keypad letters to digits before stripping.
    pub vanity_conversion: bool,
    /// Also match short numbers (short codes, emergency, ...).
    pub parse_special: bool,
    /// During the global scan, retry a doubled calling code only for the
    /// default territory.
    pub strict_double_prefix_check: bool,
    pub extension_separate_symbols: ExtensionSeparators,
    /// Placed between number and extension by the `full_*` formatters.
    pub extension_separator: String,
    pub sanitize_regex: String,
    pub strict_sanitize_regex: String,
}

impl Default for PhonelibConfig {
    fn default() -> Self {
        Self {
            default_country: None,
            strict_check: false,
            vanity_conversion: false,
            parse_special: false,
            strict_double_prefix_check: false,
            extension_separate_symbols: Default::default(),
            extension_separator: DEFAULT_EXTENSION_SEPARATOR.to_owned(),
            sanitize_regex: DEFAULT_SANITIZE_REGEX.to_owned(),
            strict_sanitize_regex: DEFAULT_STRICT_SANITIZE_REGEX.to_owned(),
        }
    }
}

impl PhonelibConfig {
    pub fn with_default_country(mut self, country: Option<&str>) -> Self {
        self.default_country = country.map(|code| code.to_owned());
        self
    }

    pub fn with_strict_check(mut self, strict_check: bool) -> Self {
        self.strict_check = strict_check;
        self
    }

    pub fn with_vanity_conversion(mut self, vanity_conversion: bool) -> Self {
        self.vanity_conversion = vanity_conversion;
        self
    }

    pub fn with_parse_special(mut self, parse_special: bool) -> Self {
        self.parse_special = parse_special;
        self
    }

    pub fn with_strict_double_prefix_check(mut self, strict: bool) -> Self {
        self.strict_double_prefix_check = strict;
        self
    }

    pub fn with_extension_separate_symbols(mut self, symbols: ExtensionSeparators) -> Self {
        self.extension_separate_symbols = symbols;
        self
    }

    pub fn with_extension_separator(mut self, separator: &str) -> Self {
        self.extension_separator = separator.to_owned();
        self
    }

    pub fn with_sanitize_regex(mut self, pattern: &str) -> Self {
        self.sanitize_regex = pattern.to_owned();
        self
    }

    pub fn with_strict_sanitize_regex(mut self, pattern: &str) -> Self {
        self.strict_sanitize_regex = pattern.to_owned();
        self
    }
}
