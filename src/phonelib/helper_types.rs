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

use super::{
    enums::PhoneNumberType,
    territory::{NumberFormat, Territory, DEFAULT_NUMBER_FORMAT},
};

/// Output of the sanitizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SanitizedNumber {
    pub digits: String,
    pub extension: String,
    /// The number part began with `+`, ignoring leading whitespace.
    pub starts_with_plus: bool,
    pub starts_with_double_zero: bool,
}

impl SanitizedNumber {
    pub fn is_international(&self) -> bool {
        self.starts_with_plus || self.starts_with_double_zero
    }
}

/// Analysis of a number against one territory. Present only when the
/// territory's general pattern matched.
#[derive(Debug, Clone)]
pub struct TerritoryResult {
    territory: Arc<Territory>,
    national_number: String,
    valid: Vec<PhoneNumberType>,
    possible: Vec<PhoneNumberType>,
    format_index: Option<usize>,
}

impl TerritoryResult {
    pub(crate) fn new(
        territory: Arc<Territory>,
        national_number: String,
        valid: Vec<PhoneNumberType>,
        possible: Vec<PhoneNumberType>,
        format_index: Option<usize>,
    ) -> Self {
        Self {
            territory,
            national_number,
            valid,
            possible,
            format_index,
        }
    }

    pub fn territory(&self) -> &Territory {
        &self.territory
    }

    pub fn id(&self) -> &str {
        self.territory.id()
    }

    /// National significant number, without calling code or national prefix.
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    pub fn valid_types(&self) -> &[PhoneNumberType] {
        &self.valid
    }

    pub fn possible_types(&self) -> &[PhoneNumberType] {
        &self.possible
    }

    pub fn is_valid(&self) -> bool {
        !self.valid.is_empty()
    }

    pub fn is_possible(&self) -> bool {
        !self.possible.is_empty()
    }

    /// The territory format chosen for the national number, or the default
    /// one.
    pub fn number_format(&self) -> &NumberFormat {
        self.format_index
            .and_then(|index| self.territory.formats().get(index))
            .unwrap_or(&*DEFAULT_NUMBER_FORMAT)
    }
}

/// Per-territory results of one analysis, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    results: Vec<TerritoryResult>,
}

impl AnalysisResult {
    /// Adds a result, replacing an earlier one for the same territory.
    pub(crate) fn insert(&mut self, result: TerritoryResult) {
        match self.results.iter_mut().find(|known| known.id() == result.id()) {
            Some(known) => *known = result,
            None => self.results.push(result),
        }
    }

    pub fn get(&self, id: &str) -> Option<&TerritoryResult> {
        self.results.iter().find(|result| result.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TerritoryResult> {
        self.results.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_valid(&self) -> bool {
        self.results.iter().any(TerritoryResult::is_valid)
    }

    pub fn has_possible(&self) -> bool {
        self.results.iter().any(TerritoryResult::is_possible)
    }
}

impl From<Option<TerritoryResult>> for AnalysisResult {
    fn from(result: Option<TerritoryResult>) -> Self {
        Self {
            results: result.into_iter().collect(),
        }
    }
}
