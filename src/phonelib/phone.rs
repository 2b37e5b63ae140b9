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

use std::fmt;

use crate::i18n::TerritoryCode;

use super::{
    enums::PhoneNumberType,
    helper_types::{AnalysisResult, SanitizedNumber, TerritoryResult},
};

/// An analyzed phone number. Immutable; every query is answered from the
/// per-territory results computed at parse time.
#[derive(Debug, Clone)]
pub struct Phone {
    original: Option<String>,
    sanitized: SanitizedNumber,
    analysis: AnalysisResult,
    national_number: Option<String>,
    extension_separator: String,
}

impl Phone {
    pub(crate) fn new(
        original: Option<&str>,
        sanitized: SanitizedNumber,
        analysis: AnalysisResult,
        extension_separator: &str,
    ) -> Self {
        let mut phone = Self {
            original: original.map(|original| original.to_owned()),
            sanitized,
            analysis,
            national_number: None,
            extension_separator: extension_separator.to_owned(),
        };
        if !phone.sanitized.digits.is_empty() {
            phone.national_number = Some(match phone.country_result() {
                Some(result) => result.national_number().to_owned(),
                None => phone.sanitized.digits.clone(),
            });
        }
        phone
    }

    /// The input exactly as given.
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    pub fn sanitized(&self) -> &str {
        &self.sanitized.digits
    }

    /// Digits found after an extension separator, empty when there are none.
    pub fn extension(&self) -> &str {
        &self.sanitized.extension
    }

    pub(crate) fn extension_separator(&self) -> &str {
        &self.extension_separator
    }

    /// National significant number of the selected territory, or the
    /// sanitized digits when no territory matched.
    pub fn national_number(&self) -> Option<&str> {
        self.national_number.as_deref()
    }

    /// Per-territory results in dataset order.
    pub fn territory_results(&self) -> impl Iterator<Item = &TerritoryResult> {
        self.analysis.iter()
    }

    pub fn is_valid(&self) -> bool {
        self.analysis.has_valid()
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn is_possible(&self) -> bool {
        self.analysis.has_possible()
    }

    pub fn is_impossible(&self) -> bool {
        !self.is_possible()
    }

    pub fn is_valid_for_country(&self, country: &str) -> bool {
        self.analysis
            .get(&TerritoryCode::normalize(country))
            .is_some_and(TerritoryResult::is_valid)
    }

    pub fn is_invalid_for_country(&self, country: &str) -> bool {
        !self.is_valid_for_country(country)
    }

    /// Valid types over all territories, first seen first.
    pub fn types(&self) -> Vec<PhoneNumberType> {
        union(self.analysis.iter().map(TerritoryResult::valid_types))
    }

    /// Possible types over all territories, first seen first.
    pub fn possible_types(&self) -> Vec<PhoneNumberType> {
        union(self.analysis.iter().map(TerritoryResult::possible_types))
    }

    pub fn number_type(&self) -> Option<PhoneNumberType> {
        self.types().first().copied()
    }

    pub fn human_type(&self) -> Option<&'static str> {
        self.number_type().map(PhoneNumberType::human_name)
    }

    pub fn human_types(&self) -> Vec<&'static str> {
        self.types()
            .into_iter()
            .map(PhoneNumberType::human_name)
            .collect()
    }

    /// Every territory that matched, valid or not.
    pub fn countries(&self) -> Vec<&str> {
        self.analysis.iter().map(TerritoryResult::id).collect()
    }

    pub fn valid_countries(&self) -> Vec<&str> {
        self.analysis
            .iter()
            .filter(|result| result.is_valid())
            .map(TerritoryResult::id)
            .collect()
    }

    pub fn valid_country(&self) -> Option<&str> {
        self.valid_country_result().map(TerritoryResult::id)
    }

    /// The selected territory: the main territory of the calling code among
    /// the valid results, else the first valid one, else the same choice
    /// among all results.
    pub fn country(&self) -> Option<&str> {
        self.country_result().map(TerritoryResult::id)
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_result()
            .map(|result| result.territory().country_code())
    }

    pub(crate) fn country_result(&self) -> Option<&TerritoryResult> {
        self.valid_country_result()
            .or_else(|| main_or_first(self.analysis.iter()))
    }

    fn valid_country_result(&self) -> Option<&TerritoryResult> {
        main_or_first(self.analysis.iter().filter(|result| result.is_valid()))
    }
}

fn main_or_first<'a>(
    mut results: impl Iterator<Item = &'a TerritoryResult>,
) -> Option<&'a TerritoryResult> {
    let first = results.next()?;
    if first.territory().is_main_country_for_code() {
        return Some(first);
    }
    Some(
        results
            .find(|result| result.territory().is_main_country_for_code())
            .unwrap_or(first),
    )
}

fn union<'a>(groups: impl Iterator<Item = &'a [PhoneNumberType]>) -> Vec<PhoneNumberType> {
    let mut types = Vec::new();
    for number_type in groups.flatten() {
        if !types.contains(number_type) {
            types.push(*number_type);
        }
    }
    types
}

/// E164 for valid numbers, the original input otherwise.
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            if let Some(e164) = self.e164() {
                return f.write_str(&e164);
            }
        }
        f.write_str(self.original().unwrap_or_default())
    }
}

/// Valid numbers compare by E164, anything else by the original input.
impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        if self.is_valid() && other.is_valid() {
            self.e164() == other.e164()
        } else {
            self.original == other.original
        }
    }
}
