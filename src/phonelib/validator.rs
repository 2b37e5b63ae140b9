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

use thiserror::Error;

use crate::i18n::TerritoryCode;

use super::{enums::PhoneNumberType, phone::Phone, phonelib::Phonelib};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneValidationError {
    #[error("is invalid")]
    Invalid,

    #[error("has a number type that is not allowed")]
    TypeNotAllowed,

    #[error("is not a number of an allowed country")]
    CountryNotAllowed,

    #[error("has an extension, which is not allowed")]
    ExtensionNotAllowed,
}

/// Checks a single field value against a set of rules, the way form
/// validators do.
#[derive(Debug, Clone)]
pub struct PhoneValidator {
    allow_blank: bool,
    possible: bool,
    allow_extensions: bool,
    types: Vec<PhoneNumberType>,
    countries: Vec<String>,
    country_specifier: Option<String>,
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self {
            allow_blank: false,
            possible: false,
            allow_extensions: true,
            types: Vec::new(),
            countries: Vec::new(),
            country_specifier: None,
        }
    }
}

impl PhoneValidator {
    pub fn new() -> Self {
        Default::default()
    }

    /// Blank values pass without analysis.
    pub fn allow_blank(mut self, allow_blank: bool) -> Self {
        self.allow_blank = allow_blank;
        self
    }

    /// Accept possible numbers instead of requiring valid ones.
    pub fn possible(mut self, possible: bool) -> Self {
        self.possible = possible;
        self
    }

    pub fn allow_extensions(mut self, allow_extensions: bool) -> Self {
        self.allow_extensions = allow_extensions;
        self
    }

    /// At least one of the number's types must be in the list. Fixed line
    /// and mobile also accept numbers classified as fixed-or-mobile.
    pub fn types(mut self, types: impl IntoIterator<Item = PhoneNumberType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// The number must be valid for one of these territories.
    pub fn countries<'a>(mut self, countries: impl IntoIterator<Item = &'a str>) -> Self {
        self.countries = countries.into_iter().map(TerritoryCode::normalize).collect();
        self
    }

    /// Territory used as the parse hint.
    pub fn country_specifier(mut self, country: Option<&str>) -> Self {
        self.country_specifier = country.map(|country| country.to_owned());
        self
    }

    pub fn validate(&self, phonelib: &Phonelib, value: Option<&str>) -> Result<(), PhoneValidationError> {
        if self.allow_blank && value.is_none_or(|value| value.trim().is_empty()) {
            return Ok(());
        }
        let phone = phonelib.parse(value, self.country_specifier.as_deref());

        let accepted = if self.possible {
            phone.is_possible()
        } else {
            phone.is_valid()
        };
        if !accepted {
            return Err(PhoneValidationError::Invalid);
        }
        if !self.has_allowed_type(&phone) {
            return Err(PhoneValidationError::TypeNotAllowed);
        }
        if !self.countries.is_empty()
            && !phone
                .valid_countries()
                .iter()
                .any(|id| self.countries.iter().any(|allowed| allowed == id))
        {
            return Err(PhoneValidationError::CountryNotAllowed);
        }
        if !self.allow_extensions && !phone.extension().is_empty() {
            return Err(PhoneValidationError::ExtensionNotAllowed);
        }
        Ok(())
    }

    fn has_allowed_type(&self, phone: &Phone) -> bool {
        if self.types.is_empty() {
            return true;
        }
        let types = if self.possible {
            phone.possible_types()
        } else {
            phone.types()
        };
        types.iter().any(|number_type| {
            self.types.contains(number_type)
                || (*number_type == PhoneNumberType::FixedOrMobile
                    && self
                        .types
                        .iter()
                        .any(|allowed| allowed.is_fixed_or_mobile_component()))
        })
    }
}
