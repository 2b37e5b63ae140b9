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

use std::{path::PathBuf, sync::Arc};

use log::trace;

use crate::{
    i18n::TerritoryCode, interfaces::MatcherApi, regex_based_matcher::RegexBasedMatcher,
};

use super::{
    config::PhonelibConfig,
    enums::PhoneNumberType,
    errors::{BuildError, ConfigError},
    extended_data::ExtendedData,
    helper_functions::{load_compiled_metadata, load_metadata_file, merge_metadata},
    helper_types::SanitizedNumber,
    phone::Phone,
    phone_analyzer::PhoneAnalyzer,
    phone_data::PhoneData,
    sanitizer::Sanitizer,
    territory::Territory,
};

/// The analysis engine: a dataset plus one validated configuration.
///
/// Cloning is cheap. Re-configured engines made with
/// [`Phonelib::with_config`] share the dataset and its pattern cache.
#[derive(Clone)]
pub struct Phonelib {
    data: Arc<PhoneData>,
    config: Arc<PhonelibConfig>,
    sanitizer: Arc<Sanitizer>,
    /// An API for validation checking.
    matcher_api: Arc<dyn MatcherApi>,
}

impl Phonelib {
    /// Engine over the compiled-in dataset with the default configuration.
    pub fn new() -> Result<Self, BuildError> {
        PhonelibBuilder::new().build()
    }

    pub fn builder() -> PhonelibBuilder {
        PhonelibBuilder::new()
    }

    fn from_parts(data: Arc<PhoneData>, mut config: PhonelibConfig) -> Result<Self, ConfigError> {
        if let Some(country) = config.default_country.take() {
            let country = TerritoryCode::normalize(&country);
            if data.territory(&country).is_none() {
                return Err(ConfigError::UnknownDefaultCountry(country));
            }
            config.default_country = Some(country);
        }
        let sanitizer = Sanitizer::new(&config, data.regexp_cache())?;
        let matcher_api = Arc::new(RegexBasedMatcher::new(data.regexp_cache().clone()));
        Ok(Self {
            data,
            config: Arc::new(config),
            sanitizer: Arc::new(sanitizer),
            matcher_api,
        })
    }

    /// Returns an engine with another configuration over the same dataset.
    pub fn with_config(&self, config: PhonelibConfig) -> Result<Self, ConfigError> {
        Self::from_parts(self.data.clone(), config)
    }

    pub fn config(&self) -> &PhonelibConfig {
        &self.config
    }

    pub fn data(&self) -> &PhoneData {
        &self.data
    }

    pub fn territory(&self, id: &str) -> Option<&Territory> {
        self.data
            .territory(&TerritoryCode::normalize(id))
            .map(|territory| territory.as_ref())
    }

    /// Geo, timezone, carrier and country name lookups.
    pub fn extended_data(&self) -> &ExtendedData {
        self.data.extended_data()
    }

    /// Analyzes `input`. `country` is a territory id hint, case-insensitive.
    ///
    /// Never fails: unusable input yields a [`Phone`] for which every
    /// predicate is false.
    pub fn parse<'a>(&self, input: impl Into<Option<&'a str>>, country: Option<&str>) -> Phone {
        let original = input.into();
        let sanitized = original
            .map(|raw| self.sanitizer.sanitize(raw))
            .unwrap_or_default();
        let hint = country
            .map(TerritoryCode::normalize)
            .filter(|id| !id.is_empty())
            .filter(|id| self.accepts_hint(id, &sanitized));
        trace!("Parsing {:?} as {:?} with hint {:?}", original, sanitized, hint);

        let analysis = PhoneAnalyzer::new(
            &self.data,
            &self.config,
            self.matcher_api.as_ref(),
            &sanitized,
        )
        .analyze(hint);
        Phone::new(original, sanitized, analysis, &self.config.extension_separator)
    }

    /// A hint is ignored for numbers written with `+` and another calling
    /// code.
    fn accepts_hint(&self, id: &str, sanitized: &SanitizedNumber) -> bool {
        if !sanitized.starts_with_plus {
            return true;
        }
        match self.data.territory(id) {
            Some(territory) => sanitized.digits.starts_with(territory.country_code()),
            None => true,
        }
    }

    pub fn is_valid<'a>(&self, input: impl Into<Option<&'a str>>) -> bool {
        self.parse(input, None).is_valid()
    }

    pub fn is_invalid<'a>(&self, input: impl Into<Option<&'a str>>) -> bool {
        self.parse(input, None).is_invalid()
    }

    pub fn is_possible<'a>(&self, input: impl Into<Option<&'a str>>) -> bool {
        self.parse(input, None).is_possible()
    }

    pub fn is_impossible<'a>(&self, input: impl Into<Option<&'a str>>) -> bool {
        self.parse(input, None).is_impossible()
    }

    /// Analyzes with `country` as the hint, then checks the result for it.
    pub fn is_valid_for_country<'a>(&self, input: impl Into<Option<&'a str>>, country: &str) -> bool {
        self.parse(input, Some(country)).is_valid_for_country(country)
    }

    pub fn is_invalid_for_country<'a>(
        &self,
        input: impl Into<Option<&'a str>>,
        country: &str,
    ) -> bool {
        self.parse(input, Some(country)).is_invalid_for_country(country)
    }
}

/// Composes an engine from the compiled-in dataset, optional override
/// files, additional patterns and a configuration.
#[derive(Debug, Default)]
pub struct PhonelibBuilder {
    config: PhonelibConfig,
    override_paths: Vec<PathBuf>,
    additional_patterns: Vec<(String, PhoneNumberType, String)>,
}

impl PhonelibBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn config(mut self, config: PhonelibConfig) -> Self {
        self.config = config;
        self
    }

    /// Territories of the file replace same-id records in place. New ids are
    /// appended. Files are merged in the order given.
    pub fn override_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_paths.push(path.into());
        self
    }

    /// ORs `pattern` into the patterns of `number_type` and into the general
    /// patterns of `territory`.
    pub fn additional_pattern(
        mut self,
        territory: &str,
        number_type: PhoneNumberType,
        pattern: &str,
    ) -> Self {
        self.additional_patterns
            .push((territory.to_owned(), number_type, pattern.to_owned()));
        self
    }

    pub fn build(self) -> Result<Phonelib, BuildError> {
        let mut metadata = load_compiled_metadata()?;
        for path in &self.override_paths {
            merge_metadata(&mut metadata, load_metadata_file(path)?);
        }
        let data = PhoneData::from_metadata(&metadata, &self.additional_patterns)?;
        Ok(Phonelib::from_parts(Arc::new(data), self.config)?)
    }
}
