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

use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
};

use log::{error, warn};

use crate::{
    i18n::TerritoryCode,
    proto_gen::territory_metadata::TerritoryMetadata,
    regexp_cache::RegexCache,
};

use super::{
    enums::PhoneNumberType,
    errors::DataLoadError,
    extended_data::ExtendedData,
    territory::Territory,
};

/// The immutable territory table together with the pattern cache every
/// lookup against it goes through.
#[derive(Debug)]
pub struct PhoneData {
    territories: Vec<Arc<Territory>>,
    /// Territory id to position in `territories`.
    index: HashMap<String, usize>,
    regexp_cache: Arc<RegexCache>,
    extended_data: OnceLock<ExtendedData>,
}

impl PhoneData {
    /// Builds the table from metadata records. Additional patterns are
    /// applied before the records are frozen.
    pub(super) fn from_metadata(
        metadata: &[TerritoryMetadata],
        additional_patterns: &[(String, PhoneNumberType, String)],
    ) -> Result<Self, DataLoadError> {
        let regexp_cache = Arc::new(RegexCache::with_capacity(metadata.len() * 16));
        let mut territories = Vec::with_capacity(metadata.len());

        for record in metadata {
            if record.id() == TerritoryCode::get_unknown() {
                warn!("Skipping territory record {}: reserved id", record.id());
                continue;
            }
            match Territory::from_metadata(record, &regexp_cache)? {
                Some(territory) => territories.push(territory),
                None => warn!("Skipping territory {}: no general description", record.id()),
            }
        }

        for (id, number_type, pattern) in additional_patterns {
            let id = TerritoryCode::normalize(id);
            let territory = territories
                .iter_mut()
                .find(|territory| territory.id() == id)
                .ok_or_else(|| DataLoadError::UnknownTerritory(id.clone()))?;
            territory.add_pattern(*number_type, pattern)?;
            territory.compile_patterns(&regexp_cache)?;
        }

        let index = territories
            .iter()
            .enumerate()
            .map(|(position, territory)| (territory.id().to_owned(), position))
            .collect();

        Ok(Self {
            territories: territories.into_iter().map(Arc::new).collect(),
            index,
            regexp_cache,
            extended_data: OnceLock::new(),
        })
    }

    pub fn territory(&self, id: &str) -> Option<&Arc<Territory>> {
        self.index.get(id).map(|position| &self.territories[*position])
    }

    /// Territories in dataset order.
    pub fn territories(&self) -> impl Iterator<Item = &Arc<Territory>> {
        self.territories.iter()
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn regexp_cache(&self) -> &Arc<RegexCache> {
        &self.regexp_cache
    }

    /// Prefix tables, built on first use.
    pub fn extended_data(&self) -> &ExtendedData {
        self.extended_data.get_or_init(|| {
            ExtendedData::load_compiled().unwrap_or_else(|err| {
                error!("Could not load compiled-in extended data: {}", err);
                ExtendedData::default()
            })
        })
    }
}
