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

use std::{borrow::Cow, collections::HashMap};

use crate::string_util::strip_cow_prefix;

use super::{
    errors::DataLoadError,
    helper_constants::{
        CARRIERS_TABLE, COUNTRY_NAMES_TABLE, EXTENDED_DATA_COMMENT, EXTENDED_DATA_SEPARATOR,
        GEOCODING_TABLE, PLUS_SIGN, TIMEZONES_SEPARATOR, TIMEZONES_TABLE,
    },
    phone::Phone,
};

#[derive(Debug, Clone, Copy)]
enum PrefixTable {
    Geocoding = 0,
    Timezones = 1,
    Carriers = 2,
}

#[derive(Debug, Default)]
struct PrefixNode {
    children: [Option<Box<PrefixNode>>; 10],
    /// Index into `ExtendedData::values`, per table.
    values: [Option<u32>; 3],
}

/// Location, timezone and carrier names keyed by E164 digit prefixes.
/// The deepest prefix with an entry wins.
#[derive(Debug, Default)]
pub struct ExtendedData {
    root: PrefixNode,
    values: Vec<String>,
    country_names: HashMap<String, String>,
}

impl ExtendedData {
    pub(crate) fn load_compiled() -> Result<Self, DataLoadError> {
        let mut data = Self::default();
        let mut interned = HashMap::<&str, u32>::new();

        for (table, (name, text)) in [
            (PrefixTable::Geocoding, GEOCODING_TABLE),
            (PrefixTable::Timezones, TIMEZONES_TABLE),
            (PrefixTable::Carriers, CARRIERS_TABLE),
        ] {
            for entry in table_entries(name, text) {
                let (line_num, prefix, value) = entry?;
                if !prefix.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DataLoadError::MalformedPrefixLine { name, line_num });
                }
                let next_index = data.values.len() as u32;
                let index = *interned.entry(value).or_insert(next_index);
                if index == next_index {
                    data.values.push(value.to_owned());
                }
                data.insert(prefix, table, index);
            }
        }

        let (name, text) = COUNTRY_NAMES_TABLE;
        for entry in table_entries(name, text) {
            let (_, id, country_name) = entry?;
            data.country_names.insert(id.to_owned(), country_name.to_owned());
        }
        Ok(data)
    }

    fn insert(&mut self, prefix: &str, table: PrefixTable, index: u32) {
        let mut node = &mut self.root;
        for digit in prefix.bytes() {
            node = node.children[(digit - b'0') as usize]
                .get_or_insert_with(Default::default)
                .as_mut();
        }
        node.values[table as usize] = Some(index);
    }

    fn lookup(&self, phone: &Phone, table: PrefixTable) -> Option<&str> {
        if !phone.is_possible() {
            return None;
        }
        let e164 = phone.e164()?;
        let digits = strip_cow_prefix(Cow::Owned(e164), PLUS_SIGN)?;

        let mut node = &self.root;
        let mut found = node.values[table as usize];
        for digit in digits.bytes() {
            if !digit.is_ascii_digit() {
                break;
            }
            let Some(child) = &node.children[(digit - b'0') as usize] else {
                break;
            };
            node = &**child;
            found = node.values[table as usize].or(found);
        }
        found.map(|index| self.values[index as usize].as_str())
    }

    pub fn geo_name(&self, phone: &Phone) -> Option<&str> {
        self.lookup(phone, PrefixTable::Geocoding)
    }

    /// All zones of the deepest timezone entry.
    pub fn timezones(&self, phone: &Phone) -> Vec<&str> {
        self.lookup(phone, PrefixTable::Timezones)
            .map(|zones| zones.split(TIMEZONES_SEPARATOR).collect())
            .unwrap_or_default()
    }

    /// First zone of the deepest timezone entry.
    pub fn timezone(&self, phone: &Phone) -> Option<&str> {
        self.lookup(phone, PrefixTable::Timezones)
            .and_then(|zones| zones.split(TIMEZONES_SEPARATOR).next())
    }

    pub fn carrier(&self, phone: &Phone) -> Option<&str> {
        self.lookup(phone, PrefixTable::Carriers)
    }

    /// English name of the territory the number is valid for.
    pub fn valid_country_name(&self, phone: &Phone) -> Option<&str> {
        phone
            .valid_country()
            .and_then(|id| self.country_names.get(id))
            .map(|name| name.as_str())
    }
}

/// Non-comment lines of a table split into line number, key and value.
fn table_entries<'a>(
    name: &'static str,
    text: &'a str,
) -> impl Iterator<Item = Result<(usize, &'a str, &'a str), DataLoadError>> {
    text.lines()
        .enumerate()
        .map(|(line_num, line)| (line_num + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(EXTENDED_DATA_COMMENT))
        .map(move |(line_num, line)| {
            let malformed = || DataLoadError::MalformedPrefixLine { name, line_num };
            let (key, value) = line.split_once(EXTENDED_DATA_SEPARATOR).ok_or_else(malformed)?;
            if key.is_empty() || value.is_empty() {
                return Err(malformed());
            }
            Ok((line_num, key, value))
        })
}
