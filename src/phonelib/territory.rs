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

use std::sync::{Arc, LazyLock};

use fast_cat::concat_str;
use regex::{Captures, Regex};
use strum::IntoEnumIterator;

use crate::{
    phonelib::{
        enums::PhoneNumberType,
        errors::DataLoadError,
        helper_functions::get_pattern_desc_by_type,
        helper_constants::{DEFAULT_NUMBER_FORMAT_PATTERN, DEFAULT_NUMBER_FORMAT_TEMPLATE},
    },
    proto_gen::territory_metadata as proto,
    regex_util::RegexFullMatch,
    regexp_cache::RegexCache,
};

/// A valid pattern plus the looser possible pattern used for length checks.
/// Both are stored unanchored and anchored on use.
#[derive(Debug, Clone)]
pub struct PatternPair {
    valid: String,
    possible: String,
    example: Option<String>,
}

impl PatternPair {
    /// Creates a pair; a missing possible pattern falls back to the valid one.
    pub fn new(valid: &str, possible: Option<&str>) -> Self {
        Self {
            valid: valid.to_owned(),
            possible: possible.unwrap_or(valid).to_owned(),
            example: None,
        }
    }

    fn from_proto(desc: &proto::PatternPair) -> Self {
        let possible = if desc.has_possible_number_pattern() {
            Some(desc.possible_number_pattern())
        } else {
            None
        };
        let mut pair = Self::new(desc.national_number_pattern(), possible);
        pair.example = non_empty(desc.example_number());
        pair
    }

    pub fn valid_pattern(&self) -> &str {
        &self.valid
    }

    pub fn possible_pattern(&self) -> &str {
        &self.possible
    }

    pub fn example_number(&self) -> Option<&str> {
        self.example.as_deref()
    }

    /// True when a possible match already implies a valid one.
    pub fn has_same_patterns(&self) -> bool {
        self.valid == self.possible
    }

    /// Widens both patterns with an alternative.
    pub(crate) fn extend_with(&mut self, pattern: &str) {
        self.valid = concat_str!(&self.valid, "|", pattern);
        self.possible = concat_str!(&self.possible, "|", pattern);
    }

    pub(crate) fn or(&self, other: &PatternPair) -> PatternPair {
        PatternPair {
            valid: concat_str!(&self.valid, "|", &other.valid),
            possible: concat_str!(&self.possible, "|", &other.possible),
            example: self.example.clone(),
        }
    }
}

// Example numbers are informational and do not take part in equality.
impl PartialEq for PatternPair {
    fn eq(&self, other: &Self) -> bool {
        self.valid == other.valid && self.possible == other.possible
    }
}

impl Eq for PatternPair {}

/// One formatting rule of a territory.
#[derive(Debug, Clone)]
pub struct NumberFormat {
    pattern: String,
    anchored: Arc<Regex>,
    leading_digits: Option<Arc<Regex>>,
    format: String,
    intl_format: Option<String>,
    national_prefix_formatting_rule: Option<String>,
}

pub(crate) static DEFAULT_NUMBER_FORMAT: LazyLock<NumberFormat> = LazyLock::new(|| {
    NumberFormat {
        pattern: DEFAULT_NUMBER_FORMAT_PATTERN.to_owned(),
        anchored: Arc::new(
            Regex::new(&concat_str!("^(?:", DEFAULT_NUMBER_FORMAT_PATTERN, ")$")).unwrap(),
        ),
        leading_digits: None,
        format: DEFAULT_NUMBER_FORMAT_TEMPLATE.to_owned(),
        intl_format: None,
        national_prefix_formatting_rule: None,
    }
});

impl NumberFormat {
    fn from_proto(
        id: &str,
        format: &proto::NumberFormat,
        cache: &RegexCache,
    ) -> Result<Self, DataLoadError> {
        if format.pattern().is_empty() || format.format().is_empty() {
            return Err(DataLoadError::IncompleteFormat { id: id.to_owned() });
        }
        let anchored = compile(id, "number format", cache.get_full_regex(format.pattern()))?;
        let leading_digits = match format.leading_digits_pattern.last() {
            Some(pattern) if !pattern.is_empty() => Some(compile(
                id,
                "leading digits",
                cache.get_prefix_regex(pattern),
            )?),
            _ => None,
        };
        Ok(Self {
            pattern: format.pattern().to_owned(),
            anchored,
            leading_digits,
            format: format.format().to_owned(),
            intl_format: non_empty(format.intl_format()),
            national_prefix_formatting_rule: non_empty(format.national_prefix_formatting_rule()),
        })
    }

    /// Leading digits (if any) match at the start and the pattern spans the
    /// whole national number.
    pub fn matches(&self, national_number: &str) -> bool {
        self.leading_digits
            .as_ref()
            .is_none_or(|leading| leading.is_match(national_number))
            && self.anchored.full_match(national_number)
    }

    pub fn captures<'a>(&self, national_number: &'a str) -> Option<Captures<'a>> {
        self.anchored.full_captures(national_number)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn intl_format(&self) -> Option<&str> {
        self.intl_format.as_deref()
    }

    pub fn national_prefix_formatting_rule(&self) -> Option<&str> {
        self.national_prefix_formatting_rule.as_deref()
    }
}

/// Numbering plan of one territory, validated and with every pattern
/// already compiled into the shared cache.
#[derive(Debug, Clone)]
pub struct Territory {
    id: String,
    country_code: String,
    international_prefix: Option<String>,
    national_prefix: Option<String>,
    national_prefix_for_parsing: Option<String>,
    national_prefix_transform_rule: Option<String>,
    national_prefix_formatting_rule: Option<String>,
    leading_digits: Option<String>,
    main_country_for_code: bool,
    double_prefix_allowed: bool,
    general: PatternPair,
    short_general: Option<PatternPair>,
    types: Vec<(PhoneNumberType, PatternPair)>,
    formats: Vec<NumberFormat>,
}

impl Territory {
    /// Converts a metadata record. Returns `Ok(None)` for records without a
    /// general description; those can not be analyzed and are skipped.
    pub(crate) fn from_metadata(
        metadata: &proto::TerritoryMetadata,
        cache: &RegexCache,
    ) -> Result<Option<Self>, DataLoadError> {
        let id = metadata.id().to_owned();
        let country_code = metadata.country_code();
        if country_code.is_empty() || !country_code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DataLoadError::InvalidCallingCode {
                id,
                code: country_code.to_owned(),
            });
        }
        let Some(general) = metadata.general_desc.as_ref().map(PatternPair::from_proto) else {
            return Ok(None);
        };

        let mut types = Vec::new();
        for number_type in PhoneNumberType::iter() {
            if number_type == PhoneNumberType::General {
                continue;
            }
            if let Some(desc) = get_pattern_desc_by_type(metadata, number_type) {
                types.push((number_type, PatternPair::from_proto(desc)));
            }
        }
        let formats = metadata
            .number_format
            .iter()
            .map(|format| NumberFormat::from_proto(&id, format, cache))
            .collect::<Result<Vec<_>, _>>()?;

        let territory = Self {
            country_code: country_code.to_owned(),
            international_prefix: non_empty(metadata.international_prefix()),
            national_prefix: non_empty(metadata.national_prefix()),
            national_prefix_for_parsing: non_empty(metadata.national_prefix_for_parsing()),
            national_prefix_transform_rule: non_empty(metadata.national_prefix_transform_rule())
                .map(|rule| braced_group_references(&rule)),
            national_prefix_formatting_rule: non_empty(metadata.national_prefix_formatting_rule()),
            leading_digits: non_empty(metadata.leading_digits()),
            main_country_for_code: metadata.main_country_for_code(),
            double_prefix_allowed: metadata.double_prefix(),
            short_general: metadata.short_general_desc.as_ref().map(PatternPair::from_proto),
            general,
            types,
            formats,
            id,
        };
        territory.compile_patterns(cache)?;
        Ok(Some(territory))
    }

    /// Every pattern is compiled once here so that a broken dataset fails the
    /// load instead of silently failing to match later.
    pub(crate) fn compile_patterns(&self, cache: &RegexCache) -> Result<(), DataLoadError> {
        let id = self.id.as_str();
        let pairs = std::iter::once(&self.general)
            .chain(self.short_general.iter())
            .chain(self.types.iter().map(|(_, pair)| pair));
        for pair in pairs {
            compile(id, "valid", cache.get_full_regex(pair.valid_pattern()))?;
            compile(id, "possible", cache.get_full_regex(pair.possible_pattern()))?;
        }
        for (field, pattern) in [
            ("international prefix", &self.international_prefix),
            ("national prefix for parsing", &self.national_prefix_for_parsing),
            ("leading digits", &self.leading_digits),
        ] {
            if let Some(pattern) = pattern {
                compile(id, field, cache.get_prefix_regex(pattern))?;
            }
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn international_prefix(&self) -> Option<&str> {
        self.international_prefix.as_deref()
    }

    pub fn national_prefix(&self) -> Option<&str> {
        self.national_prefix.as_deref()
    }

    pub fn national_prefix_for_parsing(&self) -> Option<&str> {
        self.national_prefix_for_parsing.as_deref()
    }

    /// Replacement template with group references in `${N}` form.
    pub fn national_prefix_transform_rule(&self) -> Option<&str> {
        self.national_prefix_transform_rule.as_deref()
    }

    pub fn national_prefix_formatting_rule(&self) -> Option<&str> {
        self.national_prefix_formatting_rule.as_deref()
    }

    pub fn leading_digits(&self) -> Option<&str> {
        self.leading_digits.as_deref()
    }

    pub fn is_main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn double_prefix_allowed(&self) -> bool {
        self.double_prefix_allowed
    }

    pub fn general(&self) -> &PatternPair {
        &self.general
    }

    pub fn short_general(&self) -> Option<&PatternPair> {
        self.short_general.as_ref()
    }

    pub fn formats(&self) -> &[NumberFormat] {
        &self.formats
    }

    /// Patterns of a type. `FixedOrMobile` resolves to the fixed line pair.
    pub fn pattern_pair(&self, number_type: PhoneNumberType) -> Option<&PatternPair> {
        match number_type {
            PhoneNumberType::General => Some(&self.general),
            PhoneNumberType::FixedOrMobile => self.pattern_pair(PhoneNumberType::FixedLine),
            _ => self
                .types
                .iter()
                .find(|(candidate, _)| *candidate == number_type)
                .map(|(_, pair)| pair),
        }
    }

    /// Territories whose fixed line and mobile patterns coincide report a
    /// single fixed-or-mobile type.
    pub fn has_same_fixed_and_mobile(&self) -> bool {
        match (
            self.pattern_pair(PhoneNumberType::FixedLine),
            self.pattern_pair(PhoneNumberType::Mobile),
        ) {
            (Some(fixed), Some(mobile)) => fixed == mobile,
            _ => false,
        }
    }

    /// ORs `pattern` into the patterns of `number_type` and into the general
    /// description that gates it.
    pub(crate) fn add_pattern(
        &mut self,
        number_type: PhoneNumberType,
        pattern: &str,
    ) -> Result<(), DataLoadError> {
        if number_type == PhoneNumberType::FixedOrMobile {
            return Err(DataLoadError::UnsupportedType {
                number_type: number_type.into(),
            });
        }
        self.general.extend_with(pattern);
        if number_type == PhoneNumberType::General {
            return Ok(());
        }
        match self.types.iter_mut().find(|(candidate, _)| *candidate == number_type) {
            Some((_, pair)) => pair.extend_with(pattern),
            None => self.types.push((number_type, PatternPair::new(pattern, None))),
        }
        Ok(())
    }
}

/// `$1` style references become `${1}` so that a following digit is never
/// read as part of the group name.
fn braced_group_references(rule: &str) -> String {
    static GROUP_REFERENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$(\d)").unwrap());
    GROUP_REFERENCE
        .replace_all(rule, |caps: &Captures| concat_str!("${", &caps[1], "}"))
        .into_owned()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn compile<T>(
    id: &str,
    field: &'static str,
    compiled: Result<T, crate::regexp_cache::InvalidRegexError>,
) -> Result<T, DataLoadError> {
    compiled.map_err(|source| DataLoadError::InvalidPattern {
        id: id.to_owned(),
        field,
        source,
    })
}

#[cfg(test)]
mod tests {
    use crate::phonelib::enums::PhoneNumberType;
    use crate::proto_gen::territory_metadata as proto;
    use crate::regexp_cache::RegexCache;

    use super::{braced_group_references, PatternPair, Territory};

    fn metadata() -> proto::TerritoryMetadata {
        let mut metadata = proto::TerritoryMetadata::new();
        metadata.set_id("XA".to_owned());
        metadata.set_country_code("999".to_owned());
        metadata.set_national_prefix_transform_rule("1$1".to_owned());
        let mut general = proto::PatternPair::new();
        general.set_national_number_pattern(r"\d{6}".to_owned());
        metadata.general_desc = Some(general.clone()).into();
        metadata.fixed_line = Some(general.clone()).into();
        metadata.mobile = Some(general).into();
        metadata
    }

    #[test]
    fn converts_and_validates_metadata() {
        let cache = RegexCache::new();
        let territory = Territory::from_metadata(&metadata(), &cache).unwrap().unwrap();
        assert_eq!("XA", territory.id());
        assert_eq!(Some("1${1}"), territory.national_prefix_transform_rule());
        assert!(territory.has_same_fixed_and_mobile());
        assert_eq!(
            territory.pattern_pair(PhoneNumberType::FixedLine),
            territory.pattern_pair(PhoneNumberType::FixedOrMobile)
        );
        assert!(territory.pattern_pair(PhoneNumberType::TollFree).is_none());
    }

    #[test]
    fn record_without_general_description_is_skipped() {
        let mut metadata = metadata();
        metadata.general_desc.clear();
        assert!(Territory::from_metadata(&metadata, &RegexCache::new()).unwrap().is_none());
    }

    #[test]
    fn broken_patterns_fail_the_load() {
        let mut metadata = metadata();
        metadata.set_country_code("+9".to_owned());
        assert!(Territory::from_metadata(&metadata, &RegexCache::new()).is_err());

        let mut metadata = self::metadata();
        metadata.set_international_prefix("(00".to_owned());
        assert!(Territory::from_metadata(&metadata, &RegexCache::new()).is_err());
    }

    #[test]
    fn additional_patterns_widen_type_and_general() {
        let cache = RegexCache::new();
        let mut territory = Territory::from_metadata(&metadata(), &cache).unwrap().unwrap();
        territory.add_pattern(PhoneNumberType::Mobile, "0{10}").unwrap();
        territory.add_pattern(PhoneNumberType::Pager, "5{4}").unwrap();
        assert_eq!(r"\d{6}|0{10}|5{4}", territory.general().valid_pattern());
        assert_eq!(
            Some(&PatternPair::new(r"\d{6}|0{10}", None)),
            territory.pattern_pair(PhoneNumberType::Mobile)
        );
        assert!(!territory.has_same_fixed_and_mobile());
        assert!(territory.add_pattern(PhoneNumberType::FixedOrMobile, "1").is_err());
    }

    #[test]
    fn group_references_are_braced() {
        assert_eq!("1${1}", braced_group_references("1$1"));
        assert_eq!("${1}0${2}", braced_group_references("$10$2"));
    }
}
