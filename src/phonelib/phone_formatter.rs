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

use fast_cat::concat_str;
use regex::{Captures, NoExpand};

use crate::macros::owned_from_cow_or;

use super::{
    enums::PhoneNumberType,
    helper_constants::{
        AREA_CODE_MOBILE_TERRITORIES, AREA_CODE_MOBILE_TOKENS, AREA_CODE_NO_PREFIX_TERRITORIES,
        FIRST_GROUP_REFERENCE, FIRST_GROUP_TOKEN, NATIONAL_PREFIX_TOKEN, NOT_APPLICABLE_FORMAT,
        PLUS_SIGN,
    },
    helper_functions::substitute_groups,
    helper_types::TerritoryResult,
    phone::Phone,
    phone_regexps_and_mappings::REGEXPS_AND_MAPPINGS,
};

impl Phone {
    /// National form. Numbers that are not valid come back as their
    /// national number without formatting.
    pub fn national(&self, formatted: bool) -> Option<String> {
        let national_number = self.national_number()?;
        if !self.is_valid() {
            return Some(national_number.to_owned());
        }
        let Some((result, captures)) = self.format_captures() else {
            return Some(national_number.to_owned());
        };
        let template = national_template(result);
        let formatted_number = substitute_groups(
            &REGEXPS_AND_MAPPINGS.group_reference_pattern,
            &template,
            &captures,
        );
        if formatted {
            return Some(formatted_number);
        }
        Some(digits_only(formatted_number))
    }

    /// National significant number, without national prefix or formatting.
    pub fn raw_national(&self) -> Option<String> {
        let sanitized = self.sanitized();
        if sanitized.is_empty() {
            return None;
        }
        if self.is_valid() {
            return self.national_number().map(|national| national.to_owned());
        }
        let without_code = self
            .country_code()
            .and_then(|country_code| sanitized.strip_prefix(country_code))
            .unwrap_or(sanitized);
        Some(without_code.to_owned())
    }

    pub fn international(&self, formatted: bool) -> Option<String> {
        self.international_with_prefix(formatted, PLUS_SIGN)
    }

    /// International form starting with `prefix` instead of `+`.
    pub fn international_with_prefix(&self, formatted: bool, prefix: &str) -> Option<String> {
        let sanitized = self.sanitized();
        if sanitized.is_empty() {
            return None;
        }
        let (Some(result), Some(national_number)) = (self.country_result(), self.national_number())
        else {
            return Some(concat_str!(prefix, sanitized));
        };
        let country_code = result.territory().country_code();
        if !self.is_valid() {
            let missing_code = if sanitized.starts_with(country_code) {
                ""
            } else {
                country_code
            };
            return Some(concat_str!(prefix, missing_code, sanitized));
        }
        if !formatted {
            return Some(concat_str!(prefix, country_code, national_number));
        }

        let format = result.number_format();
        let grouped = match (format.captures(national_number), format.intl_format()) {
            (Some(_), Some(NOT_APPLICABLE_FORMAT)) | (None, _) => national_number.to_owned(),
            (Some(captures), intl_format) => substitute_groups(
                &REGEXPS_AND_MAPPINGS.group_reference_pattern,
                intl_format.unwrap_or(format.format()),
                &captures,
            ),
        };
        Some(concat_str!(prefix, country_code, " ", &grouped))
    }

    pub fn e164(&self) -> Option<String> {
        self.e164_with_prefix(PLUS_SIGN)
    }

    /// Digits of the unformatted international form behind `prefix`.
    pub fn e164_with_prefix(&self, prefix: &str) -> Option<String> {
        let international = self.international_with_prefix(false, "")?;
        Some(concat_str!(prefix, &digits_only(international)))
    }

    pub fn full_national(&self, formatted: bool) -> Option<String> {
        self.national(formatted)
            .map(|national| self.with_extension(national))
    }

    pub fn full_international(&self, formatted: bool) -> Option<String> {
        self.international(formatted)
            .map(|international| self.with_extension(international))
    }

    pub fn full_e164(&self) -> Option<String> {
        self.e164().map(|e164| self.with_extension(e164))
    }

    /// Area code of fixed line numbers, and of mobile numbers in territories
    /// that assign mobile numbers geographically.
    pub fn area_code(&self) -> Option<String> {
        if !self.is_possible() {
            return None;
        }
        let result = self.country_result()?;
        let territory = result.territory();
        if territory.national_prefix().is_none()
            && !AREA_CODE_NO_PREFIX_TERRITORIES.contains(&territory.id())
        {
            return None;
        }
        let number_type = self.number_type()?;
        let is_mobile = match number_type {
            PhoneNumberType::FixedLine | PhoneNumberType::FixedOrMobile => false,
            PhoneNumberType::Mobile if AREA_CODE_MOBILE_TERRITORIES.contains(&territory.id()) => {
                true
            }
            _ => return None,
        };

        let (_, captures) = self.format_captures()?;
        let mobile_token = AREA_CODE_MOBILE_TOKENS
            .iter()
            .find(|(id, _)| *id == territory.id())
            .map(|(_, token)| *token);
        let first_group = captures.get(1).map(|group| group.as_str());
        let take_group = if is_mobile && mobile_token.is_some() && first_group == mobile_token {
            2
        } else {
            1
        };
        captures.get(take_group).map(|group| group.as_str().to_owned())
    }

    /// The subscriber part of the national form: everything after the area
    /// code group when the national template has a trunk prefix.
    pub fn local_number(&self) -> Option<String> {
        if !self.is_possible() {
            return self.national(true);
        }
        let Some((result, captures)) = self.format_captures() else {
            return self.national(true);
        };
        let template = national_template(result);
        if !REGEXPS_AND_MAPPINGS
            .digits_before_first_group_pattern
            .is_match(&template)
        {
            return self.national(true);
        }
        let tail = REGEXPS_AND_MAPPINGS
            .up_to_second_group_pattern
            .replace(&template, NoExpand("$2"));
        Some(substitute_groups(
            &REGEXPS_AND_MAPPINGS.group_reference_pattern,
            &tail,
            &captures,
        ))
    }

    fn format_captures(&self) -> Option<(&TerritoryResult, Captures<'_>)> {
        let result = self.country_result()?;
        let captures = result.number_format().captures(result.national_number())?;
        Some((result, captures))
    }

    fn with_extension(&self, number: String) -> String {
        if self.extension().is_empty() {
            return number;
        }
        concat_str!(&number, self.extension_separator(), self.extension())
    }
}

/// National template of the selected format with the national prefix
/// formatting rule put in place of the first group.
fn national_template(result: &TerritoryResult) -> String {
    let territory = result.territory();
    let format = result.number_format();
    let rule = format
        .national_prefix_formatting_rule()
        .or(territory.national_prefix_formatting_rule())
        .unwrap_or(FIRST_GROUP_REFERENCE)
        .replace(NATIONAL_PREFIX_TOKEN, territory.national_prefix().unwrap_or_default())
        .replace(FIRST_GROUP_TOKEN, FIRST_GROUP_REFERENCE);
    let spaced = REGEXPS_AND_MAPPINGS
        .digit_before_group_pattern
        .replace_all(format.format(), "${1} $$");
    spaced.replacen(FIRST_GROUP_REFERENCE, &rule, 1)
}

fn digits_only(number: String) -> String {
    owned_from_cow_or!(
        REGEXPS_AND_MAPPINGS.non_digits_pattern.replace_all(&number, ""),
        number
    )
}
