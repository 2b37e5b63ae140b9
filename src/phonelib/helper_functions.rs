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

use std::{fs, path::Path};

use fast_cat::concat_str;
use regex::{Captures, Regex};

use crate::proto_gen::territory_metadata::{
    PatternPair, TerritoryMetadata, TerritoryMetadataCollection,
};

use super::{
    PhoneNumberType,
    errors::DataLoadError,
    helper_constants::{COMPILED_DATASET, COMPILED_DATASET_NAME},
    territory::Territory,
};

/// Loads territories from the dataset compiled into the binary.
pub(super) fn load_compiled_metadata() -> Result<Vec<TerritoryMetadata>, DataLoadError> {
    parse_metadata_text(COMPILED_DATASET_NAME, COMPILED_DATASET)
}

pub(super) fn load_metadata_file(path: &Path) -> Result<Vec<TerritoryMetadata>, DataLoadError> {
    let text = fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_metadata_text(&path.display().to_string(), &text)
}

pub(super) fn parse_metadata_text(
    name: &str,
    text: &str,
) -> Result<Vec<TerritoryMetadata>, DataLoadError> {
    let collection = protobuf::text_format::parse_from_str::<TerritoryMetadataCollection>(text)
        .map_err(|e| DataLoadError::Parse {
            name: name.to_owned(),
            message: e.to_string(),
        })?;
    for (index, territory) in collection.territory.iter().enumerate() {
        if territory.id().is_empty() {
            return Err(DataLoadError::MissingId {
                name: name.to_owned(),
                index,
            });
        }
    }
    Ok(collection.territory)
}

/// Overriding records replace same-id records in place; records with a new
/// id are appended.
pub(super) fn merge_metadata(base: &mut Vec<TerritoryMetadata>, overrides: Vec<TerritoryMetadata>) {
    for territory in overrides {
        match base.iter_mut().find(|known| known.id() == territory.id()) {
            Some(known) => *known = territory,
            None => base.push(territory),
        }
    }
}

/// Returns the description inside the metadata for the given type.
pub(super) fn get_pattern_desc_by_type(
    metadata: &TerritoryMetadata,
    number_type: PhoneNumberType,
) -> Option<&PatternPair> {
    use PhoneNumberType::*;
    let desc = match number_type {
        // structural types have no record of their own
        FixedOrMobile => return None,
        General => &metadata.general_desc,
        FixedLine => &metadata.fixed_line,
        Mobile => &metadata.mobile,
        TollFree => &metadata.toll_free,
        PremiumRate => &metadata.premium_rate,
        SharedCost => &metadata.shared_cost,
        VoIP => &metadata.voip,
        PersonalNumber => &metadata.personal_number,
        Pager => &metadata.pager,
        UAN => &metadata.uan,
        VoiceMail => &metadata.voicemail,
        ShortCode => &metadata.short_code,
        Emergency => &metadata.emergency,
        CarrierSpecific => &metadata.carrier_specific,
        SmsServices => &metadata.sms_services,
        ExpandedEmergency => &metadata.expanded_emergency,
        NoInternationalDialling => &metadata.no_international_dialling,
        CarrierServices => &metadata.carrier_services,
        DirectoryServices => &metadata.directory_services,
        StandardRate => &metadata.standard_rate,
        CarrierSelectionCodes => &metadata.carrier_selection_codes,
        AreaCodeOptional => &metadata.area_code_optional,
    };
    desc.as_ref()
}

/// Builds the pattern that matches a number written in any form the
/// territory accepts:
/// `^(?:00)?(?:intl)?(?:cc)?(?:npfp|np)?(?P<national>national)$`.
///
/// The calling code group is optional unless `country_code_required`.
pub(super) fn composite_pattern(
    territory: &Territory,
    national_pattern: &str,
    country_code_required: bool,
) -> String {
    let international_prefix = territory
        .international_prefix()
        .map(|prefix| concat_str!("(?:", prefix, ")?"))
        .unwrap_or_default();
    let national_prefix = territory
        .national_prefix_for_parsing()
        .or(territory.national_prefix())
        .map(|prefix| concat_str!("(?:", prefix, ")?"))
        .unwrap_or_default();
    concat_str!(
        "^(?:00)?",
        &international_prefix,
        "(?:",
        territory.country_code(),
        if country_code_required { ")" } else { ")?" },
        &national_prefix,
        "(?P<national>",
        national_pattern,
        ")$"
    )
}

/// Matches `^(?:00)?(?:intl)?cc(?:leading)` used to pick candidates in the
/// global scan.
pub(super) fn candidate_pattern(territory: &Territory) -> String {
    let international_prefix = territory
        .international_prefix()
        .map(|prefix| concat_str!("(?:", prefix, ")?"))
        .unwrap_or_default();
    let leading_digits = territory
        .leading_digits()
        .map(|leading| concat_str!("(?:", leading, ")"))
        .unwrap_or_default();
    concat_str!(
        "^(?:00)?",
        &international_prefix,
        territory.country_code(),
        &leading_digits
    )
}

/// Replaces a fixed line plus mobile pair with fixed-or-mobile.
pub(super) fn collapse_fixed_or_mobile(types: &mut Vec<PhoneNumberType>) {
    if types.contains(&PhoneNumberType::FixedLine) && types.contains(&PhoneNumberType::Mobile) {
        types.retain(|t| !t.is_fixed_or_mobile_component());
        types.push(PhoneNumberType::FixedOrMobile);
    }
}

/// Collapses both lists. The possible list keeps its fixed line and mobile
/// entries while a single one of them stays valid, so valid types remain a
/// subset of possible types.
pub(super) fn collapse_type_lists(valid: &mut Vec<PhoneNumberType>, possible: &mut Vec<PhoneNumberType>) {
    collapse_fixed_or_mobile(valid);
    if !valid.iter().any(|t| t.is_fixed_or_mobile_component()) {
        collapse_fixed_or_mobile(possible);
    }
}

/// Strips one calling code when it is doubled, otherwise prepends one.
pub(super) fn changed_double_prefix_number(country_code: &str, number: &str) -> String {
    let doubled = number
        .strip_prefix(country_code)
        .filter(|rest| rest.starts_with(country_code));
    match doubled {
        Some(rest) => rest.to_owned(),
        None => concat_str!(country_code, number),
    }
}

/// Substitutes `$N` references of `template` with groups of `captures`.
/// Missing groups expand to nothing.
pub(super) fn substitute_groups(
    group_reference: &Regex,
    template: &str,
    captures: &Captures,
) -> String {
    group_reference
        .replace_all(template, |reference: &Captures| {
            reference[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| captures.get(index))
                .map_or("", |group| group.as_str())
                .to_owned()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use crate::phonelib::PhoneNumberType;

    use super::{
        changed_double_prefix_number, collapse_fixed_or_mobile, collapse_type_lists,
        substitute_groups,
    };

    #[test]
    fn fixed_and_mobile_collapse() {
        let mut types = vec![PhoneNumberType::VoIP, PhoneNumberType::FixedLine, PhoneNumberType::Mobile];
        collapse_fixed_or_mobile(&mut types);
        assert_eq!(vec![PhoneNumberType::VoIP, PhoneNumberType::FixedOrMobile], types);

        let mut types = vec![PhoneNumberType::Mobile];
        collapse_fixed_or_mobile(&mut types);
        assert_eq!(vec![PhoneNumberType::Mobile], types);
    }

    #[test]
    fn possible_list_keeps_a_valid_component() {
        let mut valid = vec![PhoneNumberType::Mobile];
        let mut possible = vec![
            PhoneNumberType::TollFree,
            PhoneNumberType::FixedLine,
            PhoneNumberType::Mobile,
        ];
        collapse_type_lists(&mut valid, &mut possible);
        assert_eq!(vec![PhoneNumberType::Mobile], valid);
        assert_eq!(
            vec![PhoneNumberType::TollFree, PhoneNumberType::FixedLine, PhoneNumberType::Mobile],
            possible
        );

        let mut valid = vec![PhoneNumberType::FixedLine, PhoneNumberType::Mobile];
        let mut possible = vec![PhoneNumberType::FixedLine, PhoneNumberType::Mobile];
        collapse_type_lists(&mut valid, &mut possible);
        assert_eq!(vec![PhoneNumberType::FixedOrMobile], valid);
        assert_eq!(vec![PhoneNumberType::FixedOrMobile], possible);

        let mut valid = vec![];
        let mut possible = vec![PhoneNumberType::FixedLine, PhoneNumberType::Mobile];
        collapse_type_lists(&mut valid, &mut possible);
        assert_eq!(vec![PhoneNumberType::FixedOrMobile], possible);
    }

    #[test]
    fn double_prefix_is_toggled() {
        assert_eq!("919111844757", changed_double_prefix_number("91", "9111844757"));
        assert_eq!("9111844757", changed_double_prefix_number("91", "919111844757"));
        assert_eq!("7495", changed_double_prefix_number("7", "77495"));
    }

    #[test]
    fn groups_are_substituted() {
        let reference = Regex::new(r"\$(\d)").unwrap();
        let pattern = Regex::new(r"(\d{2})(\d{3})(\d{4})").unwrap();
        let captures = pattern.captures("542234567").unwrap();
        assert_eq!("54-223-4567", substitute_groups(&reference, "$1-$2-$3", &captures));
        assert_eq!("0 54 ", substitute_groups(&reference, "0 $1 $7", &captures));
    }
}
