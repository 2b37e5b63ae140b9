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

use std::{borrow::Cow, sync::Arc};

use fast_cat::concat_str;
use log::{error, trace};
use regex::Regex;
use strum::IntoEnumIterator;

use crate::{interfaces::MatcherApi, regex_util::RegexConsume};

use super::{
    config::PhonelibConfig,
    enums::PhoneNumberType,
    helper_functions::{
        candidate_pattern, changed_double_prefix_number, collapse_type_lists, composite_pattern,
    },
    helper_types::{AnalysisResult, SanitizedNumber, TerritoryResult},
    phone_data::PhoneData,
    territory::{PatternPair, Territory},
};

/// Resolution steps. Every state either produces the next state or the
/// final result; `analyze` drives the loop.
enum AnalysisState {
    /// Parse against the hinted (or default) territory.
    SingleTerritory {
        number: String,
        explicit_hint: Option<String>,
    },
    /// Try every territory whose calling code and leading digits match.
    GlobalScan {
        number: String,
        preferred: Option<String>,
        base: AnalysisResult,
    },
    /// Toggle a doubled calling code for the hinted territory.
    DoublePrefixRetry {
        number: String,
        territory: Arc<Territory>,
        base: AnalysisResult,
    },
    Done(AnalysisResult),
}

/// Outcome of parsing against one territory.
enum TerritoryAttempt {
    /// The number began with the territory's international prefix; the rest
    /// is re-analyzed from scratch.
    Redirect(String),
    Parsed(Option<TerritoryResult>),
}

#[derive(Clone, Copy)]
enum PatternKind {
    Valid,
    Possible,
}

pub(crate) struct PhoneAnalyzer<'a> {
    data: &'a PhoneData,
    config: &'a PhonelibConfig,
    matcher_api: &'a dyn MatcherApi,
    sanitized: &'a SanitizedNumber,
}

impl<'a> PhoneAnalyzer<'a> {
    pub fn new(
        data: &'a PhoneData,
        config: &'a PhonelibConfig,
        matcher_api: &'a dyn MatcherApi,
        sanitized: &'a SanitizedNumber,
    ) -> Self {
        Self {
            data,
            config,
            matcher_api,
            sanitized,
        }
    }

    /// Runs the resolution for an already filtered explicit hint.
    pub fn analyze(&self, explicit_hint: Option<String>) -> AnalysisResult {
        if self.sanitized.digits.is_empty() {
            return AnalysisResult::default();
        }
        let mut state = AnalysisState::SingleTerritory {
            number: self.sanitized.digits.clone(),
            explicit_hint,
        };
        loop {
            state = match state {
                AnalysisState::SingleTerritory {
                    number,
                    explicit_hint,
                } => self.single_territory(number, explicit_hint),
                AnalysisState::GlobalScan {
                    number,
                    preferred,
                    base,
                } => {
                    trace!("Global scan of {} (preferred {:?})", number, preferred);
                    let scanned = self.global_scan(&number, preferred.as_deref());
                    AnalysisState::Done(better_result(base, scanned))
                }
                AnalysisState::DoublePrefixRetry {
                    number,
                    territory,
                    base,
                } => {
                    let changed = changed_double_prefix_number(territory.country_code(), &number);
                    trace!("Double prefix retry of {} for {}: {}", number, territory.id(), changed);
                    let retried = match self.try_territory(&changed, &territory) {
                        TerritoryAttempt::Parsed(result) => AnalysisResult::from(result),
                        TerritoryAttempt::Redirect(_) => AnalysisResult::default(),
                    };
                    AnalysisState::Done(better_result(base, retried))
                }
                AnalysisState::Done(result) => return result,
            }
        }
    }

    fn single_territory(&self, number: String, explicit_hint: Option<String>) -> AnalysisState {
        let country = explicit_hint.clone().or_else(|| self.default_country());
        let territory = country
            .as_deref()
            .and_then(|id| self.data.territory(id))
            .cloned();
        trace!("Single territory analysis of {} for {:?}", number, country);

        let base = match &territory {
            None => AnalysisResult::default(),
            Some(territory) => match self.try_territory(&number, territory) {
                TerritoryAttempt::Redirect(rest) => {
                    trace!("{} starts with the {} international prefix", number, territory.id());
                    if rest.is_empty() {
                        return AnalysisState::Done(AnalysisResult::default());
                    }
                    return AnalysisState::SingleTerritory {
                        number: rest,
                        explicit_hint: None,
                    };
                }
                TerritoryAttempt::Parsed(result) => AnalysisResult::from(result),
            },
        };

        if base.has_valid() {
            return AnalysisState::Done(base);
        }
        if explicit_hint.is_none() {
            return AnalysisState::GlobalScan {
                number,
                preferred: country,
                base,
            };
        }
        match territory {
            Some(territory) if self.double_prefix_allowed(&territory, &number) => {
                AnalysisState::DoublePrefixRetry {
                    number,
                    territory,
                    base,
                }
            }
            _ => AnalysisState::Done(base),
        }
    }

    /// The default territory applies only to numbers written without an
    /// international marker.
    fn default_country(&self) -> Option<String> {
        if self.sanitized.is_international() {
            return None;
        }
        self.config.default_country.clone()
    }

    fn try_territory(&self, number: &str, territory: &Arc<Territory>) -> TerritoryAttempt {
        let country_code = territory.country_code();
        let replaced = self.with_replaced_national_prefix(number, territory);

        let e164 = if let Some(national) =
            self.match_composite(&replaced, territory, PatternKind::Valid, self.sanitized.starts_with_plus)
        {
            concat_str!(country_code, &national)
        } else if let Some(rest) = self.strip_international_prefix(&replaced, territory) {
            return TerritoryAttempt::Redirect(rest);
        } else if self.sanitized.starts_with_plus && replaced.starts_with(country_code) {
            replaced.into_owned()
        } else {
            concat_str!(country_code, &replaced)
        };
        TerritoryAttempt::Parsed(self.parse_single_territory(&e164, territory))
    }

    /// Applies the territory's national prefix transform rule when the
    /// parsing prefix matches with at least one participating group.
    fn with_replaced_national_prefix<'n>(&self, number: &'n str, territory: &Territory) -> Cow<'n, str> {
        let (Some(prefix), Some(rule)) = (
            territory.national_prefix_for_parsing(),
            territory.national_prefix_transform_rule(),
        ) else {
            return Cow::Borrowed(number);
        };
        let Some(regex) = self.prefix_regex(prefix) else {
            return Cow::Borrowed(number);
        };
        match regex.captures(number) {
            Some(captures) if captures.iter().skip(1).any(|group| group.is_some()) => {
                regex.replace(number, rule)
            }
            _ => Cow::Borrowed(number),
        }
    }

    fn strip_international_prefix(&self, number: &str, territory: &Territory) -> Option<String> {
        let regex = self.prefix_regex(territory.international_prefix()?)?;
        let found = regex.find_start(number)?;
        if found.end() == 0 {
            return None;
        }
        Some(number[found.end()..].to_owned())
    }

    /// Parses a number that carries the calling code. Valid patterns are
    /// tried first; a possible-only match yields a result without valid
    /// types.
    fn parse_single_territory(&self, e164: &str, territory: &Arc<Territory>) -> Option<TerritoryResult> {
        if let Some(national) = self.match_composite(e164, territory, PatternKind::Valid, true) {
            return Some(self.national_and_data(territory, national, false));
        }
        if let Some(national) = self.match_composite(e164, territory, PatternKind::Possible, true) {
            return Some(self.national_and_data(territory, national, true));
        }
        None
    }

    fn national_and_data(
        &self,
        territory: &Arc<Territory>,
        national: String,
        not_valid: bool,
    ) -> TerritoryResult {
        let (valid, possible) = self.all_number_types(&national, territory, not_valid);
        let format_index = territory
            .formats()
            .iter()
            .position(|format| format.matches(&national));
        trace!(
            "{} in {}: valid {:?}, possible {:?}, format {:?}",
            national,
            territory.id(),
            valid,
            possible,
            format_index
        );
        TerritoryResult::new(territory.clone(), national, valid, possible, format_index)
    }

    fn all_number_types(
        &self,
        national: &str,
        territory: &Territory,
        not_valid: bool,
    ) -> (Vec<PhoneNumberType>, Vec<PhoneNumberType>) {
        let fixed_or_mobile: &[PhoneNumberType] = if territory.has_same_fixed_and_mobile() {
            &[PhoneNumberType::FixedOrMobile]
        } else {
            &[PhoneNumberType::FixedLine, PhoneNumberType::Mobile]
        };
        let checked_types = PhoneNumberType::iter()
            .filter(|number_type| {
                !number_type.is_structural()
                    && !number_type.is_fixed_or_mobile_component()
                    && (self.config.parse_special || !number_type.is_special())
            })
            .chain(fixed_or_mobile.iter().copied());

        let mut valid = Vec::new();
        let mut possible = Vec::new();
        for number_type in checked_types {
            let Some(pair) = territory.pattern_pair(number_type) else {
                continue;
            };
            let is_possible = self.matcher_api.match_possible_number(national, pair);
            let is_valid = !not_valid
                && is_possible
                && (pair.has_same_patterns() || self.matcher_api.match_valid_number(national, pair));
            trace!(
                "{} as {}: possible {}, valid {}",
                national,
                number_type.as_ref(),
                is_possible,
                is_valid
            );
            if is_possible {
                possible.push(number_type);
            }
            if is_valid {
                valid.push(number_type);
            }
        }
        collapse_type_lists(&mut valid, &mut possible);
        (valid, possible)
    }

    fn global_scan(&self, number: &str, preferred: Option<&str>) -> AnalysisResult {
        let mut result = AnalysisResult::default();
        for territory in self.data.territories() {
            let is_candidate = self
                .prefix_regex(&candidate_pattern(territory))
                .is_some_and(|regex| regex.is_match(number));
            if !is_candidate {
                continue;
            }
            let mut parsed = self.parse_single_territory(number, territory);

            let retry_enabled =
                !self.config.strict_double_prefix_check || preferred == Some(territory.id());
            if retry_enabled
                && self.double_prefix_allowed(territory, number)
                && !parsed.as_ref().is_some_and(TerritoryResult::is_valid)
            {
                let changed = changed_double_prefix_number(territory.country_code(), number);
                trace!("Double prefix retry of {} for {}: {}", number, territory.id(), changed);
                if let Some(retried) = self
                    .parse_single_territory(&changed, territory)
                    .filter(TerritoryResult::is_valid)
                {
                    parsed = Some(retried);
                }
            }
            if let Some(parsed) = parsed {
                result.insert(parsed);
            }
        }
        result
    }

    /// A national number may start with the digits of the calling code, in
    /// which case a number typed with the code is ambiguous.
    fn double_prefix_allowed(&self, territory: &Territory, number: &str) -> bool {
        territory.double_prefix_allowed()
            && !self.sanitized.is_international()
            && number.starts_with(territory.country_code())
    }

    fn match_composite(
        &self,
        number: &str,
        territory: &Territory,
        kind: PatternKind,
        country_code_required: bool,
    ) -> Option<String> {
        let general = self.general_pair(territory);
        let national_pattern = match kind {
            PatternKind::Valid => general.valid_pattern(),
            PatternKind::Possible => general.possible_pattern(),
        };
        let pattern = composite_pattern(territory, national_pattern, country_code_required);
        let regex = self.regex(&pattern)?;
        regex
            .captures(number)
            .and_then(|captures| captures.name("national"))
            .map(|national| national.as_str().to_owned())
    }

    /// The general pattern, widened with the short general pattern when
    /// special numbers are parsed.
    fn general_pair<'t>(&self, territory: &'t Territory) -> Cow<'t, PatternPair> {
        match territory.short_general() {
            Some(short) if self.config.parse_special => Cow::Owned(territory.general().or(short)),
            _ => Cow::Borrowed(territory.general()),
        }
    }

    fn regex(&self, pattern: &str) -> Option<Arc<Regex>> {
        match self.data.regexp_cache().get_regex(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                None
            }
        }
    }

    fn prefix_regex(&self, pattern: &str) -> Option<Arc<Regex>> {
        match self.data.regexp_cache().get_prefix_regex(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                None
            }
        }
    }
}

/// Prefers `other` when `base` has nothing possible, or when `other` has
/// something valid.
fn better_result(base: AnalysisResult, other: AnalysisResult) -> AnalysisResult {
    if !base.has_possible() || other.has_valid() {
        other
    } else {
        base
    }
}
