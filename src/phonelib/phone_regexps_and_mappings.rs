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

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

pub(super) static REGEXPS_AND_MAPPINGS: LazyLock<PhoneRegExpsAndMappings> =
    LazyLock::new(PhoneRegExpsAndMappings::new);

/// Fixed patterns and character maps shared by every engine instance.
pub(super) struct PhoneRegExpsAndMappings {
    /// Keypad letters. Both cases map to the same digit.
    pub alpha_mappings: HashMap<char, char>,

    /// A digit directly followed by a group reference in a format template,
    /// e.g. the `3$` in `$1 $23$3`.
    pub digit_before_group_pattern: Regex,

    /// Group references (`$1`..`$9`) of format templates.
    pub group_reference_pattern: Regex,

    pub non_digits_pattern: Regex,

    /// Format templates that put literal digits before the first group carry a
    /// national prefix or trunk code, which is not part of the local number.
    pub digits_before_first_group_pattern: Regex,

    /// Everything up to the second group of a template.
    pub up_to_second_group_pattern: Regex,
}

impl PhoneRegExpsAndMappings {
    fn initialize_mappings(&mut self) {
        let mut alpha_map = HashMap::with_capacity(52);
        alpha_map.insert('A', '2');
        alpha_map.insert('B', '2');
        alpha_map.insert('C', '2');
        alpha_map.insert('D', '3');
        alpha_map.insert('E', '3');
        alpha_map.insert('F', '3');
        alpha_map.insert('G', '4');
        alpha_map.insert('H', '4');
        alpha_map.insert('I', '4');
        alpha_map.insert('J', '5');
        alpha_map.insert('K', '5');
        alpha_map.insert('L', '5');
        alpha_map.insert('M', '6');
        alpha_map.insert('N', '6');
        alpha_map.insert('O', '6');
        alpha_map.insert('P', '7');
        alpha_map.insert('Q', '7');
        alpha_map.insert('R', '7');
        alpha_map.insert('S', '7');
        alpha_map.insert('T', '8');
        alpha_map.insert('U', '8');
        alpha_map.insert('V', '8');
        alpha_map.insert('W', '9');
        alpha_map.insert('X', '9');
        alpha_map.insert('Y', '9');
        alpha_map.insert('Z', '9');

        let lowercase = alpha_map
            .iter()
            .map(|(letter, digit)| (letter.to_ascii_lowercase(), *digit))
            .collect::<Vec<_>>();
        alpha_map.extend(lowercase);
        self.alpha_mappings = alpha_map;
    }

    pub fn new() -> Self {
        let mut instance = Self {
            alpha_mappings: Default::default(),
            digit_before_group_pattern: Regex::new(r"(\d)\$").unwrap(),
            group_reference_pattern: Regex::new(r"\$(\d)").unwrap(),
            non_digits_pattern: Regex::new(r"[^0-9]").unwrap(),
            digits_before_first_group_pattern: Regex::new(r"^.*[0-9]+.*\$1").unwrap(),
            up_to_second_group_pattern: Regex::new(r"^.*\$2").unwrap(),
        };
        instance.initialize_mappings();
        instance
    }

    /// Replaces keypad letters with their digits, leaving everything else.
    pub fn convert_vanity(&self, number: &str) -> String {
        number
            .chars()
            .map(|c| self.alpha_mappings.get(&c).copied().unwrap_or(c))
            .collect()
    }
}
