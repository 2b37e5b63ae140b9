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

pub const PLUS_SIGN: &'static str = "+";
pub const DOUBLE_ZERO: &'static str = "00";

// Name and contents of the dataset compiled into the binary.
pub const COMPILED_DATASET_NAME: &'static str = "territories.txtpb";
pub const COMPILED_DATASET: &'static str = include_str!("../../resources/territories.txtpb");

pub const DEFAULT_EXTENSION_SEPARATOR: &'static str = ";";
pub const DEFAULT_EXTENSION_SEPARATE_TOKENS: [&'static str; 4] = ["#", ";", "extension", "ext"];

// Everything except ASCII digits is dropped in the default mode.
pub const DEFAULT_SANITIZE_REGEX: &'static str = r"[^0-9]+";
// Strict mode drops only the usual separators, so letters survive and make
// the number invalid.
pub const DEFAULT_STRICT_SANITIZE_REGEX: &'static str = r"[\s\.\-\(\)\+]";

// Fallback used when no territory format fits a national number.
pub const DEFAULT_NUMBER_FORMAT_PATTERN: &'static str = r"(\d+)(\d{3})(\d{4})";
pub const DEFAULT_NUMBER_FORMAT_TEMPLATE: &'static str = "$1 $2 $3";

// Tokens of national prefix formatting rules.
pub const NATIONAL_PREFIX_TOKEN: &'static str = "$NP";
pub const FIRST_GROUP_TOKEN: &'static str = "$FG";
pub const FIRST_GROUP_REFERENCE: &'static str = "$1";

// An international format of "NA" means the national number is printed
// without grouping.
pub const NOT_APPLICABLE_FORMAT: &'static str = "NA";

// Italy keeps the leading zero of area codes without having a national
// prefix.
pub const AREA_CODE_NO_PREFIX_TERRITORIES: [&'static str; 1] = ["IT"];
pub const AREA_CODE_MOBILE_TERRITORIES: [&'static str; 3] = ["AR", "MX", "BR"];
// Leading group of mobile formats that is a mobile marker, not an area code.
pub const AREA_CODE_MOBILE_TOKENS: [(&'static str, &'static str); 2] = [("MX", "1"), ("AR", "9")];

// Prefix tables, `prefix|value` per line.
pub const GEOCODING_TABLE: (&'static str, &'static str) =
    ("geocoding.txt", include_str!("../../resources/extended/geocoding.txt"));
pub const TIMEZONES_TABLE: (&'static str, &'static str) =
    ("timezones.txt", include_str!("../../resources/extended/timezones.txt"));
pub const CARRIERS_TABLE: (&'static str, &'static str) =
    ("carriers.txt", include_str!("../../resources/extended/carriers.txt"));
pub const COUNTRY_NAMES_TABLE: (&'static str, &'static str) =
    ("country_names.txt", include_str!("../../resources/extended/country_names.txt"));

pub const TIMEZONES_SEPARATOR: char = '&';
pub const EXTENDED_DATA_SEPARATOR: char = '|';
pub const EXTENDED_DATA_COMMENT: char = '#';
