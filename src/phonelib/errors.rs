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

use std::path::PathBuf;

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Fatal problems with a territory dataset. The engine cannot be built
/// without a dataset, so these surface only at load time.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Could not read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset {name} is not valid text-format metadata: {message}")]
    Parse { name: String, message: String },

    #[error("Territory record #{index} in {name} has no id")]
    MissingId { name: String, index: usize },

    #[error("Territory {id} has an invalid calling code '{code}'")]
    InvalidCallingCode { id: String, code: String },

    #[error("Territory {id} has an invalid {field} pattern: {source}")]
    InvalidPattern {
        id: String,
        field: &'static str,
        #[source]
        source: InvalidRegexError,
    },

    #[error("Territory {id} has a number format without pattern or template")]
    IncompleteFormat { id: String },

    #[error("Unknown territory {0}")]
    UnknownTerritory(String),

    #[error("Number type {number_type} can not take additional patterns")]
    UnsupportedType { number_type: &'static str },

    #[error("Extended data line {line_num} of {name} is malformed")]
    MalformedPrefixLine { name: &'static str, line_num: usize },
}

/// Problems with a configuration value, reported when the engine is built.
#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("Configured {setting} is not a valid pattern: {source}")]
    InvalidRegex {
        setting: &'static str,
        #[source]
        source: InvalidRegexError,
    },

    #[error("Default country {0} is not present in the dataset")]
    UnknownDefaultCountry(String),

    #[error("At least one extension separator is required")]
    EmptyExtensionSeparators,
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{0}")]
    Data(#[from] DataLoadError),

    #[error("{0}")]
    Config(#[from] ConfigError),
}
