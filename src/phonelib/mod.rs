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

mod helper_constants;
mod helper_functions;
pub(self) mod helper_types;
mod phone_regexps_and_mappings;
mod phone_analyzer;
mod phone_formatter;
mod sanitizer;
pub mod config;
pub mod enums;
pub mod errors;
pub mod extended_data;
pub mod phone;
pub mod phone_data;
pub mod phonelib;
pub mod territory;
pub mod validator;

use std::sync::LazyLock;

pub use config::{ExtensionSeparators, PhonelibConfig};
pub use enums::PhoneNumberType;
pub use errors::{BuildError, ConfigError, DataLoadError};
pub use helper_types::{AnalysisResult, TerritoryResult};
pub use phone::Phone;
pub use phonelib::{Phonelib, PhonelibBuilder};
pub use validator::{PhoneValidationError, PhoneValidator};

/// Engine over the compiled-in dataset with the default configuration.
pub static PHONELIB: LazyLock<Phonelib> = LazyLock::new(|| match Phonelib::new() {
    Ok(phonelib) => phonelib,
    Err(err) => {
        let err_message = format!("Could not load compiled-in territory data: {}", err);
        log::error!("{}", err_message);
        panic!("{}", err_message);
    }
});
