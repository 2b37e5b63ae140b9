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

use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// Categorizes phone numbers based on their primary use.
///
/// Iteration order (via [`strum::IntoEnumIterator`]) is the order in which
/// types are checked and reported.
#[derive(Debug, EnumIter, AsRefStr, IntoStaticStr, EnumString, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum PhoneNumberType {
    /// **General description.**
    /// The territory-wide pattern every other type is gated by. Never reported.
    General,
    /// **Premium-rate numbers.**
    /// These numbers charge a higher rate than normal calls.
    PremiumRate,
    /// **Toll-free numbers.**
    /// Calls to these numbers are free for the caller.
    TollFree,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// **Voice over IP (VoIP) numbers.**
    #[strum(serialize = "voip")]
    VoIP,
    /// **Personal numbers.**
    /// A number associated with a person, not a location or device.
    PersonalNumber,
    /// **Pagers.**
    Pager,
    /// **Universal Access Numbers (UAN).**
    #[strum(serialize = "uan")]
    UAN,
    /// **Voicemail access numbers.**
    #[strum(serialize = "voicemail")]
    VoiceMail,
    /// Short code, only checked when special numbers are parsed.
    ShortCode,
    Emergency,
    CarrierSpecific,
    SmsServices,
    ExpandedEmergency,
    NoInternationalDialling,
    CarrierServices,
    DirectoryServices,
    StandardRate,
    CarrierSelectionCodes,
    AreaCodeOptional,
    /// **Fixed-line numbers.**
    FixedLine,
    /// **Mobile numbers.**
    Mobile,
    /// **Fixed-line or mobile.**
    /// Reported instead of both [`Self::FixedLine`] and [`Self::Mobile`] when a
    /// number satisfies both, or when the territory does not distinguish them.
    FixedOrMobile,
}

impl PhoneNumberType {
    /// Types that only shape the analysis and never appear in the iteration
    /// set on their own.
    pub fn is_structural(self) -> bool {
        matches!(self, Self::General | Self::FixedOrMobile)
    }

    /// Fixed line and mobile are checked as a pair, after every other type.
    pub fn is_fixed_or_mobile_component(self) -> bool {
        matches!(self, Self::FixedLine | Self::Mobile)
    }

    /// Short-number types, excluded unless special numbers are parsed.
    pub fn is_special(self) -> bool {
        matches!(
            self,
            Self::ShortCode
                | Self::Emergency
                | Self::CarrierSpecific
                | Self::SmsServices
                | Self::ExpandedEmergency
                | Self::NoInternationalDialling
                | Self::CarrierServices
                | Self::DirectoryServices
                | Self::StandardRate
                | Self::CarrierSelectionCodes
                | Self::AreaCodeOptional
        )
    }

    pub fn human_name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::PremiumRate => "Premium Rate",
            Self::TollFree => "Toll Free",
            Self::SharedCost => "Shared Cost",
            Self::VoIP => "VoIP",
            Self::PersonalNumber => "Personal Number",
            Self::Pager => "Pager",
            Self::UAN => "UAN",
            Self::VoiceMail => "VoiceMail",
            Self::ShortCode => "Short Code",
            Self::Emergency => "Emergency",
            Self::CarrierSpecific => "Carrier Specific",
            Self::SmsServices => "SMS Services",
            Self::ExpandedEmergency => "Expanded Emergency",
            Self::NoInternationalDialling => "No International Dialling",
            Self::CarrierServices => "Carrier Services",
            Self::DirectoryServices => "Directory Services",
            Self::StandardRate => "Standard Rate",
            Self::CarrierSelectionCodes => "Carrier Selection Codes",
            Self::AreaCodeOptional => "Area Code Optional",
            Self::FixedLine => "Fixed Line",
            Self::Mobile => "Mobile",
            Self::FixedOrMobile => "Fixed Line or Mobile",
        }
    }
}
