use crate::{PhoneNumberType, PhonelibConfig};

use super::{get_phonelib, get_phonelib_with, territory_code::TerritoryCode};

#[test]
fn valid_number_without_hint() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("972542234567", None);

    assert!(phone.is_valid());
    assert!(phone.is_possible());
    assert!(!phone.is_invalid());
    assert_eq!(Some(TerritoryCode::il()), phone.country());
    assert_eq!(Some("972"), phone.country_code());
    assert_eq!(vec![PhoneNumberType::Mobile], phone.types());
    assert_eq!(Some(PhoneNumberType::Mobile), phone.number_type());
    assert_eq!(Some("Mobile"), phone.human_type());
    assert_eq!(Some("542234567"), phone.national_number());
    assert!(phone.is_valid_for_country("il"));
    assert!(phone.is_invalid_for_country(TerritoryCode::us()));
}

#[test]
fn possible_but_not_valid() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("9721234567", None);

    assert!(phone.is_possible());
    assert!(phone.is_invalid());
    assert!(phone.types().is_empty());
    assert!(phone.possible_types().contains(&PhoneNumberType::FixedLine));
    assert_eq!(vec![TerritoryCode::il()], phone.countries());
    assert!(phone.valid_countries().is_empty());
    assert_eq!(None, phone.valid_country());
    assert_eq!(Some(TerritoryCode::il()), phone.country());
}

#[test]
fn too_short_is_impossible() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("97254", None);
    assert!(phone.is_impossible());
    assert!(phone.is_invalid());
    assert!(phone.countries().is_empty());
    assert_eq!(None, phone.country());
}

#[test]
fn unusable_input_answers_false() {
    let phonelib = get_phonelib();
    for phone in [
        phonelib.parse("", None),
        phonelib.parse(None::<&str>, None),
        phonelib.parse("not a number", None),
    ] {
        assert!(!phone.is_valid());
        assert!(!phone.is_possible());
        assert!(phone.types().is_empty());
        assert!(phone.countries().is_empty());
        assert_eq!(None, phone.national_number());
        assert_eq!(None, phone.international(true));
        assert_eq!(None, phone.e164());
    }
    assert!(phonelib.is_invalid(None::<&str>));
    assert!(phonelib.is_impossible(""));
}

#[test]
fn national_input_with_hint() {
    let phonelib = get_phonelib();
    assert!(phonelib.parse("0542234567", Some(TerritoryCode::il())).is_valid());
    assert!(phonelib.parse("542234567", Some("il")).is_valid());
    assert!(phonelib.is_valid_for_country("0542234567", TerritoryCode::il()));
    assert!(phonelib.is_invalid_for_country("0542234567", TerritoryCode::us()));
    assert!(phonelib.is_invalid("0542234567"));
}

#[test]
fn empty_hint_is_ignored() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("972542234567", Some(" "));
    assert_eq!(Some(TerritoryCode::il()), phone.country());
}

#[test]
fn unknown_hint_gives_nothing_for_national_input() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("0542234567", Some(TerritoryCode::zz()));
    assert!(phone.is_invalid());
}

#[test]
fn plus_number_ignores_foreign_hint() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("+972542234567", Some(TerritoryCode::us()));
    assert!(phone.is_valid());
    assert_eq!(Some(TerritoryCode::il()), phone.country());
}

#[test]
fn default_country_falls_back_to_global_scan() {
    let phonelib = get_phonelib_with(
        PhonelibConfig::default().with_default_country(Some(TerritoryCode::ua())),
    );
    let phone = phonelib.parse("972542234567", None);
    assert!(phone.is_valid());
    assert_eq!(Some(TerritoryCode::il()), phone.country());
}

#[test]
fn unknown_default_country_is_rejected() {
    let phonelib = get_phonelib();
    assert!(
        phonelib
            .with_config(PhonelibConfig::default().with_default_country(Some("XX")))
            .is_err()
    );
}

#[test]
fn shared_calling_code_territories() {
    let phonelib = get_phonelib();

    let phone = phonelib.parse("+18005551234", None);
    assert!(phone.is_valid());
    assert_eq!(Some(TerritoryCode::us()), phone.country());
    assert_eq!(Some(PhoneNumberType::TollFree), phone.number_type());

    let phone = phonelib.parse("+12125551234", None);
    assert!(phone.is_valid());
    assert_eq!(Some(TerritoryCode::us()), phone.country());
    assert_eq!(Some(PhoneNumberType::FixedOrMobile), phone.number_type());
    assert_eq!(Some("Fixed Line or Mobile"), phone.human_type());

    assert!(phonelib.is_invalid("+12121231234"));
    assert!(phonelib.is_possible("+12121231234"));

    let phone = phonelib.parse("+15146591112", None);
    assert_eq!(Some(TerritoryCode::ca()), phone.country());
    assert_eq!(vec![TerritoryCode::ca()], phone.valid_countries());
    assert_eq!(Some(PhoneNumberType::FixedOrMobile), phone.number_type());

    let phone = phonelib.parse("+18682739106", None);
    assert_eq!(Some(TerritoryCode::tt()), phone.country());
    assert_eq!(Some(PhoneNumberType::Mobile), phone.number_type());
}

#[test]
fn default_country_decides_ambiguous_numbers() {
    let phonelib = get_phonelib_with(
        PhonelibConfig::default().with_default_country(Some(TerritoryCode::us())),
    );
    let phone = phonelib.parse("7876711234", None);
    assert!(phone.is_invalid());
    assert_eq!(Some("+17876711234".to_owned()), phone.international(true));

    let phonelib = get_phonelib_with(
        PhonelibConfig::default().with_default_country(Some(TerritoryCode::pr())),
    );
    let phone = phonelib.parse("7876711234", None);
    assert!(phone.is_valid());
    assert_eq!(Some(TerritoryCode::pr()), phone.country());
}

#[test]
fn calling_code_seven() {
    let phonelib = get_phonelib();

    let phone = phonelib.parse("78005500500", None);
    assert!(phone.is_valid());
    assert_eq!(Some(TerritoryCode::ru()), phone.country());
    assert_eq!(Some(PhoneNumberType::TollFree), phone.number_type());

    let phone = phonelib.parse("+77011234567", None);
    assert!(phone.is_valid());
    assert_eq!(Some(TerritoryCode::kz()), phone.country());
    assert_eq!(Some(PhoneNumberType::Mobile), phone.number_type());
    assert!(phone.countries().contains(&TerritoryCode::ru()));
}

#[test]
fn international_prefix_of_default_country() {
    let phonelib = get_phonelib_with(
        PhonelibConfig::default().with_default_country(Some(TerritoryCode::ru())),
    );
    let phone = phonelib.parse("810972542234567", None);
    assert!(phone.is_valid());
    assert_eq!(Some(TerritoryCode::il()), phone.country());

    let phonelib = get_phonelib_with(
        PhonelibConfig::default().with_default_country(Some(TerritoryCode::gb())),
    );
    assert!(phonelib.is_invalid("810972542234567"));
}

#[test]
fn double_zero_and_plus_forms() {
    let phonelib = get_phonelib();
    for input in ["441684291707", "00441684291707", "+44 1684 291707"] {
        let phone = phonelib.parse(input, None);
        assert!(phone.is_valid(), "{input} should be valid");
        assert_eq!(Some(TerritoryCode::gb()), phone.country());
        assert_eq!(Some(PhoneNumberType::FixedLine), phone.number_type());
    }
}

#[test]
fn strict_check_rejects_letters() {
    let lenient = get_phonelib();
    assert!(lenient.is_valid("+441684291707x"));
    assert!(lenient.is_valid("1212a5551234"));

    let strict = get_phonelib_with(PhonelibConfig::default().with_strict_check(true));
    assert!(strict.is_invalid("+441684291707x"));
    assert!(strict.is_invalid("1212a5551234"));
    assert!(strict.is_valid("+44 1684 291707"));
}

#[test]
fn mexican_mobile_with_national_prefix() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("0445532231113", Some(TerritoryCode::mx()));
    assert!(phone.is_valid());
    assert_eq!(Some(PhoneNumberType::Mobile), phone.number_type());
    assert_eq!(Some("15532231113"), phone.national_number());
}

#[test]
fn italian_numbers_keep_calling_code_digits() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("3911234567", Some(TerritoryCode::it()));
    assert!(phone.is_valid());
    assert_eq!(Some(PhoneNumberType::Mobile), phone.number_type());
    assert_eq!(Some("3911234567"), phone.national_number());

    let phone = phonelib.parse("39391234", Some(TerritoryCode::it()));
    assert!(phone.is_possible());
    assert!(phone.is_invalid());
}

#[test]
fn double_prefix_retry() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("9111844757", None);
    assert!(phone.is_valid());
    assert_eq!(Some(TerritoryCode::in_()), phone.country());
    assert_eq!(Some("9111844757"), phone.national_number());

    assert!(phonelib.is_valid("9183082081"));
    assert!(phonelib.is_invalid("+9183082081"));
    assert!(phonelib.is_valid_for_country("9183082081", TerritoryCode::in_()));

    let strict = get_phonelib_with(PhonelibConfig::default().with_strict_double_prefix_check(true));
    assert!(strict.is_invalid("9111844757"));
    assert!(strict.is_valid_for_country("9111844757", TerritoryCode::in_()));
}

#[test]
fn special_numbers() {
    let phonelib = get_phonelib();
    assert!(phonelib.is_invalid("really1511@now.com"));

    let phonelib = get_phonelib_with(PhonelibConfig::default().with_parse_special(true));
    let phone = phonelib.parse("really1511@now.com", None);
    assert!(phone.is_valid());
    assert_eq!(Some(TerritoryCode::us()), phone.country());
    assert_eq!(Some(PhoneNumberType::ShortCode), phone.number_type());
    assert_eq!(vec!["Short Code"], phone.human_types());
}

#[test]
fn vanity_numbers() {
    let phonelib = get_phonelib();
    assert!(phonelib.parse("800-44-STERN", Some(TerritoryCode::us())).is_invalid());

    let phonelib = get_phonelib_with(PhonelibConfig::default().with_vanity_conversion(true));
    let phone = phonelib.parse("800-44-STERN", Some(TerritoryCode::us()));
    assert!(phone.is_valid());
    assert_eq!(Some(PhoneNumberType::TollFree), phone.number_type());
    assert_eq!(Some("+18004478376".to_owned()), phone.e164());
}

#[test]
fn extensions() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("972542234567#123", None);
    assert!(phone.is_valid());
    assert_eq!("123", phone.extension());
    assert_eq!("972542234567", phone.sanitized());

    let phone = phonelib.parse("+1 212-555-5555 ext. 5555", None);
    assert_eq!("5555", phone.extension());
    assert_eq!(Some(TerritoryCode::us()), phone.country());
}

#[test]
fn phones_compare_by_e164() {
    let phonelib = get_phonelib();
    assert_eq!(
        phonelib.parse("+972 54-223-4567", None),
        phonelib.parse("0542234567", Some(TerritoryCode::il()))
    );
    assert_ne!(
        phonelib.parse("9721234567", None),
        phonelib.parse("+9721234567", None)
    );
    assert_eq!("+972542234567", phonelib.parse("0542234567", Some("IL")).to_string());
    assert_eq!("not a number", phonelib.parse("not a number", None).to_string());
}
