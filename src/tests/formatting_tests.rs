use crate::{ExtensionSeparators, PhonelibConfig};

use super::{get_phonelib, get_phonelib_with, territory_code::TerritoryCode};

#[test]
fn format_valid_number() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("972542234567", None);

    assert_eq!(Some("+972 54-223-4567".to_owned()), phone.international(true));
    assert_eq!(Some("+972542234567".to_owned()), phone.international(false));
    assert_eq!(Some("054-223-4567".to_owned()), phone.national(true));
    assert_eq!(Some("0542234567".to_owned()), phone.national(false));
    assert_eq!(Some("+972542234567".to_owned()), phone.e164());
    assert_eq!(Some("00972542234567".to_owned()), phone.e164_with_prefix("00"));
    assert_eq!(
        Some("00972 54-223-4567".to_owned()),
        phone.international_with_prefix(true, "00")
    );
    assert_eq!(Some("542234567".to_owned()), phone.raw_national());
}

#[test]
fn format_possible_number() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("9721234567", None);

    assert_eq!(Some("1234567".to_owned()), phone.national(true));
    assert_eq!(Some("+9721234567".to_owned()), phone.international(true));
    assert_eq!(Some("+9721234567".to_owned()), phone.e164());
    assert_eq!(Some("1234567".to_owned()), phone.raw_national());
}

#[test]
fn format_fixed_line_with_trunk_prefix() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("+97221234567", None);
    assert_eq!(Some("02-123-4567".to_owned()), phone.national(true));
    assert_eq!(Some("21234567".to_owned()), phone.raw_national());
    assert_eq!(Some("+972 2-123-4567".to_owned()), phone.international(true));
}

#[test]
fn format_north_american_numbers() {
    let phonelib = get_phonelib();

    let phone = phonelib.parse("+18005551234", None);
    assert_eq!(Some("+1 800-555-1234".to_owned()), phone.international(true));
    assert_eq!(Some("(800) 555-1234".to_owned()), phone.national(true));

    let phone = phonelib.parse("+12125551234", None);
    assert_eq!(Some("+1 212-555-1234".to_owned()), phone.international(true));
    assert_eq!(Some("(212) 555-1234".to_owned()), phone.national(true));
    assert_eq!(Some("2125551234".to_owned()), phone.national(false));
}

#[test]
fn format_with_national_prefix_rule() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("78005500500", None);
    assert_eq!(Some("8 (800) 550-05-00".to_owned()), phone.national(true));
    assert_eq!(Some("+7 800 550-05-00".to_owned()), phone.international(true));
    assert_eq!(Some("88005500500".to_owned()), phone.national(false));
}

#[test]
fn format_british_numbers() {
    let phonelib = get_phonelib();
    for input in ["441684291707", "00441684291707"] {
        let phone = phonelib.parse(input, None);
        assert_eq!(Some("+44 1684 291707".to_owned()), phone.international(true));
        assert_eq!(Some("01684 291707".to_owned()), phone.national(true));
    }
}

#[test]
fn format_mexican_mobile() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("0445532231113", Some(TerritoryCode::mx()));
    assert_eq!(Some("+5215532231113".to_owned()), phone.e164());
    assert_eq!(Some("+52 1 55 3223 1113".to_owned()), phone.international(true));
    assert_eq!(Some("044 55 3223 1113".to_owned()), phone.national(true));
}

#[test]
fn format_double_prefix_number() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("9111844757", None);
    assert_eq!(Some("+919111844757".to_owned()), phone.e164());
    assert_eq!(Some("+91 91118 44757".to_owned()), phone.international(true));
    assert_eq!(Some("091118 44757".to_owned()), phone.national(true));
}

#[test]
fn format_without_matching_territory_format() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("+12121231234", None);
    assert!(phone.is_invalid());
    assert_eq!(Some("+12121231234".to_owned()), phone.international(true));
    assert_eq!(Some("2121231234".to_owned()), phone.raw_national());

    let phone = phonelib.parse("12345", None);
    assert_eq!(Some("+12345".to_owned()), phone.international(true));
    assert_eq!(Some("12345".to_owned()), phone.national(true));
}

#[test]
fn format_extensions() {
    let phonelib = get_phonelib();
    let phone = phonelib.parse("972542234567#123", None);
    assert_eq!(Some("+972542234567;123".to_owned()), phone.full_e164());
    assert_eq!(
        Some("+972 54-223-4567;123".to_owned()),
        phone.full_international(true)
    );
    assert_eq!(Some("054-223-4567;123".to_owned()), phone.full_national(true));

    let phone = phonelib.parse("972542234567", None);
    assert_eq!(phone.e164(), phone.full_e164());

    let phonelib = get_phonelib_with(
        PhonelibConfig::default()
            .with_extension_separate_symbols(ExtensionSeparators::Chars("x#".to_owned()))
            .with_extension_separator(" ext "),
    );
    let phone = phonelib.parse("+1 212-555-1234 x 77", None);
    assert_eq!("77", phone.extension());
    assert_eq!(Some("+12125551234 ext 77".to_owned()), phone.full_e164());
}

#[test]
fn area_code_and_local_number() {
    let phonelib = get_phonelib();

    let phone = phonelib.parse("+44 (0) 20-7031-3000", None);
    assert_eq!(Some("20".to_owned()), phone.area_code());
    assert_eq!(Some("7031 3000".to_owned()), phone.local_number());

    let phone = phonelib.parse("+447912345678", None);
    assert!(phone.is_valid());
    assert_eq!(Some("+44 7912 345678".to_owned()), phone.international(true));
    assert_eq!(None, phone.area_code());

    let phone = phonelib.parse("+390612345678", None);
    assert_eq!(Some("06".to_owned()), phone.area_code());

    let phone = phonelib.parse("0445532231113", Some(TerritoryCode::mx()));
    assert_eq!(Some("55".to_owned()), phone.area_code());

    let phone = phonelib.parse("78005500500", None);
    assert_eq!(None, phone.area_code());
    assert_eq!(Some("550-05-00".to_owned()), phone.local_number());

    let phone = phonelib.parse("97254", None);
    assert_eq!(None, phone.area_code());
    assert_eq!(Some("97254".to_owned()), phone.local_number());
}
