mod common;
use common::date;

use shiftbot::errors::AppError;
use shiftbot::i18n::{Locale, Localizer};

#[test]
fn locale_tags_and_shorthands() {
    assert_eq!(Locale::from_tag("en-US"), Some(Locale::EnUs));
    assert_eq!(Locale::from_tag("ru"), Some(Locale::RuRu));
    assert_eq!(Locale::from_tag("  RU-RU "), Some(Locale::RuRu));
    assert_eq!(Locale::from_tag("klingon"), None);
}

#[test]
fn preference_falls_back_to_the_default_locale() {
    let localizer = Localizer::new(Locale::RuRu).unwrap();

    // No preference set: default locale answers.
    assert!(localizer.text("not_a_date", 7).unwrap().contains("похоже"));

    localizer.set_locale(7, Locale::EnUs);
    assert!(localizer.text("not_a_date", 7).unwrap().contains("date"));

    // Other conversations are unaffected.
    assert!(localizer.text("not_a_date", 8).unwrap().contains("похоже"));
}

#[test]
fn missing_keys_are_a_typed_error() {
    let localizer = Localizer::new(Locale::EnUs).unwrap();

    match localizer.text("no_such_key", 1) {
        Err(AppError::MissingKey(key)) => assert_eq!(key, "no_such_key"),
        other => panic!("expected MissingKey, got {:?}", other),
    }
}

#[test]
fn placeholders_are_substituted_in_order() {
    let localizer = Localizer::new(Locale::EnUs).unwrap();

    let text = localizer
        .format("no_work", 1, &["Alice", "02/15/2020"])
        .unwrap();

    assert_eq!(text, "Alice is not working on 02/15/2020.");
}

#[test]
fn dates_parse_per_locale_with_iso_fallback() {
    let localizer = Localizer::new(Locale::EnUs).unwrap();

    assert_eq!(localizer.try_parse_date("02/10/2020", 1), Some(date(2020, 2, 10)));
    assert_eq!(localizer.try_parse_date("2020-02-10", 1), Some(date(2020, 2, 10)));
    assert_eq!(localizer.try_parse_date("10.02.2020", 1), None);

    localizer.set_locale(1, Locale::RuRu);
    assert_eq!(localizer.try_parse_date("10.02.2020", 1), Some(date(2020, 2, 10)));
    assert_eq!(localizer.try_parse_date("02/10/2020", 1), None);
}

#[test]
fn short_dates_render_per_locale() {
    let localizer = Localizer::new(Locale::EnUs).unwrap();

    assert_eq!(localizer.short_date(date(2020, 2, 10), 1), "02/10/2020");

    localizer.set_locale(1, Locale::RuRu);
    assert_eq!(localizer.short_date(date(2020, 2, 10), 1), "10.02.2020");
}
