use super::*;

#[test]
fn codes_round_trip_through_from_str() {
    for lang in Language::all() {
        assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
    }
}

#[test]
fn unknown_code_is_a_validation_error() {
    let err = "de".parse::<Language>().unwrap_err();
    assert!(err.to_string().contains("unsupported locale code"));
}

#[test]
fn default_locale_is_lithuanian() {
    assert_eq!(Language::default(), Language::Lt);
}

#[test]
fn serde_uses_lowercase_codes() {
    assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
    let lang: Language = serde_json::from_str("\"lt\"").unwrap();
    assert_eq!(lang, Language::Lt);
}

#[test]
fn tables_are_complete_and_distinct() {
    for lang in Language::all() {
        let pack = locale_strings(lang);
        assert!(pack.months.iter().all(|m| !m.is_empty()));
        assert!(pack.days_short.iter().all(|d| !d.is_empty()));
    }
    assert_ne!(
        locale_strings(Language::En).months[0],
        locale_strings(Language::Lt).months[0]
    );
}

#[test]
fn weekday_labels_start_on_monday() {
    assert_eq!(locale_strings(Language::En).days_short[0], "Mon");
    assert_eq!(locale_strings(Language::En).days_short[6], "Sun");
    assert_eq!(locale_strings(Language::Lt).days_short[0], "Pr");
}
