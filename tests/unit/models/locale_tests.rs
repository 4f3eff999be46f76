// Unit tests for the month-name tables and month selector options

use dob_picker::models::locale::Locale;
use dob_picker::services::navigation::month_options;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case(Locale::En, 1, "January" ; "english january")]
#[test_case(Locale::En, 9, "September" ; "english september")]
#[test_case(Locale::Es, 1, "Enero" ; "spanish january")]
#[test_case(Locale::Es, 9, "Septiembre" ; "spanish september")]
fn test_month_label(locale: Locale, month: usize, expected: &str) {
    let options = month_options(locale);
    assert_eq!(options[month - 1].label, expected);
    assert_eq!(options[month - 1].value, month.to_string());
}

#[test_case(Locale::En ; "english")]
#[test_case(Locale::Es ; "spanish")]
fn test_month_options_match_locale_table(locale: Locale) {
    let options = month_options(locale);
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    let values: Vec<String> = options.iter().map(|o| o.value.clone()).collect();

    assert_eq!(labels, locale.month_names().to_vec());
    assert_eq!(values, (1..=12).map(|m| m.to_string()).collect::<Vec<_>>());
}

#[test]
fn test_switching_locale_keeps_values() {
    let en = month_options(Locale::En);
    let es = month_options(Locale::Es);

    for (a, b) in en.iter().zip(es.iter()) {
        assert_eq!(a.value, b.value);
        assert_ne!(a.label, b.label);
    }
}

#[test]
fn test_locale_tags_round_trip() {
    for locale in Locale::ALL {
        assert_eq!(locale.tag().parse::<Locale>().unwrap(), locale);
        assert_eq!(locale.to_string(), locale.tag());
    }
}
