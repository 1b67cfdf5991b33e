use chrono::NaiveDate;
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::FileFailurePersistence;
use rental_page::{Validators, format_phone_input, quote_rental};

const FORMAT_PROPTEST_REGRESSION_FILE: &str =
    "tests/proptest-regressions/format_property_fuzz_test.txt";
const DEFAULT_FORMAT_PROPTEST_CASES: u32 = 256;

fn format_proptest_cases() -> u32 {
    std::env::var("RENTAL_PAGE_FORMAT_PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_FORMAT_PROPTEST_CASES)
}

fn keyboard_input_strategy() -> BoxedStrategy<String> {
    vec(
        prop_oneof![
            6 => proptest::char::range('0', '9'),
            2 => Just('+'),
            2 => Just(' '),
            1 => Just('-'),
            1 => Just('('),
            1 => Just(')'),
            1 => proptest::char::range('a', 'z'),
        ],
        0..=24,
    )
    .prop_map(|chars| chars.into_iter().collect())
    .boxed()
}

fn date_pair_strategy() -> BoxedStrategy<(NaiveDate, NaiveDate)> {
    let day = 0i64..20_000;
    (day.clone(), day)
        .prop_map(|(a, b)| {
            let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
            (
                epoch + chrono::Duration::days(a),
                epoch + chrono::Duration::days(b),
            )
        })
        .boxed()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: format_proptest_cases(),
        failure_persistence: Some(Box::new(
            FileFailurePersistence::Direct(FORMAT_PROPTEST_REGRESSION_FILE),
        )),
        .. ProptestConfig::default()
    })]

    #[test]
    fn phone_formatting_is_idempotent(raw in keyboard_input_strategy()) {
        let formatted = format_phone_input(&raw);
        prop_assert_eq!(format_phone_input(&formatted), formatted.clone());
    }

    #[test]
    fn formatted_phones_never_exceed_the_display_cap(raw in keyboard_input_strategy()) {
        let formatted = format_phone_input(&raw);
        prop_assert!(formatted.len() <= 17, "formatted: {formatted:?}");
        prop_assert!(
            formatted.is_empty() || formatted.starts_with("+252"),
            "formatted: {formatted:?}"
        );
        prop_assert!(
            formatted.chars().all(|ch| ch.is_ascii_digit() || ch == ' ' || ch == '+'),
            "formatted: {formatted:?}"
        );
    }

    #[test]
    fn full_local_numbers_format_to_valid_phones(digits in proptest::string::string_regex("[0-9]{8}").unwrap()) {
        let validators = Validators::new().unwrap();
        let formatted = format_phone_input(&format!("61{digits}"));
        prop_assert!(
            validators.is_valid_phone(&formatted),
            "formatted: {formatted:?}"
        );
    }

    #[test]
    fn day_count_is_difference_plus_one((start, end) in date_pair_strategy()) {
        let result = quote_rental(start, end);
        if end < start {
            prop_assert!(result.is_err());
        } else {
            let quote = result.unwrap();
            prop_assert_eq!(quote.days, (end - start).num_days() + 1);
            prop_assert_eq!(quote.total_price, quote.days as f64 * 100.0);
            prop_assert!(quote.days >= 1);
        }
    }
}
