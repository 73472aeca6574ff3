use fieldmask::domain::currency::CurrencyAmount;
use fieldmask::domain::mask::{DEFAULT_PLACEHOLDER, MaskTemplate, RawDigits, extract_digits, presets};
use fieldmask::infrastructure::locale::LocaleCurrencyFormatter;
use rand::Rng;

mod common;

const MASKS: [&str; 7] = [
    presets::CPF,
    presets::CNPJ,
    presets::CEP,
    presets::PHONE_LANDLINE,
    presets::PHONE_MOBILE,
    presets::DATE,
    "99%",
];

fn templates() -> Vec<MaskTemplate> {
    MASKS
        .iter()
        .map(|mask| MaskTemplate::parse(mask, DEFAULT_PLACEHOLDER))
        .collect()
}

#[test]
fn test_mask_round_trip_within_capacity() {
    let mut rng = rand::thread_rng();
    for template in templates() {
        for _ in 0..200 {
            let len = rng.gen_range(0..=template.placeholder_count());
            let digits = common::random_digits(&mut rng, len);
            let display = template.apply(&RawDigits::from_text(&digits));
            assert_eq!(
                extract_digits(&display).as_str(),
                digits,
                "template {template}, display {display:?}"
            );
        }
    }
}

#[test]
fn test_mask_apply_is_idempotent_and_bounded() {
    let mut rng = rand::thread_rng();
    for template in templates() {
        for _ in 0..200 {
            let len = rng.gen_range(0..=template.placeholder_count() + 5);
            let digits = RawDigits::from_text(&common::random_digits(&mut rng, len));

            let display = template.apply(&digits);
            assert_eq!(template.apply(&digits), display);
            assert_eq!(template.apply(&extract_digits(&display)), display);
            assert!(display.chars().count() <= template.len());
        }
    }
}

#[test]
fn test_mask_display_is_template_prefix() {
    let mut rng = rand::thread_rng();
    for (mask, template) in MASKS.iter().zip(templates()) {
        for _ in 0..200 {
            let len = rng.gen_range(0..=template.placeholder_count() + 5);
            let digits = RawDigits::from_text(&common::random_digits(&mut rng, len));
            let display = template.apply(&digits);

            for (shown, expected) in display.chars().zip(mask.chars()) {
                if expected != DEFAULT_PLACEHOLDER {
                    assert_eq!(shown, expected, "literal out of place in {display:?}");
                } else {
                    assert!(shown.is_ascii_digit());
                }
            }
        }
    }
}

#[test]
fn test_currency_round_trip() {
    let formatters = [
        LocaleCurrencyFormatter::pt_br(),
        LocaleCurrencyFormatter::en_us(),
    ];
    let mut rng = rand::thread_rng();
    let mut samples: Vec<u64> = vec![0, 1, 9, 10, 99, 100, 999, 1000, 99_999, 100_000, 999_999_999];
    samples.extend((0..1000).map(|_| rng.gen_range(0..=999_999_999u64)));

    for formatter in &formatters {
        for &cents in &samples {
            let amount = CurrencyAmount::from_cents(cents);
            let display = amount.format_with(formatter);
            assert_eq!(
                CurrencyAmount::parse_edit(&display),
                amount,
                "display {display:?}"
            );
        }
    }
}

#[test]
fn test_currency_known_renderings() {
    let formatter = LocaleCurrencyFormatter::pt_br();
    assert_eq!(CurrencyAmount::from_cents(0).format_with(&formatter), "R$ 0,00");
    assert_eq!(
        CurrencyAmount::from_cents(12345).format_with(&formatter),
        "R$ 123,45"
    );
    assert_eq!(CurrencyAmount::parse_edit(""), CurrencyAmount::ZERO);
    assert_eq!(CurrencyAmount::parse_edit("abc"), CurrencyAmount::ZERO);
}
