//! Behavior matrix for the utilities, one section per function.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use kitbag_util::{
    chunk, format_currency, group_by, group_by_key, is_empty, is_empty_or_missing,
    random_string_from_rng, retry, CurrencyOptions, RetryError, RetryPolicy, UtilError, Value,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde_json::json;

// ---------------------------------------------------------------------------
// chunk
// ---------------------------------------------------------------------------

#[test]
fn chunk_ten_numbers_by_three() {
    let numbers: Vec<u32> = (1..=10).collect();
    assert_eq!(
        chunk(&numbers, 3).unwrap(),
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]
    );
}

#[test]
fn chunk_exact_multiple_has_no_short_tail() {
    assert_eq!(chunk(&[1, 2, 3, 4], 2).unwrap(), vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn chunk_rejects_zero_size() {
    assert_eq!(chunk(&[1, 2, 3], 0), Err(UtilError::InvalidChunkSize));
}

proptest! {
    #[test]
    fn chunk_concatenation_restores_input(items in prop::collection::vec(any::<i32>(), 0..50), size in 1usize..8) {
        let chunks = chunk(&items, size).unwrap();
        prop_assert_eq!(chunks.len(), items.len().div_ceil(size));
        prop_assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= size));
        prop_assert_eq!(chunks.concat(), items);
    }
}

// ---------------------------------------------------------------------------
// random_string
// ---------------------------------------------------------------------------

#[test]
fn random_string_is_reproducible_with_a_seed() {
    let mut a = Xoshiro256PlusPlus::seed_from_u64(42);
    let mut b = Xoshiro256PlusPlus::seed_from_u64(42);
    let first = random_string_from_rng(&mut a, 16, "abc").unwrap();
    let second = random_string_from_rng(&mut b, 16, "abc").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 16);
    assert!(first.chars().all(|c| "abc".contains(c)));
}

#[test]
fn random_string_samples_multibyte_characters_whole() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let s = random_string_from_rng(&mut rng, 20, "日本語").unwrap();
    assert_eq!(s.chars().count(), 20);
    assert!(s.chars().all(|c| "日本語".contains(c)));
}

#[test]
fn random_string_covers_the_charset() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let s = random_string_from_rng(&mut rng, 2000, "0123456789ABCDEF").unwrap();
    for c in "0123456789ABCDEF".chars() {
        assert!(s.contains(c), "character {c} never sampled");
    }
}

#[test]
fn random_string_rejects_empty_charset() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    assert_eq!(
        random_string_from_rng(&mut rng, 4, ""),
        Err(UtilError::EmptyCharset)
    );
}

// ---------------------------------------------------------------------------
// group_by
// ---------------------------------------------------------------------------

fn users() -> Vec<Value> {
    vec![
        json!({"id": 1, "role": "admin", "name": "John"}).into(),
        json!({"id": 2, "role": "user", "name": "Jane"}).into(),
        json!({"id": 3, "role": "admin", "name": "Mike"}).into(),
        json!({"id": 4, "role": "user", "name": "Sarah"}).into(),
    ]
}

#[test]
fn group_users_by_role() {
    let users = users();
    let groups = group_by_key(&users, "role");
    assert_eq!(groups.keys().collect::<Vec<_>>(), ["admin", "user"]);

    let names = |role: &str| -> Vec<String> {
        groups[role]
            .iter()
            .map(|u| u.get("name").unwrap().to_string())
            .collect()
    };
    assert_eq!(names("admin"), ["John", "Mike"]);
    assert_eq!(names("user"), ["Jane", "Sarah"]);
}

#[test]
fn group_by_numeric_field_uses_js_number_text() {
    let values: Vec<Value> = vec![
        json!({"score": 1}).into(),
        json!({"score": 1.5}).into(),
        json!({"score": 1.0}).into(),
    ];
    let groups = group_by_key(&values, "score");
    assert_eq!(groups.keys().collect::<Vec<_>>(), ["1", "1.5"]);
    assert_eq!(groups["1"].len(), 2);
}

#[test]
fn group_by_extreme_numbers_uses_exponent_text() {
    let values: Vec<Value> = vec![
        json!({"size": 1e21}).into(),
        json!({"size": 1e-7}).into(),
        json!({"size": 1e20}).into(),
    ];
    let groups = group_by_key(&values, "size");
    assert_eq!(
        groups.keys().collect::<Vec<_>>(),
        ["1e+21", "1e-7", "100000000000000000000"]
    );
}

#[test]
fn group_by_closure_on_plain_structs() {
    #[derive(Debug, PartialEq)]
    struct Order {
        region: &'static str,
        total: u32,
    }
    let orders = vec![
        Order { region: "eu", total: 10 },
        Order { region: "us", total: 20 },
        Order { region: "eu", total: 30 },
    ];
    let groups = group_by(orders, |o| o.region);
    assert_eq!(groups["eu"].iter().map(|o| o.total).sum::<u32>(), 40);
    assert_eq!(groups["us"].len(), 1);
}

// ---------------------------------------------------------------------------
// retry
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn retry_succeeds_on_third_attempt() {
    let counter = AtomicU32::new(0);
    let attempts = &counter;
    let start = tokio::time::Instant::now();

    let result = retry(
        move || async move {
            let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
            if n < 3 {
                Err(format!("Attempt {n} failed"))
            } else {
                Ok("Success!")
            }
        },
        &RetryPolicy::new(3, Duration::from_millis(100)),
    )
    .await;

    assert_eq!(result, Ok("Success!"));
    assert_eq!(counter.load(Ordering::SeqCst), 3);
    assert_eq!(start.elapsed(), Duration::from_millis(200));
}

#[tokio::test(start_paused = true)]
async fn retry_returns_last_error_without_trailing_sleep() {
    let counter = AtomicU32::new(0);
    let attempts = &counter;
    let start = tokio::time::Instant::now();

    let result: Result<(), _> = retry(
        move || async move {
            let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
            Err(format!("Attempt {n} failed"))
        },
        &RetryPolicy::default(),
    )
    .await;

    assert_eq!(
        result,
        Err(RetryError::Exhausted {
            attempts: 3,
            last: "Attempt 3 failed".to_string(),
        })
    );
    assert_eq!(start.elapsed(), Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn retry_single_attempt_does_not_sleep() {
    let start = tokio::time::Instant::now();
    let result: Result<(), _> = retry(
        || async { Err::<(), _>("down") },
        &RetryPolicy::new(1, Duration::from_secs(60)),
    )
    .await;
    assert_eq!(result.unwrap_err().into_last(), Some("down"));
    assert_eq!(start.elapsed(), Duration::ZERO);
}

// ---------------------------------------------------------------------------
// format_currency
// ---------------------------------------------------------------------------

#[test]
fn currency_defaults_to_usd_en_us() {
    assert_eq!(
        format_currency(1234.56, &CurrencyOptions::default()).unwrap(),
        "$1,234.56"
    );
}

#[test]
fn currency_euro_in_german() {
    assert_eq!(
        format_currency(1234.56, &CurrencyOptions::new("EUR", "de-DE")).unwrap(),
        "1.234,56\u{a0}€"
    );
}

#[test]
fn currency_yen_in_japanese_has_no_minor_units() {
    assert_eq!(
        format_currency(1234.56, &CurrencyOptions::new("JPY", "ja-JP")).unwrap(),
        "￥1,235"
    );
}

#[test]
fn currency_in_french_uses_narrow_nbsp_groups() {
    let fmt = |currency: &str| {
        format_currency(1234.56, &CurrencyOptions::new(currency, "fr-FR")).unwrap()
    };
    assert_eq!(fmt("EUR"), "1\u{202f}234,56\u{a0}€");
    assert_eq!(fmt("USD"), "1\u{202f}234,56\u{a0}$US");
    assert_eq!(fmt("GBP"), "1\u{202f}234,56\u{a0}£GB");
}

#[test]
fn currency_in_british_english_qualifies_foreign_symbols() {
    let fmt = |currency: &str| {
        format_currency(1234.56, &CurrencyOptions::new(currency, "en-GB")).unwrap()
    };
    assert_eq!(fmt("GBP"), "£1,234.56");
    assert_eq!(fmt("USD"), "US$1,234.56");
    assert_eq!(fmt("JPY"), "JP¥1,235");
}

#[test]
fn currency_large_and_small_amounts() {
    let usd = CurrencyOptions::default();
    assert_eq!(format_currency(0.0, &usd).unwrap(), "$0.00");
    assert_eq!(format_currency(0.005, &usd).unwrap(), "$0.01");
    assert_eq!(format_currency(1234567.891, &usd).unwrap(), "$1,234,567.89");
}

#[test]
fn currency_options_from_json() {
    let options: CurrencyOptions = serde_json::from_str(r#"{"currency": "GBP"}"#).unwrap();
    assert_eq!(options.locale, "en-US");
    assert_eq!(format_currency(5.0, &options).unwrap(), "£5.00");
}

// ---------------------------------------------------------------------------
// is_empty
// ---------------------------------------------------------------------------

#[test]
fn is_empty_matrix() {
    let cases = [
        (json!([]), true),
        (json!({}), true),
        (json!(""), true),
        (json!("   "), true),
        (json!(null), true),
        (json!([1, 2, 3]), false),
        (json!({"name": "John"}), false),
        (json!("Hello"), false),
        (json!(0), false),
        (json!(false), false),
    ];
    for (input, expected) in cases {
        let text = input.to_string();
        assert_eq!(is_empty(&Value::from(input)), expected, "is_empty({text})");
    }
}

#[test]
fn is_empty_treats_absent_as_empty() {
    let record = Value::from(json!({"name": "John"}));
    assert!(is_empty_or_missing(record.get("email")));
    assert!(!is_empty_or_missing(record.get("name")));
}
