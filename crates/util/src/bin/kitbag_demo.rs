//! Walks through every utility and prints what it does.
//!
//! Set `RUST_LOG=kitbag_util=debug` to see retry and locale fallback logs.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use kitbag_util::{
    chunk, deep_clone, format_currency, group_by_key, is_empty, is_empty_or_missing, random_string,
    random_string_with, retry, CurrencyOptions, Debouncer, RandomStringOptions, RetryPolicy, Value,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("kitbag_util=info".parse()?))
        .init();

    println!("\n--- Chunk ---");
    let numbers: Vec<u32> = (1..=10).collect();
    println!("Original: {numbers:?}");
    println!("Chunks of 3: {:?}", chunk(&numbers, 3)?);

    println!("\n--- Debounce ---");
    let debounced = Debouncer::new(Duration::from_millis(1000), |text: &'static str| {
        println!("Debounced log: {text}");
    })?;
    println!("Calling the debounced function three times...");
    debounced.call("First call");
    debounced.call("Second call");
    debounced.call("Third call");
    tokio::time::sleep(Duration::from_millis(1100)).await;

    println!("\n--- Deep Clone ---");
    let original = Value::from(json!({
        "name": "John",
        "age": 30,
        "address": {"street": "123 Main St", "city": "Boston", "country": "USA"},
        "hobbies": ["reading", "gaming"]
    }));
    let cloned = deep_clone(&original);
    println!("Original: {}", serde_json::to_string(&original)?);
    println!("Cloned:   {}", serde_json::to_string(&cloned)?);
    println!("Structurally equal? {}", cloned == original);

    println!("\n--- Random String ---");
    println!("10 characters: {}", random_string(10));
    let hex = RandomStringOptions {
        charset: "123456789ABCDEF".to_string(),
    };
    println!("5 characters from a custom charset: {}", random_string_with(5, &hex)?);

    println!("\n--- Group By ---");
    let users: Vec<Value> = vec![
        json!({"id": 1, "role": "admin", "name": "John"}).into(),
        json!({"id": 2, "role": "user", "name": "Jane"}).into(),
        json!({"id": 3, "role": "admin", "name": "Mike"}).into(),
        json!({"id": 4, "role": "user", "name": "Sarah"}).into(),
    ];
    for (role, members) in group_by_key(&users, "role") {
        let names: Vec<String> = members
            .iter()
            .filter_map(|user| user.get("name"))
            .map(ToString::to_string)
            .collect();
        println!("{role}: {names:?}");
    }

    println!("\n--- Retry ---");
    let attempts = AtomicU32::new(0);
    let counter = &attempts;
    let outcome = retry(
        move || async move {
            let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt < 3 {
                Err(format!("attempt {attempt} failed"))
            } else {
                Ok("Success!")
            }
        },
        &RetryPolicy::new(3, Duration::from_millis(100)),
    )
    .await;
    match outcome {
        Ok(result) => println!("Retry result: {result}"),
        Err(e) => println!("Retry failed: {e}"),
    }

    println!("\n--- Format Currency ---");
    println!("USD: {}", format_currency(1234.56, &CurrencyOptions::default())?);
    println!("EUR: {}", format_currency(1234.56, &CurrencyOptions::new("EUR", "de-DE"))?);
    println!("JPY: {}", format_currency(1234.56, &CurrencyOptions::new("JPY", "ja-JP"))?);

    println!("\n--- Is Empty ---");
    let checks = [
        json!([]),
        json!({}),
        json!(""),
        json!(null),
        json!([1, 2, 3]),
        json!({"name": "John"}),
        json!("Hello"),
        json!(0),
    ];
    for check in checks {
        let text = check.to_string();
        println!("is_empty({text}): {}", is_empty(&Value::from(check)));
    }
    println!("is_empty(undefined): {}", is_empty_or_missing(None));

    Ok(())
}
