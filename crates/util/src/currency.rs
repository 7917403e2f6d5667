//! Currency formatting for a built-in table of locales.
//!
//! Output follows `Intl.NumberFormat` with `style: "currency"` for the
//! locales in the built-in table. Unknown locales fall back to `en-US`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::UtilError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyOptions {
    /// ISO 4217 code, e.g. `"EUR"`. Matched case-insensitively.
    pub currency: String,
    /// BCP 47 tag, e.g. `"de-DE"`.
    pub locale: String,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            locale: "en-US".to_string(),
        }
    }
}

impl CurrencyOptions {
    pub fn new(currency: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            locale: locale.into(),
        }
    }
}

const NBSP: char = '\u{a0}';

struct LocaleFormat {
    tag: &'static str,
    group: &'static str,
    decimal: &'static str,
    symbol_after: bool,
    symbols: &'static [(&'static str, &'static str)],
}

const LOCALES: &[LocaleFormat] = &[
    LocaleFormat {
        tag: "en-US",
        group: ",",
        decimal: ".",
        symbol_after: false,
        symbols: &[
            ("USD", "$"),
            ("EUR", "€"),
            ("GBP", "£"),
            ("JPY", "¥"),
            ("CNY", "CN¥"),
            ("INR", "₹"),
            ("KRW", "₩"),
            ("CAD", "CA$"),
            ("AUD", "A$"),
        ],
    },
    LocaleFormat {
        tag: "en-GB",
        group: ",",
        decimal: ".",
        symbol_after: false,
        symbols: &[
            ("GBP", "£"),
            ("EUR", "€"),
            ("USD", "US$"),
            ("JPY", "JP¥"),
            ("INR", "₹"),
        ],
    },
    LocaleFormat {
        tag: "de-DE",
        group: ".",
        decimal: ",",
        symbol_after: true,
        symbols: &[("EUR", "€"), ("USD", "$"), ("GBP", "£"), ("JPY", "¥")],
    },
    LocaleFormat {
        tag: "fr-FR",
        group: "\u{202f}",
        decimal: ",",
        symbol_after: true,
        symbols: &[("EUR", "€"), ("USD", "$US"), ("GBP", "£GB")],
    },
    LocaleFormat {
        tag: "ja-JP",
        group: ",",
        decimal: ".",
        symbol_after: false,
        symbols: &[("JPY", "￥"), ("USD", "$"), ("EUR", "€"), ("GBP", "£")],
    },
];

/// Currencies without minor units.
const ZERO_DECIMAL: &[&str] = &["CLP", "ISK", "JPY", "KRW", "UGX", "VND"];

/// Enough fractional digits to print any `f64` exactly.
const EXACT_PRECISION: usize = 1100;

/// Formats `amount` as money in `options.currency` for `options.locale`.
///
/// Rounds half away from zero to the currency's minor units (two, or none
/// for currencies such as JPY). Currencies without a local symbol are shown
/// by code.
///
/// # Examples
///
/// ```
/// use kitbag_util::{format_currency, CurrencyOptions};
///
/// assert_eq!(format_currency(1234.56, &CurrencyOptions::default()).unwrap(), "$1,234.56");
/// assert_eq!(
///     format_currency(1234.56, &CurrencyOptions::new("JPY", "ja-JP")).unwrap(),
///     "￥1,235"
/// );
/// ```
pub fn format_currency(amount: f64, options: &CurrencyOptions) -> Result<String, UtilError> {
    let code = currency_code(&options.currency)?;
    let locale = resolve_locale(&options.locale);
    let symbol = locale
        .symbols
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code.as_str(), |(_, s)| *s);

    let digits = if ZERO_DECIMAL.contains(&code.as_str()) { 0 } else { 2 };
    let number = if amount.is_nan() {
        "NaN".to_string()
    } else if amount.is_infinite() {
        "∞".to_string()
    } else {
        let (int_part, frac_part) = round_half_up(amount.abs(), digits);
        let mut out = group_digits(&int_part, locale.group);
        if !frac_part.is_empty() {
            out.push_str(locale.decimal);
            out.push_str(&frac_part);
        }
        out
    };
    let sign = if !amount.is_nan() && amount.is_sign_negative() { "-" } else { "" };

    let formatted = if locale.symbol_after {
        format!("{sign}{number}{NBSP}{symbol}")
    } else if symbol.ends_with(|c: char| c.is_ascii_alphabetic()) {
        format!("{sign}{symbol}{NBSP}{number}")
    } else {
        format!("{sign}{symbol}{number}")
    };
    Ok(formatted)
}

fn currency_code(raw: &str) -> Result<String, UtilError> {
    if raw.len() == 3 && raw.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(raw.to_ascii_uppercase())
    } else {
        Err(UtilError::InvalidCurrency(raw.to_string()))
    }
}

fn resolve_locale(tag: &str) -> &'static LocaleFormat {
    let tag = tag.replace('_', "-");
    if let Some(locale) = LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(&tag)) {
        return locale;
    }
    let language = tag.split('-').next().unwrap_or_default();
    if let Some(locale) = LOCALES
        .iter()
        .find(|l| l.tag.split('-').next().is_some_and(|lang| lang.eq_ignore_ascii_case(language)))
    {
        return locale;
    }
    debug!(locale = %tag, "unknown locale, falling back to en-US");
    &LOCALES[0]
}

/// Rounds a non-negative finite value to `digits` fractional digits, half
/// away from zero, working on its exact decimal expansion. Returns the
/// integer and fractional digit strings.
fn round_half_up(value: f64, digits: usize) -> (String, String) {
    let exact = format!("{:.*}", EXACT_PRECISION, value);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let int_digits = kept[..split].iter().map(|&b| char::from(b)).collect();
    let frac_digits = kept[split..].iter().map(|&b| char::from(b)).collect();
    (int_digits, frac_digits)
}

fn group_digits(int_part: &str, separator: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}
