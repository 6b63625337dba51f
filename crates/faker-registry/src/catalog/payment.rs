//! Payment, banking, and currency generators.

use fake::faker::creditcard::raw::CreditCardNumber;
use fake::faker::currency::raw::{CurrencyCode, CurrencyName, CurrencySymbol};
use fake::locales::EN;
use rand::Rng;
use serde_json::Value;

use super::{digits, fake_text, float_between, param, pick, pick_text, round_to};
use crate::descriptor::{FakerRng, OutputKind, ParamKind};
use crate::error::GenerateError;
use crate::ingest::RawEntry;
use crate::params::BoundParams;

pub(super) const ENTRIES: &[RawEntry] = &[
    RawEntry {
        native: "creditcardnumber",
        label: "Credit Card Number",
        category: "payment",
        description: "Payment card number with a valid check digit",
        example: "4716 5960 8217 3390",
        output: OutputKind::String,
        params: &[],
        generate: credit_card_number,
    },
    RawEntry {
        native: "creditcardcvv",
        label: "Credit Card CVV",
        category: "payment",
        description: "Three-digit card verification value",
        example: "513",
        output: OutputKind::String,
        params: &[],
        generate: credit_card_cvv,
    },
    RawEntry {
        native: "creditcardexp",
        label: "Credit Card Exp",
        category: "payment",
        description: "Card expiry date as MM/YY",
        example: "06/31",
        output: OutputKind::String,
        params: &[],
        generate: credit_card_exp,
    },
    RawEntry {
        native: "creditcardtype",
        label: "Credit Card Type",
        category: "payment",
        description: "Card network name",
        example: "Visa",
        output: OutputKind::String,
        params: &[],
        generate: credit_card_type,
    },
    RawEntry {
        native: "price",
        label: "Price",
        category: "payment",
        description: "Monetary amount with two decimals",
        example: "92.26",
        output: OutputKind::Float,
        params: &[
            param("min", ParamKind::Float, "0", "Minimum price"),
            param("max", ParamKind::Float, "1000", "Maximum price"),
        ],
        generate: price,
    },
    RawEntry {
        native: "currencycode",
        label: "Currency Code",
        category: "payment",
        description: "ISO 4217 currency code",
        example: "EUR",
        output: OutputKind::String,
        params: &[],
        generate: currency_code,
    },
    RawEntry {
        native: "currencyname",
        label: "Currency Name",
        category: "payment",
        description: "Currency name",
        example: "Euro",
        output: OutputKind::String,
        params: &[],
        generate: currency_name,
    },
    RawEntry {
        native: "currencysymbol",
        label: "Currency Symbol",
        category: "payment",
        description: "Currency symbol",
        example: "€",
        output: OutputKind::String,
        params: &[],
        generate: currency_symbol,
    },
    RawEntry {
        native: "bic",
        label: "BIC",
        category: "finance",
        description: "SWIFT bank identifier code",
        example: "DEUTDEFF500",
        output: OutputKind::String,
        params: &[],
        generate: bic,
    },
    RawEntry {
        native: "achrouting",
        label: "ACH Routing Number",
        category: "payment",
        description: "Nine-digit ABA routing number",
        example: "513715684",
        output: OutputKind::String,
        params: &[],
        generate: ach_routing,
    },
    RawEntry {
        native: "achaccount",
        label: "ACH Account Number",
        category: "payment",
        description: "Twelve-digit bank account number",
        example: "491527954328",
        output: OutputKind::String,
        params: &[],
        generate: ach_account,
    },
];

const CARD_TYPES: &[&str] = &[
    "American Express",
    "Diners Club",
    "Discover",
    "JCB",
    "Mastercard",
    "UnionPay",
    "Visa",
];

const BIC_COUNTRIES: &[&str] = &["CH", "DE", "ES", "FR", "GB", "IT", "JP", "NL", "SE", "US"];

const PRICE_DECIMALS: i32 = 2;
const CARD_EXPIRY_YEARS: std::ops::RangeInclusive<u32> = 26..=35;

fake_text!(credit_card_number, CreditCardNumber(EN));
fake_text!(currency_code, CurrencyCode(EN));
fake_text!(currency_name, CurrencyName(EN));
fake_text!(currency_symbol, CurrencySymbol(EN));

fn credit_card_cvv(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(Value::String(digits(rng, 3)))
}

fn credit_card_exp(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let month: u32 = rng.random_range(1..=12);
    let year: u32 = rng.random_range(CARD_EXPIRY_YEARS);
    Ok(Value::String(format!("{month:02}/{year:02}")))
}

fn credit_card_type(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_text(rng, CARD_TYPES))
}

fn price(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let params = BoundParams::required(params, "min")?;
    let value = float_between(rng, params.float("min")?, params.float("max")?)?;
    Ok(Value::from(round_to(value, PRICE_DECIMALS)))
}

fn upper_letters(rng: &mut FakerRng, length: usize) -> String {
    (0..length)
        .map(|_| char::from(b'A' + rng.random_range(0..26_u8)))
        .collect()
}

fn bic(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let bank = upper_letters(rng, 4);
    let country = pick(rng, BIC_COUNTRIES);
    let location = upper_letters(rng, 2);
    let branch = if rng.random_bool(0.5) {
        digits(rng, 3)
    } else {
        String::new()
    };
    Ok(Value::String(format!("{bank}{country}{location}{branch}")))
}

/// Builds a routing number whose ninth digit satisfies the ABA checksum.
fn ach_routing(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    const WEIGHTS: [u32; 8] = [3, 7, 1, 3, 7, 1, 3, 7];
    let body = digits(rng, 8);
    let sum: u32 = body
        .chars()
        .filter_map(|c| c.to_digit(10))
        .zip(WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum();
    let check = (10 - sum.rem_euclid(10)).rem_euclid(10);
    Ok(Value::String(format!("{body}{check}")))
}

fn ach_account(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(Value::String(digits(rng, 12)))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn routing_numbers_pass_the_checksum() {
        let mut rng = FakerRng::seed_from_u64(44);
        for _ in 0..20 {
            let value = ach_routing(&mut rng, None).expect("routing");
            let digits: Vec<u32> = value
                .as_str()
                .expect("string")
                .chars()
                .filter_map(|c| c.to_digit(10))
                .collect();
            assert_eq!(digits.len(), 9);
            let sum: u32 = digits
                .iter()
                .zip([3, 7, 1, 3, 7, 1, 3, 7, 1])
                .map(|(digit, weight)| digit * weight)
                .sum();
            assert_eq!(sum.rem_euclid(10), 0);
        }
    }

    #[test]
    fn expiry_has_month_and_year() {
        let mut rng = FakerRng::seed_from_u64(44);
        let value = credit_card_exp(&mut rng, None).expect("expiry");
        let text = value.as_str().expect("string");
        let (month, year) = text.split_once('/').expect("separator");
        let month: u32 = month.parse().expect("month");
        assert!((1..=12).contains(&month));
        assert_eq!(year.len(), 2);
    }

    #[test]
    fn bic_has_eight_or_eleven_characters() {
        let mut rng = FakerRng::seed_from_u64(44);
        for _ in 0..10 {
            let value = bic(&mut rng, None).expect("bic");
            let length = value.as_str().map_or(0, str::len);
            assert!(length == 8 || length == 11, "length {length}");
        }
    }

    #[test]
    fn price_has_at_most_two_decimals() {
        let mut rng = FakerRng::seed_from_u64(44);
        let mut params = BoundParams::new();
        params.insert("min", vec!["1".to_owned()]);
        params.insert("max", vec!["2".to_owned()]);
        let value = price(&mut rng, Some(&params))
            .expect("price")
            .as_f64()
            .expect("float");
        assert!((1.0..=2.0).contains(&value));
        assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-6);
    }
}
