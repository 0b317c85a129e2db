//! Rule evaluation

use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;

use super::ParsedRule;
use super::RuleName;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("valid pattern"));
static DIGITS_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9 ]*$").expect("valid pattern"));
static ALPHABETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z ]*$").expect("valid pattern"));
static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9 ]*$").expect("valid pattern"));

const URL_SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

const MAX_CARD_DIGITS: usize = 16;
const MAX_PHONE_DIGITS: usize = 10;
const INTERNATIONAL_PHONE_LEN: usize = 13;

impl ParsedRule {
    /// Checks `value` against this rule.
    ///
    /// On failure returns the message shown to the user, which quotes
    /// `field_name`.
    pub fn evaluate(&self, field_name: &str, value: &str) -> Result<(), String> {
        let passed = match self.name {
            RuleName::Required => !value.is_empty(),
            RuleName::MaxLen => within_length(self, value, |len, max| len <= max),
            RuleName::MinLen => within_length(self, value, |len, min| len >= min),
            RuleName::Digits => DIGITS.is_match(value),
            RuleName::DigitsSpace => DIGITS_SPACE.is_match(value),
            RuleName::OnlyAlphabets => ALPHABETS.is_match(value),
            RuleName::Alphanumeric => ALPHANUMERIC.is_match(value),
            RuleName::Email => value.contains('@') && value.contains('.'),
            RuleName::Url => {
                URL_SCHEMES.iter().any(|scheme| value.starts_with(scheme)) && value.contains('.')
            }
            RuleName::Phone => is_phone_number(value),
            RuleName::CreditCard => is_card_number(value),
        };

        if passed {
            Ok(())
        } else {
            Err(failure_message(self.name, field_name))
        }
    }
}

fn failure_message(rule: RuleName, field_name: &str) -> String {
    let reason = match rule {
        RuleName::Required => "is required.",
        RuleName::MaxLen => "exceeds the provided length constraint.",
        RuleName::MinLen => "is less than the provided length constraint.",
        RuleName::Digits
        | RuleName::DigitsSpace
        | RuleName::OnlyAlphabets
        | RuleName::Alphanumeric => "contains invalid characters.",
        RuleName::Email => "is not a valid email address.",
        RuleName::Url => "is not a valid URL.",
        RuleName::Phone => "is not a valid phone number.",
        RuleName::CreditCard => "is not a valid credit card number.",
    };
    format!("\"{}\" {}", field_name, reason)
}

/// Applies a length comparison. A rule whose bound cannot be read passes.
fn within_length(rule: &ParsedRule, value: &str, cmp: impl Fn(i64, i64) -> bool) -> bool {
    let Some(bound) = parse_bound(rule.argument.as_deref()) else {
        log::warn!(
            "Rule {} has no numeric argument ({:?}), skipping",
            rule.name,
            rule.argument
        );
        return true;
    };
    let len = i64::try_from(value.chars().count()).unwrap_or(i64::MAX);
    cmp(len, bound)
}

/// Reads a leading integer the lenient way: optional sign, then the run of
/// digits that follows. `"12px"` reads as 12. Runs too long for an `i64`
/// saturate.
fn parse_bound(argument: Option<&str>) -> Option<i64> {
    let arg = argument?.trim_start();
    let (negative, rest) = match arg.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, arg.strip_prefix('+').unwrap_or(arg)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let n: i64 = match rest[..end].parse() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(_) => return None,
    };
    Some(if negative { -n } else { n })
}

fn is_phone_number(value: &str) -> bool {
    match value.strip_prefix('+') {
        Some(rest) if value.len() == INTERNATIONAL_PHONE_LEN => DIGITS.is_match(rest),
        _ => DIGITS.is_match(value) && value.len() <= MAX_PHONE_DIGITS,
    }
}

fn is_card_number(value: &str) -> bool {
    DIGITS.is_match(value) && value.len() <= MAX_CARD_DIGITS && luhn_valid(value)
}

/// Luhn (mod 10) checksum.
///
/// The last digit is the check digit. Walking the rest from right to left,
/// every other digit starting with the one next to the check digit is
/// doubled, and doubled values of 10 or more are replaced by their digit
/// sum. The number is valid when the grand total is a multiple of 10.
/// Empty or non-digit input is never valid.
pub fn luhn_valid(number: &str) -> bool {
    let digits: Option<Vec<u32>> = number.chars().map(|c| c.to_digit(10)).collect();
    let Some(digits) = digits else {
        return false;
    };
    let Some((check, rest)) = digits.split_last() else {
        return false;
    };

    let sum: u32 = rest
        .iter()
        .rev()
        .enumerate()
        .map(|(step, &digit)| {
            if step % 2 == 0 {
                let doubled = digit * 2;
                if doubled >= 10 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();

    (sum + check) % 10 == 0
}
