//! Text input handling for recipe fields and session commands
//!
//! Numeric field text is coerced, never rejected: an empty field reads as
//! zero and unparseable text reads as NaN, which the calculator then
//! propagates. Only structural problems (unknown field names, bad flag
//! values, malformed lines) are reported as errors.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{Edit, Field};

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid decimal pattern")
});

static RADIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0(?:([xX])([0-9a-fA-F]+)|([oO])([0-7]+)|([bB])([01]+))$")
        .expect("valid radix pattern")
});

// <field> <value> or <field>=<value>, value optional
static ASSIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*)(?:\s*=\s*|\s+|$)(.*)$")
        .expect("valid assignment pattern")
});

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("unknown field '{0}' (try: flour, protein, starter, temp, hydration, fridge)")]
    UnknownField(String),

    #[error("invalid value '{value}' for {field}: expected true/false, yes/no, on/off or 1/0")]
    InvalidFlag { field: Field, value: String },

    #[error("could not understand '{0}'")]
    Malformed(String),
}

/// A parsed interactive session line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Edit(Edit),
    ToggleFridge,
    Show,
    Reset,
    Help,
    Quit,
    Empty,
}

/// Convert field text to a number the way a browser number field does
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(cap) = RADIX_RE.captures(trimmed) {
        let (digits, radix) = if let Some(d) = cap.get(2) {
            (d.as_str(), 16)
        } else if let Some(d) = cap.get(4) {
            (d.as_str(), 8)
        } else if let Some(d) = cap.get(6) {
            (d.as_str(), 2)
        } else {
            return f64::NAN;
        };
        return radix_to_f64(digits, radix);
    }

    if DECIMAL_RE.is_match(trimmed) {
        return trimmed.parse::<f64>().unwrap_or(f64::NAN);
    }

    f64::NAN
}

/// Convert radix digits with a single rounding step where the value fits in
/// `u128`; longer literals fall back to digit-by-digit accumulation.
fn radix_to_f64(digits: &str, radix: u32) -> f64 {
    match u128::from_str_radix(digits, radix) {
        Ok(value) => value as f64,
        Err(_) => digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d)),
    }
}

/// Parse a checkbox-style flag value
pub fn parse_bool(field: Field, text: &str) -> Result<bool, InputError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(InputError::InvalidFlag {
            field,
            value: text.trim().to_string(),
        }),
    }
}

/// Build an edit for `field` from raw value text
pub fn parse_edit(field: Field, value: &str) -> Result<Edit, InputError> {
    match Edit::numeric(field, coerce_number(value)) {
        Some(edit) => Ok(edit),
        None => parse_bool(field, value).map(Edit::FridgeProof),
    }
}

/// Parse one line of an interactive session
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    match line.to_ascii_lowercase().as_str() {
        "show" => return Ok(Command::Show),
        "reset" => return Ok(Command::Reset),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let cap = ASSIGN_RE
        .captures(line)
        .ok_or_else(|| InputError::Malformed(line.to_string()))?;
    let name = &cap[1];
    let value = cap[2].trim();

    let field = Field::from_name(name).ok_or_else(|| InputError::UnknownField(name.to_string()))?;

    if field.is_flag() && value.is_empty() && !line.contains('=') {
        return Ok(Command::ToggleFridge);
    }

    parse_edit(field, value).map(Command::Edit)
}

/// Help text for interactive sessions
pub fn help_text() -> String {
    let mut output = String::from("Commands:\n");
    for field in Field::ALL {
        if field.is_flag() {
            output.push_str(&format!(
                "  {:<10} <yes|no>   set {} (bare '{}' toggles)\n",
                field.short_name(),
                field.name(),
                field.short_name()
            ));
        } else {
            output.push_str(&format!(
                "  {:<10} <number>   set {}\n",
                field.short_name(),
                field.name()
            ));
        }
    }
    output.push_str("  show                  print inputs and recipe\n");
    output.push_str("  reset                 restore default inputs\n");
    output.push_str("  help                  show this help\n");
    output.push_str("  quit                  leave the session\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_empty_is_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
    }

    #[test]
    fn coerce_decimals() {
        assert_eq!(coerce_number("1000"), 1000.0);
        assert_eq!(coerce_number(" 75.5 "), 75.5);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("5."), 5.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number("+2E-1"), 0.2);
    }

    #[test]
    fn coerce_special_forms() {
        assert_eq!(coerce_number("0x10"), 16.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn coerce_large_radix_literals_round_once() {
        // 2^57 + 31 rounds up to the next representable value, 2^57 + 32
        assert_eq!(coerce_number("0x20000000000001F"), 144_115_188_075_855_904.0);
        assert_eq!(coerce_number("0x20000000000001F"), 2f64.powi(57) + 32.0);
        assert_eq!(
            coerce_number("0b1000000000000000000000000000000000000000000000000000000011111"),
            2f64.powi(60)
        );
        // wider than u128
        let wide = format!("0x1{}", "0".repeat(32));
        assert_eq!(coerce_number(&wide), 2f64.powi(128));
    }

    #[test]
    fn coerce_garbage_is_nan() {
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("12abc").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("nan").is_nan());
        assert!(coerce_number("-0x10").is_nan());
        assert!(coerce_number("1,000").is_nan());
    }

    #[test]
    fn bool_values() {
        assert_eq!(parse_bool(Field::FridgeProof, "Yes"), Ok(true));
        assert_eq!(parse_bool(Field::FridgeProof, "off"), Ok(false));
        assert_eq!(parse_bool(Field::FridgeProof, "1"), Ok(true));
        assert_eq!(
            parse_bool(Field::FridgeProof, "maybe"),
            Err(InputError::InvalidFlag {
                field: Field::FridgeProof,
                value: "maybe".to_string()
            })
        );
    }

    #[test]
    fn parse_assignments() {
        assert_eq!(
            parse_command("hydration 80"),
            Ok(Command::Edit(Edit::Hydration(80.0)))
        );
        assert_eq!(
            parse_command("room-temp=18.5"),
            Ok(Command::Edit(Edit::RoomTemp(18.5)))
        );
        assert_eq!(
            parse_command("flourAmount = 500"),
            Ok(Command::Edit(Edit::FlourAmount(500.0)))
        );
        assert_eq!(
            parse_command("fridge yes"),
            Ok(Command::Edit(Edit::FridgeProof(true)))
        );
    }

    #[test]
    fn cleared_numeric_field_reads_as_zero() {
        assert_eq!(parse_command("temp"), Ok(Command::Edit(Edit::RoomTemp(0.0))));
        assert_eq!(parse_command("temp="), Ok(Command::Edit(Edit::RoomTemp(0.0))));
    }

    #[test]
    fn non_numeric_value_reads_as_nan() {
        match parse_command("starter lots") {
            Ok(Command::Edit(Edit::StarterAmount(v))) => assert!(v.is_nan()),
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn bare_fridge_toggles() {
        assert_eq!(parse_command("fridge"), Ok(Command::ToggleFridge));
        assert!(matches!(
            parse_command("fridge="),
            Err(InputError::InvalidFlag { .. })
        ));
    }

    #[test]
    fn keywords_and_blank_lines() {
        assert_eq!(parse_command(""), Ok(Command::Empty));
        assert_eq!(parse_command("SHOW"), Ok(Command::Show));
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
    }

    #[test]
    fn errors_are_reported() {
        assert_eq!(
            parse_command("yeast 5"),
            Err(InputError::UnknownField("yeast".to_string()))
        );
        assert_eq!(
            parse_command("= 5"),
            Err(InputError::Malformed("= 5".to_string()))
        );
    }

    #[test]
    fn help_lists_every_field() {
        let help = help_text();
        for field in Field::ALL {
            assert!(help.contains(field.name()));
        }
    }
}
