//! Derived Gamma field and best-effort numeric coercion.
//!
//! Gamma is `(Ash × Hue) / Magnesium`, computed once per record. Inputs
//! are coerced leniently: a field that does not read as a number counts
//! as 0. A division that yields NaN or infinity falls back to 0 as well,
//! so [`gamma`] never fails. Callers that need to tell a genuine zero
//! from a fallback use [`Gamma::compute`] instead.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::record::WineRecord;

/// Reads `value` as a number, if it holds one.
///
/// JSON numbers are returned as-is. Text is read like a lenient float
/// parser: leading whitespace is skipped and the longest numeric prefix
/// is used, so `"3.2 mg"` reads as `3.2`. Everything else is `None`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use vinostat::gamma::parse_number;
/// assert_eq!(parse_number(&json!(2.5)), Some(2.5));
/// assert_eq!(parse_number(&json!(" 1e2x")), Some(100.0));
/// assert_eq!(parse_number(&json!("n/a")), None);
/// ```
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_float(s),
        _ => None,
    }
}

/// Best-effort coercion: [`parse_number`], or 0 when that yields nothing.
pub fn coerce_number(value: &Value) -> f64 {
    parse_number(value).unwrap_or(0.0)
}

/// Parses the longest prefix of `s` (after leading whitespace) that forms
/// a decimal float: `[+-]digits[.digits][(e|E)[+-]digits]`.
fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    // exponent only counts when at least one digit follows
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Outcome of a Gamma computation that keeps fallbacks visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gamma {
    /// The ratio was finite. May be exactly zero.
    Computed(f64),
    /// The ratio was NaN or infinite (e.g. zero magnesium).
    Fallback,
}

impl Gamma {
    /// Computes `(ash * hue) / magnesium`.
    ///
    /// # Examples
    /// ```
    /// use vinostat::gamma::Gamma;
    /// assert_eq!(Gamma::compute(2.0, 3.0, 4.0), Gamma::Computed(1.5));
    /// assert_eq!(Gamma::compute(2.0, 1.0, 0.0), Gamma::Fallback);
    /// assert_eq!(Gamma::compute(0.0, 1.0, 5.0), Gamma::Computed(0.0));
    /// ```
    pub fn compute(ash: f64, hue: f64, magnesium: f64) -> Self {
        let ratio = (ash * hue) / magnesium;
        if ratio.is_finite() {
            Gamma::Computed(ratio)
        } else {
            Gamma::Fallback
        }
    }

    /// The lenient value: fallbacks and zeros both read as `0.0`.
    pub fn value(self) -> f64 {
        match self {
            Gamma::Computed(v) if v != 0.0 => v,
            _ => 0.0,
        }
    }

    /// Whether the ratio was not finite.
    pub fn is_fallback(self) -> bool {
        matches!(self, Gamma::Fallback)
    }
}

/// Computes Gamma with the lenient fallback policy.
///
/// # Examples
/// ```
/// use vinostat::gamma::gamma;
/// assert_eq!(gamma(2.0, 3.0, 4.0), 1.5);
/// assert_eq!(gamma(2.0, 1.0, 0.0), 0.0);
/// ```
pub fn gamma(ash: f64, hue: f64, magnesium: f64) -> f64 {
    Gamma::compute(ash, hue, magnesium).value()
}

/// A source record with its computed Gamma attached.
///
/// Serializes as the original fields plus a `Gamma` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRecord {
    #[serde(flatten)]
    record: WineRecord,
    #[serde(rename = "Gamma")]
    gamma: f64,
}

impl DerivedRecord {
    /// Computes Gamma from the record's `Ash`, `Hue` and `Magnesium`.
    pub fn from_record(record: WineRecord) -> Self {
        let outcome = Gamma::compute(record.ash(), record.hue(), record.magnesium());
        if outcome.is_fallback() {
            warn!(
                ash = record.ash(),
                hue = record.hue(),
                magnesium = record.magnesium(),
                "gamma is not finite, using 0"
            );
        }
        Self {
            record,
            gamma: outcome.value(),
        }
    }

    /// The source record, unchanged.
    pub fn record(&self) -> &WineRecord {
        &self.record
    }

    /// The lenient Gamma value.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl AsRef<WineRecord> for DerivedRecord {
    fn as_ref(&self) -> &WineRecord {
        &self.record
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn gamma_is_always_finite(
            ash in prop::num::f64::ANY,
            hue in prop::num::f64::ANY,
            magnesium in prop::num::f64::ANY,
        ) {
            prop_assert!(gamma(ash, hue, magnesium).is_finite());
        }

        #[test]
        fn gamma_matches_ratio_for_positive_inputs(
            ash in 0.1_f64..10.0,
            hue in 0.1_f64..10.0,
            magnesium in 1.0_f64..200.0,
        ) {
            prop_assert_eq!(gamma(ash, hue, magnesium), (ash * hue) / magnesium);
        }

        #[test]
        fn formatted_float_reads_back(x in -1e6_f64..1e6) {
            let text = format!("{x}");
            prop_assert_eq!(parse_number(&Value::String(text)), Some(x));
        }
    }
}
