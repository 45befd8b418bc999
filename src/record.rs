//! One row of the wine dataset.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::gamma::{coerce_number, parse_number};

pub const ALCOHOL: &str = "Alcohol";
pub const MALIC_ACID: &str = "Malic Acid";
pub const ASH: &str = "Ash";
pub const ALCALINITY_OF_ASH: &str = "Alcalinity of ash";
pub const MAGNESIUM: &str = "Magnesium";
pub const TOTAL_PHENOLS: &str = "Total phenols";
pub const FLAVANOIDS: &str = "Flavanoids";
pub const NONFLAVANOID_PHENOLS: &str = "Nonflavanoid phenols";
pub const PROANTHOCYANINS: &str = "Proanthocyanins";
pub const COLOR_INTENSITY: &str = "Color intensity";
pub const HUE: &str = "Hue";
pub const OD280_OD315: &str = "OD280/OD315 of diluted wines";
pub const UNKNOWN: &str = "Unknown";

/// Integer class label used to partition records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ClassLabel(pub i64);

impl ClassLabel {
    /// Reads a label from a field value. The value must read as a finite
    /// whole number within `i64` range.
    pub fn from_value(value: &Value) -> Option<Self> {
        let n = parse_number(value)?;
        if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
            Some(ClassLabel(n as i64))
        } else {
            None
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dataset row: every original field, in source order, as loaded.
///
/// Values may be JSON numbers or text; the typed accessors coerce them
/// with [`coerce_number`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WineRecord {
    fields: Map<String, Value>,
}

impl WineRecord {
    /// Wraps an already-parsed field map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The raw value of the named field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All fields, in source order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The named field coerced to a number; missing or unreadable is 0.
    pub fn numeric(&self, name: &str) -> f64 {
        self.field(name).map_or(0.0, coerce_number)
    }

    pub fn ash(&self) -> f64 {
        self.numeric(ASH)
    }

    pub fn hue(&self) -> f64 {
        self.numeric(HUE)
    }

    pub fn magnesium(&self) -> f64 {
        self.numeric(MAGNESIUM)
    }

    pub fn flavanoids(&self) -> f64 {
        self.numeric(FLAVANOIDS)
    }

    /// The class label stored under `class_field`, if it is a whole number.
    pub fn class_label(&self, class_field: &str) -> Option<ClassLabel> {
        self.field(class_field).and_then(ClassLabel::from_value)
    }
}

impl AsRef<WineRecord> for WineRecord {
    fn as_ref(&self) -> &WineRecord {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> WineRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_accessors_coerce() {
        let r = record(json!({
            "Ash": "2.43", "Hue": 1.04, "Magnesium": 127, "Flavanoids": "3.06"
        }));
        assert_eq!(r.ash(), 2.43);
        assert_eq!(r.hue(), 1.04);
        assert_eq!(r.magnesium(), 127.0);
        assert_eq!(r.flavanoids(), 3.06);
    }

    #[test]
    fn test_missing_field_is_zero() {
        let r = record(json!({ "Alcohol": 1 }));
        assert_eq!(r.hue(), 0.0);
        assert!(r.field(HUE).is_none());
    }

    #[test]
    fn test_class_label() {
        assert_eq!(record(json!({ "Alcohol": 2 })).class_label(ALCOHOL), Some(ClassLabel(2)));
        assert_eq!(record(json!({ "Alcohol": "3" })).class_label(ALCOHOL), Some(ClassLabel(3)));
        assert_eq!(record(json!({ "Alcohol": 1.0 })).class_label(ALCOHOL), Some(ClassLabel(1)));
    }

    #[test]
    fn test_class_label_rejects_non_integer() {
        assert_eq!(record(json!({ "Alcohol": 14.23 })).class_label(ALCOHOL), None);
        assert_eq!(record(json!({ "Alcohol": "red" })).class_label(ALCOHOL), None);
        assert_eq!(record(json!({})).class_label(ALCOHOL), None);
    }

    #[test]
    fn test_field_order_preserved() {
        let r = record(json!({ "Alcohol": 1, "Malic Acid": 1.71, "Ash": 2.43, "Unknown": 1065 }));
        let keys: Vec<&str> = r.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, [ALCOHOL, MALIC_ACID, ASH, UNKNOWN]);
    }

    #[test]
    fn test_class_label_out_of_range() {
        // 2^63 does not fit in i64
        assert_eq!(ClassLabel::from_value(&json!(9.223372036854775807e18)), None);
        assert_eq!(ClassLabel::from_value(&json!(4_611_686_018_427_387_904_i64)), Some(ClassLabel(1 << 62)));
    }

    #[test]
    fn test_class_label_display() {
        assert_eq!(ClassLabel(3).to_string(), "3");
    }
}
