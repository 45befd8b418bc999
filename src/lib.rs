//! # vinostat
//!
//! Class-wise descriptive statistics over a wine-chemistry dataset.
//!
//! Records are grouped by class label, then mean, median and mode are
//! computed per class over two quantities: the `Flavanoids` column and a
//! derived Gamma ratio, `(Ash × Hue) / Magnesium`.
//!
//! ## Modules
//!
//! - [`stats`] — Mean, median and mode over a sample
//! - [`gamma`] — Gamma derivation and lenient numeric coercion
//! - [`record`] — One dataset row and its class label
//! - [`dataset`] — JSON loading and grouping by class
//! - [`report`] — Class-wise tables and their text rendering
//! - [`config`] — TOML report configuration
//! - [`error`] — Error types
//!
//! ## Design Philosophy
//!
//! - **Pure core**: statistics and Gamma are side-effect free and never
//!   mutate their input
//! - **Explicit empty samples**: an empty sample is an error, not NaN
//! - **Lenient coercion**: unreadable numeric fields count as 0
//!
//! ## Example
//! ```
//! use vinostat::config::ReportConfig;
//! use vinostat::dataset::Dataset;
//! use vinostat::record::ClassLabel;
//! use vinostat::report::Report;
//!
//! let ds = Dataset::from_json_str(r#"[
//!     {"Alcohol": 1, "Ash": 2.0, "Hue": 3.0, "Magnesium": 4.0, "Flavanoids": 3.0},
//!     {"Alcohol": 1, "Ash": 2.0, "Hue": 1.0, "Magnesium": 0, "Flavanoids": 1.0}
//! ]"#).unwrap();
//! let report = Report::build(&ds, &ReportConfig::default()).unwrap();
//! assert_eq!(report.flavanoids.get(ClassLabel(1)).unwrap().mean, 2.0);
//! assert_eq!(report.gamma.get(ClassLabel(1)).unwrap().median, 0.75);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod gamma;
pub mod record;
pub mod report;
pub mod stats;
