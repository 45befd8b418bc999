//! Class-wise statistics tables.
//!
//! Each table holds one [`Summary`] per class. Rendered, it has a
//! `Measure` column followed by one `Class N` column per class, and
//! `Mean`, `Median`, `Mode` rows.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::{ReportConfig, DEFAULT_PRECISION};
use crate::dataset::{group_by_class, Dataset};
use crate::error::{DatasetError, StatsError};
use crate::record::ClassLabel;
use crate::stats::{summarize, Summary};

pub const FLAVANOIDS_TITLE: &str = "Class-Wise Flavanoids Statistics";
pub const GAMMA_TITLE: &str = "Class-Wise Gamma Statistics";

/// A titled table of one [`Summary`] per class, ordered by class label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassTable {
    title: String,
    rows: BTreeMap<ClassLabel, Summary>,
}

impl ClassTable {
    /// Summarizes `extract` over each group.
    ///
    /// # Errors
    /// [`StatsError::EmptySample`] if any group is empty.
    pub fn build<T, F>(
        title: impl Into<String>,
        groups: &BTreeMap<ClassLabel, Vec<T>>,
        extract: F,
    ) -> Result<Self, StatsError>
    where
        F: Fn(&T) -> f64,
    {
        let title = title.into();
        let mut rows = BTreeMap::new();
        for (&label, members) in groups {
            let sample: Vec<f64> = members.iter().map(&extract).collect();
            let summary = summarize(&sample)?;
            debug!(
                table = %title,
                class = %label,
                n = sample.len(),
                mean = summary.mean,
                median = summary.median,
                mode = summary.mode,
                "class summary"
            );
            rows.insert(label, summary);
        }
        Ok(Self { title, rows })
    }

    /// The heading printed above the table.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The summary for one class.
    pub fn get(&self, label: ClassLabel) -> Option<&Summary> {
        self.rows.get(&label)
    }

    /// Class labels in ascending order.
    pub fn classes(&self) -> impl Iterator<Item = ClassLabel> + '_ {
        self.rows.keys().copied()
    }

    /// Renders the table as aligned text with `precision` decimals.
    ///
    /// Values are formatted with [`to_fixed`].
    pub fn render(&self, precision: usize) -> String {
        let mut grid: Vec<Vec<String>> = Vec::with_capacity(4);
        let mut header = vec!["Measure".to_string()];
        header.extend(self.rows.keys().map(|label| format!("Class {label}")));
        grid.push(header);

        let measures: [(&str, fn(&Summary) -> f64); 3] = [
            ("Mean", |s: &Summary| s.mean),
            ("Median", |s: &Summary| s.median),
            ("Mode", |s: &Summary| s.mode),
        ];
        for (name, pick) in measures {
            let mut row = vec![name.to_string()];
            row.extend(self.rows.values().map(|s| to_fixed(pick(s), precision)));
            grid.push(row);
        }

        let columns = grid[0].len();
        let widths: Vec<usize> = (0..columns)
            .map(|c| grid.iter().map(|row| row[c].len()).max().unwrap_or(0))
            .collect();

        let mut out = String::new();
        out.push_str(&self.title);
        for row in &grid {
            out.push('\n');
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(c, (cell, &w))| {
                    if c == 0 {
                        format!("{cell:<w$}")
                    } else {
                        format!("{cell:>w$}")
                    }
                })
                .collect();
            out.push_str(cells.join(" | ").trim_end());
        }
        out
    }
}

impl fmt::Display for ClassTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_PRECISION))
    }
}

/// Formats `value` with exactly `precision` decimals.
///
/// Rounds to the nearest decimal; a value lying exactly halfway between
/// two candidates rounds away from zero (`0.5625` → `"0.563"`, `2.5` →
/// `"3"` at zero decimals). Negative zero prints without a sign.
///
/// # Examples
/// ```
/// use vinostat::report::to_fixed;
/// assert_eq!(to_fixed(0.5625, 3), "0.563");
/// assert_eq!(to_fixed(1.005, 2), "1.00"); // 1.005 is stored just below the tie
/// ```
pub fn to_fixed(value: f64, precision: usize) -> String {
    // every finite f64 has fewer than 1100 fractional decimal digits
    const EXACT_DIGITS: usize = 1100;

    let value = if value == 0.0 { 0.0 } else { value };
    if !value.is_finite() || precision >= EXACT_DIGITS {
        return format!("{value:.precision$}");
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some((int_part, frac)) = exact.split_once('.') else {
        return format!("{value:.precision$}");
    };
    let tail = &frac[precision..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{value:.precision$}");
    }

    // round the kept digits up by one unit in the last place
    let mut digits: Vec<u8> = int_part.bytes().chain(frac[..precision].bytes()).collect();
    let mut carry = true;
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let split = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| char::from(d)));
    if precision > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&d| char::from(d)));
    }
    out
}

/// Flavanoids summarized per class.
///
/// # Errors
/// [`DatasetError::InvalidClass`] if a record has no whole-number class.
pub fn flavanoid_table(dataset: &Dataset, config: &ReportConfig) -> Result<ClassTable, DatasetError> {
    let groups = dataset.group_by_class(&config.class_field)?;
    Ok(ClassTable::build(FLAVANOIDS_TITLE, &groups, |r| r.flavanoids())?)
}

/// Gamma summarized per class.
///
/// # Errors
/// [`DatasetError::InvalidClass`] if a record has no whole-number class.
pub fn gamma_table(dataset: &Dataset, config: &ReportConfig) -> Result<ClassTable, DatasetError> {
    let derived = dataset.with_gamma();
    let groups = group_by_class(&derived, &config.class_field)?;
    Ok(ClassTable::build(GAMMA_TITLE, &groups, |d| d.gamma())?)
}

/// Both tables for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub flavanoids: ClassTable,
    pub gamma: ClassTable,
}

impl Report {
    /// Builds the Flavanoids and Gamma tables.
    ///
    /// # Errors
    /// [`DatasetError::InvalidClass`] if a record has no whole-number class.
    pub fn build(dataset: &Dataset, config: &ReportConfig) -> Result<Self, DatasetError> {
        Ok(Self {
            flavanoids: flavanoid_table(dataset, config)?,
            gamma: gamma_table(dataset, config)?,
        })
    }

    /// Renders both tables, separated by a blank line.
    pub fn render(&self, precision: usize) -> String {
        format!(
            "{}\n\n{}",
            self.flavanoids.render(precision),
            self.gamma.render(precision)
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_PRECISION))
    }
}
