//! Chart types rendered with pgf-pie and pgfplots.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single labeled data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphValue {
    /// Label shown on the slice or axis
    pub label: String,

    /// Numeric value (expected to be non-negative)
    pub value: i64,

    /// Color name understood by xcolor
    #[serde(default)]
    pub color: Option<String>,
}

impl GraphValue {
    /// Create an uncolored data point.
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    /// Set the color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A pie chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChart {
    /// Slices in drawing order
    pub values: Vec<GraphValue>,
}

impl PieChart {
    /// Create a pie chart from data points.
    pub fn new(values: Vec<GraphValue>) -> Self {
        Self { values }
    }

    /// Sum of all slice values.
    ///
    /// Fails with [`Error::Arithmetic`] when the sum overflows `i64`.
    pub fn total(&self) -> Result<i64> {
        self.values
            .iter()
            .try_fold(0i64, |sum, v| sum.checked_add(v.value))
            .ok_or_else(|| Error::Arithmetic("pie chart values overflow".to_string()))
    }

    /// Integer percentage of each slice, truncated toward zero.
    ///
    /// Percentages are not adjusted to sum to 100: three equal slices
    /// yield `33, 33, 33`.
    pub fn percentages(&self) -> Result<Vec<i64>> {
        let total = self.total()?;
        if total == 0 {
            return Err(Error::Arithmetic(
                "pie chart values sum to zero".to_string(),
            ));
        }
        self.values
            .iter()
            .map(|v| {
                let share = i128::from(v.value) * 100 / i128::from(total);
                i64::try_from(share).map_err(|_| {
                    Error::Arithmetic(format!("pie chart slice '{}' is out of range", v.label))
                })
            })
            .collect()
    }

    /// Declared slice colors in encounter order, skipping uncolored slices.
    pub fn colors(&self) -> Vec<&str> {
        self.values
            .iter()
            .filter_map(|v| v.color.as_deref())
            .collect()
    }
}

/// A vertical bar chart over symbolic x coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarChart {
    /// Bars in axis order
    pub values: Vec<GraphValue>,

    /// Fill color for every bar
    pub bar_color: String,
}

impl BarChart {
    /// Create a bar chart.
    pub fn new(values: Vec<GraphValue>, bar_color: impl Into<String>) -> Self {
        Self {
            values,
            bar_color: bar_color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, i64)]) -> Vec<GraphValue> {
        pairs.iter().map(|(l, v)| GraphValue::new(*l, *v)).collect()
    }

    #[test]
    fn test_percentages_truncate() {
        let pie = PieChart::new(values(&[("A", 1), ("B", 1), ("C", 1)]));
        assert_eq!(pie.percentages().unwrap(), vec![33, 33, 33]);

        let pie = PieChart::new(values(&[("A", 2), ("B", 1)]));
        assert_eq!(pie.percentages().unwrap(), vec![66, 33]);
    }

    #[test]
    fn test_percentages_zero_total() {
        let pie = PieChart::new(values(&[("A", 0), ("B", 0)]));
        assert!(matches!(pie.percentages(), Err(Error::Arithmetic(_))));

        let empty = PieChart::default();
        assert!(empty.percentages().is_err());
    }

    #[test]
    fn test_percentages_large_values() {
        let pie = PieChart::new(values(&[("A", i64::MAX / 50), ("B", 1)]));
        assert_eq!(pie.percentages().unwrap(), vec![99, 0]);

        let pie = PieChart::new(values(&[("A", i64::MAX), ("B", 1)]));
        assert!(matches!(pie.total(), Err(Error::Arithmetic(_))));
        assert!(matches!(pie.percentages(), Err(Error::Arithmetic(_))));
    }

    #[test]
    fn test_colors_skip_uncolored() {
        let pie = PieChart::new(vec![
            GraphValue::new("A", 1).with_color("red"),
            GraphValue::new("B", 1),
            GraphValue::new("C", 1).with_color("blue"),
        ]);
        assert_eq!(pie.colors(), vec!["red", "blue"]);
    }
}
