use super::IndicatorValue;
use super::indicator_base::scalar;
use super::indicator_value::shape_of;
use crate::error::ConfigProblem;
use core::fmt;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

const INCLUSIVE_FLOOR: &str = "inclusive_floor";
const INCLUSIVE_CEILING: &str = "inclusive_ceiling";
const MEAN: &str = "mean";
const STD: &str = "std";
const PRECISION: &str = "precision";
const UPPER_QUARTILE: &str = "upper_quartile";
const LOWER_QUARTILE: &str = "lower_quartile";
const MEDIAN: &str = "median";

/// Bounds and distribution statistics of a numeric indicator.
///
/// The floor, ceiling, mean and std are parsed to `f64` when the range is built, whether they
/// were configured as numbers or as numeric strings. The remaining fields are carried as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberRange {
    pub inclusive_floor: f64,
    pub inclusive_ceiling: f64,
    pub mean: f64,
    pub std: f64,
    pub precision: Option<String>,
    pub upper_quartile: Option<IndicatorValue>,
    pub lower_quartile: Option<IndicatorValue>,
    pub median: Option<IndicatorValue>,
    pub extra: BTreeMap<String, IndicatorValue>,
}

impl NumberRange {
    /// Builds a range with no optional fields.
    ///
    /// # Errors
    ///
    /// Fails when a statistic is not finite, `std` is negative, or the floor exceeds the ceiling.
    pub fn new(inclusive_floor: f64, inclusive_ceiling: f64, mean: f64, std: f64) -> Result<Self, ConfigProblem> {
        let range = Self {
            inclusive_floor,
            inclusive_ceiling,
            mean,
            std,
            precision: None,
            upper_quartile: None,
            lower_quartile: None,
            median: None,
            extra: BTreeMap::new(),
        };
        range.validate()?;
        Ok(range)
    }

    pub(crate) fn from_config(record: &Mapping) -> Result<Self, ConfigProblem> {
        let mut range = Self {
            inclusive_floor: required_number(record, INCLUSIVE_FLOOR)?,
            inclusive_ceiling: required_number(record, INCLUSIVE_CEILING)?,
            mean: required_number(record, MEAN)?,
            std: required_number(record, STD)?,
            precision: None,
            upper_quartile: None,
            lower_quartile: None,
            median: None,
            extra: BTreeMap::new(),
        };

        for (key, value) in record {
            let Value::String(key) = key else {
                return Err(ConfigProblem::WrongType {
                    field: "range key".to_string(),
                    expected: "a string",
                    found: shape_of(key),
                });
            };

            match key.as_str() {
                INCLUSIVE_FLOOR | INCLUSIVE_CEILING | MEAN | STD => {}
                PRECISION => {
                    range.precision = Some(
                        value
                            .as_str()
                            .ok_or_else(|| ConfigProblem::WrongType {
                                field: format!("range.{PRECISION}"),
                                expected: "a format template string",
                                found: shape_of(value),
                            })?
                            .to_string(),
                    );
                }
                UPPER_QUARTILE => range.upper_quartile = Some(scalar(value, || format!("range.{UPPER_QUARTILE}"))?),
                LOWER_QUARTILE => range.lower_quartile = Some(scalar(value, || format!("range.{LOWER_QUARTILE}"))?),
                MEDIAN => range.median = Some(scalar(value, || format!("range.{MEDIAN}"))?),
                other => {
                    let _ = range.extra.insert(other.to_string(), scalar(value, || format!("range.{other}"))?);
                }
            }
        }

        range.validate()?;
        Ok(range)
    }

    fn validate(&self) -> Result<(), ConfigProblem> {
        for (field, v) in [
            (INCLUSIVE_FLOOR, self.inclusive_floor),
            (INCLUSIVE_CEILING, self.inclusive_ceiling),
            (MEAN, self.mean),
            (STD, self.std),
        ] {
            if !v.is_finite() {
                return Err(ConfigProblem::NotFinite { field });
            }
        }

        if self.inclusive_floor > self.inclusive_ceiling {
            return Err(ConfigProblem::InvertedBounds {
                floor: self.inclusive_floor,
                ceiling: self.inclusive_ceiling,
            });
        }

        if self.std < 0.0 {
            return Err(ConfigProblem::NegativeStd(self.std));
        }

        Ok(())
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.inclusive_floor <= value && value <= self.inclusive_ceiling
    }

    /// The `mean ± std` interval.
    #[must_use]
    pub fn normal_band(&self) -> (f64, f64) {
        (self.mean - self.std, self.mean + self.std)
    }
}

fn required_number(record: &Mapping, field: &'static str) -> Result<f64, ConfigProblem> {
    let value = record.get(field).ok_or(ConfigProblem::MissingField(field))?;
    match value {
        Value::Number(n) => n.as_f64().ok_or(ConfigProblem::NotFinite { field }),
        Value::String(text) => text.trim().parse::<f64>().ok().ok_or_else(|| ConfigProblem::NotNumeric {
            field,
            text: text.clone(),
        }),
        Value::Null => Err(ConfigProblem::MissingField(field)),
        other => Err(ConfigProblem::WrongType {
            field: format!("range.{field}"),
            expected: "a number",
            found: shape_of(other),
        }),
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{INCLUSIVE_FLOOR}: {}, {INCLUSIVE_CEILING}: {}, {MEAN}: {}, {STD}: {}",
            self.inclusive_floor, self.inclusive_ceiling, self.mean, self.std
        )?;
        if let Some(precision) = &self.precision {
            write!(f, ", {PRECISION}: '{precision}'")?;
        }
        for (key, value) in [
            (UPPER_QUARTILE, &self.upper_quartile),
            (LOWER_QUARTILE, &self.lower_quartile),
            (MEDIAN, &self.median),
        ] {
            if let Some(value) = value {
                write!(f, ", {key}: {value}")?;
            }
        }
        for (key, value) in &self.extra {
            write!(f, ", {key}: {value}")?;
        }
        write!(f, "}}")
    }
}
