//! Errors raised while turning a descriptor into an indicator

use core::fmt;
use thiserror::Error;

/// What was wrong with a rejected descriptor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigProblem {
    #[error("descriptor is empty")]
    EmptyDescriptor,

    #[error("descriptor must be a keyed record, found {found}")]
    NotARecord { found: &'static str },

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field 'name' must not be empty")]
    EmptyName,

    #[error("field '{field}' must be {expected}, found {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("range must be a sequence of codes or a keyed record, found {found}")]
    UnclassifiableRange { found: &'static str },

    #[error("map entry {index} must hold exactly one key, found {keys}")]
    MalformedMapEntry { index: usize, keys: usize },

    #[error("range field '{field}' is not numeric: '{text}'")]
    NotNumeric { field: &'static str, text: String },

    #[error("range field '{field}' must be a finite number")]
    NotFinite { field: &'static str },

    #[error("inclusive_floor {floor} exceeds inclusive_ceiling {ceiling}")]
    InvertedBounds { floor: f64, ceiling: f64 },

    #[error("std must not be negative, found {0}")]
    NegativeStd(f64),
}

/// The single error kind raised by [`IndicatorFactory::add`](crate::IndicatorFactory::add).
///
/// Carries the name of the offending indicator when the descriptor got far enough to have one.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfigError {
    indicator: Option<String>,
    problem: ConfigProblem,
}

impl IndicatorConfigError {
    #[must_use]
    pub const fn new(problem: ConfigProblem) -> Self {
        Self { indicator: None, problem }
    }

    #[must_use]
    pub fn for_indicator(name: impl Into<String>, problem: ConfigProblem) -> Self {
        Self {
            indicator: Some(name.into()),
            problem,
        }
    }

    #[must_use]
    pub fn indicator(&self) -> Option<&str> {
        self.indicator.as_deref()
    }

    #[must_use]
    pub const fn problem(&self) -> &ConfigProblem {
        &self.problem
    }
}

impl From<ConfigProblem> for IndicatorConfigError {
    fn from(problem: ConfigProblem) -> Self {
        Self::new(problem)
    }
}

impl fmt::Display for IndicatorConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.indicator {
            Some(name) => write!(f, "invalid configuration for indicator '{name}': {}", self.problem),
            None => write!(f, "invalid indicator configuration: {}", self.problem),
        }
    }
}

impl core::error::Error for IndicatorConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.problem)
    }
}
