use super::indicator_base::{IndicatorMeta, fmt_indicator, scalar};
use super::{IndicatorBase, IndicatorValue, MapEntry};
use crate::error::ConfigProblem;
use core::fmt;
use serde_yaml::Value;

/// Indicator whose readings are drawn from a fixed list of codes.
///
/// ```yaml
/// range:
///   - red
///   - green
///   - yellow
/// map:
///   - green: '1'
/// ```
#[derive(Debug, Clone)]
pub struct CodedIndicator {
    meta: IndicatorMeta,
    range: Vec<IndicatorValue>,
}

impl CodedIndicator {
    #[must_use]
    pub const fn new(meta: IndicatorMeta, range: Vec<IndicatorValue>) -> Self {
        Self { meta, range }
    }

    pub(crate) fn from_config(meta: IndicatorMeta, codes: &[Value]) -> Result<Self, ConfigProblem> {
        let range = codes
            .iter()
            .enumerate()
            .map(|(index, code)| scalar(code, || format!("range[{index}]")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(meta, range))
    }

    /// The allowed codes, in configuration order.
    #[must_use]
    pub fn range(&self) -> &[IndicatorValue] {
        &self.range
    }

    /// Whether `code` is one of the allowed codes.
    #[must_use]
    pub fn in_range(&self, code: impl Into<IndicatorValue>) -> bool {
        self.range.contains(&code.into())
    }

    /// The mapped value for `code`, or `None` when no map entry has that key.
    ///
    /// A code mapped to null yields `Some(&IndicatorValue::Null)`.
    #[must_use]
    pub fn value(&self, code: impl Into<IndicatorValue>) -> Option<&IndicatorValue> {
        self.meta.lookup(&code.into())
    }

    /// Map entries whose key is not an allowed code.
    pub fn unmapped_keys(&self) -> impl Iterator<Item = &MapEntry> {
        self.meta.map.iter().filter(|entry| !self.range.contains(&entry.key))
    }
}

impl IndicatorBase for CodedIndicator {
    fn meta(&self) -> &IndicatorMeta {
        &self.meta
    }
}

struct CodeList<'a>(&'a [IndicatorValue]);

impl fmt::Display for CodeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{code}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for CodedIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_indicator(f, &self.meta, &CodeList(&self.range))
    }
}
