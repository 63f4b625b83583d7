use super::indicator_base::{IndicatorMeta, fmt_indicator};
use super::{IndicatorBase, NumberRange};
use core::fmt;

const LOG_TARGET: &str = "indicators";

/// Indicator whose readings are numbers checked against a floor, a ceiling and a normalcy band.
///
/// ```yaml
/// range:
///   inclusive_floor: 0
///   inclusive_ceiling: 1
///   mean: .452
///   std: .024
///   precision: '{:.1%}'
/// ```
#[derive(Debug, Clone)]
pub struct NumberIndicator {
    meta: IndicatorMeta,
    range: NumberRange,
}

impl NumberIndicator {
    #[must_use]
    pub const fn new(meta: IndicatorMeta, range: NumberRange) -> Self {
        Self { meta, range }
    }

    #[must_use]
    pub const fn range(&self) -> &NumberRange {
        &self.range
    }

    /// Whether `value` lies between the floor and the ceiling, both inclusive.
    #[must_use]
    pub fn in_range(&self, value: f64) -> bool {
        self.range.contains(value)
    }

    /// Whether `value` lies within one standard deviation of the mean, both ends inclusive.
    #[must_use]
    pub fn is_normal(&self, value: f64) -> bool {
        let (low, high) = self.range.normal_band();
        low <= value && value <= high
    }

    /// Formats `value` using the configured precision template.
    ///
    /// Understands `{:.N%}`, `{:.Nf}` and `{}`; anything else falls back to plain formatting.
    #[must_use]
    pub fn display_value(&self, value: f64) -> String {
        let Some(template) = self.range.precision.as_deref() else {
            return value.to_string();
        };

        format_with_template(template, value).unwrap_or_else(|| {
            log::debug!(target: LOG_TARGET, "Unsupported precision template '{template}' for indicator '{}'", self.meta.name);
            value.to_string()
        })
    }
}

fn format_with_template(template: &str, value: f64) -> Option<String> {
    let inner = template.strip_prefix('{')?.strip_suffix('}')?;
    let spec = inner.strip_prefix(':').unwrap_or(inner);
    if spec.is_empty() {
        return Some(value.to_string());
    }

    let spec = spec.strip_prefix('.')?;
    if let Some(digits) = spec.strip_suffix('%') {
        let decimals = digits.parse::<usize>().ok()?;
        return Some(format!("{:.*}%", decimals, value * 100.0));
    }

    let decimals = spec.strip_suffix('f')?.parse::<usize>().ok()?;
    Some(format!("{value:.decimals$}"))
}

impl IndicatorBase for NumberIndicator {
    fn meta(&self) -> &IndicatorMeta {
        &self.meta
    }
}

impl fmt::Display for NumberIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_indicator(f, &self.meta, &self.range)
    }
}
