use core::fmt;
use core::hash::{Hash, Hasher};
use serde_yaml::Value;

/// A scalar taken from indicator configuration or supplied as a reading.
///
/// Codes, map keys and map values are all scalars. Text and numbers never compare equal, so the
/// code `'1'` and the number `1` are different values.
#[derive(Debug, Clone)]
pub enum IndicatorValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl IndicatorValue {
    /// Converts a configuration scalar; returns `None` for sequences, mappings and tagged values.
    #[must_use]
    pub fn from_yaml(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::Null),
            Value::Bool(b) => Some(Self::Boolean(*b)),
            Value::Number(n) => n.as_i64().map(Self::Int).or_else(|| n.as_f64().map(Self::Float)),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of the value, for `Int` and `Float` only.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "Readings are far below 2^52")]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl PartialEq for IndicatorValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for IndicatorValue {}

impl Hash for IndicatorValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Boolean(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<&str> for IndicatorValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for IndicatorValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for IndicatorValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for IndicatorValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for IndicatorValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for IndicatorValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&IndicatorValue> for IndicatorValue {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl<T: Into<IndicatorValue>> From<Option<T>> for IndicatorValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Short description of a configuration value's shape, for error messages.
pub(crate) const fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a keyed record",
        Value::Tagged(_) => "a tagged value",
    }
}
