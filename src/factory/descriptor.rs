use crate::error::{ConfigProblem, IndicatorConfigError};
use crate::indicators::shape_of;
use serde_yaml::{Mapping, Value};

/// The configuration record describing one indicator, before it is built.
///
/// Every field is optional here so that [`IndicatorFactory::add`](crate::IndicatorFactory::add)
/// can report exactly which one is missing. The shape of `range` decides the variant: a sequence
/// makes a coded indicator, a keyed record makes a numeric one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorDescriptor {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub source: Option<String>,
    pub description: Option<String>,
    pub range: Option<Value>,
    pub map: Option<Value>,
}

impl IndicatorDescriptor {
    /// A descriptor with every field set.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        source: impl Into<String>,
        description: impl Into<String>,
        range: Value,
        map: Value,
    ) -> Self {
        Self {
            name: Some(name.into()),
            display_name: Some(display_name.into()),
            source: Some(source.into()),
            description: Some(description.into()),
            range: Some(range),
            map: Some(map),
        }
    }

    /// Whether no field is set at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.display_name.is_none()
            && self.source.is_none()
            && self.description.is_none()
            && self.range.is_none()
            && self.map.is_none()
    }

    fn from_record(record: &Mapping) -> Result<Self, IndicatorConfigError> {
        let name = text_field(record, "name", None)?;
        let context = name.as_deref();

        Ok(Self {
            display_name: text_field(record, "display_name", context)?,
            source: text_field(record, "source", context)?,
            description: text_field(record, "description", context)?,
            range: value_field(record, "range"),
            map: value_field(record, "map"),
            name,
        })
    }
}

fn text_field(record: &Mapping, field: &'static str, indicator: Option<&str>) -> Result<Option<String>, IndicatorConfigError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => {
            let problem = ConfigProblem::WrongType {
                field: field.to_string(),
                expected: "a string",
                found: shape_of(other),
            };
            Err(match indicator {
                Some(name) => IndicatorConfigError::for_indicator(name, problem),
                None => IndicatorConfigError::new(problem),
            })
        }
    }
}

fn value_field(record: &Mapping, field: &str) -> Option<Value> {
    record.get(field).filter(|v| !v.is_null()).cloned()
}

impl TryFrom<Value> for IndicatorDescriptor {
    type Error = IndicatorConfigError;

    /// Reads a descriptor out of a configuration value.
    ///
    /// Null becomes an empty descriptor, which the factory then rejects. Anything other than a
    /// keyed record is rejected here.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match &value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(record) => Self::from_record(record),
            other => Err(IndicatorConfigError::new(ConfigProblem::NotARecord { found: shape_of(other) })),
        }
    }
}

impl TryFrom<&Mapping> for IndicatorDescriptor {
    type Error = IndicatorConfigError;

    fn try_from(record: &Mapping) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}
