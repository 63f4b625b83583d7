use super::IndicatorValue;
use super::indicator_value::shape_of;
use crate::error::ConfigProblem;
use core::fmt;
use serde_yaml::Value;

/// One `{key: value}` pair from an indicator's `map`.
///
/// For coded indicators the key is the presented code and the value is what gets stored. For
/// numeric indicators the key is a raw reading and the value its normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapEntry {
    pub key: IndicatorValue,
    pub value: IndicatorValue,
}

impl MapEntry {
    #[must_use]
    pub fn new(key: impl Into<IndicatorValue>, value: impl Into<IndicatorValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for MapEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: {}}}", self.key, self.value)
    }
}

/// Metadata shared by every indicator variant.
#[derive(Debug, Clone)]
pub struct IndicatorMeta {
    pub(crate) name: String,
    pub(crate) display_name: String,
    pub(crate) source: String,
    pub(crate) description: String,
    pub(crate) map: Vec<MapEntry>,
}

impl IndicatorMeta {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        source: impl Into<String>,
        description: impl Into<String>,
        map: Vec<MapEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            source: source.into(),
            description: description.into(),
            map,
        }
    }

    /// The mapped value of the first entry whose key equals `key`.
    #[must_use]
    pub fn lookup(&self, key: &IndicatorValue) -> Option<&IndicatorValue> {
        self.map.iter().find(|entry| entry.key == *key).map(|entry| &entry.value)
    }
}

/// Identity and display metadata common to all indicators.
pub trait IndicatorBase {
    fn meta(&self) -> &IndicatorMeta;

    fn name(&self) -> &str {
        &self.meta().name
    }

    fn display_name(&self) -> &str {
        &self.meta().display_name
    }

    fn source(&self) -> &str {
        &self.meta().source
    }

    fn description(&self) -> &str {
        &self.meta().description
    }

    fn map(&self) -> &[MapEntry] {
        &self.meta().map
    }
}

/// Parses a `map` sequence of single-entry records.
pub(crate) fn parse_map(value: &Value) -> Result<Vec<MapEntry>, ConfigProblem> {
    let Value::Sequence(entries) = value else {
        return Err(ConfigProblem::WrongType {
            field: "map".to_string(),
            expected: "a sequence of single-entry records",
            found: shape_of(value),
        });
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let Value::Mapping(record) = entry else {
                return Err(ConfigProblem::WrongType {
                    field: format!("map[{index}]"),
                    expected: "a single-entry record",
                    found: shape_of(entry),
                });
            };

            let mut pairs = record.iter();
            let (Some((key, value)), None) = (pairs.next(), pairs.next()) else {
                return Err(ConfigProblem::MalformedMapEntry { index, keys: record.len() });
            };

            Ok(MapEntry {
                key: scalar(key, || format!("map[{index}] key"))?,
                value: scalar(value, || format!("map[{index}] value"))?,
            })
        })
        .collect()
}

pub(crate) fn scalar(value: &Value, field: impl FnOnce() -> String) -> Result<IndicatorValue, ConfigProblem> {
    IndicatorValue::from_yaml(value).ok_or_else(|| ConfigProblem::WrongType {
        field: field(),
        expected: "a scalar",
        found: shape_of(value),
    })
}

/// Writes the display layout shared by every variant.
pub(crate) fn fmt_indicator(f: &mut fmt::Formatter<'_>, meta: &IndicatorMeta, range: &dyn fmt::Display) -> fmt::Result {
    writeln!(f, "Name: {}", meta.name)?;
    writeln!(f, "Display Name: {}", meta.display_name)?;
    writeln!(f, "Source: {}", meta.source)?;
    writeln!(f, "Description: {}", meta.description)?;
    writeln!(f, "range: {range}")?;
    write!(f, "map: [")?;
    for (i, entry) in meta.map.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{entry}")?;
    }
    write!(f, "]")
}
