use super::{IndicatorDescriptor, Registration};
use crate::error::{ConfigProblem, IndicatorConfigError};
use crate::indicators::{CodedIndicator, Indicator, IndicatorBase, IndicatorMeta, IndicatorValue, NumberIndicator, NumberRange, parse_map, shape_of};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

const LOG_TARGET: &str = "factory";

/// Builds indicators from their descriptors and keeps them by name.
///
/// Names are the only uniqueness key: adding a descriptor whose name is already registered
/// replaces the earlier indicator, whatever its variant.
#[derive(Debug, Default, Clone)]
pub struct IndicatorFactory {
    indicators: BTreeMap<String, Arc<Indicator>>,
}

impl IndicatorFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an indicator from `descriptor` and registers it under its name.
    ///
    /// A sequence under `range` makes a [`CodedIndicator`], a keyed record makes a
    /// [`NumberIndicator`]. On failure the registry is left untouched.
    pub fn add(&mut self, descriptor: IndicatorDescriptor) -> Result<Registration, IndicatorConfigError> {
        let indicator = manufacture(descriptor)?;
        let kind = indicator.kind();
        let name = indicator.name().to_string();

        if let Indicator::Coded(coded) = &indicator {
            for entry in coded.unmapped_keys() {
                log::warn!(target: LOG_TARGET, "Indicator '{name}' maps key {} which is not one of its codes", entry.key);
            }
        }

        let registration = match self.indicators.insert(name.clone(), Arc::new(indicator)) {
            None => {
                log::info!(target: LOG_TARGET, "Registered {kind} indicator '{name}'");
                Registration::Created(kind)
            }
            Some(previous) => {
                let previous = previous.kind();
                if previous == kind {
                    log::info!(target: LOG_TARGET, "Replaced {kind} indicator '{name}'");
                } else {
                    log::warn!(target: LOG_TARGET, "Replaced {previous} indicator '{name}' with a {kind} indicator");
                }
                Registration::Replaced { kind, previous }
            }
        };

        Ok(registration)
    }

    /// The indicator registered under `name`, or `None` if there is none.
    ///
    /// `value` is the reading the caller is about to check against the indicator; it does not
    /// take part in the lookup, and any value (including zero, false and null) is accepted.
    #[must_use]
    pub fn indicator(&self, name: &str, value: impl Into<IndicatorValue>) -> Option<&Indicator> {
        self.indicator_arc(name, value).map(|arc| &**arc)
    }

    pub(crate) fn indicator_arc(&self, name: &str, value: impl Into<IndicatorValue>) -> Option<&Arc<Indicator>> {
        let found = self.indicators.get(name);
        if log::log_enabled!(target: LOG_TARGET, log::Level::Trace) {
            let value = value.into();
            log::trace!(target: LOG_TARGET, "Lookup of '{name}' for reading {value}: {}", if found.is_some() { "found" } else { "not found" });
        }
        found
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.indicators.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Registered indicators in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.indicators.values().map(|arc| &**arc)
    }

    /// Registered names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.indicators.keys().map(String::as_str)
    }
}

fn manufacture(descriptor: IndicatorDescriptor) -> Result<Indicator, IndicatorConfigError> {
    if descriptor.is_empty() {
        return Err(ConfigProblem::EmptyDescriptor.into());
    }

    let IndicatorDescriptor {
        name,
        display_name,
        source,
        description,
        range,
        map,
    } = descriptor;

    let name = name.ok_or(ConfigProblem::MissingField("name"))?;
    if name.is_empty() {
        return Err(ConfigProblem::EmptyName.into());
    }

    let fail = |problem: ConfigProblem| IndicatorConfigError::for_indicator(name.as_str(), problem);

    let display_name = display_name.ok_or_else(|| fail(ConfigProblem::MissingField("display_name")))?;
    let source = source.ok_or_else(|| fail(ConfigProblem::MissingField("source")))?;
    let description = description.ok_or_else(|| fail(ConfigProblem::MissingField("description")))?;
    let range = range.ok_or_else(|| fail(ConfigProblem::MissingField("range")))?;
    let map = map.ok_or_else(|| fail(ConfigProblem::MissingField("map")))?;
    let map = parse_map(&map).map_err(fail)?;

    let meta = IndicatorMeta::new(name.as_str(), display_name, source, description, map);
    match &range {
        Value::Sequence(codes) => CodedIndicator::from_config(meta, codes).map(Indicator::Coded).map_err(fail),
        Value::Mapping(record) => NumberRange::from_config(record)
            .map(|range| Indicator::Number(NumberIndicator::new(meta, range)))
            .map_err(fail),
        other => Err(fail(ConfigProblem::UnclassifiableRange { found: shape_of(other) })),
    }
}
