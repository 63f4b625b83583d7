use crate::Result;
use crate::factory::{IndicatorDescriptor, IndicatorFactory};
use ohno::IntoAppError;
use serde::Deserialize;
use serde_yaml::Value;

const LOG_TARGET: &str = "config";

/// The sample configuration, embedded from `sample_indicators.yml`
pub const SAMPLE_INDICATORS_YAML: &str = include_str!("../../sample_indicators.yml");

/// The `indicators:` section of a lighthouse configuration document.
///
/// Entries are kept as raw values so that each one is classified and validated by the factory
/// rather than by the deserializer. Other top-level keys of the document are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LighthouseConfig {
    #[serde(default)]
    pub indicators: Vec<Value>,
}

impl LighthouseConfig {
    /// Parses a configuration document that has already been read into memory.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text).into_app_err("parsing indicator configuration")?;
        log::debug!(target: LOG_TARGET, "Parsed {} indicator descriptors", config.indicators.len());
        Ok(config)
    }

    /// The embedded sample configuration.
    pub fn sample() -> Result<Self> {
        Self::from_yaml(SAMPLE_INDICATORS_YAML)
    }

    /// Adds every configured indicator to `factory`, in document order.
    ///
    /// Stops at the first entry the factory rejects; entries before it stay registered. Returns
    /// the names of entries that replaced an indicator registered earlier.
    pub fn register_all(&self, factory: &mut IndicatorFactory) -> Result<Vec<String>> {
        let mut replaced = Vec::new();

        for (index, entry) in self.indicators.iter().enumerate() {
            let descriptor = IndicatorDescriptor::try_from(entry.clone())
                .into_app_err_with(|| format!("reading indicator descriptor #{index}"))?;
            let name = descriptor.name.clone().unwrap_or_default();

            let registration = factory
                .add(descriptor)
                .into_app_err_with(|| format!("registering indicator descriptor #{index}"))?;

            if registration.is_replacement() {
                replaced.push(name);
            }
        }

        log::info!(
            target: LOG_TARGET,
            "Registered {} indicators ({} replaced)",
            self.indicators.len(),
            replaced.len()
        );

        Ok(replaced)
    }
}
