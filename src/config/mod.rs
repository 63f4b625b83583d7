//! Typed view of an indicator configuration document
//!
//! Reading the document from disk or elsewhere is the caller's job; this module only takes the
//! text and hands each entry under `indicators:` to the factory.

mod lighthouse_config;

pub use lighthouse_config::{LighthouseConfig, SAMPLE_INDICATORS_YAML};
