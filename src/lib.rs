//! lighthouse-indicators crate
//!
//! Indicators are the manual measurements tabulated monthly at a facility. Each one is described by a
//! configuration record and turned into a typed value object that knows how to validate and display
//! the readings recorded against it.
//!
//! # Module Organization
//!
//! - [`indicators`]: The indicator model (coded and numeric variants)
//! - [`factory`]: Classification, construction and the name-keyed registry
//! - [`config`]: Typed view of an `indicators:` configuration document
//! - [`error`]: The configuration error raised when a descriptor is rejected

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod config;
pub mod error;
pub mod factory;
pub mod indicators;

pub use crate::error::{ConfigProblem, IndicatorConfigError};
pub use crate::factory::{IndicatorDescriptor, IndicatorFactory, Registration, SharedIndicatorFactory};
pub use crate::indicators::{CodedIndicator, Indicator, IndicatorBase, IndicatorKind, IndicatorValue, NumberIndicator};
