//! The indicator model
//!
//! An indicator is one of the manual measurements tabulated each month at a facility. This module
//! binds the behaviors of an indicator (validation and display) to its configured definition.
//!
//! # Implementation Model
//!
//! [`Indicator`] is a sum type over the two concrete variants:
//!
//! - [`CodedIndicator`]: readings are drawn from a list of codes, with an optional map from
//!   presented code to stored value
//! - [`NumberIndicator`]: readings are numbers bounded by an inclusive floor and ceiling, with a
//!   normalcy band of one standard deviation around the mean
//!
//! Both variants carry the same metadata ([`IndicatorMeta`]) and expose it through the
//! [`IndicatorBase`] trait. The variant is decided once, when the indicator is built from its
//! configuration, by the shape of the configured range.

mod coded_indicator;
mod indicator;
mod indicator_base;
mod indicator_kind;
mod indicator_value;
mod number_indicator;
mod number_range;

pub use coded_indicator::CodedIndicator;
pub use indicator::Indicator;
pub use indicator_base::{IndicatorBase, IndicatorMeta, MapEntry};
pub use indicator_kind::IndicatorKind;
pub use indicator_value::IndicatorValue;
pub use number_indicator::NumberIndicator;
pub use number_range::NumberRange;

pub(crate) use indicator_base::parse_map;
pub(crate) use indicator_value::shape_of;
