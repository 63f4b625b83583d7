//! Indicator classification, construction and registration
//!
//! The [`IndicatorFactory`] is the registry of every configured indicator. A caller hands it an
//! [`IndicatorDescriptor`]; the factory checks that every required field is present, decides the
//! variant from the shape of the `range` field, builds the indicator and stores it under its name.
//! Later lookups by name return the stored instance.
//!
//! [`SharedIndicatorFactory`] wraps the same registry in a read/write lock for callers that
//! register and look up indicators from several threads.

mod descriptor;
mod indicator_factory;
mod registration;
mod shared_factory;

pub use descriptor::IndicatorDescriptor;
pub use indicator_factory::IndicatorFactory;
pub use registration::{CREATED, Registration};
pub use shared_factory::SharedIndicatorFactory;
