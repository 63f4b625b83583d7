use super::{IndicatorDescriptor, IndicatorFactory, Registration};
use crate::error::IndicatorConfigError;
use crate::indicators::{Indicator, IndicatorValue};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// An [`IndicatorFactory`] that can be shared between threads.
///
/// Registration takes the write lock for the duration of a single insert. Lookups take the read
/// lock and hand back an `Arc` snapshot, which stays valid if the entry is replaced afterwards.
#[derive(Debug, Default)]
pub struct SharedIndicatorFactory {
    inner: RwLock<IndicatorFactory>,
}

impl SharedIndicatorFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and registers an indicator; see [`IndicatorFactory::add`].
    pub fn add(&self, descriptor: IndicatorDescriptor) -> Result<Registration, IndicatorConfigError> {
        self.write().add(descriptor)
    }

    /// The indicator registered under `name`; see [`IndicatorFactory::indicator`].
    #[must_use]
    pub fn indicator(&self, name: &str, value: impl Into<IndicatorValue>) -> Option<Arc<Indicator>> {
        self.read().indicator_arc(name, value).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// A consistent copy of the whole registry.
    #[must_use]
    pub fn snapshot(&self) -> IndicatorFactory {
        self.read().clone()
    }

    // A panic while holding the lock cannot leave the map half-updated, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, IndicatorFactory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndicatorFactory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<IndicatorFactory> for SharedIndicatorFactory {
    fn from(factory: IndicatorFactory) -> Self {
        Self {
            inner: RwLock::new(factory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{IndicatorBase, IndicatorKind};
    use serde_yaml::Value;
    use std::thread;

    fn descriptor(name: &str, range: &str) -> IndicatorDescriptor {
        let range: Value = serde_yaml::from_str(range).unwrap();
        IndicatorDescriptor::new(name, "display", "source", "description", range, Value::Sequence(vec![]))
    }

    #[test]
    fn test_add_and_lookup() {
        let factory = SharedIndicatorFactory::new();
        let _ = factory.add(descriptor("chem.index", "[red, green]")).unwrap();

        let indicator = factory.indicator("chem.index", "green").unwrap();
        assert_eq!(indicator.name(), "chem.index");
        assert!(indicator.in_range("green"));
        assert!(factory.indicator("chem.other", "green").is_none());
    }

    #[test]
    fn test_snapshot_survives_replacement() {
        let factory = SharedIndicatorFactory::new();
        let _ = factory.add(descriptor("shared", "[red, green]")).unwrap();
        let before = factory.indicator("shared", "red").unwrap();

        let _ = factory
            .add(descriptor("shared", "{inclusive_floor: 0, inclusive_ceiling: 1, mean: .5, std: .1}"))
            .unwrap();

        assert_eq!(before.kind(), IndicatorKind::Coded);
        assert_eq!(factory.indicator("shared", 0.5).unwrap().kind(), IndicatorKind::Number);
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_concurrent_adds() {
        let factory = SharedIndicatorFactory::new();

        thread::scope(|scope| {
            for t in 0..4 {
                let factory = &factory;
                let _ = scope.spawn(move || {
                    for i in 0..25 {
                        let _ = factory.add(descriptor(&format!("chem.{t}.{i}"), "[red, green]")).unwrap();
                        assert!(factory.indicator(&format!("chem.{t}.{i}"), "red").is_some());
                    }
                });
            }
        });

        assert_eq!(factory.len(), 100);
        let snapshot = factory.snapshot();
        assert_eq!(snapshot.names().count(), 100);
    }

    #[test]
    fn test_from_factory() {
        let mut factory = IndicatorFactory::new();
        let _ = factory.add(descriptor("chem.index", "[red]")).unwrap();

        let shared = SharedIndicatorFactory::from(factory);
        assert!(!shared.is_empty());
        assert!(shared.indicator("chem.index", IndicatorValue::Null).is_some());
    }
}
