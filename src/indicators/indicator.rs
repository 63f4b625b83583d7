use super::indicator_base::IndicatorMeta;
use super::{CodedIndicator, IndicatorBase, IndicatorKind, IndicatorValue, NumberIndicator};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A constructed indicator of either variant.
///
/// Equality, hashing and ordering consider only the name. A coded and a numeric indicator that
/// share a name compare equal; names are the sole uniqueness key of the registry.
#[derive(Debug, Clone)]
pub enum Indicator {
    Coded(CodedIndicator),
    Number(NumberIndicator),
}

impl Indicator {
    #[must_use]
    pub const fn kind(&self) -> IndicatorKind {
        match self {
            Self::Coded(_) => IndicatorKind::Coded,
            Self::Number(_) => IndicatorKind::Number,
        }
    }

    #[must_use]
    pub const fn as_coded(&self) -> Option<&CodedIndicator> {
        match self {
            Self::Coded(indicator) => Some(indicator),
            Self::Number(_) => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<&NumberIndicator> {
        match self {
            Self::Number(indicator) => Some(indicator),
            Self::Coded(_) => None,
        }
    }

    /// Whether `value` is acceptable for this indicator.
    ///
    /// Coded indicators test membership in their code list. Numeric indicators test the inclusive
    /// bounds and reject anything that is not a number.
    #[must_use]
    pub fn in_range(&self, value: impl Into<IndicatorValue>) -> bool {
        match self {
            Self::Coded(indicator) => indicator.in_range(value),
            Self::Number(indicator) => value.into().as_f64().is_some_and(|v| indicator.in_range(v)),
        }
    }
}

impl IndicatorBase for Indicator {
    fn meta(&self) -> &IndicatorMeta {
        match self {
            Self::Coded(indicator) => indicator.meta(),
            Self::Number(indicator) => indicator.meta(),
        }
    }
}

impl From<CodedIndicator> for Indicator {
    fn from(indicator: CodedIndicator) -> Self {
        Self::Coded(indicator)
    }
}

impl From<NumberIndicator> for Indicator {
    fn from(indicator: NumberIndicator) -> Self {
        Self::Number(indicator)
    }
}

impl PartialEq for Indicator {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Indicator {}

impl Hash for Indicator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl PartialOrd for Indicator {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Indicator {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coded(indicator) => fmt::Display::fmt(indicator, f),
            Self::Number(indicator) => fmt::Display::fmt(indicator, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{MapEntry, NumberRange};
    use std::collections::HashSet;
    use std::hash::DefaultHasher;

    fn coded(name: &str) -> Indicator {
        let meta = IndicatorMeta::new(name, "Coded", "s", "desc", vec![MapEntry::new("green", "1")]);
        CodedIndicator::new(meta, vec!["green".into(), "red".into()]).into()
    }

    fn number(name: &str) -> Indicator {
        let meta = IndicatorMeta::new(name, "Number", "s", "desc", vec![]);
        NumberIndicator::new(meta, NumberRange::new(0.0, 1.0, 0.452, 0.024).unwrap()).into()
    }

    fn hash_of(indicator: &Indicator) -> u64 {
        let mut hasher = DefaultHasher::new();
        indicator.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_kind() {
        assert_eq!(coded("a").kind(), IndicatorKind::Coded);
        assert_eq!(number("a").kind(), IndicatorKind::Number);
    }

    #[test]
    fn test_downcasts() {
        assert!(coded("a").as_coded().is_some());
        assert!(coded("a").as_number().is_none());
        assert!(number("a").as_number().is_some());
        assert!(number("a").as_coded().is_none());
    }

    #[test]
    fn test_equal_names_equal_across_variants() {
        let c = coded("shared.name");
        let n = number("shared.name");
        assert_eq!(c, n);
        assert_eq!(hash_of(&c), hash_of(&n));

        let set: HashSet<Indicator> = [c, n].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_different_names_differ() {
        assert_ne!(coded("a"), coded("b"));
        assert_ne!(number("a"), number("b"));
    }

    #[test]
    fn test_ordering_by_name() {
        let mut indicators = vec![number("chem.b"), coded("chem.c"), coded("chem.a")];
        indicators.sort();
        let names: Vec<_> = indicators.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["chem.a", "chem.b", "chem.c"]);
    }

    #[test]
    fn test_in_range_dispatch() {
        assert!(coded("a").in_range("green"));
        assert!(!coded("a").in_range(0.5));
        assert!(number("a").in_range(0.5));
        assert!(number("a").in_range(0));
        assert!(number("a").in_range(1));
        assert!(!number("a").in_range("0.5"));
        assert!(!number("a").in_range(IndicatorValue::Null));
    }

    #[test]
    fn test_base_accessors() {
        let indicator = coded("chem.index");
        assert_eq!(indicator.name(), "chem.index");
        assert_eq!(indicator.display_name(), "Coded");
        assert_eq!(indicator.source(), "s");
        assert_eq!(indicator.description(), "desc");
        assert_eq!(indicator.map(), &[MapEntry::new("green", "1")]);
    }

    #[test]
    fn test_display_delegates() {
        let indicator = coded("chem.index");
        assert_eq!(indicator.to_string(), indicator.as_coded().unwrap().to_string());
    }
}
