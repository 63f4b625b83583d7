//! Integration tests loading the sample configuration into a factory

use lighthouse_indicators::config::LighthouseConfig;
use lighthouse_indicators::indicators::{IndicatorValue, MapEntry};
use lighthouse_indicators::{ConfigProblem, Indicator, IndicatorBase, IndicatorDescriptor, IndicatorFactory, IndicatorKind};
use serde_yaml::Value;

const CHEMISTRY_INDEX: &str = "chem.cfam.aux.system.chemistry.index";
const ACTION_LEVELS: &str = "chem.cfam.cei.condition.1..action.levels..monthly";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_factory() -> IndicatorFactory {
    init_logging();

    let config = LighthouseConfig::sample().expect("Could not parse sample configuration");
    let mut factory = IndicatorFactory::new();
    for entry in config.indicators {
        let descriptor = IndicatorDescriptor::try_from(entry).expect("Could not read descriptor");
        let registration = factory.add(descriptor).expect("Could not register descriptor");
        assert_eq!(registration.status_code(), 201);
    }
    factory
}

#[test]
fn test_load_factory() {
    let factory = sample_factory();
    assert_eq!(factory.len(), 2);
    assert_eq!(factory.names().collect::<Vec<_>>(), vec![CHEMISTRY_INDEX, ACTION_LEVELS]);
}

#[test]
fn test_coded_indicator_end_to_end() {
    let factory = sample_factory();

    let indicator = factory.indicator(CHEMISTRY_INDEX, "green").expect("indicator should be registered");
    assert!(factory.contains(indicator.name()));
    assert_eq!(indicator.kind(), IndicatorKind::Coded);

    let coded = indicator.as_coded().unwrap();
    assert!(coded.in_range("green"));
    assert_eq!(coded.value("green"), Some(&IndicatorValue::from("1")));
    assert_eq!(coded.value("NA"), Some(&IndicatorValue::from("None")));
    assert_eq!(coded.value("2"), None);
    assert_eq!(coded.unmapped_keys().count(), 0);
}

#[test]
fn test_number_indicator_end_to_end() {
    let factory = sample_factory();

    let indicator = factory.indicator(ACTION_LEVELS, 0.45).expect("indicator should be registered");
    assert!(factory.contains(indicator.name()));
    assert_eq!(indicator.kind(), IndicatorKind::Number);

    let number = indicator.as_number().unwrap();
    assert!(number.is_normal(0.45));
    assert!(!number.is_normal(0.427));
    assert!(number.in_range(0.0));
    assert!(number.in_range(1.0));
    assert!(!number.in_range(1.01));
    assert_eq!(number.display_value(0.45), "45.0%");
    assert_eq!(number.range().median, Some(IndicatorValue::from("800")));
}

#[test]
fn test_coded_membership_matches_range() {
    let factory = sample_factory();
    let indicator = factory.indicator(CHEMISTRY_INDEX, "red").unwrap();
    let codes = indicator.as_coded().unwrap().range().to_vec();

    for code in &codes {
        assert!(indicator.in_range(code), "{code} should be in range");
    }
    for outsider in ["4", "blue", "RED", "none"] {
        assert!(!codes.contains(&IndicatorValue::from(outsider)));
        assert!(!indicator.in_range(outsider));
    }
}

#[test]
fn test_every_map_key_is_a_code() {
    let factory = sample_factory();
    for indicator in factory.iter() {
        if let Indicator::Coded(coded) = indicator {
            let range = coded.range();
            assert!(
                coded.map().iter().all(|MapEntry { key, .. }| range.contains(key)),
                "every map key of {} should be a code",
                coded.name()
            );
        }
    }
}

#[test]
fn test_replacement_changes_variant() {
    let mut factory = sample_factory();

    let range: Value = serde_yaml::from_str("[low, high]").unwrap();
    let descriptor = IndicatorDescriptor::new(ACTION_LEVELS, "Action Levels", "source", "description", range, Value::Sequence(vec![]));
    let registration = factory.add(descriptor).unwrap();

    assert!(registration.is_replacement());
    assert_eq!(factory.len(), 2);
    assert_eq!(factory.indicator(ACTION_LEVELS, "low").unwrap().kind(), IndicatorKind::Coded);
}

#[test]
fn test_rejects_unclassifiable_range() {
    let mut factory = sample_factory();

    let descriptor = IndicatorDescriptor::new(
        "chem.bad",
        "Bad",
        "source",
        "description",
        Value::String("red, green".to_string()),
        Value::Sequence(vec![]),
    );
    let err = factory.add(descriptor).unwrap_err();

    assert_eq!(err.problem(), &ConfigProblem::UnclassifiableRange { found: "a string" });
    assert_eq!(err.indicator(), Some("chem.bad"));
    assert!(!factory.contains("chem.bad"));
}

#[test]
fn test_rejects_empty_descriptor() {
    let mut factory = sample_factory();
    let err = factory.add(IndicatorDescriptor::try_from(Value::Null).unwrap()).unwrap_err();
    assert_eq!(err.problem(), &ConfigProblem::EmptyDescriptor);
    assert_eq!(factory.len(), 2);
}
