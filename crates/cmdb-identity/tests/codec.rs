//! Behavioural tests for identifier conversions through the public API.

#![expect(clippy::expect_used, reason = "tests assert the conversion path")]

use cmdb_identity::{
    CodecError, Component, TypeId, Version, record_id_to_storage_id, storage_id_to_record_id,
    type_table_name_to_friendly, validate_friendly_id, version_increase, version_parse,
    version_stringify,
};
use rstest::rstest;

#[rstest]
#[case("1.2.34", "1_2_34")]
#[case("0.0.1", "0_0_1")]
#[case("10.20.30", "10_20_30")]
fn versions_round_trip_between_forms(#[case] dotted: &str, #[case] stored: &str) {
    assert_eq!(version_stringify(dotted).expect("dotted form is valid"), stored);
    assert_eq!(version_parse(stored).expect("stored form is valid"), dotted);
    let back = version_parse(&version_stringify(dotted).expect("dotted form is valid"))
        .expect("stringified form is valid");
    assert_eq!(back, dotted);
}

#[test]
fn increasing_one_component_leaves_the_others_alone() {
    assert_eq!(version_increase("1.2.34", 0).expect("major bump"), "2.2.34");
    assert_eq!(version_increase("1.2.34", 1).expect("minor bump"), "1.3.34");
}

#[test]
fn malformed_versions_are_reported_not_coerced() {
    let err = version_increase("1.2.x", 0).expect_err("x is not a number");
    assert_eq!(
        err,
        CodecError::NotNumeric {
            input: "1.2.x".to_string(),
            component: "x".to_string(),
        }
    );
}

#[test]
fn record_ids_round_trip() {
    let rid = storage_id_to_record_id("22_0").expect("storage id is valid");
    assert_eq!(rid, "#22:0");
    assert_eq!(
        record_id_to_storage_id(&rid).expect("record id is valid"),
        "22_0"
    );
}

#[test]
fn table_names_become_friendly_ids() {
    assert_eq!(
        type_table_name_to_friendly("NS_NAME_1_0_0").expect("table name is valid"),
        "NS-NAME-1.0.0"
    );
}

#[test]
fn bumping_a_type_keeps_its_identity() {
    let id = validate_friendly_id("demoPPC-demoVM-1.1.0").expect("friendly id is valid");
    let next = id
        .version()
        .increase(Component::Minor)
        .expect("minor component does not overflow");
    let bumped = id.with_version(next);
    assert_eq!(bumped.to_string(), "demoPPC-demoVM-1.2.0");
    assert_eq!(bumped.table_name(), "demoPPC_demoVM_1_2_0");
    assert_eq!(
        TypeId::from_table_name(&bumped.table_name()).expect("rendered table name parses"),
        bumped
    );
}

#[test]
fn component_indices_map_to_named_components() {
    assert_eq!(Component::try_from(2), Ok(Component::Patch));
    assert!(Component::try_from(7).is_err());
    assert_eq!(Version::new(1, 2, 3).get(Component::Patch), 3);
}
