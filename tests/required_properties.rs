//! Integration tests for required-property resolution
//!
//! The catalog is a fixed list of colour names. Requests are given both as
//! delimited strings and as name lists.

mod common;

use detection_core::properties::FnCatalog;
use detection_core::{CoreConfig, PropertiesError, RequiredProperties, ResolvedProperties};
use serde_json::json;

const CATALOG: [&str; 7] = ["Red", "Yellow", "Green", "Blue", "Brown", "Black", "White"];

fn create(required: Option<RequiredProperties<'_>>) -> ResolvedProperties {
    common::init_tracing();
    ResolvedProperties::new(required.as_ref(), &CATALOG[..]).expect("resolved properties")
}

#[test]
fn test_all_properties() {
    let properties = create(None);
    assert_eq!(properties.len(), CATALOG.len());
    for name in CATALOG {
        let index = properties.index_of(name);
        let index = usize::try_from(index).expect("property present");
        assert_eq!(properties.name_at(index), name);
    }
}

#[test]
fn test_one_missing_property() {
    let properties = create(Some("Yellow,Beige".into()));
    let index = properties.index_of("Yellow");
    assert_eq!(index, 0);
    assert_eq!(properties.name_at(0), "Yellow");
    assert_eq!(properties.index_of("Beige"), -1);
    assert_eq!(properties.index_of("Red"), -1);
}

#[test]
fn test_string_two_properties_ordered() {
    let properties = create(Some("Yellow,Black".into()));
    assert_eq!(properties.index_of("Black"), 0);
    assert_eq!(properties.index_of("Yellow"), 1);
}

#[test]
fn test_string_two_properties_ordered_space() {
    let properties = create(Some("Cyan,Yellow, Black ,Blue|".into()));
    assert_eq!(properties.len(), 3);
    assert_eq!(properties.index_of("Black"), 0);
    assert_eq!(properties.index_of("Blue"), 1);
    assert_eq!(properties.index_of("Yellow"), 2);
}

#[test]
fn test_array_two_properties_ordered() {
    let names: &[&str] = &["Yellow", "Black"];
    let properties = create(Some(names.into()));
    assert_eq!(properties.index_of("Black"), 0);
    assert_eq!(properties.index_of("Yellow"), 1);
}

#[test]
fn test_string_empty_behaves_like_none() {
    let properties = create(Some("".into()));
    assert_eq!(properties, create(None));
}

#[test]
fn test_repeated_names_collapse() {
    let cases = [
        RequiredProperties::names(["Yellow", "Yellow"]),
        RequiredProperties::from("Yellow,Yellow"),
        RequiredProperties::names(["yellow", "Yellow"]),
        RequiredProperties::from("yellow,Yellow"),
    ];
    for required in cases {
        assert_eq!(create(Some(required)).len(), 1);
    }
}

#[test]
fn test_case_insensitive_get_index() {
    let properties = create(Some(RequiredProperties::names(["yellow"])));
    assert_ne!(properties.index_of("yellow"), -1);
    assert_eq!(properties.index_of("Yellow"), properties.index_of("yellow"));
}

#[test]
fn test_indices_follow_name_order_and_map_to_catalog() {
    let properties = create(Some("white|green|RED|brown".into()));
    let expected = [("Brown", 4), ("Green", 2), ("Red", 0), ("White", 6)];
    assert_eq!(properties.len(), expected.len());
    for (index, (name, catalog_index)) in expected.into_iter().enumerate() {
        let property = properties.get(index).expect("property");
        assert_eq!(property.name, name);
        assert_eq!(property.catalog_index, catalog_index);
        assert_eq!(properties.position(name), Some(index));
    }
}

#[test]
fn test_accessor_catalog_with_configured_separators() {
    let config = CoreConfig::from_toml_str("[properties]\nseparators = [\";\", \" \"]")
        .expect("config");
    let catalog = FnCatalog::new(CATALOG.len(), |index| {
        CATALOG.get(index).map(|name| name.to_string())
    });
    let required = RequiredProperties::from("Blue Black;Cyan");
    let properties =
        ResolvedProperties::with_config(Some(&required), &catalog, &config.properties)
            .expect("resolved properties");
    let names: Vec<_> = properties.names().collect();
    assert_eq!(names, vec!["Black", "Blue"]);
}

#[test]
fn test_resolved_set_serializes_in_required_order() {
    let properties = create(Some("Yellow,Black".into()));
    let value = serde_json::to_value(&properties).expect("serialize");
    assert_eq!(
        value,
        json!({
            "properties": [
                {"name": "Black", "catalog_index": 5},
                {"name": "Yellow", "catalog_index": 1}
            ]
        })
    );
}

#[test]
fn test_whole_catalog_rejects_accessor_gap() {
    let catalog = FnCatalog::new(CATALOG.len(), |index| {
        if index == 3 {
            None
        } else {
            CATALOG.get(index).map(|name| name.to_string())
        }
    });
    match ResolvedProperties::new(None, &catalog) {
        Err(PropertiesError::MissingCatalogName { index }) => assert_eq!(index, 3),
        other => panic!("expected missing catalog name, got {other:?}"),
    }
}
