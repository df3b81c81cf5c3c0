use super::*;
use serde_json::json;

#[test]
fn tagged_objects_fill_defaults() {
    let cfg = MorpherConfig::from_json(&json!({ "kind": "polygon" })).unwrap();
    assert_eq!(cfg, MorpherConfig::Polygon(PolygonMorpherOpts::default()));

    let cfg = MorpherConfig::from_json(&json!({ "kind": "Curve", "align_points": false })).unwrap();
    assert_eq!(
        cfg,
        MorpherConfig::Curve(CurveMorpherOpts {
            align_points: false,
            closed_tolerance: 0.5,
        })
    );
}

#[test]
fn bare_kind_strings_are_accepted() {
    let cfg = MorpherConfig::from_json(&json!(" resample ")).unwrap();
    assert_eq!(cfg, MorpherConfig::Resample);
    assert_eq!(cfg.kind(), "resample");
}

#[test]
fn unknown_kinds_and_bad_options_are_rejected() {
    let err = MorpherConfig::from_json(&json!({ "kind": "blob" })).unwrap_err();
    assert!(matches!(err, MorphError::Validation(_)));

    let err = MorpherConfig::from_json(&json!({ "kind": "flatten", "max_segment_length": 0 }))
        .unwrap_err();
    assert!(matches!(err, MorphError::Validation(_)));

    let err =
        MorpherConfig::from_json(&json!({ "kind": "polygon", "morph_precision": "x" })).unwrap_err();
    assert!(matches!(err, MorphError::Serde(_)));

    assert!(MorpherConfig::from_json(&json!(3)).is_err());
    assert!(MorpherConfig::from_json(&json!({ "morph_precision": 3 })).is_err());
}

#[test]
fn build_constructs_the_named_strategy() {
    for (kind, name) in [
        ("curve", "curve"),
        ("polygon", "polygon"),
        ("resample", "resample"),
        ("flatten", "flatten"),
    ] {
        let morpher = MorpherConfig::from_json(&json!(kind)).unwrap().build();
        assert_eq!(morpher.name(), name);
    }
    assert_eq!(MorpherConfig::default().build().name(), "curve");
}

#[test]
fn config_round_trips_through_json() {
    let cfg = MorpherConfig::Flatten(FlattenMorpherOpts {
        max_segment_length: 4.0,
    });
    let value = serde_json::to_value(&cfg).unwrap();
    assert_eq!(value["kind"], "flatten");
    assert_eq!(MorpherConfig::from_json(&value).unwrap(), cfg);
}
