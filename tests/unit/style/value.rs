use super::*;
use serde_json::json;

#[test]
fn exact_type_hits_win() {
    let map = StyleMap::new()
        .with("FontSize", 18.0)
        .with("Bold", true)
        .with("Color", ColorCode::opaque(255, 0, 0));

    assert_eq!(map.number("FontSize"), Some(18.0));
    assert_eq!(map.boolean("Bold"), Some(true));
    assert_eq!(map.color("Color"), Some(ColorCode::opaque(255, 0, 0)));
}

#[test]
fn values_coerce_best_effort() {
    let map = StyleMap::new()
        .with("FontSize", "22.5")
        .with("Bold", 1.0)
        .with("Color", "#336699")
        .with("Ratio", false);

    assert_eq!(map.number("FontSize"), Some(22.5));
    assert_eq!(map.boolean("Bold"), Some(true));
    assert_eq!(map.color("Color"), Some(ColorCode::opaque(0x33, 0x66, 0x99)));
    assert_eq!(map.number("Ratio"), Some(0.0));
}

#[test]
fn failed_coercion_reads_as_absent() {
    let map = StyleMap::new()
        .with("FontSize", "large")
        .with("Color", "not-a-color")
        .with("Bold", "maybe");

    assert_eq!(map.number("FontSize"), None);
    assert_eq!(map.color("Color"), None);
    assert_eq!(map.boolean("Bold"), None);
    assert_eq!(map.number("Missing"), None);
    assert_eq!(map.number_or("Missing", 1.5), 1.5);
}

#[test]
fn contains_ignores_value_type() {
    let map = StyleMap::new().with("FontSize", "large");
    assert!(map.contains("FontSize"));
    assert!(!map.contains("Bold"));
}

#[test]
fn untagged_serde_round_trip() {
    let map: StyleMap = serde_json::from_value(json!({
        "FontSize": 16.0,
        "Bold": true,
        "Color": "#1A2B3C4D",
        "Family": "some text"
    }))
    .unwrap();

    assert_eq!(map.number("FontSize"), Some(16.0));
    assert_eq!(map.boolean("Bold"), Some(true));
    assert_eq!(
        map.color("Color"),
        Some(ColorCode::new(0x1A, 0x2B, 0x3C, 0x4D))
    );
    assert_eq!(map.text("Family"), Some("some text".to_string()));

    let back = serde_json::to_value(&map).unwrap();
    let reparsed: StyleMap = serde_json::from_value(back).unwrap();
    assert_eq!(reparsed, map);
}
