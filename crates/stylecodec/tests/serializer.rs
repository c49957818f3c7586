//! Integration tests for rule-text serialization.

use pretty_assertions::assert_eq;
use stylecodec::parser::parse_stylesheet;
use stylecodec::serializer::{SerializeOptions, serialize, serialize_with};
use stylecodec::{StyleModel, decode_value, encode_value};

// ============================================================================
// BUCKET ORDER
// ============================================================================

#[test]
fn test_other_class_id_order() {
    let model = parse_stylesheet("#b { color: red; } .a { color: red; } div { color: red; }").unwrap();
    assert_eq!(
        serialize(&model),
        "div {\n\tcolor: red;\n}\n.a {\n\tcolor: red;\n}\n#b {\n\tcolor: red;\n}\n"
    );
}

#[test]
fn test_model_order_within_bucket() {
    let css = ".z { top: 1px; } p { top: 1px; } .y { top: 1px; } a b { top: 1px; } .x .w { top: 1px; }";
    let model = parse_stylesheet(css).unwrap();
    let headers: Vec<String> = serialize(&model)
        .lines()
        .filter_map(|l| l.strip_suffix(" {").map(str::to_string))
        .collect();
    assert_eq!(headers, ["p", "a b", ".x .w", ".z", ".y"]);
}

// ============================================================================
// ENABLED FLAG
// ============================================================================

#[test]
fn test_disabled_properties_are_suppressed() {
    let mut model = parse_stylesheet(".a { color: red; width: 10px; }").unwrap();
    model.set_property(".a", "color", "red", false);
    assert_eq!(serialize(&model), ".a {\n\twidth: 10px;\n}\n");

    // Re-enabling keeps the first position.
    model.set_property(".a", "color", "red", true);
    assert_eq!(serialize(&model), ".a {\n\tcolor: red;\n\twidth: 10px;\n}\n");
}

#[test]
fn test_selector_with_nothing_enabled_is_omitted() {
    let mut model = StyleModel::new();
    model.add_selector(".new");
    model.set_property("p", "color", "red", false);
    assert_eq!(serialize(&model), "");
}

// ============================================================================
// SELECTED-STATE COMPANION RULE
// ============================================================================

#[test]
fn test_box_shadow_companion() {
    let model = parse_stylesheet(".card { box-shadow: 2px 2px 2px 3px rgba(0,0,0,0.5); }").unwrap();
    assert_eq!(
        serialize(&model),
        ".card {\n\
         \tbox-shadow: 2px 2px 2px 3px rgba(0,0,0,0.5);\n\
         }\n\
         .card.cssedit-editable-selected {\n\
         \tbox-shadow: 0 0 1px 2px rgba(255,255,0,0.8), 2px 2px 2px 3px rgba(0,0,0,0.5);\n\
         }\n"
    );
}

#[test]
fn test_companion_follows_its_rule_in_bucket_order() {
    let model = parse_stylesheet("#id { box-shadow: none; } div { color: red; }").unwrap();
    let options = SerializeOptions {
        selected_class: "on".into(),
        selected_shadow: "0 0 2px gold".into(),
    };
    assert_eq!(
        serialize_with(&model, &options),
        "div {\n\tcolor: red;\n}\n#id {\n\tbox-shadow: none;\n}\n#id.on {\n\tbox-shadow: 0 0 2px gold, none;\n}\n"
    );
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn test_serialize_is_idempotent() {
    let css = r#"
        /* page */
        #main, .card { box-shadow: 1px 1px 3px 2px #333 inset; color: Coral }
        .card:hover { background-image: url("data:image/gif;base64,R0lGOD;lhAQ=="); }
        ul > li { margin: 1px 2px; grid-area: 1 / 2; }
    "#;
    let once = serialize(&parse_stylesheet(css).unwrap());
    let twice = serialize(&parse_stylesheet(&once).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn test_reparse_equals_model() {
    let model = parse_stylesheet("a { color: red; } .b { width: 2px; box-shadow: none; }").unwrap();
    let reparsed = parse_stylesheet(&serialize(&model)).unwrap();
    assert_eq!(reparsed, model);
}

#[test]
fn test_comment_opener_inside_url_survives_reparse() {
    let mut model = StyleModel::new();
    model.set_property(".a", "background-image", "url(\"a/*b.png\")", true);
    model.set_property(".a", "color", "red", true);

    let text = serialize(&model);
    assert_eq!(
        text,
        ".a {\n\tbackground-image: url(\"a/*b.png\");\n\tcolor: red;\n}\n"
    );
    assert_eq!(parse_stylesheet(&text).unwrap(), model);
}

#[test]
fn test_edit_via_codec_then_serialize() {
    let mut model = parse_stylesheet(".x { color: #fff; border-width: 2px; }").unwrap();
    let decoded = decode_value("color", &model.property(".x", "color").unwrap().value);
    model.set_property(".x", "color", encode_value("color", &decoded), true);
    assert_eq!(
        serialize(&model),
        ".x {\n\tcolor: #ffffff;\n\tborder-width: 2px;\n}\n"
    );
}
