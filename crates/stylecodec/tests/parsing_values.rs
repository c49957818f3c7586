//! Integration tests for value decoding and encoding.
//!
//! Covers the three composite kinds and their variants:
//! - length: var, length_val, calc
//! - colordir: var, color24, color12, color_rgba, color_rgb, color_name
//! - image: var, file, url
//!
//! plus multi-slot properties, checkboxes and the raw-text fallback.

use stylecodec::grammar::{CompositeKind, Variant, properties};
use stylecodec::{CompositeValue, DecodedValue, SlotValue, SubValue, decode_value, encode_value};

fn composite(decoded: &DecodedValue, slot: usize) -> &CompositeValue {
    decoded.slots().unwrap()[slot].as_composite().unwrap()
}

fn numbers(values: &[f64]) -> Vec<SubValue> {
    values.iter().copied().map(SubValue::Number).collect()
}

fn round_trip(property: &str, raw: &str) {
    let decoded = decode_value(property, raw);
    let encoded = encode_value(property, &decoded);
    assert_eq!(
        decode_value(property, &encoded),
        decoded,
        "{property}: {raw:?} re-encoded as {encoded:?}"
    );
}

// ============================================================================
// COLORS
// ============================================================================

#[test]
fn test_short_hex_white() {
    let decoded = decode_value("color", "#fff");
    let color = composite(&decoded, 0);
    assert_eq!(color.kind, CompositeKind::ColorDir);
    assert_eq!(color.variant, Variant::Color24);
    assert_eq!(color.values, numbers(&[255.0, 255.0, 255.0, 1.0]));
    assert_eq!(encode_value("color", &decoded), "#ffffff");
}

#[test]
fn test_rgba_background() {
    let decoded = decode_value("background-color", "rgba(10,20,30,0.5)");
    let color = composite(&decoded, 0);
    assert_eq!(color.variant, Variant::ColorRgba);
    assert_eq!(color.values, numbers(&[10.0, 20.0, 30.0, 0.5]));
    assert_eq!(
        encode_value("background-color", &decoded),
        "rgba(10, 20, 30, 0.5)"
    );
}

#[test]
fn test_rgb_encodes_as_hex() {
    let decoded = decode_value("color", "rgb(255, 136, 0)");
    assert_eq!(encode_value("color", &decoded), "#ff8800");
}

#[test]
fn test_rgb_components_are_clamped() {
    let decoded = decode_value("color", "rgba(300, 12.6, 0, 2)");
    assert_eq!(composite(&decoded, 0).values, numbers(&[255.0, 13.0, 0.0, 1.0]));
    assert_eq!(encode_value("color", &decoded), "#ff0d00");
}

#[test]
fn test_named_color_keeps_spelling() {
    let decoded = decode_value("border-color", "DarkOrange");
    let color = composite(&decoded, 0);
    assert_eq!(color.variant, Variant::ColorName);
    assert_eq!(color.values[1], SubValue::Text("#ff8c00".into()));
    assert_eq!(encode_value("border-color", &decoded), "DarkOrange");
}

#[test]
fn test_transparent_is_a_named_color() {
    let decoded = decode_value("background-color", "transparent");
    assert_eq!(composite(&decoded, 0).variant, Variant::ColorName);
}

#[test]
fn test_eight_digit_hex_is_unparsed() {
    assert_eq!(
        decode_value("color", "#aabbccdd"),
        DecodedValue::Unparsed("#aabbccdd".into())
    );
}

#[test]
fn test_color_var() {
    let decoded = decode_value("color", "var(--brand)");
    let color = composite(&decoded, 0);
    assert_eq!(color.variant, Variant::Var);
    assert_eq!(encode_value("color", &decoded), "var(--brand)");
}

// ============================================================================
// LENGTHS
// ============================================================================

#[test]
fn test_length_units() {
    for raw in ["2px", "50%", "1.5em", "2rem", "12pt", "3mm", "4q", "10vw", "10vh", "1ex", "2ch", "1in", "1pc"] {
        let decoded = decode_value("width", raw);
        assert_eq!(composite(&decoded, 0).variant, Variant::LengthVal, "{raw}");
        assert_eq!(encode_value("width", &decoded), raw);
    }
}

#[test]
fn test_negative_length() {
    let decoded = decode_value("text-indent", "-1.25em");
    assert_eq!(
        composite(&decoded, 0).values,
        vec![SubValue::Number(-1.25), SubValue::Text("em".into())]
    );
}

#[test]
fn test_unitless_zero_is_unparsed() {
    assert!(decode_value("top", "0").is_unparsed());
}

#[test]
fn test_overflowing_length_is_unparsed() {
    let raw = format!("1{}px", "0".repeat(400));
    assert_eq!(decode_value("width", &raw), DecodedValue::Unparsed(raw.clone()));
    round_trip("width", &raw);
}

#[test]
fn test_calc_length() {
    let decoded = decode_value("width", "calc(100% - 20px)");
    assert_eq!(composite(&decoded, 0).variant, Variant::Calc);
    assert_eq!(encode_value("width", &decoded), "calc(100% - 20px)");
}

#[test]
fn test_auto_is_not_a_length() {
    assert_eq!(
        decode_value("width", "auto"),
        DecodedValue::Unparsed("auto".into())
    );
}

// ============================================================================
// IMAGES
// ============================================================================

#[test]
fn test_image_url() {
    let decoded = decode_value("background-image", "url(\"img/bg.png\")");
    let image = composite(&decoded, 0);
    assert_eq!(image.kind, CompositeKind::Image);
    assert_eq!(image.variant, Variant::Url);
    assert_eq!(image.values, vec![SubValue::Text("img/bg.png".into())]);
}

#[test]
fn test_image_data_url_is_file() {
    let raw = "url(\"data:image/png;base64,iVBORw0KGgo=\")";
    let decoded = decode_value("background-image", raw);
    assert_eq!(composite(&decoded, 0).variant, Variant::File);
    assert_eq!(encode_value("background-image", &decoded), raw);
}

#[test]
fn test_single_quoted_url_normalizes_quotes() {
    let decoded = decode_value("background-image", "url('a.png')");
    assert_eq!(encode_value("background-image", &decoded), "url(\"a.png\")");
}

// ============================================================================
// MULTI-SLOT PROPERTIES
// ============================================================================

#[test]
fn test_box_shadow_full() {
    let decoded = decode_value("box-shadow", "1px 2px 3px 4px rgba(0,0,0,0.25) inset");
    let slots = decoded.slots().unwrap();
    assert_eq!(slots.len(), 6);
    assert_eq!(slots[5], SlotValue::Checkbox(true));
    assert_eq!(
        encode_value("box-shadow", &decoded),
        "1px 2px 3px 4px rgba(0, 0, 0, 0.25) inset"
    );
}

#[test]
fn test_box_shadow_without_inset() {
    let decoded = decode_value("box-shadow", "1px 2px 3px 4px #000");
    assert_eq!(decoded.slots().unwrap()[5], SlotValue::Checkbox(false));
    assert_eq!(encode_value("box-shadow", &decoded), "1px 2px 3px 4px #000000");
}

#[test]
fn test_box_shadow_unitless_zero_is_unparsed() {
    // Unitless zero is not a length, so the whole value stays verbatim.
    assert!(decode_value("box-shadow", "0 0 1px 2px red").is_unparsed());
}

#[test]
fn test_background_position_pair() {
    let decoded = decode_value("background-position", "left bottom");
    assert_eq!(
        decoded,
        DecodedValue::Slots(vec![
            SlotValue::Choice("left".into()),
            SlotValue::Choice("bottom".into()),
        ])
    );
}

#[test]
fn test_padding_mixed_variants() {
    let decoded = decode_value("padding", "1px var(--gap) calc(2em + 1px) 5%");
    let variants: Vec<_> = (0..4).map(|i| composite(&decoded, i).variant).collect();
    assert_eq!(
        variants,
        [Variant::LengthVal, Variant::Var, Variant::Calc, Variant::LengthVal]
    );
}

#[test]
fn test_edited_slot_encodes() {
    let mut decoded = decode_value("margin", "1px 2px 3px 4px");
    decoded.slots_mut().unwrap()[1] = SlotValue::Composite(CompositeValue::length(8.0, "em"));
    decoded.slots_mut().unwrap()[3] = SlotValue::Absent;
    assert_eq!(encode_value("margin", &decoded), "1px 8em 3px");
}

// ============================================================================
// FALLBACKS
// ============================================================================

#[test]
fn test_unknown_property_passthrough() {
    let raw = "repeat(3, 1fr) / auto-flow";
    assert_eq!(
        decode_value("grid-template", raw),
        DecodedValue::Unparsed(raw.into())
    );
    assert_eq!(
        encode_value("grid-template", &DecodedValue::Unparsed(raw.into())),
        raw
    );
}

#[test]
fn test_shorthand_is_unparsed() {
    assert!(decode_value("border-style", "solid dashed").is_unparsed());
}

#[test]
fn test_select_mismatch() {
    assert!(decode_value("position", "sticky").is_unparsed());
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn test_round_trip_stable() {
    let cases = [
        ("color", "#abc"),
        ("color", "RGB(1,2,3)"),
        ("color", "rgb(1,2,3)"),
        ("color", "rgba(0, 0, 0, 0)"),
        ("color", "tomato"),
        ("background-image", "URL(\"x.gif\")"),
        ("background-image", "url('a\"b.png')"),
        ("box-shadow", "2px 2px 2px 3px rgba(0,0,0,0.5)"),
        ("font-synthesis", "weight"),
        ("font-family", "monospace"),
        ("margin", "0px auto"),
        ("line-height", "1.4em"),
    ];
    for (property, raw) in cases {
        round_trip(property, raw);
    }
}

#[test]
fn test_every_default_round_trips() {
    for info in properties() {
        round_trip(info.name, info.default_value);
    }
}
