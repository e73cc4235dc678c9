use super::*;
use crate::foundation::error::FaultKind;

#[test]
fn hex_six_and_eight_digits() {
    assert_eq!(parse_hex_color("ff0000").unwrap(), Rgba::new(255, 0, 0, 255));
    assert_eq!(
        parse_hex_color("ff0000ff").unwrap(),
        Rgba::new(255, 0, 0, 255)
    );
    assert_eq!(
        parse_hex_color("0A0b0C80").unwrap(),
        Rgba::new(10, 11, 12, 128)
    );
}

#[test]
fn hex_rejects_bad_length_and_digits() {
    for bad in ["ff00", "", "fff", "ff0000f", "ff0000fff", "#ff0000", "gg0000", "+f0000", "ff00é0"] {
        let err = parse_hex_color(bad).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Encoding, "{bad}");
    }
}

#[test]
fn paint_tokens_round_trip() {
    for token in [
        "color(255,0,0,255)",
        "color(0,0,0,0)",
        "gradient(255,0,0,255,0,0,0,0,255,128,-10,64,true)",
        "gradient(1,2,3,4,5,6,7,8,9,10,11,12,false)",
    ] {
        let paint = Paint::decode(token).unwrap();
        assert_eq!(paint.encode(), token);
    }
}

#[test]
fn paint_rejects_malformed_tokens() {
    for bad in [
        "color(256,0,0,255)",
        "color(1,2,3)",
        "colour(1,2,3,4)",
        "color(1,2,3,4",
        "gradient(1,2,3,4,5,6,7,8,9,10,11,12,yes)",
        "gradient(1,2,3,4,5,6,7,8,9,10,11,12)",
        "color(+255,0,0,255)",
        "color(0255,0,0,255)",
        "color(00,0,0,255)",
        "gradient(1,2,3,4,-0,6,7,8,9,10,11,12,true)",
        "gradient(1,2,3,4,+5,6,7,8,9,10,11,12,true)",
    ] {
        let err = Paint::decode(bad).unwrap_err();
        assert_eq!(err.kind(), FaultKind::Encoding, "{bad}");
    }
}
