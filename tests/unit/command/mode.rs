use super::*;

#[test]
fn mode_strings_round_trip() {
    let m = DisplayMode::graphics(640, 128);
    assert_eq!(m.to_string(), "Graphics:640,128");
    assert_eq!("Graphics:640,128".parse::<DisplayMode>().unwrap(), m);

    let t = DisplayMode::text(30, 10);
    assert_eq!(t.to_string(), "Text:30,10");
    assert_eq!("Text:30,10".parse::<DisplayMode>().unwrap(), t);
    assert_eq!(t.kind.prefix(), TEXT_PREFIX);
}

#[test]
fn dimensions_must_be_plain_decimal() {
    assert_eq!(parse_dimensions("12,7").unwrap(), (12, 7));
    for bad in ["12", "12,", ",7", "+12,7", "12, 7", "0x10,7", "1,99999999999"] {
        assert!(parse_dimensions(bad).is_err(), "{bad}");
    }
    assert!("Vector:1,2".parse::<DisplayMode>().is_err());
}

#[test]
fn queues_are_checked_against_the_mode() {
    let g = DisplayMode::graphics(10, 10);
    g.check_lines(&["drawLine:0:0:9:9:color(1,2,3,4):1".to_owned()])
        .unwrap();
    assert!(g.check_lines(&["drawLine:0:0".to_owned()]).is_err());

    let t = DisplayMode::text(3, 1);
    t.check_lines(&["abc".to_owned()]).unwrap();
    t.check_lines(&[]).unwrap();
    assert!(t.check_lines(&["abcd".to_owned()]).is_err());
    assert!(t.check_lines(&["a".to_owned(), "b".to_owned()]).is_err());
}
