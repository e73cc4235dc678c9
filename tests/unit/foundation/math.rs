use super::*;

#[test]
fn fnv_str_is_length_prefixed() {
    let mut a = Fnv1a64::new_default();
    a.write_str("ab");
    a.write_str("c");
    let mut b = Fnv1a64::new_default();
    b.write_str("a");
    b.write_str("bc");
    assert_ne!(a.finish(), b.finish());

    let mut c = Fnv1a64::new_default();
    c.write_u8(1);
    let mut d = Fnv1a64::new_default();
    d.write_bytes(&[1]);
    assert_eq!(c.finish(), d.finish());
}

#[test]
fn blend_over_extremes() {
    let mut px = [10u8, 20, 30, 255];
    blend_over_opaque(&mut px, [200, 100, 50, 255]);
    assert_eq!(px, [200, 100, 50, 255]);

    let mut px = [10u8, 20, 30, 255];
    blend_over_opaque(&mut px, [200, 100, 50, 0]);
    assert_eq!(px, [10, 20, 30, 255]);

    let mut px = [0u8, 0, 0, 255];
    blend_over_opaque(&mut px, [255, 255, 255, 128]);
    assert_eq!(px[0], 128);
}
