use super::*;

fn atlas() -> GlyphAtlas {
    let mut image = image::RgbaImage::new(2, 1);
    image.put_pixel(0, 0, image::Rgba([255, 255, 255, 255]));
    image.put_pixel(1, 0, image::Rgba([0, 0, 0, 0]));

    let a = GlyphMetrics {
        u: 0.0,
        v: 0.0,
        u_width: 0.5,
        v_height: 1.0,
        width: 2,
        height: 2,
        x_offset: 0,
        y_offset: 0,
        advance: 2,
    };
    let mut glyphs = HashMap::new();
    glyphs.insert('A', a);
    GlyphAtlas::from_parts(image, glyphs, 4).unwrap()
}

#[test]
fn canvas_is_grid_times_cell() {
    let mut r = TextGridRenderer::new(None, (8, 16));
    let frame = r.render((20, 5), &[]).unwrap();
    assert_eq!((frame.width, frame.height), (160, 80));
    assert_eq!(frame.pixel(159, 79), Some([0, 0, 0, 255]));
}

#[test]
fn oversized_grid_is_rejected_before_allocating() {
    let mut r = TextGridRenderer::new(None, (8, 16));
    let err = r.render((1_000_000, 1_000_000), &[]).unwrap_err();
    assert_eq!(err.kind(), crate::foundation::error::FaultKind::Capacity);
    assert!(r.render((0, 5), &[]).is_err());
    assert!(r.render((u32::MAX, 2), &[]).is_err());
}

#[test]
fn glyphs_blit_into_their_cells() {
    let mut r = TextGridRenderer::new(Some(atlas()), (4, 4));
    let frame = r
        .render((3, 2), &["AA".to_owned(), "xA".to_owned()])
        .unwrap();
    assert_eq!((frame.width, frame.height), (12, 8));

    let white = Some([255, 255, 255, 255]);
    let black = Some([0, 0, 0, 255]);
    assert_eq!(frame.pixel(0, 0), white);
    assert_eq!(frame.pixel(1, 1), white);
    assert_eq!(frame.pixel(2, 2), black);
    assert_eq!(frame.pixel(4, 0), white);
    assert_eq!(frame.pixel(8, 0), black);
    // Unknown characters leave their cell empty.
    assert_eq!(frame.pixel(0, 4), black);
    assert_eq!(frame.pixel(5, 5), white);
}

#[test]
fn rows_and_columns_past_the_grid_are_clipped() {
    let mut r = TextGridRenderer::new(Some(atlas()), (4, 4));
    let frame = r
        .render((1, 1), &["AAAA".to_owned(), "AAAA".to_owned()])
        .unwrap();
    assert_eq!((frame.width, frame.height), (4, 4));
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
}

#[test]
fn atlas_validation() {
    let m = GlyphMetrics {
        u: 0.0,
        v: 0.0,
        u_width: 1.0,
        v_height: 1.0,
        width: 1,
        height: 1,
        x_offset: 0,
        y_offset: 0,
        advance: 9,
    };
    let glyphs: HashMap<char, GlyphMetrics> = [('W', m)].into_iter().collect();
    let err = GlyphAtlas::from_parts(image::RgbaImage::new(1, 1), glyphs, 8).unwrap_err();
    assert!(err.to_string().contains("advance"));

    let outside = GlyphMetrics {
        u: 0.8,
        advance: 1,
        ..m
    };
    let glyphs: HashMap<char, GlyphMetrics> = [('W', outside)].into_iter().collect();
    assert!(GlyphAtlas::from_parts(image::RgbaImage::new(1, 1), glyphs, 8).is_err());
}

#[test]
fn metrics_parse_from_json() {
    let json = r#"{"A": {"u": 0.0, "v": 0.0, "u_width": 0.5, "v_height": 1.0,
                        "width": 2, "height": 2, "advance": 2}}"#;
    let glyphs: HashMap<char, GlyphMetrics> = serde_json::from_str(json).unwrap();
    assert_eq!(glyphs[&'A'].x_offset, 0);
    assert_eq!(glyphs[&'A'].advance, 2);
}
