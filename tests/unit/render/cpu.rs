use super::*;

const RED: Rgba = Rgba::new(255, 0, 0, 255);
const BLUE: Rgba = Rgba::new(0, 0, 255, 255);

fn gradient(cyclic: bool) -> Paint {
    Paint::LinearGradient {
        start: RED,
        start_at: (0, 0),
        end: BLUE,
        end_at: (10, 0),
        cyclic,
    }
}

fn lines(cmds: &[&str]) -> Vec<String> {
    cmds.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn gradient_clamps_outside_anchors_when_acyclic() {
    let g = gradient(false);
    assert_eq!(gradient_color_at(&g, -5.0, 3.0), RED);
    assert_eq!(gradient_color_at(&g, 0.0, 0.0), RED);
    assert_eq!(gradient_color_at(&g, 10.0, 7.0), BLUE);
    assert_eq!(gradient_color_at(&g, 25.0, 0.0), BLUE);
    assert_eq!(gradient_color_at(&g, 5.0, 0.0), Rgba::new(128, 0, 128, 255));
}

#[test]
fn cyclic_gradient_reflects() {
    let g = gradient(true);
    assert_eq!(gradient_color_at(&g, 20.0, 0.0), RED);
    assert_eq!(gradient_color_at(&g, 15.0, 0.0), gradient_color_at(&g, 5.0, 0.0));
    assert_eq!(gradient_color_at(&g, -10.0, 0.0), BLUE);
}

#[test]
fn solid_paint_is_uniform_and_coincident_anchors_use_start() {
    assert_eq!(gradient_color_at(&Paint::Solid(BLUE), 3.0, 4.0), BLUE);
    let g = Paint::LinearGradient {
        start: RED,
        start_at: (4, 4),
        end: BLUE,
        end_at: (4, 4),
        cyclic: false,
    };
    assert_eq!(gradient_color_at(&g, 100.0, 0.0), RED);
}

#[test]
fn filled_rect_over_black_background() {
    let mut r = GraphicsRenderer::new(FontBook::new());
    let frame = r
        .render(
            (128, 128),
            &lines(&["drawRect:10:10:50:50:color(255,0,0,255):true"]),
        )
        .unwrap();
    assert_eq!((frame.width, frame.height), (128, 128));
    assert_eq!(frame.data.len(), 128 * 128 * 4);
    assert_eq!(frame.pixel(30, 30), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(70, 70), Some([0, 0, 0, 255]));
}

#[test]
fn later_commands_paint_over_earlier_ones() {
    let mut r = GraphicsRenderer::new(FontBook::new());
    let frame = r
        .render(
            (64, 64),
            &lines(&[
                "drawRect:0:0:64:64:color(255,0,0,255):true",
                "drawRect:16:16:32:32:color(0,255,0,255):true",
            ]),
        )
        .unwrap();
    assert_eq!(frame.pixel(2, 2), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(32, 32), Some([0, 255, 0, 255]));
}

#[test]
fn outline_leaves_interior_black() {
    let mut r = GraphicsRenderer::new(FontBook::new());
    let frame = r
        .render(
            (64, 64),
            &lines(&["drawRect:8:8:40:40:color(255,255,255,255):false"]),
        )
        .unwrap();
    assert_eq!(frame.pixel(8, 20), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(28, 28), Some([0, 0, 0, 255]));
}

#[test]
fn undecodable_lines_and_missing_fonts_are_skipped() {
    let mut r = GraphicsRenderer::new(FontBook::new());
    let frame = r
        .render(
            (32, 32),
            &lines(&[
                "drawBlob:1:2",
                "text:4:20:color(255,255,255,255):Mono:12:hello",
                "drawLine:0:16:31:16:color(0,0,255,255):3",
            ]),
        )
        .unwrap();
    assert_eq!(frame.pixel(10, 16), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(10, 4), Some([0, 0, 0, 255]));
}

#[test]
fn oversized_canvas_is_rejected() {
    let mut r = GraphicsRenderer::new(FontBook::new());
    assert!(r.render((70_000, 1), &[]).is_err());
    assert!(r.render((0, 1), &[]).is_err());
    assert_eq!(
        r.render((4097, 4097), &[]).unwrap_err().kind(),
        crate::foundation::error::FaultKind::Capacity
    );
}

#[test]
fn text_is_drawn_above_its_baseline_in_the_paint_color() {
    let mut fonts = FontBook::new();
    fonts
        .load("Mono", std::path::Path::new("tests/data/fonts/DejaVuSansMono.ttf"))
        .unwrap();
    let mut r = GraphicsRenderer::new(fonts);
    let frame = r
        .render(
            (64, 48),
            &lines(&["text:4:30:color(0,255,0,255):Mono:20:HH"]),
        )
        .unwrap();

    let mut lit = Vec::new();
    for y in 0..frame.height {
        for x in 0..frame.width {
            let px = frame.pixel(x, y).unwrap();
            if px != [0, 0, 0, 255] {
                lit.push((x, y, px));
            }
        }
    }
    assert!(!lit.is_empty(), "no text pixels drawn");
    for &(x, y, px) in &lit {
        assert!(y <= 30 && y >= 10, "pixel at ({x}, {y}) outside the cap height");
        assert!(x >= 3, "pixel at ({x}, {y}) left of the origin");
        assert_eq!((px[0], px[2], px[3]), (0, 0, 255), "({x}, {y}) is {px:?}");
    }
    assert!(lit.iter().any(|&(_, _, px)| px[1] > 200));
    assert!(lit.iter().any(|&(_, y, _)| y >= 27));
}
