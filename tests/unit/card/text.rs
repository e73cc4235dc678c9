use super::*;
use crate::binding::sink::CommandSource;
use crate::foundation::core::{BlockPos, Region};
use crate::foundation::error::FaultKind;
use crate::surface::world::DisplayWorld;

/// 2x1 wall directly below the computer at the origin: 20 columns, 5 rows.
fn world() -> DisplayWorld {
    let mut w = DisplayWorld::default();
    let region = Region::spanning(BlockPos::new(0, -1, 0), BlockPos::new(1, -1, 0));
    for p in region.positions() {
        w.place_candidate(p, None);
    }
    w.form(region).unwrap();
    w
}

fn ctx() -> CallContext {
    CallContext::new(BlockPos::new(0, 0, 0), 3)
}

fn rows(w: &DisplayWorld) -> Vec<String> {
    let id = w.surface_at(BlockPos::new(0, -1, 0)).unwrap();
    w.surface(id).unwrap().data.clone()
}

#[test]
fn set_characters_pads_and_overwrites() {
    let mut w = world();
    let card = TextCard;
    let b = card.get_render_binding(ctx(), "down").unwrap();

    assert_eq!(
        card.get_render_size(&mut w, ctx(), DrawTarget::Live(&b))
            .unwrap(),
        (20, 5)
    );
    card.set_characters(&mut w, ctx(), DrawTarget::Live(&b), 3, 1, "hello")
        .unwrap();
    card.set_characters(&mut w, ctx(), DrawTarget::Live(&b), 4, 1, "EL")
        .unwrap();

    let r = rows(&w);
    assert_eq!(r.len(), 5);
    assert_eq!(r[0], "");
    assert_eq!(r[1], "   hELlo");

    // Filling the row to the last column is allowed.
    card.set_characters(&mut w, ctx(), DrawTarget::Live(&b), 15, 4, "abcde")
        .unwrap();
    assert_eq!(rows(&w)[4], "               abcde");
}

#[test]
fn set_characters_bounds() {
    let mut w = world();
    let card = TextCard;
    let b = card.get_render_binding(ctx(), "down").unwrap();

    let err = card
        .set_characters(&mut w, ctx(), DrawTarget::Live(&b), 16, 0, "abcde")
        .unwrap_err();
    assert_eq!(err.kind(), FaultKind::Validation);
    assert_eq!(err.line(), Some(3));

    let err = card
        .set_characters(&mut w, ctx(), DrawTarget::Live(&b), 0, 5, "a")
        .unwrap_err();
    assert_eq!(err.kind(), FaultKind::Validation);

    let err = card
        .set_characters(&mut w, ctx(), DrawTarget::Live(&b), -1, 0, "a")
        .unwrap_err();
    assert_eq!(err.kind(), FaultKind::Validation);
}

#[test]
fn clear_writes_blank_rows() {
    let mut w = world();
    let card = TextCard;
    let b = card.get_render_binding(ctx(), "down").unwrap();
    card.set_characters(&mut w, ctx(), DrawTarget::Live(&b), 0, 0, "x")
        .unwrap();
    card.clear(&mut w, ctx(), DrawTarget::Live(&b)).unwrap();
    assert_eq!(rows(&w), vec![String::new(); 5]);
}

#[test]
fn graphics_binding_is_rejected_by_text_card() {
    let mut w = world();
    let b = RenderBinding::maximum(Direction::Down);
    let err = TextCard
        .clear(&mut w, ctx(), DrawTarget::Live(&b))
        .unwrap_err();
    assert_eq!(err.kind(), FaultKind::Validation);
}

#[test]
fn text_buffer_flip_respects_grid() {
    let mut w = world();
    let card = TextCard;
    let b = card.get_render_binding(ctx(), "down").unwrap();

    let mut buf = card.create_off_screen_buffer(ctx(), 10, 2).unwrap();
    assert_eq!(buf.weight(), 44);
    card.set_characters(&mut w, ctx(), DrawTarget::Buffer(&mut buf), 0, 1, "ok")
        .unwrap();
    assert_eq!(buf.commands(), &["".to_owned(), "ok".to_owned()]);
    card.render_buffer(&mut w, ctx(), &buf, DrawTarget::Live(&b))
        .unwrap();
    assert_eq!(rows(&w), vec!["".to_owned(), "ok".to_owned()]);

    let wide = card.create_off_screen_buffer(ctx(), 21, 1).unwrap();
    let err = card
        .render_buffer(&mut w, ctx(), &wide, DrawTarget::Live(&b))
        .unwrap_err();
    assert_eq!(err.kind(), FaultKind::Capacity);
    assert_eq!(rows(&w), vec!["".to_owned(), "ok".to_owned()]);
}
