use super::*;
use crate::foundation::core::BlockPos;

fn recipe() -> DisplayRecipe {
    DisplayRecipe::new(&DisplayConfig::default())
}

fn block(facing: Option<Direction>) -> CandidateBlock {
    CandidateBlock {
        marker: DisplayRecipe::CANDIDATE_MARKER.to_owned(),
        facing,
    }
}

#[test]
fn region_acceptance() {
    let r = recipe();
    assert!(r.accepts_region(Size3::new(5, 1, 3)));
    assert!(r.accepts_region(Size3::new(1, 1, 1)));
    assert!(r.accepts_region(Size3::new(1, 5, 5)));
    assert!(!r.accepts_region(Size3::new(6, 1, 1)));
    assert!(!r.accepts_region(Size3::new(2, 2, 2)));
}

#[test]
fn candidates_and_joins() {
    let r = recipe();
    assert!(r.is_candidate(&block(None)));
    assert!(!r.is_candidate(&CandidateBlock {
        marker: "stone".to_owned(),
        facing: None,
    }));
    assert!(r.can_join(&block(Some(Direction::North)), &block(Some(Direction::North))));
    assert!(!r.can_join(&block(Some(Direction::North)), &block(Some(Direction::East))));
}

#[test]
fn formation_takes_size_and_optional_facing() {
    let r = recipe();
    let region = Region::spanning(BlockPos::new(0, 0, 0), BlockPos::new(2, 1, 0));
    let s = r.on_formed(&region, &block(Some(Direction::South)));
    assert_eq!(s.size, Size3::new(3, 2, 1));
    assert_eq!(s.front, Some(Direction::South));
    assert_eq!(s.mode, None);
    assert!(s.data.is_empty());

    let s = r.on_formed(&region, &block(None));
    assert_eq!(s.front, None);
}

#[test]
fn unload_and_load_copy_verbatim() {
    let r = recipe();
    let region = Region::spanning(BlockPos::new(0, 0, 0), BlockPos::new(1, 0, 0));
    let mut s = r.on_formed(&region, &block(Some(Direction::Up)));
    s.mode = Some("Graphics:256,128".to_owned());
    s.data = vec!["drawLine:0:0:1:1:color(1,2,3,4):1".to_owned()];

    let holder = r.on_unloaded(s.clone());
    let back = r.on_loaded(Some(holder), &region, &block(Some(Direction::Up)));
    assert_eq!(back, s);

    let fresh = r.on_loaded(None, &region, &block(Some(Direction::Up)));
    assert_eq!(fresh.mode, None);
}

#[test]
fn ensure_mode_resets_queue_only_on_change() {
    let mut s = DisplaySurface::formed(Size3::new(1, 1, 1), None);
    assert!(s.ensure_mode(&DisplayMode::graphics(128, 128)));
    s.data.push("x".to_owned());
    assert!(!s.ensure_mode(&DisplayMode::graphics(128, 128)));
    assert_eq!(s.data.len(), 1);
    assert!(s.ensure_mode(&DisplayMode::graphics(64, 64)));
    assert!(s.data.is_empty());
    assert_eq!(s.mode.as_deref(), Some("Graphics:64,64"));
}

#[test]
fn persisted_layout_shape() {
    let s = DisplaySurface {
        size: Size3::new(2, 1, 1),
        front: Some(Direction::North),
        mode: None,
        data: vec!["a".to_owned()],
    };
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "size": [2, 1, 1], "front": "north", "mode": null, "data": ["a"] })
    );
    let c = DisplayConfig::default();
    assert_eq!(s.max_resolution(&c), (256, 128));
    assert_eq!(s.text_grid(&c), (20, 5));
}

#[test]
fn flat_display_uses_both_horizontal_axes() {
    let s = DisplaySurface {
        size: Size3::new(5, 1, 3),
        front: Some(Direction::Up),
        mode: None,
        data: Vec::new(),
    };
    let c = DisplayConfig::default();
    assert_eq!(s.max_resolution(&c), (640, 384));
    assert_eq!(s.text_grid(&c), (50, 15));
}
