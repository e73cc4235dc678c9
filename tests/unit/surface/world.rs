use super::*;
use crate::foundation::core::Size3;
use crate::foundation::error::FaultKind;

fn world_with_wall(a: BlockPos, b: BlockPos, facing: Option<Direction>) -> (DisplayWorld, Region) {
    let mut w = DisplayWorld::default();
    let region = Region::spanning(a, b);
    for p in region.positions() {
        w.place_candidate(p, facing);
    }
    (w, region)
}

#[test]
fn form_accepts_flat_region_and_resolves_members() {
    let (mut w, region) = world_with_wall(
        BlockPos::new(0, 0, 0),
        BlockPos::new(4, 0, 2),
        Some(Direction::Up),
    );
    let id = w.form(region).unwrap();
    assert_eq!(w.surface_at(BlockPos::new(3, 0, 1)), Some(id));
    assert_eq!(w.surface_at(BlockPos::new(5, 0, 1)), None);
    let s = w.surface(id).unwrap();
    assert_eq!(s.size, Size3::new(5, 1, 3));
    assert_eq!(s.front, Some(Direction::Up));
}

#[test]
fn form_rejects_bad_regions() {
    let (mut w, cube) = world_with_wall(BlockPos::new(0, 0, 0), BlockPos::new(1, 1, 1), None);
    assert_eq!(w.form(cube).unwrap_err().kind(), FaultKind::Validation);

    let (mut w, long) = world_with_wall(BlockPos::new(0, 0, 0), BlockPos::new(5, 0, 0), None);
    assert_eq!(w.form(long).unwrap_err().kind(), FaultKind::Validation);

    let (mut w, region) = world_with_wall(
        BlockPos::new(0, 0, 0),
        BlockPos::new(2, 0, 0),
        Some(Direction::North),
    );
    w.place_candidate(BlockPos::new(2, 0, 0), Some(Direction::South));
    assert!(w.form(region).is_err());

    let (mut w, region) = world_with_wall(BlockPos::new(0, 0, 0), BlockPos::new(2, 0, 0), None);
    w.remove_block(BlockPos::new(1, 0, 0));
    assert!(w.form(region).is_err());
}

#[test]
fn unload_then_reform_restores_state_and_consumes_holder() {
    let (mut w, region) = world_with_wall(
        BlockPos::new(0, 0, 0),
        BlockPos::new(1, 1, 0),
        Some(Direction::North),
    );
    let id = w.form(region).unwrap();
    let mut state = w.surface(id).unwrap().clone();
    state.mode = Some("Text:20,10".to_owned());
    state.data = vec!["hello".to_owned(), String::new()];
    w.commit(id, state.clone()).unwrap();

    let holder = w.unload(id).unwrap();
    assert_eq!(DisplaySurface::from(holder), state);
    assert_eq!(w.surface_at(BlockPos::new(0, 0, 0)), None);
    assert!(w.holder_at(region.min).is_some());

    let id2 = w.form(region).unwrap();
    assert_ne!(id, id2);
    assert_eq!(w.surface(id2), Some(&state));
    assert!(w.holder_at(region.min).is_none());
}

#[test]
fn disband_discards_state() {
    let (mut w, region) = world_with_wall(BlockPos::new(0, 0, 0), BlockPos::new(0, 2, 0), None);
    let id = w.form(region).unwrap();
    w.remove_block(BlockPos::new(0, 1, 0));
    assert!(w.surface(id).is_none());
    assert!(w.holder_at(region.min).is_none());
    assert_eq!(
        w.commit(id, DisplaySurface::formed(Size3::new(1, 3, 1), None))
            .unwrap_err()
            .kind(),
        FaultKind::Resolution
    );
}

#[test]
fn overlapping_regions_are_rejected() {
    let (mut w, region) = world_with_wall(BlockPos::new(0, 0, 0), BlockPos::new(2, 0, 0), None);
    w.form(region).unwrap();
    let sub = Region::spanning(BlockPos::new(1, 0, 0), BlockPos::new(2, 0, 0));
    assert!(w.form(sub).is_err());
}
