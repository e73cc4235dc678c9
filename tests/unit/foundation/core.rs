use super::*;

#[test]
fn direction_parse_is_case_insensitive() {
    assert_eq!("Down".parse::<Direction>().unwrap(), Direction::Down);
    assert_eq!(" east ".parse::<Direction>().unwrap(), Direction::East);
    let err = "left".parse::<Direction>().unwrap_err();
    assert_eq!(
        err.kind(),
        crate::foundation::error::FaultKind::Validation
    );
}

#[test]
fn offsets_follow_unit_vectors() {
    let p = BlockPos::new(4, 10, -2);
    assert_eq!(p.offset(Direction::Up), BlockPos::new(4, 11, -2));
    assert_eq!(p.offset(Direction::North), BlockPos::new(4, 10, -3));
    assert_eq!(p.offset(Direction::West), BlockPos::new(3, 10, -2));
    for d in Direction::ALL {
        let [x, y, z] = d.unit();
        assert_eq!(x.abs() + y.abs() + z.abs(), 1);
    }
}

#[test]
fn region_size_and_membership() {
    let r = Region::spanning(BlockPos::new(2, 5, 0), BlockPos::new(-2, 5, 2));
    assert_eq!(r.min, BlockPos::new(-2, 5, 0));
    assert_eq!(r.size(), Size3::new(5, 1, 3));
    assert_eq!(r.positions().count(), 15);
    assert!(r.contains(BlockPos::new(0, 5, 1)));
    assert!(!r.contains(BlockPos::new(0, 6, 1)));
}

#[test]
fn size_serializes_as_array() {
    let s = Size3::new(3, 2, 1);
    assert_eq!(serde_json::to_string(&s).unwrap(), "[3,2,1]");
    let back: Size3 = serde_json::from_str("[3,2,1]").unwrap();
    assert_eq!(back, s);
    assert_eq!(s.width_span(), 3);
    assert_eq!(s.height_span(), 2);
}

#[test]
fn spans_follow_the_non_depth_axes() {
    assert_eq!((Size3::new(1, 2, 4).width_span(), Size3::new(1, 2, 4).height_span()), (4, 2));
    assert_eq!((Size3::new(1, 1, 3).width_span(), Size3::new(1, 1, 3).height_span()), (3, 1));
    let floor = Size3::new(5, 1, 3);
    assert_eq!((floor.width_span(), floor.height_span()), (5, 3));
}
