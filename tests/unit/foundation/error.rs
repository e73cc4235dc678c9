use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DisplayError::resolution("x")
            .to_string()
            .contains("resolution error:")
    );
    assert!(
        DisplayError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DisplayError::capacity("x")
            .to_string()
            .contains("capacity error:")
    );
    assert!(
        DisplayError::encoding("x")
            .to_string()
            .contains("encoding error:")
    );
}

#[test]
fn at_tags_once_and_keeps_kind() {
    let err = DisplayError::capacity("too wide").at(12);
    assert_eq!(err.kind(), FaultKind::Capacity);
    assert_eq!(err.line(), Some(12));
    assert!(err.to_string().starts_with("line 12: capacity error:"));

    let err = err.at(40);
    assert_eq!(err.line(), Some(12));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DisplayError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), FaultKind::Other);
}
