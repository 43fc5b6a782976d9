use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TermreelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TermreelError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        TermreelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TermreelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
