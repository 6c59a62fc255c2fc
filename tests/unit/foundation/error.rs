use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PopsceneError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(PopsceneError::load("x").to_string().contains("load error:"));
    assert!(
        PopsceneError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk gone");
    let err = PopsceneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk gone"));
}
