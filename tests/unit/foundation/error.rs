use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PhotocalError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PhotocalError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        PhotocalError::raster("x")
            .to_string()
            .contains("raster error:")
    );
    assert!(
        PhotocalError::document("x")
            .to_string()
            .contains("document error:")
    );
    assert!(
        PhotocalError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PhotocalError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
