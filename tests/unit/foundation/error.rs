use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FxError::EmptyPipeline
            .to_string()
            .contains("empty pipeline:")
    );
    assert!(
        FxError::invalid_source("blur")
            .to_string()
            .contains("invalid source: 'blur'")
    );
    assert!(
        FxError::invalid_transform(2, "solid_color")
            .to_string()
            .contains("position 2")
    );
    assert!(
        FxError::invalid_acrylic_source("unknown")
            .to_string()
            .contains("invalid acrylic source:")
    );
    assert!(
        FxError::unsupported("x")
            .to_string()
            .contains("unsupported operation:")
    );
    assert!(
        FxError::invalid_target("x")
            .to_string()
            .contains("invalid target type:")
    );
    assert!(
        FxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FxError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("decode failed");
    let err = FxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("decode failed"));
}
