use std::path::PathBuf;

/// Absolute path of a checked-in fixture graph.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}
