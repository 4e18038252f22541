use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temp backend root with `content` at the fixed target path.
pub fn backend_with_target(content: &[u8]) -> (TempDir, PathBuf) {
    let root = tempfile::tempdir().unwrap();
    let target = root.path().join(passfix::TARGET_PATH);
    std::fs::create_dir_all(target.parent().unwrap()).unwrap();
    std::fs::write(&target, content).unwrap();
    (root, target)
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
