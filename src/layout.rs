use std::path::{Path, PathBuf};

/// Files the generator reads and writes, all fixed relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub license: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: &Path) -> Self {
        let utilities = root.join("ePub3").join("utilities");
        ProjectLayout {
            license: root.join("GPL3-header.txt"),
            input: utilities.join("error_handler.h"),
            output: utilities.join("error_lookup_table.cpp"),
        }
    }
}
