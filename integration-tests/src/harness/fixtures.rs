use sevmon_core::conf::{ErrorPolicy, MonitorConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Contents of `integration-tests/fixtures/<name>`.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name);

    fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {}: {e}", path.display()))
}

/// Scratch directory holding one input file and its output file.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn with_input(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("input.txt"), contents).expect("failed to write input");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self, on_error: ErrorPolicy) -> MonitorConfig {
        MonitorConfig {
            input: self.root().join("input.txt"),
            output: self.root().join("output.txt"),
            append: false,
            on_error,
        }
    }

    pub fn output(&self) -> String {
        fs::read_to_string(self.root().join("output.txt")).expect("output was not written")
    }
}
