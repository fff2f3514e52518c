#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{TempDir, tempdir};

pub const WEEKLY_CSV: &str = "\
id,name,score,week_date
1,Alice,12.5,2024-01-15
2,,0,2024-01-01
3,N/A,7,2024-01-08
4,#error: bad read,#DIV/0!,
";

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("write temp file contents");
        path
    }
}

pub fn binary() -> Command {
    Command::cargo_bin("csv-quality").expect("binary exists")
}

pub fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}
