#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the svg-charts binary.
#[macro_export]
macro_rules! svg_charts {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("svg-charts"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the sample dataset to `data.json`.
    pub fn create_sample_data(&self) -> PathBuf {
        self.create_file("data.json", SAMPLE_DATA)
    }

    /// Writes a chart file that the binary discovers automatically.
    pub fn create_local_config(&self, content: &str) -> PathBuf {
        self.create_file(".svg-charts.toml", content)
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Two subjects over two months.
pub const SAMPLE_DATA: &str = r#"[
    {"subject": "Product A", "timeSlice": "January", "count": 25},
    {"subject": "Product B", "timeSlice": "January", "count": 15},
    {"subject": "Product A", "timeSlice": "February", "count": 30},
    {"subject": "Product B", "timeSlice": "February", "count": 22}
]"#;

/// Twenty single-bar groups with increasing counts.
pub fn wide_data() -> String {
    let rows: Vec<String> = (0..20)
        .map(|i| {
            format!(
                r#"{{"subject": "Product {i}", "timeSlice": "Month {i}", "count": {}}}"#,
                i * 10
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}
