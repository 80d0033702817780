use std::path::{Path, PathBuf};

use crate::error::{Result, SvgChartsError};

use super::model::ChartFile;

/// Chart file picked up from the working directory when no path is given.
pub const LOCAL_CONFIG_NAME: &str = ".svg-charts.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Trait for loading chart files.
pub trait ConfigLoader {
    /// Load `.svg-charts.toml` from the working directory, if present.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed or validated.
    fn load(&self) -> Result<Option<ChartFile>>;

    /// Load a chart file from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<ChartFile>;
}

/// Loads chart files through a [`FileSystem`].
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Option<ChartFile>> {
        let local = self.fs.current_dir()?.join(LOCAL_CONFIG_NAME);
        if !self.fs.exists(&local) {
            log::debug!("no {LOCAL_CONFIG_NAME} in working directory");
            return Ok(None);
        }
        self.load_from_path(&local).map(Some)
    }

    fn load_from_path(&self, path: &Path) -> Result<ChartFile> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| SvgChartsError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let file: ChartFile = toml::from_str(&content)?;
        file.validate()?;
        log::info!("loaded chart file {}", path.display());
        Ok(file)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
