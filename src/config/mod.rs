mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    ChartConfig, ChartFile, ChartSection, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH,
};
