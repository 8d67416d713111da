//! User configuration stored in `~/.worldtiles/config.ini`.
//!
//! Settings structs live in `settings`, parsing in `parser` and
//! serialization in `writer`. Command-line flags override file values.

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    ConfigFile, LoggingSettings, RenderSettings, TileSettings, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE,
};
