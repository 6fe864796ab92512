pub mod output;

// Re-export output surfaces for convenient access
pub use output::{
    create_writer, export_json, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter,
    TerminalWriter, EXPORT_FILE_NAME,
};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
