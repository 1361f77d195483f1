//! JSON file export of a comparison run.
//!
//! A target that is an existing directory gets a timestamped file name,
//! `quantization_comparison_<YYYY-MM-DDTHH-MM-SS>.json`; any other target is
//! used as the file path. Parent directories are created as needed.

use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes comparison bundles as pretty-printed JSON
pub struct JsonReportExporter;

impl JsonReportExporter {
    /// Default export file name for the current time
    pub fn default_file_name() -> String {
        let timestamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
        format!("quantization_comparison_{}.json", timestamp)
    }

    /// Resolve the final file path for `target`
    pub fn resolve_path(target: &Path) -> PathBuf {
        if target.is_dir() {
            target.join(Self::default_file_name())
        } else {
            target.to_path_buf()
        }
    }

    /// Write `report` to `target`, returning the path written
    pub fn write<T: Serialize>(target: &Path, report: &T) -> io::Result<PathBuf> {
        let path = Self::resolve_path(target);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(fs::File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!("Exported comparison to {}", path.display());
        Ok(path)
    }
}
