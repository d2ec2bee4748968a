// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use count_chars_shared_kernel::{InfraResult, InfrastructureError};

/// Writes rendered reports to disk.
pub struct FileWriter;

impl FileWriter {
    /// Replace `path` with `contents` via a temp file in the same directory
    /// and a rename, so readers never see a half-written report.
    pub fn write_report(path: &Path, contents: &str) -> InfraResult<()> {
        Self::atomic_write(path, contents.as_bytes()).map_err(|source| InfrastructureError::OutputError {
            message: format!("failed to write report to '{}'", path.display()),
            source: Some(Box::new(source)),
        })
    }

    fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let mut w = BufWriter::new(File::create(&tmp)?);
        let written = w.write_all(data).and_then(|()| w.flush());
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        let _ = w.get_ref().sync_all();
        drop(w);

        fs::rename(&tmp, path).inspect_err(|_| {
            let _ = fs::remove_file(&tmp);
        })
    }
}
