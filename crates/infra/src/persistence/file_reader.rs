use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use count_chars_domain::options::DecodePolicy;
use count_chars_ports::filesystem::TextSource;
use count_chars_shared_kernel::{InfrastructureError, Result};

/// Convenience helpers for reading files with consistent error handling.
///
/// Also the local-disk implementation of the `TextSource` port.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }
}

impl TextSource for FileReader {
    fn for_each_line(&self, path: &Path, decode: DecodePolicy, visit: &mut dyn FnMut(&str)) -> Result<()> {
        let mut reader = Self::open_buffered(path).map_err(|source| read_error(path, source))?;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|source| read_error(path, source))?;
            if read == 0 {
                break;
            }
            trim_line_ending(&mut buf);
            match decode {
                DecodePolicy::Strict => {
                    let line = std::str::from_utf8(&buf)
                        .map_err(|err| read_error(path, io::Error::new(io::ErrorKind::InvalidData, err)))?;
                    visit(line);
                }
                DecodePolicy::Lossy => visit(&String::from_utf8_lossy(&buf)),
            }
        }
        Ok(())
    }
}

fn read_error(path: &Path, source: io::Error) -> InfrastructureError {
    InfrastructureError::FileRead { path: path.to_path_buf(), source }
}

fn trim_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}
