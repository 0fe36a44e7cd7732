use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub(crate) fn create_output_file(
    path: impl AsRef<Path>,
) -> Result<File, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}

/// Buffered sink for the given path, or stdout when there is none.
pub(crate) fn open_sink(
    path: Option<&Path>,
) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(create_output_file(path)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
