use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::Arc,
};

use log::info;

use crate::{BuildInfo, Error, Result};

fn create<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::FailedOpenFile(Arc::new(e), path.display().to_string()))?;

    Ok(BufWriter::new(file))
}

/// Writes the rendered C source to the given file, replacing any previous content.
///
/// # Arguments
/// * `path` - The path of the C source file.
/// * `source` - The rendered C source.
pub fn write_c_source<P: AsRef<Path>>(path: P, source: &str) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create(path)?;

    writer
        .write_all(source.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| Error::OutputWrite(Arc::new(e), path.display().to_string()))?;

    info!("Wrote {} bytes to {}", source.len(), path.display());
    Ok(())
}

/// Writes the build info as JSON to the given file, replacing any previous content.
///
/// # Arguments
/// * `path` - The path of the JSON file.
/// * `info` - The build info to write.
pub fn write_manifest<P: AsRef<Path>>(path: P, info: &BuildInfo) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create(path)?;

    serde_json::to_writer_pretty(&mut writer, info).map_err(|e| Error::Serialize(Arc::new(e)))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| Error::OutputWrite(Arc::new(e), path.display().to_string()))?;

    info!("Wrote manifest to {}", path.display());
    Ok(())
}
