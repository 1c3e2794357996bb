use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read sheet {}", .path.display())]
    ReadSheet {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write icon {}", .path.display())]
    WriteIcon {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write progress report")]
    Report(#[source] io::Error),
}

/// Read the whole sheet. Content that is not UTF-8 is a read error.
pub fn read_sheet(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadSheet {
        path: path.to_owned(),
        source,
    })
}

/// Create or truncate `path` and write `content` as is.
pub fn write_icon(path: &Path, content: &str) -> Result<()> {
    let wrap = |source| Error::WriteIcon {
        path: path.to_owned(),
        source,
    };
    let mut f = File::create(path).map_err(wrap)?;
    f.write_all(content.as_bytes()).map_err(wrap)?;
    Ok(())
}
