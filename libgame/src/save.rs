//! Board persistence: a JSON array of alive flags in row-major order.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use crate::board::GameBoard;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("couldn't access board file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed board file")]
    Parse(#[from] serde_json::Error),

    #[error("board file has {found} cells, expected {expected}")]
    Validation { expected: usize, found: usize },
}

/// Writes alive flags as a JSON array indented with four spaces.
pub fn write_flags<W>(writer: W, flags: &[bool]) -> Result<(), serde_json::Error>
where
    W: Write,
{
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
    flags.serialize(&mut serializer)
}

pub fn decode(document: &str) -> Result<Vec<bool>, SaveError> {
    Ok(serde_json::from_str(document)?)
}

pub fn save<P>(board: &GameBoard, path: P) -> Result<(), SaveError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let io_error = |source| SaveError::Io {
        path: path.to_owned(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    // Serializing plain booleans can only fail on the writer.
    write_flags(&mut writer, &board.serialize_alive_flags())
        .map_err(|e| io_error(e.into()))?;
    writer.flush().map_err(io_error)?;

    log::info!("saved {} cells to {path:?}", board.len());
    Ok(())
}

pub fn load<P>(path: P) -> Result<Vec<bool>, SaveError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let document = fs::read_to_string(path).map_err(|source| SaveError::Io {
        path: path.to_owned(),
        source,
    })?;

    let flags = decode(&document)?;
    log::info!("loaded {} cells from {path:?}", flags.len());
    Ok(flags)
}
