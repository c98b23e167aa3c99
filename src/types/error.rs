use core::fmt;
use std::path::{Path, PathBuf};
use derive_more::From;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug,From)]
pub enum Error {
   #[from]
    Io(std::io::Error),
   #[from]
    Image(image::ImageError),
   #[from]
    Json(serde_json::Error),
    /// an input file (section text, dataset, image) does not exist
    ResourceNotFound(PathBuf),
    /// `ch` has no glyph in the built-in font encoding
    Encoding { ch: char, text: String },
    /// operation not permitted in the current document state
    InvalidState(&'static str),
    /// table row with a cell count different from the column count
    RowShape { row: usize, expected: usize, found: usize },
    /// table row taller than the room a fresh page leaves for it
    RowHeight { height: f32, available: f32 },
    /// dataset without a table of the requested title
    MissingTable(String),
}

impl Error {
    /// maps a failed read of `path` to `ResourceNotFound` when the file is missing
    pub(crate) fn reading(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::ResourceNotFound(path.to_path_buf()),
            _ => Error::Io(err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Image(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Image(err) => write!(f, "image error: {err}"),
            Error::Json(err) => write!(f, "invalid dataset: {err}"),
            Error::ResourceNotFound(path) => write!(f, "resource not found: {}", path.display()),
            Error::Encoding { ch, text } => write!(f, "no glyph for {ch:?} (U+{:04X}) in {text:?}", *ch as u32),
            Error::InvalidState(reason) => write!(f, "invalid document state: {reason}"),
            Error::RowShape { row, expected, found } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Error::RowHeight { height, available } => {
                write!(f, "row height {height:.1}pt exceeds the {available:.1}pt available on a page")
            }
            Error::MissingTable(title) => write!(f, "dataset has no table titled {title:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_resource_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let mapped = Error::reading(Path::new("readme.md"), err);

        assert!(matches!(mapped, Error::ResourceNotFound(ref path) if path == Path::new("readme.md")));
    }

    #[test]
    fn other_read_failures_stay_io() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");

        assert!(matches!(Error::reading(Path::new("x"), err), Error::Io(_)));
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk"))?;
            Ok(())
        }

        assert!(matches!(fails(), Err(Error::Io(_))));
    }
}
