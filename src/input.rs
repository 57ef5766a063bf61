// std imports
use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

// local imports
use crate::error::{Error, Result};

// ---

/// A reference to an input, either standard input or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Builds input references from command-line paths, `-` stands for standard input.
    pub fn from_paths<I>(paths: I) -> Vec<Self>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let inputs: Vec<_> = paths
            .into_iter()
            .map(|path| if path.as_os_str() == "-" { Self::Stdin } else { Self::File(path) })
            .collect();

        if inputs.is_empty() { vec![Self::Stdin] } else { inputs }
    }

    /// Opens the input for buffered reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| self.open_error(e))?;
                if fs::metadata(path).map(|meta| meta.is_dir()).unwrap_or(false) {
                    return Err(self.open_error(io::Error::new(io::ErrorKind::InvalidInput, "is a directory")));
                }
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Returns the name used to prefix selected lines and counts.
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "(standard input)".into(),
            Self::File(path) => path.to_string_lossy().into_owned(),
        }
    }

    /// Returns a description of the input for error messages.
    pub fn description(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => format!("file {:?}", path),
        }
    }

    fn open_error(&self, e: io::Error) -> Error {
        match (self, e.kind()) {
            (Self::File(path), io::ErrorKind::NotFound) => Error::FileNotFound {
                filename: path.to_string_lossy().into_owned(),
            },
            _ => Error::Input {
                source_name: self.description(),
                source: e,
            },
        }
    }
}
