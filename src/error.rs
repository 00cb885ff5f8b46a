use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// An error that may arise while converting a file. Both variants carry the path involved
/// and the underlying IO error as the source (see the `std::error::Error` trait).
#[derive(Debug)]
pub enum ConvertError {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl ConvertError {
    pub(crate) fn read(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Read {
            path: path.to_owned(),
            source,
        }
    }

    pub(crate) fn write(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Write {
            path: path.to_owned(),
            source,
        }
    }

    /// The file that couldn't be read or written.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, .. } => write!(f, "Failed to read the input file {:?}", path),
            Self::Write { path, .. } => write!(f, "Failed to write the output file {:?}", path),
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(&*source),
            Self::Write { source, .. } => Some(&*source),
        }
    }
}

/// An error from reading literal text back into bytes.
///
/// `index` is the 0-based position of the literal in the text, counting every
/// whitespace-separated token.
#[derive(Debug)]
pub enum ParseError {
    InvalidLiteral {
        index: usize,
        token: String,
    },
    Hex {
        index: usize,
        source: hex::FromHexError,
    },
}

impl ParseError {
    pub(crate) fn invalid_literal(index: usize, token: &str) -> Self {
        Self::InvalidLiteral {
            index,
            token: token.to_owned(),
        }
    }

    pub(crate) fn hex(index: usize) -> impl FnOnce(hex::FromHexError) -> Self {
        move |source| Self::Hex { index, source }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::InvalidLiteral { index, .. } | Self::Hex { index, .. } => *index,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLiteral { index, token } => write!(
                f,
                "Literal {} ({:?}) is not of the form 0xNN,",
                index, token
            ),
            Self::Hex { index, .. } => write!(f, "Literal {} has invalid hex digits", index),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Hex { source, .. } => Some(&*source),
            Self::InvalidLiteral { .. } => None,
        }
    }
}

/// An error from loading [`Options`] out of a JSON file.
///
/// [`Options`]: ./struct.Options.html
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, .. } => write!(f, "Failed to read the config file {:?}", path),
            Self::Json { path, .. } => {
                write!(f, "Failed to parse/deserialize the config file {:?}", path)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(&*source),
            Self::Json { source, .. } => Some(&*source),
        }
    }
}
