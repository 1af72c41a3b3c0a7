use std::path::PathBuf;

/// An error that can occur when resolving or loading a locale.
///
/// Formatting itself never fails. The only failures in this crate come from
/// finding locale data, which is either missing or malformed.
#[derive(Debug)]
pub enum Error {
    /// No locale with the given (normalized) identifier exists.
    NotFound {
        /// The identifier that was searched for, after normalization.
        id: String,
    },
    /// Locale data was found, but it could not be decoded into a valid
    /// locale record. This includes name lists with the wrong number of
    /// entries.
    Corrupt {
        /// The locale identifier or file path of the bad data.
        id: String,
        /// The underlying JSON decoding error.
        err: serde_json::Error,
    },
    /// Reading a locale file from disk failed.
    Io {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        err: std::io::Error,
    },
}

impl Error {
    /// Returns true when this error indicates that a locale doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(*self, Error::NotFound { .. })
    }

    /// Returns true when this error indicates that locale data is malformed.
    pub fn is_corrupt(&self) -> bool {
        matches!(*self, Error::Corrupt { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotFound { ref id } => {
                write!(f, "locale `{id}` not found")
            }
            Error::Corrupt { ref id, .. } => {
                write!(f, "locale data for `{id}` is corrupt")
            }
            Error::Io { ref path, .. } => {
                write!(f, "failed to read locale file `{}`", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::NotFound { .. } => None,
            Error::Corrupt { ref err, .. } => Some(err),
            Error::Io { ref err, .. } => Some(err),
        }
    }
}
