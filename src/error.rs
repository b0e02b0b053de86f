//! Error types for the cairo binding

use std::ffi::CStr;
use std::fmt;

use libc::c_int;
use thiserror::Error;

use crate::ffi;

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when calling into cairo
#[derive(Error, Debug)]
pub enum Error {
    /// A null pointer was passed where a live cairo handle is required
    #[error("null pointer passed where a live cairo handle is required")]
    NullPointer,

    /// Operation attempted on a surface after `finish()`
    #[error("operation attempted on a finished cairo object")]
    Finished,

    /// Caller-supplied buffer is smaller than stride x height
    #[error("buffer of {actual} bytes is too small: stride x height requires {required}")]
    BufferTooSmall { required: usize, actual: usize },

    /// cairo reported an internal status code
    #[error("cairo error: {0}")]
    Cairo(Status),

    /// A raw path segment carried the wrong number of coordinates
    #[error("path segment {op:?} takes {expected} coordinates, got {actual}")]
    PathArity {
        op: crate::context::PathDataType,
        expected: usize,
        actual: usize,
    },

    /// An I/O target supplied to a stream-backed operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Translate a native status code, mapping the finished state to its
    /// dedicated variant.
    pub(crate) fn from_status(status: Status) -> Self {
        match status {
            Status::SurfaceFinished => Error::Finished,
            other => Error::Cairo(other),
        }
    }
}

macro_rules! status_codes {
    ($(($variant:ident, $value:expr)),+ $(,)?) => {
        /// Native cairo status codes
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Status {
            $($variant,)+
            /// A status code this binding does not know about
            Unknown(i32),
        }

        impl Status {
            pub fn from_raw(raw: c_int) -> Status {
                match raw {
                    $($value => Status::$variant,)+
                    other => Status::Unknown(other),
                }
            }

            pub fn to_raw(self) -> c_int {
                match self {
                    $(Status::$variant => $value,)+
                    Status::Unknown(other) => other,
                }
            }
        }
    };
}

status_codes! {
    (Success, 0),
    (NoMemory, 1),
    (InvalidRestore, 2),
    (InvalidPopGroup, 3),
    (NoCurrentPoint, 4),
    (InvalidMatrix, 5),
    (InvalidStatus, 6),
    (NullPointer, 7),
    (InvalidString, 8),
    (InvalidPathData, 9),
    (ReadError, 10),
    (WriteError, 11),
    (SurfaceFinished, 12),
    (SurfaceTypeMismatch, 13),
    (PatternTypeMismatch, 14),
    (InvalidContent, 15),
    (InvalidFormat, 16),
    (InvalidVisual, 17),
    (FileNotFound, 18),
    (InvalidDash, 19),
    (InvalidDscComment, 20),
    (InvalidIndex, 21),
    (ClipNotRepresentable, 22),
    (TempFileError, 23),
    (InvalidStride, 24),
    (FontTypeMismatch, 25),
    (UserFontImmutable, 26),
    (UserFontError, 27),
    (NegativeCount, 28),
    (InvalidClusters, 29),
    (InvalidSlant, 30),
    (InvalidWeight, 31),
    (InvalidSize, 32),
    (UserFontNotImplemented, 33),
    (DeviceTypeMismatch, 34),
    (DeviceError, 35),
    (InvalidMeshConstruction, 36),
    (DeviceFinished, 37),
    (Jbig2GlobalMissing, 38),
    (PngError, 39),
    (FreetypeError, 40),
    (Win32GdiError, 41),
    (TagError, 42),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // cairo_status_to_string returns a static string for any input.
        let message = unsafe { CStr::from_ptr(ffi::cairo_status_to_string(self.to_raw())) };
        write!(f, "{:?} ({})", self, message.to_string_lossy())
    }
}

impl Status {
    /// A successful status maps to `Ok`, anything else to the typed error.
    pub(crate) fn to_result(self) -> Result<()> {
        if self == Status::Success {
            Ok(())
        } else {
            Err(Error::from_status(self))
        }
    }
}
