//! Errors shared by all volume operations.

/// Errors that can occur when operating on a [`Volume`].
///
/// The debug trail logger swallows these; they exist so that volume backends
/// can report *what* went wrong to code that does care, such as the
/// conformance tests.
///
/// [`Volume`]: crate::Volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum VolumeError {
    /// No file exists under the requested name.
    #[error("no file exists under the requested name")]
    NotFound,
    /// A file with the requested name already exists.
    #[error("a file with the requested name already exists")]
    AlreadyExists,
    /// The volume denied access to the file.
    #[error("the volume denied access to the file")]
    PermissionDenied,
    /// The volume has no room left for the requested operation.
    #[error("the volume has no room left for the requested operation")]
    VolumeFull,
    /// The name is not a valid file name on this volume.
    #[error("the name is not a valid file name on this volume")]
    InvalidName,
    /// A low-level fault occurred while transferring data.
    #[error("a low-level fault occurred while transferring data")]
    WriteFault,
    /// Currently unhandled error occurred.
    /// Please open a bug report if you encounter this error.
    #[error("unspecified volume error, please open a bug report if you encounter this error")]
    Other,
}

impl embedded_io::ErrorType for VolumeError {
    type Error = VolumeError;
}

impl embedded_io::Error for VolumeError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            VolumeError::NotFound => embedded_io::ErrorKind::NotFound,
            VolumeError::AlreadyExists => embedded_io::ErrorKind::AlreadyExists,
            VolumeError::PermissionDenied => embedded_io::ErrorKind::PermissionDenied,
            VolumeError::InvalidName => embedded_io::ErrorKind::InvalidInput,
            VolumeError::VolumeFull | VolumeError::WriteFault | VolumeError::Other => {
                embedded_io::ErrorKind::Other
            }
        }
    }
}
