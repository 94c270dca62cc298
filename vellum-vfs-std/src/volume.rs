//! Directory-rooted volume on `std::fs`.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use vellum_vfs_api::{FileHandle, FileKind, FileName, Volume, VolumeError};

/// [`Volume`] rooted at a directory on the local filesystem.
///
/// File names are joined onto the root directory, which must already exist.
/// The [`FileKind`] is accepted and ignored: standard filesystems carry no
/// classification tags.
///
/// # Examples
///
/// ```no_run
/// use vellum_vfs_api::{FileKind, FileName, Volume};
/// use vellum_vfs_std::DirVolume;
///
/// let mut volume = DirVolume::new("/var/log/my-app");
/// volume
///     .create(&FileName::new("debug.log"), FileKind::PLAIN_TEXT)
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct DirVolume {
    root: PathBuf,
}

impl DirVolume {
    /// Creates a volume rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &FileName) -> PathBuf {
        self.root.join(native_name(name))
    }
}

impl Volume for DirVolume {
    type File = StdFile;

    fn create(&mut self, name: &FileName, _kind: FileKind) -> Result<(), VolumeError> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path_for(name))
            .map(drop)
            .map_err(control_error)
    }

    fn open(&mut self, name: &FileName) -> Result<Self::File, VolumeError> {
        OpenOptions::new()
            .append(true)
            .open(self.path_for(name))
            .map(StdFile)
            .map_err(control_error)
    }

    fn delete(&mut self, name: &FileName) -> Result<(), VolumeError> {
        std::fs::remove_file(self.path_for(name)).map_err(control_error)
    }
}

#[cfg(unix)]
fn native_name(name: &FileName) -> std::ffi::OsString {
    use std::os::unix::ffi::OsStrExt;

    std::ffi::OsStr::from_bytes(name.as_bytes()).to_os_string()
}

// Name bytes that are not valid UTF-8 cannot round-trip onto this platform,
// they are replaced rather than rejected.
#[cfg(not(unix))]
fn native_name(name: &FileName) -> std::ffi::OsString {
    String::from_utf8_lossy(name.as_bytes()).into_owned().into()
}

/// Maps errors from operations that locate or manage files.
fn control_error(error: std::io::Error) -> VolumeError {
    match error.kind() {
        ErrorKind::NotFound => VolumeError::NotFound,
        ErrorKind::AlreadyExists => VolumeError::AlreadyExists,
        ErrorKind::PermissionDenied | ErrorKind::ReadOnlyFilesystem => {
            VolumeError::PermissionDenied
        }
        ErrorKind::StorageFull | ErrorKind::QuotaExceeded => VolumeError::VolumeFull,
        ErrorKind::InvalidFilename | ErrorKind::InvalidInput => VolumeError::InvalidName,
        _ => VolumeError::Other,
    }
}

/// Maps errors from transferring file data.
fn transfer_error(error: std::io::Error) -> VolumeError {
    match error.kind() {
        ErrorKind::PermissionDenied => VolumeError::PermissionDenied,
        ErrorKind::StorageFull | ErrorKind::QuotaExceeded => VolumeError::VolumeFull,
        _ => VolumeError::WriteFault,
    }
}

/// Handle to a file on a [`DirVolume`].
#[derive(Debug)]
pub struct StdFile(File);

impl embedded_io::ErrorType for StdFile {
    type Error = VolumeError;
}

impl embedded_io::Write for StdFile {
    fn write(&mut self, buf: &[u8]) -> Result<usize, VolumeError> {
        std::io::Write::write(&mut self.0, buf).map_err(transfer_error)
    }

    fn flush(&mut self) -> Result<(), VolumeError> {
        std::io::Write::flush(&mut self.0).map_err(transfer_error)
    }
}

impl FileHandle for StdFile {
    fn close(self) {}
}
