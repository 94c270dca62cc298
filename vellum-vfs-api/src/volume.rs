//! Volume and file handle abstractions.
//!
//! To get started, see [`Volume`].

use crate::{FileKind, FileName, VolumeError};

/// A place log files live.
///
/// The debug trail is generic over this trait so that the same logger runs
/// against a real filesystem, an in-memory test double, or whatever a target
/// platform provides. All operations are synchronous; implementations must
/// not buffer appended bytes beyond what the platform file layer itself does,
/// because the trail's whole purpose is to survive a crash right after the
/// last write.
///
/// # Example
///
/// ```no_run
/// use embedded_io::Write;
/// use vellum_vfs_api::{FileHandle, FileKind, FileName, Volume};
///
/// fn fresh_log(mut volume: impl Volume) {
///     let name = FileName::new("debug.log");
///     let _ = volume.delete(&name);
///     volume.create(&name, FileKind::PLAIN_TEXT).unwrap();
///     let mut file = volume.open(&name).unwrap();
///     file.write_all(b"hello\r").unwrap();
///     file.close();
/// }
/// ```
pub trait Volume {
    /// Handle to an open file on this volume.
    type File: FileHandle;

    /// Creates a new, empty file under `name`, stamped with `kind`.
    ///
    /// Fails with [`VolumeError::AlreadyExists`] if the name is taken;
    /// callers wanting a fresh file delete first.
    fn create(&mut self, name: &FileName, kind: FileKind) -> Result<(), VolumeError>;

    /// Opens the existing file under `name` for sequential appending.
    ///
    /// Fails with [`VolumeError::NotFound`] if no such file exists; opening
    /// never creates.
    fn open(&mut self, name: &FileName) -> Result<Self::File, VolumeError>;

    /// Removes the file under `name`.
    ///
    /// Fails with [`VolumeError::NotFound`] if no such file exists.
    fn delete(&mut self, name: &FileName) -> Result<(), VolumeError>;
}

/// An open file on a [`Volume`].
///
/// Bytes are appended through the [`embedded_io::Write`] implementation.
/// `write` reports how many bytes the volume accepted; short writes are part
/// of the contract and callers decide whether they matter.
///
/// Dropping a handle releases it; [`close`](FileHandle::close) exists so that
/// releasing is an explicit, nameable step.
///
/// # Example
///
/// ```no_run
/// use embedded_io::Write;
/// use vellum_vfs_api::FileHandle;
///
/// fn checkpoint(mut file: impl FileHandle) {
///     file.write_all(b"checkpoint reached\r").unwrap();
///     file.close();
/// }
/// ```
pub trait FileHandle:
    core::fmt::Debug + embedded_io::Write + embedded_io::ErrorType<Error = VolumeError>
{
    /// Closes the file handle.
    fn close(self);
}
