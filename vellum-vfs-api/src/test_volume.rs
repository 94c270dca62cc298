//! In-memory volume for tests.

use std::sync::{Arc, Mutex};
use std::vec::Vec;

use crate::{FileHandle, FileKind, FileName, Volume, VolumeError};

/// In-memory [`Volume`] that records every call for later inspection.
///
/// Clones share the same state, so tests keep a clone as an observer while
/// the original moves into the code under test. The volume records created
/// files with their [`FileKind`], every append as its own chunk (write
/// granularity stays observable, not just final contents), and the number of
/// handles currently open. Individual operations can be made to fail through
/// the `fail_*` methods.
///
/// # Examples
///
/// ```
/// use embedded_io::Write;
/// use vellum_vfs_api::{FileHandle, FileKind, FileName, TestVolume, Volume};
///
/// let mut volume = TestVolume::new();
/// let observer = volume.clone();
///
/// let name = FileName::new("debug.log");
/// volume.create(&name, FileKind::PLAIN_TEXT).unwrap();
/// let mut file = volume.open(&name).unwrap();
/// file.write_all(b"hello\r").unwrap();
/// file.close();
///
/// assert_eq!(observer.contents("debug.log").unwrap(), b"hello\r");
/// assert_eq!(observer.open_handles(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TestVolume {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    files: Vec<StoredFile>,
    open_handles: usize,
    append_calls: usize,
    delete_calls: usize,
    create_fault: Option<VolumeError>,
    open_fault: Option<VolumeError>,
    delete_fault: Option<VolumeError>,
    append_faults: Vec<(usize, AppendFault)>,
}

#[derive(Debug)]
struct StoredFile {
    name: FileName,
    kind: FileKind,
    chunks: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Copy)]
enum AppendFault {
    Error(VolumeError),
    Short(usize),
}

impl State {
    fn file(&self, name: &FileName) -> Option<&StoredFile> {
        self.files.iter().find(|file| &file.name == name)
    }

    fn file_mut(&mut self, name: &FileName) -> Option<&mut StoredFile> {
        self.files.iter_mut().find(|file| &file.name == name)
    }

    fn take_append_fault(&mut self, call: usize) -> Option<AppendFault> {
        let position = self
            .append_faults
            .iter()
            .position(|(index, _)| *index == call)?;
        Some(self.append_faults.swap_remove(position).1)
    }
}

impl TestVolume {
    /// Creates an empty volume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `create` call fail with `error`.
    pub fn fail_next_create(&self, error: VolumeError) {
        self.state.lock().unwrap().create_fault = Some(error);
    }

    /// Makes the next `open` call fail with `error`.
    pub fn fail_next_open(&self, error: VolumeError) {
        self.state.lock().unwrap().open_fault = Some(error);
    }

    /// Makes the next `delete` call fail with `error`.
    pub fn fail_next_delete(&self, error: VolumeError) {
        self.state.lock().unwrap().delete_fault = Some(error);
    }

    /// Makes the `index`-th append call (zero-based, counted across all
    /// handles) fail with `error`.
    pub fn fail_append(&self, index: usize, error: VolumeError) {
        self.state
            .lock()
            .unwrap()
            .append_faults
            .push((index, AppendFault::Error(error)));
    }

    /// Makes the `index`-th append call (zero-based, counted across all
    /// handles) report only `written` bytes accepted.
    pub fn shorten_append(&self, index: usize, written: usize) {
        self.state
            .lock()
            .unwrap()
            .append_faults
            .push((index, AppendFault::Short(written)));
    }

    /// Returns the contents of the file under `name`.
    pub fn contents(&self, name: &str) -> Option<Vec<u8>> {
        let state = self.state.lock().unwrap();
        let file = state.file(&FileName::new(name))?;
        let mut contents = Vec::new();
        for chunk in &file.chunks {
            contents.extend_from_slice(chunk);
        }
        Some(contents)
    }

    /// Returns every append made to the file under `name`, one entry per
    /// write call.
    pub fn chunks(&self, name: &str) -> Option<Vec<Vec<u8>>> {
        let state = self.state.lock().unwrap();
        Some(state.file(&FileName::new(name))?.chunks.clone())
    }

    /// Returns the kind the file under `name` was created with.
    pub fn kind(&self, name: &str) -> Option<FileKind> {
        let state = self.state.lock().unwrap();
        Some(state.file(&FileName::new(name))?.kind)
    }

    /// Returns whether a file exists under `name`.
    pub fn exists(&self, name: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .file(&FileName::new(name))
            .is_some()
    }

    /// Returns the names of all files on the volume, in creation order.
    pub fn names(&self) -> Vec<FileName> {
        self.state
            .lock()
            .unwrap()
            .files
            .iter()
            .map(|file| file.name.clone())
            .collect()
    }

    /// Returns the number of file handles currently open.
    pub fn open_handles(&self) -> usize {
        self.state.lock().unwrap().open_handles
    }

    /// Returns the number of append calls the volume has seen.
    pub fn append_calls(&self) -> usize {
        self.state.lock().unwrap().append_calls
    }

    /// Returns the number of delete calls the volume has seen, successful
    /// or not.
    pub fn delete_calls(&self) -> usize {
        self.state.lock().unwrap().delete_calls
    }
}

impl Volume for TestVolume {
    type File = TestFile;

    fn create(&mut self, name: &FileName, kind: FileKind) -> Result<(), VolumeError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.create_fault.take() {
            return Err(error);
        }
        if state.file(name).is_some() {
            return Err(VolumeError::AlreadyExists);
        }
        state.files.push(StoredFile {
            name: name.clone(),
            kind,
            chunks: Vec::new(),
        });
        Ok(())
    }

    fn open(&mut self, name: &FileName) -> Result<Self::File, VolumeError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.open_fault.take() {
            return Err(error);
        }
        if state.file(name).is_none() {
            return Err(VolumeError::NotFound);
        }
        state.open_handles += 1;
        Ok(TestFile {
            state: Arc::clone(&self.state),
            name: name.clone(),
        })
    }

    fn delete(&mut self, name: &FileName) -> Result<(), VolumeError> {
        let mut state = self.state.lock().unwrap();
        state.delete_calls += 1;
        if let Some(error) = state.delete_fault.take() {
            return Err(error);
        }
        let position = state
            .files
            .iter()
            .position(|file| &file.name == name)
            .ok_or(VolumeError::NotFound)?;
        state.files.remove(position);
        Ok(())
    }
}

/// Handle to a file on a [`TestVolume`].
#[derive(Debug)]
pub struct TestFile {
    state: Arc<Mutex<State>>,
    name: FileName,
}

impl Drop for TestFile {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.open_handles -= 1;
        }
    }
}

impl embedded_io::ErrorType for TestFile {
    type Error = VolumeError;
}

impl embedded_io::Write for TestFile {
    fn write(&mut self, buf: &[u8]) -> Result<usize, VolumeError> {
        let mut state = self.state.lock().unwrap();
        let call = state.append_calls;
        state.append_calls += 1;
        match state.take_append_fault(call) {
            Some(AppendFault::Error(error)) => Err(error),
            Some(AppendFault::Short(written)) => {
                let written = written.min(buf.len());
                if let Some(file) = state.file_mut(&self.name) {
                    file.chunks.push(buf[..written].to_vec());
                }
                Ok(written)
            }
            None => {
                if let Some(file) = state.file_mut(&self.name) {
                    file.chunks.push(buf.to_vec());
                }
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> Result<(), VolumeError> {
        Ok(())
    }
}

impl FileHandle for TestFile {
    fn close(self) {}
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use embedded_io::Write;
    use pretty_assertions::assert_eq;

    use crate::{FileHandle, FileKind, FileName, TestVolume, Volume, VolumeError};

    #[test]
    fn records_creations_with_their_kind() {
        let mut volume = TestVolume::new();

        volume
            .create(&FileName::new("a.log"), FileKind::PLAIN_TEXT)
            .unwrap();

        assert_eq!(volume.kind("a.log"), Some(FileKind::PLAIN_TEXT));
        assert!(volume.exists("a.log"));
        assert_eq!(volume.contents("a.log").unwrap(), b"");
    }

    #[test]
    fn creating_an_existing_file_fails() {
        let mut volume = TestVolume::new();
        let name = FileName::new("a.log");

        volume.create(&name, FileKind::PLAIN_TEXT).unwrap();

        assert_eq!(
            volume.create(&name, FileKind::PLAIN_TEXT),
            Err(VolumeError::AlreadyExists)
        );
    }

    #[test]
    fn opening_a_missing_file_fails() {
        let mut volume = TestVolume::new();

        assert!(matches!(
            volume.open(&FileName::new("missing.log")),
            Err(VolumeError::NotFound)
        ));
    }

    #[test]
    fn appends_are_recorded_one_chunk_per_call() {
        let mut volume = TestVolume::new();
        let name = FileName::new("a.log");
        volume.create(&name, FileKind::PLAIN_TEXT).unwrap();

        let mut file = volume.open(&name).unwrap();
        file.write(b"first").unwrap();
        file.write(b"\r").unwrap();
        file.close();

        assert_eq!(
            volume.chunks("a.log").unwrap(),
            [b"first".to_vec(), b"\r".to_vec()]
        );
        assert_eq!(volume.contents("a.log").unwrap(), b"first\r");
        assert_eq!(volume.append_calls(), 2);
    }

    #[test]
    fn open_handles_are_counted() {
        let mut volume = TestVolume::new();
        let name = FileName::new("a.log");
        volume.create(&name, FileKind::PLAIN_TEXT).unwrap();

        let file = volume.open(&name).unwrap();
        assert_eq!(volume.open_handles(), 1);

        file.close();
        assert_eq!(volume.open_handles(), 0);
    }

    #[test]
    fn delete_removes_the_file() {
        let mut volume = TestVolume::new();
        let name = FileName::new("a.log");
        volume.create(&name, FileKind::PLAIN_TEXT).unwrap();

        volume.delete(&name).unwrap();

        assert!(!volume.exists("a.log"));
        assert_eq!(volume.delete(&name), Err(VolumeError::NotFound));
        assert_eq!(volume.delete_calls(), 2);
    }

    #[test]
    fn injected_faults_fire_once() {
        let mut volume = TestVolume::new();
        let name = FileName::new("a.log");
        volume.fail_next_create(VolumeError::VolumeFull);

        assert_eq!(
            volume.create(&name, FileKind::PLAIN_TEXT),
            Err(VolumeError::VolumeFull)
        );
        assert_eq!(volume.create(&name, FileKind::PLAIN_TEXT), Ok(()));
    }

    #[test]
    fn append_faults_target_a_single_call() {
        let mut volume = TestVolume::new();
        let name = FileName::new("a.log");
        volume.create(&name, FileKind::PLAIN_TEXT).unwrap();
        volume.fail_append(1, VolumeError::WriteFault);
        volume.shorten_append(2, 2);

        let mut file = volume.open(&name).unwrap();
        assert_eq!(file.write(b"ok"), Ok(2));
        assert_eq!(file.write(b"boom"), Err(VolumeError::WriteFault));
        assert_eq!(file.write(b"clipped"), Ok(2));
        assert_eq!(file.write(b"!"), Ok(1));
        file.close();

        assert_eq!(volume.contents("a.log").unwrap(), b"okcl!");
    }
}
