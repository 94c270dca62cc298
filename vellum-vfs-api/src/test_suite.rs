#![expect(missing_docs, reason = "tests")]
//! Test suite for volume implementations.
//!
//! Each function drives one aspect of the [`Volume`] contract against an
//! implementor-provided volume. Functions that need to look at resulting
//! file contents take a `read_back` closure so backends with out-of-band
//! storage (a directory on disk, an in-memory map) can supply their own way
//! of reading a file back.

use std::vec::Vec;

use embedded_io::Write;

use crate::{FileHandle, FileKind, FileName, Volume, VolumeError};

pub fn test_create_open_append(
    mut volume: impl Volume,
    read_back: impl Fn(&FileName) -> Vec<u8>,
) {
    let name = FileName::new("suite-create-open-append.log");

    volume.create(&name, FileKind::PLAIN_TEXT).unwrap();
    let mut file = volume.open(&name).unwrap();
    file.write_all(b"first\r").unwrap();
    file.write_all(b"second\r").unwrap();
    file.close();

    assert_eq!(read_back(&name), b"first\rsecond\r");

    volume.delete(&name).unwrap();
}

pub fn test_create_existing_fails(mut volume: impl Volume) {
    let name = FileName::new("suite-create-existing.log");

    volume.create(&name, FileKind::PLAIN_TEXT).unwrap();

    assert_eq!(
        volume.create(&name, FileKind::PLAIN_TEXT),
        Err(VolumeError::AlreadyExists)
    );

    volume.delete(&name).unwrap();
}

pub fn test_open_missing_fails(mut volume: impl Volume) {
    let name = FileName::new("suite-open-missing.log");

    assert!(matches!(volume.open(&name), Err(VolumeError::NotFound)));
}

pub fn test_delete_missing_fails(mut volume: impl Volume) {
    let name = FileName::new("suite-delete-missing.log");

    assert_eq!(volume.delete(&name), Err(VolumeError::NotFound));
}

pub fn test_delete_removes(mut volume: impl Volume) {
    let name = FileName::new("suite-delete-removes.log");

    volume.create(&name, FileKind::PLAIN_TEXT).unwrap();
    volume.delete(&name).unwrap();

    assert!(matches!(volume.open(&name), Err(VolumeError::NotFound)));
}

/// Opening never truncates: a close-and-reopen cycle keeps appending where
/// the previous handle stopped.
pub fn test_reopen_appends(mut volume: impl Volume, read_back: impl Fn(&FileName) -> Vec<u8>) {
    let name = FileName::new("suite-reopen-appends.log");

    volume.create(&name, FileKind::PLAIN_TEXT).unwrap();

    let mut file = volume.open(&name).unwrap();
    file.write_all(b"one\r").unwrap();
    file.close();

    let mut file = volume.open(&name).unwrap();
    file.write_all(b"two\r").unwrap();
    file.close();

    assert_eq!(read_back(&name), b"one\rtwo\r");

    volume.delete(&name).unwrap();
}
