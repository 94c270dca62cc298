//! # `vellum-vfs-api`
//!
//! Filesystem abstraction for the Vellum debug trail.
//!
//! The debug trail performs all file I/O through the [`Volume`] trait so that
//! platform backends stay swappable and tests can observe and perturb every
//! call. A volume creates, opens, and deletes files by [`FileName`]; writing
//! goes through the [`embedded_io::Write`] implementation of the volume's
//! [`FileHandle`].
//!
//! With the `test-suites` feature enabled this crate additionally provides
//! `TestVolume`, an in-memory recording volume with fault injection, and the
//! `test_suite` module with ready-made conformance tests for `Volume`
//! implementations.

#![forbid(unsafe_code)]
#![no_std]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(any(test, feature = "test-suites"))]
extern crate std;

mod error;
mod kind;
mod name;
#[cfg(feature = "test-suites")]
mod test_volume;
mod volume;

#[doc(hidden)]
#[cfg(feature = "test-suites")]
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod test_suite;

pub use self::error::VolumeError;
pub use self::kind::{FileKind, FourCc};
pub use self::name::FileName;
#[doc(hidden)]
#[cfg(feature = "test-suites")]
pub use self::test_volume::{TestFile, TestVolume};
pub use self::volume::{FileHandle, Volume};
