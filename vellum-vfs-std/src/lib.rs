//! Std filesystem volume for the Vellum debug trail.
//!
//! [`DirVolume`] implements the [`Volume`] trait on top of `std::fs`, rooted
//! at a directory of the caller's choosing.

#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod volume;

pub use self::volume::{DirVolume, StdFile};
pub use vellum_vfs_api::{Volume, VolumeError};
