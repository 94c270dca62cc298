//! # `vellum-log`
//!
//! A deliberately minimal append-only debug trail.
//!
//! [`DebugLog`] writes plain text records, each terminated by a carriage
//! return, to a file it creates fresh on every [`init`](DebugLog::init). The
//! volume layer is unbuffered, so an appended record has already reached the
//! platform file layer when the call returns and the trail survives a crash
//! of the host right after it. Failures never propagate to the caller: they
//! surface as [`Chime`]s on an injectable [`Annunciator`] and the host keeps
//! running.
//!
//! The logger is generic over the [`vellum_vfs_api::Volume`] it writes to.
//! Use `vellum-vfs-std`'s `DirVolume` for a real filesystem, or
//! `vellum-vfs-api`'s `TestVolume` (feature `test-suites`) in tests.
//!
//! # Usage
//!
//! ```
//! use vellum_log::DebugLog;
//! use vellum_vfs_api::TestVolume;
//!
//! let volume = TestVolume::new();
//! let observer = volume.clone();
//!
//! let mut log = DebugLog::new(volume);
//! assert!(log.init("debug.log"));
//! log.append("checkpoint A");
//! log.append_int("widgets: ", 42);
//! log.append_hex("flags: ", 0x05);
//! log.close();
//!
//! assert_eq!(
//!     observer.contents("debug.log").unwrap(),
//!     b"DEBUG LOG INITIALIZED\r\
//!       checkpoint A\r\
//!       widgets: 42\r\
//!       flags: 0x05\r\
//!       DEBUG LOG CLOSED\r"
//! );
//! ```

#![forbid(unsafe_code)]
#![no_std]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
extern crate std;

mod chime;
mod logger;
mod macros;
mod record;

pub use self::chime::{Annunciator, Chime, Silent};
pub use self::logger::DebugLog;
