//! The debug trail logger.

use embedded_io::Write;
use vellum_vfs_api::{FileHandle, FileKind, FileName, Volume};

use crate::chime::{Annunciator, Chime, Silent};
use crate::record::{Decimal, FOOTER, HEADER, TERMINATOR, hex_pair};

/// Append-only text logger writing a crash-tolerant debug trail.
///
/// A `DebugLog` owns the [`Volume`] it writes to and at most one open file on
/// it. [`init`](Self::init) starts a session by creating the file fresh and
/// writing a header record, `append*` add one `\r`-terminated record each,
/// and [`close`](Self::close) writes a footer record and releases the file.
/// Because the volume layer is unbuffered, everything appended up to a crash
/// of the host is in the file.
///
/// No operation returns an error. Every failure site instead chimes a
/// distinct [`Chime`] on the logger's [`Annunciator`] and gives up on the
/// affected record only, so logging can be sprinkled through fragile code
/// without adding new ways to fail. Passing `-273` and getting a record or
/// passing an empty message and getting a chime are equally final; there is
/// nothing to handle at the call site.
///
/// The logger is not internally synchronized. Share it across threads by
/// wrapping it in a mutex, or give each thread its own logger and file.
///
/// Dropping the logger releases the file handle through the handle's own
/// drop, without a footer; only `close` writes footers.
///
/// # Examples
///
/// ```
/// use vellum_log::DebugLog;
/// use vellum_vfs_api::TestVolume;
///
/// let volume = TestVolume::new();
/// let observer = volume.clone();
///
/// let mut log = DebugLog::new(volume);
/// assert!(log.init("debug.log"));
/// log.append("starting risky operation");
/// log.close();
///
/// assert_eq!(
///     observer.contents("debug.log").unwrap(),
///     b"DEBUG LOG INITIALIZED\rstarting risky operation\rDEBUG LOG CLOSED\r"
/// );
/// ```
#[derive(Debug)]
pub struct DebugLog<V: Volume, A = Silent> {
    volume: V,
    file: Option<V::File>,
    enabled: bool,
    annunciator: A,
}

impl<V> DebugLog<V>
where
    V: Volume,
{
    /// Creates a disabled logger over `volume` that discards chimes.
    pub fn new(volume: V) -> Self {
        Self::with_annunciator(volume, Silent)
    }
}

impl<V, A> DebugLog<V, A>
where
    V: Volume,
    A: Annunciator,
{
    /// Creates a disabled logger over `volume` delivering chimes to
    /// `annunciator`.
    pub fn with_annunciator(volume: V, annunciator: A) -> Self {
        Self {
            volume,
            file: None,
            enabled: false,
            annunciator,
        }
    }

    /// Starts a new trail session in a file called `name`.
    ///
    /// A previous session's handle is closed first, without a footer; only
    /// [`close`](Self::close) writes footers. Any pre-existing file under
    /// `name` is then removed, a fresh plain-text file is created and opened,
    /// and the header record is written. The logger becomes enabled only
    /// when all of that succeeds, so re-running `init` is also the way to
    /// switch files mid-run.
    ///
    /// Names longer than [`FileName::MAX_LEN`] bytes are silently truncated.
    ///
    /// Returns whether the session started. An empty `name` chimes
    /// [`Chime::EmptyName`] before any volume I/O; create, open, and header
    /// failures chime [`Chime::CreateFailed`], [`Chime::OpenFailed`], and
    /// [`Chime::HeaderWriteFailed`] respectively and leave the logger
    /// disabled without a handle. Success chimes [`Chime::Initialized`].
    #[must_use]
    pub fn init(&mut self, name: &str) -> bool {
        if let Some(file) = self.file.take() {
            file.close();
        }
        self.enabled = false;

        if name.is_empty() {
            self.annunciator.chime(Chime::EmptyName);
            return false;
        }
        let name = FileName::new(name);

        // A leftover file from an earlier run is expected; whether removing
        // it worked only matters on the create that follows.
        let _ = self.volume.delete(&name);

        if self.volume.create(&name, FileKind::PLAIN_TEXT).is_err() {
            self.annunciator.chime(Chime::CreateFailed);
            return false;
        }

        let mut file = match self.volume.open(&name) {
            Ok(file) => file,
            Err(_) => {
                self.annunciator.chime(Chime::OpenFailed);
                return false;
            }
        };

        // Only an outright error fails the header; the count is not
        // consulted on this one write.
        if file.write(HEADER).is_err() {
            file.close();
            self.annunciator.chime(Chime::HeaderWriteFailed);
            return false;
        }

        self.file = Some(file);
        self.enabled = true;
        self.annunciator.chime(Chime::Initialized);
        true
    }

    /// Appends one text record.
    ///
    /// The message bytes and the terminator are written as two separate
    /// volume writes. Precondition failures chime [`Chime::NotEnabled`],
    /// [`Chime::NoHandle`], or [`Chime::EmptyMessage`] without touching the
    /// file. A message write that errors or comes up short chimes
    /// [`Chime::MessageWriteFailed`] and abandons the record without a
    /// terminator, the file may end mid-record. A failed terminator write
    /// chimes [`Chime::TerminatorWriteFailed`]. Success chimes nothing.
    pub fn append(&mut self, message: &str) {
        if !self.enabled {
            self.annunciator.chime(Chime::NotEnabled);
            return;
        }
        let Some(file) = self.file.as_mut() else {
            self.annunciator.chime(Chime::NoHandle);
            return;
        };
        if message.is_empty() {
            self.annunciator.chime(Chime::EmptyMessage);
            return;
        }

        match file.write(message.as_bytes()) {
            Ok(written) if written == message.len() => {}
            Ok(_) | Err(_) => {
                self.annunciator.chime(Chime::MessageWriteFailed);
                return;
            }
        }

        // Only an outright error fails the terminator; the count is not
        // consulted on this single byte.
        if file.write(TERMINATOR).is_err() {
            self.annunciator.chime(Chime::TerminatorWriteFailed);
        }
    }

    /// Appends a record of `message` immediately followed by `value` in
    /// decimal.
    ///
    /// Unlike [`append`](Self::append) this path is completely silent: the
    /// precondition check chimes nothing and neither do write failures. The
    /// digits go out one byte per write, and the first write error abandons
    /// the rest of the record. The terminator write is not checked at all.
    pub fn append_int(&mut self, message: &str, value: i64) {
        if !self.enabled {
            return;
        }
        let Some(file) = self.file.as_mut() else {
            return;
        };

        if !message.is_empty() && file.write(message.as_bytes()).is_err() {
            return;
        }

        let decimal = Decimal::render(value);
        for byte in decimal.bytes() {
            if file.write(&[byte]).is_err() {
                return;
            }
        }

        let _ = file.write(TERMINATOR);
    }

    /// Appends a record of `message` immediately followed by the low byte of
    /// `value` as `0x` and two uppercase hex digits.
    ///
    /// Only the low byte is displayed; higher bits are discarded whatever
    /// the magnitude of `value`, so `0x1FF` records as `0xFF`. Like
    /// [`append_int`](Self::append_int) this path chimes nothing. It does
    /// not check its writes either: every write is attempted regardless of
    /// earlier failures.
    pub fn append_hex(&mut self, message: &str, value: u64) {
        if !self.enabled {
            return;
        }
        let Some(file) = self.file.as_mut() else {
            return;
        };

        if !message.is_empty() {
            let _ = file.write(message.as_bytes());
        }
        let _ = file.write(b"0x");
        let _ = file.write(&hex_pair(value));
        let _ = file.write(TERMINATOR);
    }

    /// Appends `format` verbatim as one record.
    ///
    /// No interpolation is performed; placeholders such as `%d` are written
    /// as-is. The [`append_formatted!`](crate::append_formatted) macro
    /// accepts and discards trailing arguments for call sites written
    /// against an interpolating signature. Everything else behaves like
    /// [`append`](Self::append), including the chimes.
    pub fn append_formatted(&mut self, format: &str) {
        self.append(format);
    }

    /// Does nothing.
    ///
    /// The volume layer is unbuffered and every appended record has already
    /// reached the platform file layer. The method exists so call sites can
    /// keep a flush-before-risk-point discipline.
    pub fn flush(&mut self) {}

    /// Ends the trail session.
    ///
    /// Writes the footer record (best-effort, the result is ignored),
    /// closes the file handle, and disables the logger. Idempotent; without
    /// an open handle it only re-disables.
    pub fn close(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.write(FOOTER);
            file.close();
        }
        self.enabled = false;
    }

    /// Returns whether the trail is accepting records.
    ///
    /// True between a successful [`init`](Self::init) and the next
    /// [`close`](Self::close) or failed `init`.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
