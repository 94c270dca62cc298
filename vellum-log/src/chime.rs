//! Status signals and their observer.

/// A discrete status signal from the debug trail.
///
/// Each chime identifies one success or failure site in
/// [`DebugLog::init`] and [`DebugLog::append`] and carries the fixed number
/// of tones a hardware annunciator sounds for it. The trail never turns
/// failures into return values; chimes are the only account of what went
/// wrong, and ignoring them costs nothing but diagnostics.
///
/// Tone count `7` is reserved and never emitted.
///
/// [`DebugLog::init`]: crate::DebugLog::init
/// [`DebugLog::append`]: crate::DebugLog::append
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Chime {
    /// `init` was called with an empty file name.
    EmptyName = 1,
    /// `init` could not create the log file.
    CreateFailed = 2,
    /// `init` could not open the log file.
    OpenFailed = 3,
    /// `init` could not write the header record.
    HeaderWriteFailed = 4,
    /// `append` was called while the trail is disabled.
    NotEnabled = 5,
    /// `append` was called without an open file handle.
    NoHandle = 6,
    /// `append` was called with an empty message.
    EmptyMessage = 8,
    /// `init` succeeded and the trail is accepting records.
    Initialized = 10,
    /// `append` could not write the message text completely.
    MessageWriteFailed = 20,
    /// `append` wrote the message but not the record terminator.
    TerminatorWriteFailed = 21,
}

impl Chime {
    /// Returns the number of tones an annunciator sounds for this chime.
    pub const fn tones(self) -> u8 {
        self as u8
    }
}

/// Observer receiving [`Chime`]s from a [`DebugLog`].
///
/// The default is [`Silent`]. Observers must not panic; the trail treats
/// chiming as infallible.
///
/// # Examples
///
/// ```
/// use vellum_log::{Annunciator, Chime};
///
/// #[derive(Debug, Default)]
/// struct FailureCounter {
///     failures: u32,
/// }
///
/// impl Annunciator for FailureCounter {
///     fn chime(&mut self, chime: Chime) {
///         if chime != Chime::Initialized {
///             self.failures += 1;
///         }
///     }
/// }
/// ```
///
/// [`DebugLog`]: crate::DebugLog
pub trait Annunciator {
    /// Delivers one chime.
    fn chime(&mut self, chime: Chime);
}

/// Annunciator that discards every chime.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Annunciator for Silent {
    fn chime(&mut self, _chime: Chime) {}
}
