//! Call-site macros.

/// Appends `format` verbatim as one record, discarding any arguments.
///
/// No interpolation is performed; the format string is recorded exactly as
/// written, placeholders included. The trailing arguments exist so call
/// sites written against an interpolating signature keep compiling, and they
/// are still evaluated for their side effects.
///
/// # Examples
///
/// ```
/// use vellum_log::DebugLog;
/// use vellum_vfs_api::TestVolume;
///
/// let volume = TestVolume::new();
/// let observer = volume.clone();
/// let mut log = DebugLog::new(volume);
///
/// assert!(log.init("debug.log"));
/// vellum_log::append_formatted!(log, "retrying %d times", 3);
///
/// assert!(
///     observer
///         .contents("debug.log")
///         .unwrap()
///         .ends_with(b"retrying %d times\r")
/// );
/// ```
#[macro_export]
macro_rules! append_formatted {
    ($log:expr, $format:expr $(, $argument:expr)* $(,)?) => {{
        $(let _ = $argument;)*
        $log.append_formatted($format)
    }};
}
