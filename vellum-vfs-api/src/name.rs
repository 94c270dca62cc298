//! Bounded file names.

/// A file name on a [`Volume`], at most [`FileName::MAX_LEN`] bytes.
///
/// Longer names are truncated to exactly 255 bytes at construction;
/// truncation is silent, not an error. Names are stored as raw bytes and are
/// not guaranteed to be valid UTF-8 (the cut may land inside a multi-byte
/// sequence). How the bytes map onto a platform path is up to the volume
/// backend.
///
/// # Examples
///
/// ```
/// use vellum_vfs_api::FileName;
///
/// let name = FileName::new("debug.log");
/// assert_eq!(name.as_bytes(), b"debug.log");
///
/// let long = "x".repeat(300);
/// assert_eq!(FileName::new(&long).len(), FileName::MAX_LEN);
/// ```
///
/// [`Volume`]: crate::Volume
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileName {
    bytes: heapless::Vec<u8, 255>,
}

impl FileName {
    /// Maximum length of a file name in bytes.
    pub const MAX_LEN: usize = 255;

    /// Creates a file name from a string, truncating it to [`Self::MAX_LEN`] bytes.
    pub fn new(name: &str) -> Self {
        Self::from_bytes(name.as_bytes())
    }

    /// Creates a file name from raw bytes, truncating them to [`Self::MAX_LEN`] bytes.
    pub fn from_bytes(raw: &[u8]) -> Self {
        let take = raw.len().min(Self::MAX_LEN);
        let mut bytes = heapless::Vec::new();
        // Cannot fail, `take` is bounded by the capacity.
        let _ = bytes.extend_from_slice(&raw[..take]);
        Self { bytes }
    }

    /// Returns the name bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the length of the name in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns whether the name is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl core::fmt::Debug for FileName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FileName(\"")?;
        for byte in self.bytes.iter().copied() {
            write!(f, "{}", byte.escape_ascii())?;
        }
        f.write_str("\")")
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
