//! File classification tags.

/// A four-byte classification tag, conventionally printable ASCII.
///
/// # Examples
///
/// ```
/// use vellum_vfs_api::FourCc;
///
/// const TEXT: FourCc = FourCc::new(*b"TEXT");
/// assert_eq!(TEXT.as_bytes(), b"TEXT");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc([u8; 4]);

impl FourCc {
    /// Creates a tag from its four bytes.
    pub const fn new(tag: [u8; 4]) -> Self {
        Self(tag)
    }

    /// Returns the tag bytes.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl core::fmt::Debug for FourCc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FourCc(b\"")?;
        for byte in self.0 {
            write!(f, "{}", byte.escape_ascii())?;
        }
        f.write_str("\")")
    }
}

/// Classification a volume stamps onto a newly created file.
///
/// Volumes without a native notion of file classification accept the kind and
/// ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileKind {
    /// What the file contains.
    pub content: FourCc,
    /// Which application owns the file.
    pub creator: FourCc,
}

impl FileKind {
    /// A plain text document owned by the stock text editor.
    ///
    /// This is the kind the debug trail stamps onto its log files so that
    /// double-clicking one opens it as ordinary text.
    pub const PLAIN_TEXT: Self = Self::new(FourCc::new(*b"TEXT"), FourCc::new(*b"ttxt"));

    /// Creates a kind from its content and creator tags.
    pub const fn new(content: FourCc, creator: FourCc) -> Self {
        Self { content, creator }
    }
}
