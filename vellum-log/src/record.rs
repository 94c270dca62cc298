//! Record framing and number rendering.

/// Terminator closing every record.
pub(crate) const TERMINATOR: &[u8] = b"\r";

/// First record of every trail session, terminator included.
pub(crate) const HEADER: &[u8] = b"DEBUG LOG INITIALIZED\r";

/// Final record of a cleanly closed session, terminator included.
pub(crate) const FOOTER: &[u8] = b"DEBUG LOG CLOSED\r";

/// Decimal rendering of a signed value.
///
/// Digits are collected least-significant-first by repeated division on the
/// unsigned magnitude, with the sign placed after them; [`Decimal::bytes`]
/// walks the buffer backwards to yield emission order. The buffer fits the
/// 19 digits of `i64::MIN` plus its sign.
#[derive(Debug)]
pub(crate) struct Decimal {
    buffer: [u8; 20],
    length: usize,
}

impl Decimal {
    pub(crate) fn render(value: i64) -> Self {
        let mut buffer = [0u8; 20];
        let mut length = 0;
        // `unsigned_abs` keeps `i64::MIN` from overflowing on negation.
        let mut magnitude = value.unsigned_abs();

        if magnitude == 0 {
            buffer[length] = b'0';
            length = 1;
        }
        while magnitude > 0 {
            buffer[length] = b'0' + (magnitude % 10) as u8;
            magnitude /= 10;
            length += 1;
        }
        if value < 0 {
            buffer[length] = b'-';
            length += 1;
        }

        Self { buffer, length }
    }

    /// Bytes in emission order: the sign first, then digits from the most
    /// significant down.
    pub(crate) fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.buffer[..self.length].iter().rev().copied()
    }
}

/// Two uppercase hex digits of the low byte of `value`.
pub(crate) fn hex_pair(value: u64) -> [u8; 2] {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let low = (value & 0xFF) as u8;
    [DIGITS[(low >> 4) as usize], DIGITS[(low & 0x0F) as usize]]
}
